//! Region builder: the catalogue of named hit-test regions derived from the base triangle.
//!
//! All regions come from triangles nested around the same center:
//!
//! | Triangle | Radius | Used for |
//! |----------|--------|----------|
//! | tip ring | `r − t` | centers of the three tip triangles (radius `t = r / 3`) |
//! | inner | `r − 1.5·t` | inner edge of the edge bands |
//! | base | `r` | drawn triangle, inner side of the outer bands |
//! | outer | config | outer side of the outer bands |
//!
//! The catalogue is stored in classification priority order (tips, then inner
//! edges, then outer edges). The center region has no polygon: it is whatever
//! no other region claims.

#[cfg(test)]
#[path = "regions_test.rs"]
mod regions_test;

use serde::Serialize;

use crate::geometry::{Point, Polygon, triangle};

/// Named region. Declaration order after `Center` is classification priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionId {
    /// Nothing else matched.
    Center,
    Tip1,
    Tip2,
    Tip3,
    Edge1,
    Edge2,
    Edge3,
    Outer1,
    Outer2,
    Outer3,
}

/// Broad family of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Center,
    Tip,
    InnerEdge,
    OuterEdge,
}

impl RegionId {
    pub const ALL: [RegionId; 10] = [
        RegionId::Center,
        RegionId::Tip1,
        RegionId::Tip2,
        RegionId::Tip3,
        RegionId::Edge1,
        RegionId::Edge2,
        RegionId::Edge3,
        RegionId::Outer1,
        RegionId::Outer2,
        RegionId::Outer3,
    ];

    const TIPS: [RegionId; 3] = [RegionId::Tip1, RegionId::Tip2, RegionId::Tip3];
    const EDGES: [RegionId; 3] = [RegionId::Edge1, RegionId::Edge2, RegionId::Edge3];
    const OUTERS: [RegionId; 3] = [RegionId::Outer1, RegionId::Outer2, RegionId::Outer3];

    /// Tip region at triangle vertex `index` (0-based).
    #[must_use]
    pub fn tip(index: usize) -> Option<Self> {
        Self::TIPS.get(index).copied()
    }

    /// Inner edge region along triangle edge `index` (vertex `index` → `index + 1`).
    #[must_use]
    pub fn edge(index: usize) -> Option<Self> {
        Self::EDGES.get(index).copied()
    }

    /// Outer edge region along triangle edge `index`.
    #[must_use]
    pub fn outer(index: usize) -> Option<Self> {
        Self::OUTERS.get(index).copied()
    }

    #[must_use]
    pub fn kind(self) -> RegionKind {
        match self {
            Self::Center => RegionKind::Center,
            Self::Tip1 | Self::Tip2 | Self::Tip3 => RegionKind::Tip,
            Self::Edge1 | Self::Edge2 | Self::Edge3 => RegionKind::InnerEdge,
            Self::Outer1 | Self::Outer2 | Self::Outer3 => RegionKind::OuterEdge,
        }
    }

    /// Vertex or edge index the region hangs off; `None` for the center.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Center => None,
            Self::Tip1 | Self::Edge1 | Self::Outer1 => Some(0),
            Self::Tip2 | Self::Edge2 | Self::Outer2 => Some(1),
            Self::Tip3 | Self::Edge3 | Self::Outer3 => Some(2),
        }
    }
}

/// A named polygon used only for classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: RegionId,
    pub polygon: Polygon,
}

/// Immutable, priority-ordered set of regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionCatalogue {
    regions: Vec<Region>,
}

impl RegionCatalogue {
    /// Build the standard catalogue around `center`.
    ///
    /// `outer_radius` is the radius of the triangle bounding the outer edge
    /// bands; `None` leaves them out.
    #[must_use]
    pub fn build(center: Point, radius: f64, outer_radius: Option<f64>) -> Self {
        let tip_radius = radius / 3.0;
        let tip_centers = triangle(radius - tip_radius, center);
        let tips: Vec<Polygon> = tip_centers
            .vertices()
            .iter()
            .map(|&c| triangle(tip_radius, c))
            .collect();
        let inner = triangle(tip_radius.mul_add(-1.5, radius), center);
        let base = triangle(radius, center);

        let mut regions = Vec::with_capacity(9);

        for (id, tip) in (0..).map_while(RegionId::tip).zip(&tips) {
            regions.push(Region { id, polygon: tip.clone() });
        }

        // Band between the inner triangle's edge and the two tips it points at.
        // Quads are listed so they wind the same way as the generated triangles.
        for (i, id) in (0..).map_while(RegionId::edge).enumerate() {
            let next = (i + 1) % 3;
            let polygon = Polygon::quad(inner.vertex(i), tips[i].vertex(next), tips[next].vertex(i), inner.vertex(next));
            regions.push(Region { id, polygon });
        }

        if let Some(outer_radius) = outer_radius {
            let outer = triangle(outer_radius, center);
            for (i, id) in (0..).map_while(RegionId::outer).enumerate() {
                let next = (i + 1) % 3;
                let polygon = Polygon::quad(base.vertex(i), outer.vertex(i), outer.vertex(next), base.vertex(next));
                regions.push(Region { id, polygon });
            }
        }

        Self { regions }
    }

    /// Assemble a catalogue from arbitrary regions.
    ///
    /// Regions are stably sorted into priority order, so insertion order never
    /// changes which region wins an overlap. `Center` entries are dropped.
    #[must_use]
    pub fn from_regions(mut regions: Vec<Region>) -> Self {
        regions.retain(|r| r.id != RegionId::Center);
        regions.sort_by_key(|r| r.id);
        Self { regions }
    }

    /// Regions in priority order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[must_use]
    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn has_outer_edges(&self) -> bool {
        self.regions.iter().any(|r| r.id.kind() == RegionKind::OuterEdge)
    }
}
