#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use crate::geometry::Point;
use crate::regions::{RegionCatalogue, RegionId};

/// Which named region contains `point`.
///
/// Walks the catalogue in priority order and returns the first hit, so an
/// overlap between a tip and an edge band resolves to the tip. Falls through
/// to [`RegionId::Center`] when nothing matches.
#[must_use]
pub fn classify(point: Point, catalogue: &RegionCatalogue) -> RegionId {
    catalogue
        .regions()
        .iter()
        .find(|region| region.polygon.contains(point))
        .map_or(RegionId::Center, |region| region.id)
}
