//! Geometric engine for the energy trilemma widget.
//!
//! An equilateral triangle is split into named regions; a draggable marker is
//! classified into one of them and the region picks a three-way target ratio
//! (economics / reliability / sustainability). The host layer wires pointer
//! events in, draws through a [`render::RenderSink`], and stores the
//! [`ratio::Ratios`] carried by [`engine::Action::RatiosChanged`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Engine`] and testable [`engine::EngineCore`] |
//! | [`geometry`] | Points, polygons, hit tests, regular-polygon generator |
//! | [`regions`] | Region catalogue built from the base triangle |
//! | [`classify`] | Point → region with first-match precedence |
//! | [`ratio`] | Region → target ratio table, percentage formatting |
//! | [`drag`] | Drag state machine and legal zone |
//! | [`layout`] | Surface size and label anchors |
//! | [`render`] | Scene drawing against a host sink |
//! | [`config`] | Construction-time configuration |
//! | [`error`] | Crate error type |
//! | [`consts`] | Defaults, colors, fonts |

pub mod classify;
pub mod config;
pub mod consts;
pub mod drag;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod ratio;
pub mod regions;
pub mod render;

pub use config::TrilemmaConfig;
pub use engine::{Action, Engine, EngineCore};
pub use error::TrilemmaError;
pub use geometry::Point;
pub use ratio::Ratios;
pub use regions::RegionId;
