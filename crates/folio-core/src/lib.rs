//! Pointer-reactive particle fields: entities anchored at rest positions,
//! pushed away from the pointer and sprung back, independent of how they
//! are drawn.

pub mod calendar;
pub mod color;
pub mod constants;
pub mod entity;
pub mod error;
pub mod field;
pub mod lattice;
pub mod logo;
pub mod physics;
pub mod pointer;
pub mod render;
pub mod scene;

pub use calendar::{build_cells, parse_response, CalendarLayout, CellKey, CellVisual, ContributionCalendar};
pub use color::Rgb;
pub use entity::{Entity, GridLayout};
pub use error::{FieldError, RenderError};
pub use field::Field;
pub use lattice::{lattice, plan_resize, resize_ratio, SurfaceChange};
pub use logo::{build_dots, ColorSource, DotLayout, LogoMap, SamplingOptions};
pub use physics::{step, InfluenceRadius, Tuning};
pub use pointer::PointerState;
pub use render::{RenderAdapter, Theme};
pub use scene::{FrameStats, Scene};
