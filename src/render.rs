//! Browser render adapters, one per kind of surface.

pub mod ambient;
pub mod cells;
pub mod dots;
pub mod helpers;

pub use ambient::AmbientAdapter;
pub use cells::CellAdapter;
pub use dots::DotAdapter;
