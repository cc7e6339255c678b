pub mod pointer;

pub use pointer::PointerTracking;
