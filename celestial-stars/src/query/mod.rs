//! Query interface for loaded star catalogs.
//!
//! - [`catalog`] — own the loaded stars, reload them, look up names
//! - [`neighbors`] — k-nearest-neighbor search by position or by star name

pub mod catalog;
pub mod neighbors;

pub use catalog::StarCatalog;
pub use neighbors::{knn, named_knn, try_knn, try_named_knn, try_search, NeighborTarget};
