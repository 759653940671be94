//! Star catalog loading and naive nearest-neighbor search.
//!
//! Reads a comma-separated list of stars with Cartesian coordinates into an
//! in-memory [`StarCatalog`] and answers "which `k` stars are closest to this
//! point (or to this named star)?" by linear scan.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`loader`] | Parse `StarID,ProperName,X,Y,Z` data, all-or-nothing |
//! | [`query::catalog`] | [`StarCatalog`]: validity flag, wholesale reload, name lookup |
//! | [`query::neighbors`] | [`knn`](query::knn), [`named_knn`](query::named_knn) and their `try_` forms |
//! | [`error`] | [`LoadError`], [`QueryError`] |
//!
//! # Quick Start
//!
//! ```
//! use celestial_stars::{Position, StarCatalog};
//! use rand::SeedableRng;
//!
//! let mut catalog = StarCatalog::new();
//! catalog.load_str("StarID,ProperName,X,Y,Z\n0,Sol,0,0,0\n1,A,3,4,0\n2,B,1,0,0\n")?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let nearest = celestial_stars::query::knn(&catalog, 2, Position::new(0.0, 0.0, 0.0), &mut rng);
//! let ids: Vec<i64> = nearest.iter().map(|s| s.id()).collect();
//! assert_eq!(ids, vec![0, 2]);
//! # Ok::<(), celestial_stars::LoadError>(())
//! ```
//!
//! # Features
//!
//! - **`serde`** — `Serialize`/`Deserialize` for [`Star`].

pub mod error;
pub mod loader;
pub mod query;
pub mod star;

pub use error::{LoadError, QueryError};
pub use query::{NeighborTarget, StarCatalog};
pub use star::{Position, Star};
