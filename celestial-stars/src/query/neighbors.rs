//! Naive k-nearest-neighbor search over a [`StarCatalog`].
//!
//! Every query is a linear scan: squared Euclidean distances from the target
//! to each star are collected into a separate `(distance, &Star)` list, that
//! list is stably sorted, and the first `k` entries are returned closest-first.
//!
//! # Boundary ties
//!
//! When the k-th and (k+1)-th sorted entries are equidistant, the cut falls
//! inside a block of tied stars and the sort alone cannot decide which of them
//! belong in the result. The whole tie block is shuffled with the caller's
//! random source and the free slots are filled from its front. Stars strictly
//! closer than the tie always appear, in sorted order. Repeated calls may
//! therefore pick different members of the tie.
//!
//! # Failure
//!
//! [`try_knn`] and [`try_named_knn`] report why a query has no answer.
//! [`knn`] and [`named_knn`] log that reason and return an empty vector.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use super::catalog::StarCatalog;
use crate::error::QueryError;
use crate::star::{Position, Star};

/// What a neighbor query is centered on.
#[derive(Debug, Clone, PartialEq)]
pub enum NeighborTarget {
    /// An explicit point.
    Position(Position),
    /// The first star in the catalog carrying this exact name.
    Named(String),
}

impl NeighborTarget {
    /// The point this target resolves to in `catalog`, if any.
    pub fn resolve(&self, catalog: &StarCatalog) -> Option<Position> {
        match self {
            Self::Position(position) => Some(*position),
            Self::Named(name) => catalog.find_by_name(name).map(Star::position),
        }
    }
}

/// Runs a query against either kind of target.
pub fn try_search<'a, R: Rng + ?Sized>(
    catalog: &'a StarCatalog,
    k: usize,
    target: &NeighborTarget,
    rng: &mut R,
) -> Result<Vec<&'a Star>, QueryError> {
    match target {
        NeighborTarget::Position(position) => try_knn(catalog, k, *position, rng),
        NeighborTarget::Named(name) => try_named_knn(catalog, k, name, rng),
    }
}

/// The `k` stars closest to `target`, closest first.
///
/// # Errors
/// - [`QueryError::InvalidCatalog`] if the catalog has no valid data
/// - [`QueryError::ZeroK`] if `k` is zero
/// - [`QueryError::KTooLarge`] if `k` exceeds the number of stars; the query
///   is rejected rather than clamped
pub fn try_knn<'a, R: Rng + ?Sized>(
    catalog: &'a StarCatalog,
    k: usize,
    target: Position,
    rng: &mut R,
) -> Result<Vec<&'a Star>, QueryError> {
    if !catalog.is_valid() {
        return Err(QueryError::InvalidCatalog);
    }
    if k == 0 {
        return Err(QueryError::ZeroK);
    }
    if k > catalog.len() {
        return Err(QueryError::KTooLarge {
            k,
            available: catalog.len(),
        });
    }

    let mut ranked: Vec<(f64, &Star)> = catalog
        .all()
        .iter()
        .map(|star| (target.squared_distance(&star.position()), star))
        .collect();

    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
    resolve_boundary_tie(&mut ranked, k, rng);

    Ok(ranked.into_iter().take(k).map(|(_, star)| star).collect())
}

/// The `k` stars closest to the first star named `name`, closest first.
///
/// The named star anchors the search and is itself part of the candidate set,
/// at distance zero. When several stars share the name only the first, in
/// catalog order, is used.
///
/// # Errors
/// - [`QueryError::InvalidCatalog`] if the catalog has no valid data
/// - [`QueryError::EmptyName`] if `name` is empty
/// - [`QueryError::NameNotFound`] if no star carries `name` exactly
/// - anything [`try_knn`] returns for the anchor position
pub fn try_named_knn<'a, R: Rng + ?Sized>(
    catalog: &'a StarCatalog,
    k: usize,
    name: &str,
    rng: &mut R,
) -> Result<Vec<&'a Star>, QueryError> {
    if !catalog.is_valid() {
        return Err(QueryError::InvalidCatalog);
    }
    if name.is_empty() {
        return Err(QueryError::EmptyName);
    }
    let anchor = catalog
        .find_by_name(name)
        .ok_or_else(|| QueryError::NameNotFound(name.to_string()))?;

    try_knn(catalog, k, anchor.position(), rng)
}

/// [`try_knn`], answering every failure with an empty vector.
pub fn knn<'a, R: Rng + ?Sized>(
    catalog: &'a StarCatalog,
    k: usize,
    target: Position,
    rng: &mut R,
) -> Vec<&'a Star> {
    try_knn(catalog, k, target, rng).unwrap_or_else(|err| {
        warn!(k, error = %err, "neighbor query returned no stars");
        Vec::new()
    })
}

/// [`try_named_knn`], answering every failure with an empty vector.
pub fn named_knn<'a, R: Rng + ?Sized>(
    catalog: &'a StarCatalog,
    k: usize,
    name: &str,
    rng: &mut R,
) -> Vec<&'a Star> {
    try_named_knn(catalog, k, name, rng).unwrap_or_else(|err| {
        warn!(k, name, error = %err, "named neighbor query returned no stars");
        Vec::new()
    })
}

/// Shuffles the tie block straddling position `k` of a distance-sorted list.
///
/// Does nothing unless entries `k - 1` and `k` share a distance. Entries
/// outside the block are untouched.
fn resolve_boundary_tie<T, R: Rng + ?Sized>(ranked: &mut [(f64, T)], k: usize, rng: &mut R) {
    if k == 0 || k >= ranked.len() {
        return;
    }
    let cutoff = ranked[k - 1].0;
    if ranked[k].0 != cutoff {
        return;
    }

    let start = ranked.partition_point(|(d, _)| *d < cutoff);
    let end = ranked.partition_point(|(d, _)| *d <= cutoff);

    debug!(
        cutoff,
        start,
        end,
        slots = k - start,
        "breaking boundary tie"
    );
    ranked[start..end].shuffle(rng);
}
