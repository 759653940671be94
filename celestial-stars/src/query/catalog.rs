//! In-memory star catalog.
//!
//! A [`StarCatalog`] starts out invalid and becomes valid only after a
//! successful load. Every load replaces the previous contents wholesale; a
//! failed load leaves the catalog invalid and empty, never holding a mix of
//! old and new stars.

use crate::error::LoadError;
use crate::loader;
use crate::star::{Position, Star};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// The sole owner of a loaded set of stars.
///
/// Queries borrow the catalog immutably; loading needs `&mut self`, so a load
/// can never interleave with a running query.
#[derive(Debug, Clone, Default)]
pub struct StarCatalog {
    stars: Vec<Star>,
    valid: bool,
}

impl StarCatalog {
    /// Creates an invalid, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a valid catalog from already-parsed stars, preserving order.
    pub fn from_stars(stars: Vec<Star>) -> Self {
        Self { stars, valid: true }
    }

    /// Replaces the contents with the stars read from `path`.
    ///
    /// Returns the number of stars loaded.
    ///
    /// # Errors
    /// Any [`LoadError`]. The catalog is then invalid and empty, even if an
    /// earlier load had succeeded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let result = loader::load(path);
        self.replace(result, &path.display().to_string())
    }

    /// Like [`StarCatalog::load`], for data already in memory.
    pub fn load_str(&mut self, text: &str) -> Result<usize, LoadError> {
        let result = loader::parse_str(text);
        self.replace(result, "<string>")
    }

    fn replace(
        &mut self,
        result: Result<Vec<Star>, LoadError>,
        source: &str,
    ) -> Result<usize, LoadError> {
        self.stars.clear();
        self.valid = false;

        match result {
            Ok(stars) => {
                info!(source = source, count = stars.len(), "loaded star catalog");
                self.stars = stars;
                self.valid = true;
                Ok(self.stars.len())
            }
            Err(err) => {
                debug!(source = source, error = %err, "rejected star data");
                Err(err)
            }
        }
    }

    /// Whether the last load succeeded.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// All stars, in source order.
    pub fn all(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// First star, in source order, whose name equals `name` exactly.
    ///
    /// Later stars sharing the name are never returned.
    pub fn find_by_name(&self, name: &str) -> Option<&Star> {
        self.stars.iter().find(|star| star.name() == name)
    }

    /// [`crate::query::knn`] using the thread-local random source.
    pub fn knn(&self, k: usize, target: Position) -> Vec<&Star> {
        super::knn(self, k, target, &mut rand::thread_rng())
    }

    /// [`crate::query::named_knn`] using the thread-local random source.
    pub fn named_knn(&self, k: usize, name: &str) -> Vec<&Star> {
        super::named_knn(self, k, name, &mut rand::thread_rng())
    }
}

impl fmt::Display for StarCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return write!(f, "No valid star data loaded");
        }
        writeln!(f, "Stars: {}", self.stars.len())?;
        let named = self.stars.iter().filter(|s| s.has_name()).count();
        write!(f, "Named stars: {}", named)?;
        if let Some(first) = self.stars.first() {
            write!(f, "\nFirst star: {}", first)?;
        }
        Ok(())
    }
}
