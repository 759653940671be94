use crate::error::Result;
use celestial_stars::StarCatalog;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// How neighbor results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One star id per line
    #[default]
    Ids,
    /// Id, name, coordinates and distance
    Table,
    /// Pretty-printed JSON array
    Json,
}

pub struct Session {
    pub catalog: StarCatalog,
    pub rng: StdRng,
    pub format: OutputFormat,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            catalog: StarCatalog::new(),
            rng: StdRng::from_entropy(),
            format: OutputFormat::default(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose tie-breaking is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::default()
        }
    }

    pub fn load_catalog(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        Ok(self.catalog.load(path)?)
    }

    pub fn star_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn has_catalog(&self) -> bool {
        self.catalog.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn new_session_defaults() {
        let session = Session::new();
        assert!(!session.has_catalog());
        assert_eq!(session.star_count(), 0);
        assert_eq!(session.format, OutputFormat::Ids);
    }

    #[test]
    fn load_catalog_populates_session() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"StarID,ProperName,X,Y,Z\n0,Sol,0,0,0\n1,A,1,1,1\n")
            .unwrap();
        file.flush().unwrap();

        let mut session = Session::with_seed(1);
        assert_eq!(session.load_catalog(file.path()).unwrap(), 2);
        assert!(session.has_catalog());
        assert_eq!(session.star_count(), 2);
    }

    #[test]
    fn failed_load_clears_previous_catalog() {
        let mut good = NamedTempFile::new().unwrap();
        good.write_all(b"StarID,ProperName,X,Y,Z\n0,Sol,0,0,0\n").unwrap();
        good.flush().unwrap();
        let mut bad = NamedTempFile::new().unwrap();
        bad.write_all(b"StarID,ProperName,X,Y,Z\n0,Sol,0,0\n").unwrap();
        bad.flush().unwrap();

        let mut session = Session::new();
        session.load_catalog(good.path()).unwrap();
        assert!(session.load_catalog(bad.path()).is_err());
        assert!(!session.has_catalog());
        assert_eq!(session.star_count(), 0);
    }
}
