//! JSON document backend.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use super::FlightRepository;
use crate::error::{Error, Result};
use crate::flight::Flight;

/// Stores the collection as a single JSON array in one file.
///
/// Every `save` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository backed by the file at `path`.
    ///
    /// Nothing is read or created until the first `load` or `save`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create the data file holding an empty collection if it doesn't exist.
    ///
    /// Returns `true` if a file was created. An existing file is left as is.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or the file can't be created.
    pub fn init(&self) -> Result<bool> {
        if self.path.exists() {
            debug!("Data file already exists at {}", self.path.display());
            return Ok(false);
        }
        self.save(&[])?;
        info!("Created empty data file at {}", self.path.display());
        Ok(true)
    }

    /// Get the path to the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

impl FlightRepository for JsonFileRepository {
    fn load(&self) -> Result<Vec<Flight>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(Error::DataRead {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let flights: Vec<Flight> =
            serde_json::from_slice(&bytes).map_err(|source| Error::DataCorrupt {
                path: self.path.clone(),
                source,
            })?;
        debug!("Loaded {} flights from {}", flights.len(), self.path.display());
        Ok(flights)
    }

    fn save(&self, flights: &[Flight]) -> Result<()> {
        self.ensure_parent_dir()?;

        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        flights.serialize(&mut ser)?;

        std::fs::write(&self.path, buf).map_err(|source| Error::DataWrite {
            path: self.path.clone(),
            source,
        })?;
        debug!("Saved {} flights to {}", flights.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(id: u64, destino: &str) -> Flight {
        Flight {
            id,
            destino: destino.to_string(),
            capacidad: 100,
            vendidos: 0,
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("vuelos.json"));

        assert!(repo.load().unwrap().is_empty());
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vuelos.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonFileRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, Error::DataCorrupt { .. }));
        assert!(err.to_string().contains("vuelos.json"));
    }

    #[test]
    fn test_load_wrong_shape_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vuelos.json");
        std::fs::write(&path, r#"{"id": 1}"#).unwrap();

        let err = JsonFileRepository::new(&path).load().unwrap_err();
        assert!(matches!(err, Error::DataCorrupt { .. }));
    }

    #[test]
    fn test_load_directory_fails_with_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonFileRepository::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, Error::DataRead { .. }));
    }

    #[test]
    fn test_save_writes_indented_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("vuelos.json"));
        repo.save(&[flight(1, "córdoba")]).unwrap();

        let text = std::fs::read_to_string(repo.path()).unwrap();
        assert!(text.contains("córdoba"));
        assert!(text.contains("\n        \"id\": 1"));
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("vuelos.json"));
        repo.save(&[flight(1, "lima"), flight(2, "quito")]).unwrap();
        repo.save(&[flight(3, "bogotá")]).unwrap();

        assert_eq!(repo.load().unwrap(), vec![flight(3, "bogotá")]);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/vuelos.json");
        let repo = JsonFileRepository::new(&path);

        repo.save(&[flight(1, "lima")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_creates_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("vuelos.json"));

        assert!(repo.init().unwrap());
        assert!(repo.path().exists());
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("vuelos.json"));
        repo.save(&[flight(1, "lima")]).unwrap();

        assert!(!repo.init().unwrap());
        assert_eq!(repo.load().unwrap().len(), 1);
    }

    #[test]
    fn test_relative_path_without_parent() {
        let repo = JsonFileRepository::new("vuelos.json");
        assert!(repo.ensure_parent_dir().is_ok());
    }
}
