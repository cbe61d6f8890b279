//! Búsqueda por nombre contra salidas persistidas.
//!
//! El contrato clave es distinguir "no encontrado" (condición esperada que
//! permite regenerar) de cualquier otro error de IO (que debe propagarse tal
//! cual y detener el pipeline).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),
    #[error("reading {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

impl FetchError {
    pub fn is_not_found(&self) -> bool { matches!(self, FetchError::NotFound(_)) }
}

/// Lookup de archivos producidos por ejecuciones anteriores.
pub trait FileFetcher {
    fn fetch_by_name(&self, name: &Path) -> Result<Vec<u8>, FetchError>;
}

/// Fetcher respaldado por un directorio en disco.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self { DirFetcher { root: root.into() } }

    pub fn root(&self) -> &Path { &self.root }
}

impl FileFetcher for DirFetcher {
    fn fetch_by_name(&self, name: &Path) -> Result<Vec<u8>, FetchError> {
        let path = self.root.join(name);
        match fs::read(&path) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FetchError::NotFound(name.to_path_buf())),
            Err(e) => Err(FetchError::Io { path, source: e }),
        }
    }
}
