//! Archivo producido por un asset.
//!
//! Un `AssetFile` es la unidad que un `WritableAsset` aporta al bundle final:
//! una ruta relativa y su contenido en bytes. La lista de archivos conserva
//! el orden de inserción y no deduplica rutas repetidas.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// Ruta relativa dentro del directorio destino.
    pub filename: PathBuf,
    pub data: Vec<u8>,
}

impl AssetFile {
    pub fn new(filename: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        AssetFile { filename: filename.into(),
                    data: data.into() }
    }
}

/// Secuencia ordenada de archivos de un asset (orden de inserción).
pub type FileList = Vec<AssetFile>;
