//! Área de trabajo efímera del motor.

use std::path::{Path, PathBuf};
use std::{env, fs};
use uuid::Uuid;

use crate::EngineError;

/// Directorio de trabajo con nombre único bajo el tempdir del proceso.
///
/// Recurso con ámbito: se crea antes de invocar al motor y se elimina
/// recursivamente al hacer drop, en cualquier camino de salida del llamador.
#[derive(Debug)]
pub struct WorkDir {
    path: PathBuf,
}

impl WorkDir {
    pub fn create() -> Result<Self, EngineError> {
        let path = env::temp_dir().join(format!("forgeflow-{}", Uuid::new_v4().simple()));
        fs::create_dir_all(&path).map_err(EngineError::Workspace)?;
        Ok(WorkDir { path })
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Copia un archivo de entrada al área de trabajo y devuelve su ruta.
    pub fn stage(&self, filename: &Path, data: &[u8]) -> Result<PathBuf, EngineError> {
        let dest = self.path.join(filename);
        fs::write(&dest, data).map_err(EngineError::Workspace)?;
        Ok(dest)
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to remove workspace {}: {e}", self.path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workdir_is_removed_on_drop() {
        let keep;
        {
            let wd = WorkDir::create().unwrap();
            keep = wd.path().to_path_buf();
            wd.stage(Path::new("input.json"), b"{}").unwrap();
            assert!(keep.join("input.json").exists());
        }
        assert!(!keep.exists(), "workdir must not outlive its scope");
    }

    #[test]
    fn workdirs_get_unique_names() {
        let a = WorkDir::create().unwrap();
        let b = WorkDir::create().unwrap();
        assert_ne!(a.path(), b.path());
    }
}
