//! forge-engine: adaptador del motor de aprovisionamiento externo.
//!
//! El motor es una caja negra síncrona: recibe un área de trabajo con las
//! variables ya preparadas y el identificador de plataforma, y produce un
//! archivo de estado. Este crate define el contrato (`ProvisionEngine`), la
//! implementación por subproceso (`CommandEngine`) y el área de trabajo
//! efímera con limpieza garantizada (`WorkDir`).

pub mod command;
pub mod workdir;

pub use command::{CommandEngine, EngineConfig};
pub use workdir::WorkDir;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Nombre del archivo de estado que el motor deja en el área de trabajo.
pub const STATE_FILE_NAME: &str = "forge.state";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine apply failed: {message}")]
    Apply { message: String, state_file: Option<PathBuf> },
    #[error("engine not configured: {0}")]
    Config(String),
    #[error("engine workspace: {0}")]
    Workspace(#[source] std::io::Error),
}

impl EngineError {
    /// Archivo de estado producido pese al fallo (éxito parcial).
    pub fn state_file(&self) -> Option<&Path> {
        match self {
            EngineError::Apply { state_file, .. } => state_file.as_deref(),
            _ => None,
        }
    }
}

/// Invocación síncrona y opaca del motor de aprovisionamiento.
pub trait ProvisionEngine {
    /// Ejecuta el motor dentro de `working_dir` para la plataforma dada y
    /// devuelve la ruta del archivo de estado resultante.
    ///
    /// Contrato de éxito parcial: un fallo puede venir acompañado de un
    /// archivo de estado ya escrito; `EngineError::Apply` lo transporta y
    /// `EngineError::state_file()` lo expone al llamador.
    fn apply(&self, working_dir: &Path, platform: &str) -> Result<PathBuf, EngineError>;
}
