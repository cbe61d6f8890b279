//! Errores del orquestador de clúster.
//!
//! Taxonomía: errores de configuración (plataforma ausente o no soportada),
//! de adquisición de recursos (área de trabajo), del motor externo, de
//! serialización/IO y de la guarda de idempotencia. La precedencia la aplica
//! el orquestador: primer error gana, el resto se loguea.

use std::path::PathBuf;
use thiserror::Error;

use forge_core::{AssetError, FetchError};
use forge_engine::EngineError;

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("cluster cannot be created with platform set to 'none'")]
    PlatformNone,
    #[error("no known platform")]
    UnknownPlatform,
    #[error("install config not resolved")]
    MissingInstallConfig,
    #[error("provision variables produced no staged file")]
    MissingVariablesFile,
    #[error("failed to create working area: {0}")]
    CreateWorkspace(#[source] EngineError),
    #[error("failed to stage provisioning variables: {0}")]
    StageVariables(#[source] EngineError),
    #[error("failed to create cluster: {0}")]
    Engine(#[source] EngineError),
    #[error("failed to read state file {path}: {source}")]
    ReadState { path: PathBuf, source: std::io::Error },
    #[error("failed to encode cluster metadata: {0}")]
    EncodeMetadata(#[source] serde_json::Error),
    #[error("failed to read {path}: {source}")]
    ReadMetadata { path: PathBuf, source: std::io::Error },
    #[error("failed to decode cluster metadata from {path}: {source}")]
    DecodeMetadata { path: PathBuf, source: serde_json::Error },
    #[error("{file} already exists, there may already be a running cluster")]
    AlreadyProvisioned { file: &'static str },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Parent(#[from] AssetError),
}

// Conversión al seam del marco de assets: la guarda de re-entrada conserva
// su condición propia, el resto se envuelve como fallo de generación.
impl From<ClusterError> for AssetError {
    fn from(err: ClusterError) -> Self {
        match err {
            ClusterError::Parent(inner) => inner,
            ClusterError::AlreadyProvisioned { file } => {
                AssetError::AlreadyExists { asset: "cluster",
                                            message: format!("{file} already exists, there may already be a running cluster") }
            }
            other => AssetError::generate("cluster", other),
        }
    }
}
