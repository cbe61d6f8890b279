//! Errores del marco de assets.

use std::path::PathBuf;
use thiserror::Error;

use crate::fetcher::FetchError;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("missing resolved dependency: {0}")]
    MissingParent(&'static str),
    #[error("generating asset {asset}: {message}")]
    Generate { asset: &'static str, message: String },
    #[error("asset {asset} refuses to regenerate: {message}")]
    AlreadyExists { asset: &'static str, message: String },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("persisting {path}: {source}")]
    Persist { path: PathBuf, source: std::io::Error },
}

impl AssetError {
    /// Envuelve un fallo de generación de un asset concreto.
    pub fn generate(asset: &'static str, err: impl std::fmt::Display) -> Self {
        AssetError::Generate { asset,
                               message: err.to_string() }
    }
}
