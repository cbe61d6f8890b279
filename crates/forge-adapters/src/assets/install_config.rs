//! Asset de configuración de instalación.
//!
//! Carga y valida el documento JSON de configuración. La ruta se toma de la
//! variable de entorno `FORGE_INSTALL_CONFIG` (por defecto
//! `install-config.json` en el directorio de trabajo). El resto del grafo
//! consume la configuración resuelta en modo sólo lectura.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::any::Any;
use std::fs;

use forge_core::{Asset, AssetError, Parents};
use forge_domain::InstallConfig;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv();
});

const CONFIG_PATH_VAR: &str = "FORGE_INSTALL_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "install-config.json";

#[derive(Default)]
pub struct InstallConfigAsset {
    config: Option<InstallConfig>,
}

impl InstallConfigAsset {
    /// Instancia ya resuelta (tests y wiring manual).
    pub fn with_config(config: InstallConfig) -> Self { InstallConfigAsset { config: Some(config) } }

    /// Configuración resuelta; `None` si `generate` no se ha ejecutado.
    pub fn config(&self) -> Option<&InstallConfig> { self.config.as_ref() }
}

impl Asset for InstallConfigAsset {
    fn name(&self) -> &'static str { "install-config" }

    fn generate(&mut self, _parents: &Parents) -> Result<(), AssetError> {
        if self.config.is_some() {
            // Instancia pre-resuelta: nada que hacer.
            return Ok(());
        }
        Lazy::force(&DOTENV_LOADED);
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let raw = fs::read(&path).map_err(|e| AssetError::generate(self.name(), format!("reading {path}: {e}")))?;
        let config = InstallConfig::from_json(&raw).map_err(|e| AssetError::generate(self.name(), e))?;
        log::debug!("install config loaded from {path} (platform {})", config.platform().name());
        self.config = Some(config);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any { self }
}
