//! Variables renderizadas para el motor de aprovisionamiento.
//!
//! Produce exactamente un archivo (`forge-vars.json`) con las variables que
//! el orquestador copia al área de trabajo antes de invocar el motor. El
//! contenido deriva determinísticamente de la configuración resuelta.

use serde_json::json;
use std::any::Any;

use forge_core::{Asset, AssetError, AssetFile, FileList, Parents};

use super::install_config::InstallConfigAsset;

/// Nombre del archivo de variables que se copia al área de trabajo.
pub const VARS_FILE_NAME: &str = "forge-vars.json";

#[derive(Default)]
pub struct ProvisionVariables {
    files: FileList,
}

impl ProvisionVariables {
    /// Archivos producidos (exactamente uno tras `generate`).
    pub fn files(&self) -> &[AssetFile] { &self.files }
}

impl Asset for ProvisionVariables {
    fn name(&self) -> &'static str { "provision-variables" }

    fn dependencies(&self) -> Vec<Box<dyn Asset>> { vec![Box::new(InstallConfigAsset::default())] }

    fn generate(&mut self, parents: &Parents) -> Result<(), AssetError> {
        let config = parents.get::<InstallConfigAsset>()?
                            .config()
                            .ok_or_else(|| AssetError::generate(self.name(), "install config not resolved"))?;

        let vars = json!({
            "clusterName": config.name(),
            "baseDomain": config.base_domain(),
            "platformName": config.platform().name(),
            "platform": config.platform(),
        });
        let data = serde_json::to_vec_pretty(&vars).map_err(|e| AssetError::generate(self.name(), e))?;
        self.files.push(AssetFile::new(VARS_FILE_NAME, data));
        Ok(())
    }

    fn as_any(&self) -> &dyn Any { self }
}
