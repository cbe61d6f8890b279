//! Motor de aprovisionamiento por subproceso.
//!
//! `CommandEngine` ejecuta un binario externo configurado por entorno dentro
//! del área de trabajo. El binario recibe la plataforma como último
//! argumento y debe dejar su estado en `STATE_FILE_NAME` dentro del área.

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{EngineError, ProvisionEngine, STATE_FILE_NAME};

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Configuración del binario del motor desde variables de entorno.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl EngineConfig {
    /// Lee `FORGE_ENGINE` (obligatoria) y `FORGE_ENGINE_ARGS` (opcional,
    /// separada por espacios).
    pub fn from_env() -> Result<Self, EngineError> {
        Lazy::force(&DOTENV_LOADED);
        let program =
            std::env::var("FORGE_ENGINE").map_err(|_| EngineError::Config("FORGE_ENGINE no definido".into()))?;
        let args = std::env::var("FORGE_ENGINE_ARGS").map(|raw| raw.split_whitespace().map(str::to_string).collect())
                                                     .unwrap_or_default();
        Ok(EngineConfig { program, args })
    }
}

#[derive(Debug, Clone)]
pub struct CommandEngine {
    config: EngineConfig,
}

impl CommandEngine {
    pub fn new(config: EngineConfig) -> Self { CommandEngine { config } }

    pub fn from_env() -> Result<Self, EngineError> { Ok(CommandEngine::new(EngineConfig::from_env()?)) }
}

impl ProvisionEngine for CommandEngine {
    fn apply(&self, working_dir: &Path, platform: &str) -> Result<PathBuf, EngineError> {
        let state_file = working_dir.join(STATE_FILE_NAME);
        log::info!("running provisioning engine {} for platform {platform}", self.config.program);

        let status = Command::new(&self.config.program).args(&self.config.args)
                                                       .arg(platform)
                                                       .current_dir(working_dir)
                                                       .status()
                                                       .map_err(|e| EngineError::Apply { message: format!("spawning {}: {e}", self.config.program),
                                                                                         state_file: None })?;

        if !status.success() {
            // El motor puede haber escrito estado parcial antes de fallar.
            let partial = state_file.exists().then(|| state_file.clone());
            return Err(EngineError::Apply { message: format!("{} exited with {status}", self.config.program),
                                            state_file: partial });
        }
        if !state_file.exists() {
            return Err(EngineError::Apply { message: format!("{} finished without writing {STATE_FILE_NAME}",
                                                             self.config.program),
                                            state_file: None });
        }
        Ok(state_file)
    }
}
