//! Assets upstream del orquestador de clúster.

pub mod install_config;
pub mod password;
pub mod variables;

pub use install_config::InstallConfigAsset;
pub use password::AdminPassword;
pub use variables::{ProvisionVariables, VARS_FILE_NAME};
