//! forge-adapters: capa de adaptación Dominio ↔ Marco de assets.
//!
//! Este crate provee:
//! - Los tres assets upstream que consume el orquestador de clúster:
//!   `InstallConfigAsset` (configuración resuelta), `ProvisionVariables`
//!   (variables renderizadas del motor) y `AdminPassword` (credencial
//!   administrativa generada).
//! - Los extractores puros de metadatos por plataforma
//!   (`platforms::{aws, libvirt, openstack}`): funciones configuración →
//!   payload de metadatos, sin efectos.

pub mod assets;
pub mod platforms;

pub use assets::{AdminPassword, InstallConfigAsset, ProvisionVariables, VARS_FILE_NAME};
