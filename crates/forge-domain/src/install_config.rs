//! Configuración de instalación resuelta.
//!
//! Un `InstallConfig` es la configuración ya fusionada que consume el
//! orquestador. Es de sólo lectura para el resto del sistema: se construye
//! validada y después únicamente se consulta. El selector de plataforma es
//! una unión discriminada cerrada (`Platform`): exactamente una variante
//! activa por construcción, con `None` como centinela sin plataforma.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::DomainError;

/// Parámetros de la plataforma AWS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsPlatform {
    pub region: String,
    /// Tags adicionales aportados por el usuario (orden determinista).
    #[serde(default)]
    pub user_tags: BTreeMap<String, String>,
}

/// Parámetros de la plataforma Libvirt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibvirtPlatform {
    /// URI de conexión al hipervisor (ej. `qemu+tcp://192.168.122.1/system`).
    pub uri: String,
}

/// Parámetros de la plataforma OpenStack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackPlatform {
    pub cloud: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_network: Option<String>,
}

/// Selector de plataforma: exactamente una variante activa.
///
/// `None` es un centinela válido en configuración pero el aprovisionamiento
/// no está definido para él (el orquestador lo rechaza de entrada).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Aws(AwsPlatform),
    Libvirt(LibvirtPlatform),
    OpenStack(OpenStackPlatform),
    None,
}

impl Platform {
    /// Identificador estable de la plataforma activa.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Aws(_) => "aws",
            Platform::Libvirt(_) => "libvirt",
            Platform::OpenStack(_) => "openstack",
            Platform::None => "none",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.name()) }
}

/// Configuración de instalación fusionada y validada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallConfig {
    name: String,
    #[serde(default)]
    base_domain: String,
    platform: Platform,
}

impl InstallConfig {
    pub fn new(name: &str, base_domain: &str, platform: Platform) -> Result<Self, DomainError> {
        validate_cluster_name(name)?;
        Ok(InstallConfig { name: name.to_string(),
                           base_domain: base_domain.to_string(),
                           platform })
    }

    /// Decodifica y valida una configuración desde un documento JSON.
    pub fn from_json(raw: &[u8]) -> Result<Self, DomainError> {
        let config: InstallConfig =
            serde_json::from_slice(raw).map_err(|e| DomainError::Decode(format!("install config: {e}")))?;
        validate_cluster_name(&config.name)?;
        Ok(config)
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn base_domain(&self) -> &str { &self.base_domain }
    pub fn platform(&self) -> &Platform { &self.platform }
}

fn validate_cluster_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::Validation("cluster name must not be empty".to_string()));
    }
    // Mismas reglas que un label DNS: minúsculas, dígitos y guiones internos.
    let valid = name.len() <= 63
                && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
                && !name.starts_with('-')
                && !name.ends_with('-');
    if !valid {
        return Err(DomainError::Validation(format!("invalid cluster name {name:?}")));
    }
    Ok(())
}
