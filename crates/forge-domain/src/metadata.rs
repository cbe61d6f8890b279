//! Metadatos de clúster persistidos junto al resultado del aprovisionamiento.
//!
//! `ClusterMetadata` es el documento que el orquestador serializa a
//! `metadata.json` al final de cada `generate` (con o sin éxito). El brazo de
//! plataforma es una unión etiquetada (`PlatformMetadata`) con exactamente
//! una variante poblada, elegida por el selector activo de la configuración;
//! queda sin poblar sólo si el despacho de plataforma falló antes.
//!
//! La forma JSON es estable (camelCase, brazo aplanado):
//! `{"clusterName":"demo","aws":{"region":...,"identifier":{...}}}`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadatos específicos de AWS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsMetadata {
    pub region: String,
    /// Tags que identifican los recursos del clúster (orden determinista).
    pub identifier: BTreeMap<String, String>,
}

/// Metadatos específicos de Libvirt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibvirtMetadata {
    pub uri: String,
}

/// Metadatos específicos de OpenStack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackMetadata {
    pub cloud: String,
    pub region: String,
    pub identifier: BTreeMap<String, String>,
}

/// Unión etiquetada de metadatos por plataforma: exactamente un brazo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformMetadata {
    Aws(AwsMetadata),
    Libvirt(LibvirtMetadata),
    OpenStack(OpenStackMetadata),
}

impl PlatformMetadata {
    /// Nombre de la plataforma del brazo poblado.
    pub fn platform_name(&self) -> &'static str {
        match self {
            PlatformMetadata::Aws(_) => "aws",
            PlatformMetadata::Libvirt(_) => "libvirt",
            PlatformMetadata::OpenStack(_) => "openstack",
        }
    }
}

// Forma de alambre del brazo de plataforma: un campo opcional por plataforma,
// aplanado en el documento. `set_platform` garantiza como mucho uno poblado.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct PlatformArms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    aws: Option<AwsMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    libvirt: Option<LibvirtMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    openstack: Option<OpenStackMetadata>,
}

/// Registro de metadatos de un clúster aprovisionado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterMetadata {
    pub cluster_name: String,
    #[serde(flatten)]
    arms: PlatformArms,
}

impl ClusterMetadata {
    /// Registro recién creado, todavía sin brazo de plataforma poblado.
    pub fn new(cluster_name: &str) -> Self {
        ClusterMetadata { cluster_name: cluster_name.to_string(),
                          arms: PlatformArms::default() }
    }

    /// Puebla el brazo de plataforma, vaciando cualquier otro.
    pub fn set_platform(&mut self, meta: PlatformMetadata) {
        self.arms = PlatformArms::default();
        match meta {
            PlatformMetadata::Aws(m) => self.arms.aws = Some(m),
            PlatformMetadata::Libvirt(m) => self.arms.libvirt = Some(m),
            PlatformMetadata::OpenStack(m) => self.arms.openstack = Some(m),
        }
    }

    /// Brazo de plataforma poblado, si lo hay.
    pub fn platform(&self) -> Option<PlatformMetadata> {
        if let Some(m) = &self.arms.aws {
            return Some(PlatformMetadata::Aws(m.clone()));
        }
        if let Some(m) = &self.arms.libvirt {
            return Some(PlatformMetadata::Libvirt(m.clone()));
        }
        if let Some(m) = &self.arms.openstack {
            return Some(PlatformMetadata::OpenStack(m.clone()));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_json_shape_flattens_platform_arm() {
        let mut meta = ClusterMetadata::new("demo");
        meta.set_platform(PlatformMetadata::Libvirt(LibvirtMetadata { uri: "qemu:///system".into() }));
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["clusterName"], "demo");
        assert_eq!(value["libvirt"]["uri"], "qemu:///system");
        assert!(value.get("aws").is_none(), "only the active arm must serialize");
    }

    #[test]
    fn metadata_without_platform_arm_omits_it() {
        let meta = ClusterMetadata::new("demo");
        let raw = serde_json::to_string(&meta).unwrap();
        assert_eq!(raw, r#"{"clusterName":"demo"}"#);
        let back: ClusterMetadata = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, meta);
        assert!(back.platform().is_none());
    }

    #[test]
    fn set_platform_replaces_any_previous_arm() {
        let mut meta = ClusterMetadata::new("demo");
        meta.set_platform(PlatformMetadata::Libvirt(LibvirtMetadata { uri: "qemu:///system".into() }));
        meta.set_platform(PlatformMetadata::Aws(AwsMetadata { region: "eu-west-1".into(),
                                                              identifier: BTreeMap::new() }));
        let value = serde_json::to_value(&meta).unwrap();
        assert!(value.get("libvirt").is_none(), "exactly one populated arm");
        assert_eq!(value["aws"]["region"], "eu-west-1");
    }
}
