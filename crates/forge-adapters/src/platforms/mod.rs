//! Extractores de metadatos por plataforma.
//!
//! Un extractor por plataforma soportada: función pura de la configuración
//! resuelta al payload de metadatos de esa plataforma. El despacho (qué
//! extractor ejecutar) es responsabilidad del orquestador.

pub mod aws;
pub mod libvirt;
pub mod openstack;

/// Tag con el que se marcan como propios los recursos del clúster.
pub(crate) const CLUSTER_TAG_PREFIX: &str = "forge.sh/cluster";
