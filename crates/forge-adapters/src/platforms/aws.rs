use forge_domain::{AwsMetadata, AwsPlatform};

use super::CLUSTER_TAG_PREFIX;

/// Deriva los metadatos AWS de la configuración resuelta.
///
/// El identificador combina los tags del usuario con el tag de propiedad del
/// clúster; la región se copia tal cual.
pub fn metadata(cluster_name: &str, platform: &AwsPlatform) -> AwsMetadata {
    let mut identifier = platform.user_tags.clone();
    identifier.insert(format!("{CLUSTER_TAG_PREFIX}/{cluster_name}"), "owned".to_string());
    AwsMetadata { region: platform.region.clone(),
                  identifier }
}
