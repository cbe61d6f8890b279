use forge_domain::{OpenStackMetadata, OpenStackPlatform};
use std::collections::BTreeMap;

use super::CLUSTER_TAG_PREFIX;

/// Deriva los metadatos OpenStack de la configuración resuelta.
pub fn metadata(cluster_name: &str, platform: &OpenStackPlatform) -> OpenStackMetadata {
    let mut identifier = BTreeMap::new();
    identifier.insert(format!("{CLUSTER_TAG_PREFIX}/{cluster_name}"), "owned".to_string());
    OpenStackMetadata { cloud: platform.cloud.clone(),
                        region: platform.region.clone(),
                        identifier }
}
