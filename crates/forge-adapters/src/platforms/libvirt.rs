use forge_domain::{LibvirtMetadata, LibvirtPlatform};

/// Deriva los metadatos Libvirt: sólo el URI de conexión.
pub fn metadata(platform: &LibvirtPlatform) -> LibvirtMetadata {
    LibvirtMetadata { uri: platform.uri.clone() }
}
