// forge-domain library entry point
pub mod error;
pub mod install_config;
pub mod metadata;
pub use error::DomainError;
pub use install_config::{AwsPlatform, InstallConfig, LibvirtPlatform, OpenStackPlatform, Platform};
pub use metadata::{AwsMetadata, ClusterMetadata, LibvirtMetadata, OpenStackMetadata, PlatformMetadata};
