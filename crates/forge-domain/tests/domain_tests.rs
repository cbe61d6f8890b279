use forge_domain::{AwsMetadata, AwsPlatform, ClusterMetadata, InstallConfig, LibvirtPlatform, Platform,
                   PlatformMetadata};
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn test_install_config_parses_aws_platform() {
    let raw = json!({
        "name": "demo",
        "baseDomain": "example.com",
        "platform": { "aws": { "region": "eu-west-1" } }
    });
    let config = InstallConfig::from_json(raw.to_string().as_bytes()).unwrap();
    assert_eq!(config.name(), "demo");
    assert_eq!(config.base_domain(), "example.com");
    match config.platform() {
        Platform::Aws(aws) => assert_eq!(aws.region, "eu-west-1"),
        other => panic!("expected aws platform, got {other}"),
    }
}

#[test]
fn test_install_config_parses_none_sentinel() {
    let raw = json!({ "name": "demo", "platform": "none" });
    let config = InstallConfig::from_json(raw.to_string().as_bytes()).unwrap();
    assert_eq!(config.platform(), &Platform::None);
    assert_eq!(config.platform().name(), "none");
}

#[test]
fn test_install_config_rejects_bad_cluster_name() {
    assert!(InstallConfig::new("", "example.com", Platform::None).is_err());
    assert!(InstallConfig::new("Demo", "example.com", Platform::None).is_err());
    assert!(InstallConfig::new("-demo", "example.com", Platform::None).is_err());
    assert!(InstallConfig::new("demo-1", "example.com", Platform::None).is_ok());
}

#[test]
fn test_platform_names_are_stable() {
    let aws = Platform::Aws(AwsPlatform { region: "us-east-1".into(),
                                          user_tags: BTreeMap::new() });
    let libvirt = Platform::Libvirt(LibvirtPlatform { uri: "qemu:///system".into() });
    assert_eq!(aws.name(), "aws");
    assert_eq!(libvirt.name(), "libvirt");
    assert_eq!(Platform::None.name(), "none");
}

#[test]
fn test_cluster_metadata_round_trip_preserves_arm() {
    let mut identifier = BTreeMap::new();
    identifier.insert("forge.sh/cluster".to_string(), "demo".to_string());
    let mut meta = ClusterMetadata::new("demo");
    meta.set_platform(PlatformMetadata::Aws(AwsMetadata { region: "eu-west-1".into(),
                                                          identifier }));
    let raw = serde_json::to_vec(&meta).unwrap();
    let back: ClusterMetadata = serde_json::from_slice(&raw).unwrap();
    assert_eq!(back, meta);
    assert_eq!(back.platform().unwrap().platform_name(), "aws");
}
