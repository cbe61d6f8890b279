//! Recorrido completo del pipeline con el motor por subproceso real:
//! configuración en disco, resolución del grafo, invocación del motor y
//! persistencia de los tres artefactos bajo el directorio destino.

use std::fs;
use std::path::Path;

use forge_cluster::{load_metadata, Cluster, ADMIN_PASSWORD_PATH, METADATA_FILE_NAME};
use forge_core::AssetStore;
use forge_domain::PlatformMetadata;
use forge_engine::{CommandEngine, EngineConfig, STATE_FILE_NAME};

#[test]
fn create_cluster_end_to_end_with_command_engine() {
    let target = tempfile::tempdir().unwrap();

    let config_path = target.path().join("install-config.json");
    let raw = serde_json::json!({
        "name": "demo",
        "baseDomain": "example.com",
        "platform": { "libvirt": { "uri": "qemu:///system" } }
    });
    fs::write(&config_path, raw.to_string()).unwrap();
    std::env::set_var("FORGE_INSTALL_CONFIG", &config_path);

    // Motor de mentira: un shell que escribe el estado esperado.
    let engine = CommandEngine::new(EngineConfig { program: "sh".into(),
                                                   args: vec!["-c".into(),
                                                              "printf 'provisioned-by-sh' > forge.state".into()] });

    let mut store = AssetStore::new(target.path());
    let cluster = store.run_target(Cluster::new(engine)).unwrap();
    std::env::remove_var("FORGE_INSTALL_CONFIG");

    assert_eq!(cluster.files().len(), 3);
    assert_eq!(fs::read(target.path().join(STATE_FILE_NAME)).unwrap(), b"provisioned-by-sh");
    assert!(target.path().join(ADMIN_PASSWORD_PATH).exists());

    let meta = load_metadata(target.path()).unwrap();
    assert_eq!(meta.cluster_name, "demo");
    match meta.platform() {
        Some(PlatformMetadata::Libvirt(libvirt)) => assert_eq!(libvirt.uri, "qemu:///system"),
        other => panic!("expected libvirt metadata arm, got {other:?}"),
    }

    // El documento persistido es el mismo que el del conjunto de artefactos.
    let on_disk = fs::read(target.path().join(METADATA_FILE_NAME)).unwrap();
    let in_set = cluster.files()
                        .iter()
                        .find(|f| f.filename == Path::new(METADATA_FILE_NAME))
                        .expect("metadata in artifact set");
    assert_eq!(on_disk, in_set.data);
}
