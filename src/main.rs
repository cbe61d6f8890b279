use std::path::Path;

use forge_cluster::{load_metadata, Cluster};
use forge_core::AssetStore;

fn parse_dir(args: &[String]) -> String {
    let mut dir: Option<String> = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" => {
                i += 1;
                if i < args.len() { dir = Some(args[i].clone()); }
            }
            _ => {}
        }
        i += 1;
    }
    dir.unwrap_or_else(|| ".".to_string())
}

fn main() {
    // Cargar .env si existe para obtener FORGE_ENGINE / FORGE_INSTALL_CONFIG
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().collect();

    if args.len() >= 2 && args[1] == "create" {
        let dir = parse_dir(&args);
        let cluster = match Cluster::from_env() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("[forgeflow create] engine config error: {e}");
                std::process::exit(5);
            }
        };
        let mut store = AssetStore::new(&dir);
        match store.run_target(cluster) {
            Ok(cluster) => {
                println!("cluster assets written to {dir}:");
                for file in cluster.files() {
                    println!("  {}", file.filename.display());
                }
            }
            Err(e) => {
                eprintln!("[forgeflow create] {e}");
                std::process::exit(4);
            }
        }
        return;
    }

    if args.len() >= 2 && args[1] == "metadata" {
        let dir = parse_dir(&args);
        match load_metadata(Path::new(&dir)) {
            Ok(meta) => match serde_json::to_string_pretty(&meta) {
                Ok(doc) => println!("{doc}"),
                Err(e) => {
                    eprintln!("[forgeflow metadata] {e}");
                    std::process::exit(4);
                }
            },
            Err(e) => {
                eprintln!("[forgeflow metadata] {e}");
                std::process::exit(4);
            }
        }
        return;
    }

    eprintln!("usage: forgeflow <create|metadata> [--dir <target>]");
    std::process::exit(2);
}
