//! forge-cluster: orquestador del asset de clúster.
//!
//! Nodo del grafo de assets responsable de producir el artefacto desplegable:
//! compone las salidas de sus tres dependencias declaradas, invoca el motor
//! de aprovisionamiento exactamente una vez y ensambla de forma determinista
//! el conjunto de archivos de salida incluso bajo fallo parcial. El primer
//! error sustantivo se devuelve; los posteriores se loguean, nunca se
//! descartan en silencio.

pub mod cluster;
pub mod error;

pub use cluster::{load_metadata, Cluster, ADMIN_PASSWORD_PATH, METADATA_FILE_NAME};
pub use error::ClusterError;
