//! forge-core: contratos del grafo de assets y resolutor mínimo.
//!
//! Este crate define el marco genérico que consumen los assets concretos:
//! - `Asset` / `WritableAsset`: contrato de declaración de dependencias,
//!   generación y persistencia de archivos.
//! - `Parents`: instancias de dependencias ya resueltas, inyectadas por el
//!   resolutor antes de llamar a `generate`.
//! - `FileFetcher` / `DirFetcher`: búsqueda por nombre contra salidas
//!   persistidas, distinguiendo "no encontrado" de otros errores de IO.
//! - `AssetStore`: resolución topológica en profundidad con memoización y
//!   persistencia de los archivos del asset objetivo.
//!
//! El core no interpreta el contenido de los archivos; sólo transporta pares
//! (ruta relativa, bytes) en orden de inserción.

pub mod asset;
pub mod errors;
pub mod fetcher;
pub mod file;
pub mod parents;
pub mod store;

pub use asset::{Asset, WritableAsset};
pub use errors::AssetError;
pub use fetcher::{DirFetcher, FetchError, FileFetcher};
pub use file::{AssetFile, FileList};
pub use parents::Parents;
pub use store::AssetStore;
