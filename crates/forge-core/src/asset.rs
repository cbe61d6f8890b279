//! Contrato de un asset del grafo.

use std::any::Any;

use crate::errors::AssetError;
use crate::fetcher::FileFetcher;
use crate::file::AssetFile;
use crate::parents::Parents;

/// Nodo del grafo de assets.
///
/// Implementaciones declaran sus dependencias como instancias frescas; el
/// resolutor las genera primero y las entrega resueltas vía `Parents`.
/// `generate` nunca busca dependencias por su cuenta.
pub trait Asset: Any {
    /// Identificador humano estable del asset.
    fn name(&self) -> &'static str;

    /// Dependencias directas, como instancias por defecto a resolver.
    fn dependencies(&self) -> Vec<Box<dyn Asset>> { Vec::new() }

    /// Genera el asset a partir de sus dependencias ya resueltas.
    fn generate(&mut self, parents: &Parents) -> Result<(), AssetError>;

    /// Acceso dinámico para el downcast tipado de `Parents::get`.
    fn as_any(&self) -> &dyn Any;
}

/// Asset que aporta archivos al bundle final.
pub trait WritableAsset: Asset {
    /// Archivos acumulados por el último `generate` (orden de inserción).
    fn files(&self) -> &[AssetFile];

    /// Consulta el estado persistido antes de regenerar.
    ///
    /// `Ok(false)` significa que no hay estado previo y se puede generar.
    /// Un asset puede devolver error aquí para rehusar la regeneración.
    fn load(&mut self, fetcher: &dyn FileFetcher) -> Result<bool, AssetError>;
}
