//! Dependencias resueltas inyectadas a `Asset::generate`.

use std::any::TypeId;
use std::collections::HashMap;
use std::rc::Rc;

use crate::asset::Asset;
use crate::errors::AssetError;

/// Mapa tipado de instancias de dependencias ya generadas.
///
/// El acceso es por tipo concreto: cada asset pide exactamente los padres
/// que declaró en `dependencies()`.
#[derive(Default)]
pub struct Parents {
    map: HashMap<TypeId, Rc<dyn Asset>>,
}

impl Parents {
    /// Inserta una instancia concreta (útil en tests y wiring manual).
    pub fn insert<T: Asset>(&mut self, asset: T) {
        self.map.insert(TypeId::of::<T>(), Rc::new(asset));
    }

    pub(crate) fn insert_resolved(&mut self, asset: Rc<dyn Asset>) {
        let type_id = asset.as_any().type_id();
        self.map.insert(type_id, asset);
    }

    /// Recupera el padre del tipo pedido, o `MissingParent` si no fue
    /// declarado/resuelto.
    pub fn get<T: Asset>(&self) -> Result<&T, AssetError> {
        self.map
            .get(&TypeId::of::<T>())
            .and_then(|a| a.as_any().downcast_ref::<T>())
            .ok_or(AssetError::MissingParent(std::any::type_name::<T>()))
    }
}
