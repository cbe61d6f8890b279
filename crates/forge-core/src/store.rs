//! Resolutor mínimo del grafo de assets.
//!
//! Resuelve dependencias en profundidad con memoización por tipo concreto,
//! inyecta los padres ya generados y persiste los archivos del objetivo bajo
//! el directorio destino. La guarda de re-entrada del objetivo (`load`) se
//! ejecuta antes de generar: un error ahí detiene el pipeline.

use std::any::TypeId;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::asset::{Asset, WritableAsset};
use crate::errors::AssetError;
use crate::fetcher::DirFetcher;
use crate::parents::Parents;

pub struct AssetStore {
    target_dir: PathBuf,
    generated: HashMap<TypeId, Rc<dyn Asset>>,
}

impl AssetStore {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        AssetStore { target_dir: target_dir.into(),
                     generated: HashMap::new() }
    }

    pub fn target_dir(&self) -> &Path { &self.target_dir }

    /// Fetcher sobre el directorio destino (salidas de ejecuciones previas).
    pub fn fetcher(&self) -> DirFetcher { DirFetcher::new(&self.target_dir) }

    /// Resuelve un asset generando antes sus dependencias (memoizadas).
    pub fn resolve(&mut self, mut target: Box<dyn Asset>) -> Result<Rc<dyn Asset>, AssetError> {
        let type_id = target.as_any().type_id();
        if let Some(done) = self.generated.get(&type_id) {
            return Ok(done.clone());
        }

        let parents = self.resolve_parents(target.dependencies())?;
        log::debug!("generating asset {}", target.name());
        target.generate(&parents)?;

        let resolved: Rc<dyn Asset> = Rc::from(target);
        self.generated.insert(type_id, resolved.clone());
        Ok(resolved)
    }

    /// Genera un asset escribible y persiste sus archivos.
    ///
    /// Ejecuta primero la guarda de re-entrada: `Ok(true)` omite la
    /// generación; un error (p. ej. "ya existe") se propaga tal cual.
    pub fn run_target<T>(&mut self, mut target: T) -> Result<T, AssetError>
        where T: WritableAsset
    {
        let fetcher = self.fetcher();
        if target.load(&fetcher)? {
            log::info!("asset {} loaded from prior state, skipping generation", target.name());
            return Ok(target);
        }

        let parents = self.resolve_parents(target.dependencies())?;
        target.generate(&parents)?;
        self.persist(&target)?;
        Ok(target)
    }

    fn resolve_parents(&mut self, deps: Vec<Box<dyn Asset>>) -> Result<Parents, AssetError> {
        let mut parents = Parents::default();
        for dep in deps {
            let resolved = self.resolve(dep)?;
            parents.insert_resolved(resolved);
        }
        Ok(parents)
    }

    fn persist<T: WritableAsset>(&self, asset: &T) -> Result<(), AssetError> {
        for file in asset.files() {
            let path = self.target_dir.join(&file.filename);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| AssetError::Persist { path: path.clone(), source: e })?;
            }
            fs::write(&path, &file.data).map_err(|e| AssetError::Persist { path: path.clone(), source: e })?;
        }
        Ok(())
    }
}
