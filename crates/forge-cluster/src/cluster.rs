//! Asset de clúster: lanza el aprovisionamiento y ensambla las salidas.
//!
//! `Cluster` usa el motor de aprovisionamiento para lanzar un clúster con
//! las variables ya renderizadas, y deja en su lista de archivos el estado
//! del motor, los metadatos del clúster y la credencial administrativa. El
//! ensamblado es de mejor esfuerzo: un fallo intermedio no descarta los
//! artefactos ya producidos.

use std::any::Any;
use std::fs;
use std::path::Path;

use forge_adapters::platforms;
use forge_adapters::{AdminPassword, InstallConfigAsset, ProvisionVariables};
use forge_core::{Asset, AssetError, AssetFile, FileFetcher, FileList, Parents, WritableAsset};
use forge_domain::{ClusterMetadata, InstallConfig, Platform, PlatformMetadata};
use forge_engine::{CommandEngine, ProvisionEngine, WorkDir, STATE_FILE_NAME};

use crate::error::ClusterError;

/// Nombre del archivo donde se persisten los metadatos del clúster.
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// Ruta relativa donde se persiste la contraseña del administrador.
pub const ADMIN_PASSWORD_PATH: &str = "auth/admin-password";

#[derive(Debug)]
pub struct Cluster<E = CommandEngine> {
    engine: E,
    file_list: FileList,
}

impl Cluster<CommandEngine> {
    /// Orquestador con el motor por subproceso configurado por entorno.
    pub fn from_env() -> Result<Self, ClusterError> {
        Ok(Cluster::new(CommandEngine::from_env().map_err(ClusterError::Engine)?))
    }
}

impl<E: ProvisionEngine> Cluster<E> {
    pub fn new(engine: E) -> Self {
        Cluster { engine,
                  file_list: FileList::new() }
    }

    /// Archivos acumulados por el último `generate` (orden de inserción,
    /// rutas duplicadas no se deduplican).
    pub fn files(&self) -> &[AssetFile] { &self.file_list }

    /// Lanza el clúster y ensambla el conjunto de artefactos.
    ///
    /// Política de fallo (contrato crítico):
    /// 1. crear el área de trabajo — fatal, sin artefactos;
    /// 2. copiar las variables renderizadas — fatal, área limpiada igualmente;
    /// 3. despachar metadatos de plataforma — error distinto si no hay
    ///    plataforma conocida, la finalización corre igualmente;
    /// 4. invocar el motor — el error se recuerda y se sigue;
    /// 5. leer el archivo de estado si hubo ruta (incluso junto a un error
    ///    recordado) — un fallo de lectura sólo gana si no hay error previo;
    /// 6. finalización diferida: metadatos (mejor esfuerzo) y credencial
    ///    (incondicional);
    /// 7. el área de trabajo se elimina en todo camino de salida.
    pub fn generate(&mut self, parents: &Parents) -> Result<(), ClusterError> {
        let install_config = parents.get::<InstallConfigAsset>()?;
        let variables = parents.get::<ProvisionVariables>()?;
        let password = parents.get::<AdminPassword>()?;
        let config = install_config.config().ok_or(ClusterError::MissingInstallConfig)?;

        if config.platform() == &Platform::None {
            return Err(ClusterError::PlatformNone);
        }

        // Área efímera: el drop guard garantiza su eliminación recursiva en
        // cualquier camino de salida a partir de aquí.
        let workdir = WorkDir::create().map_err(ClusterError::CreateWorkspace)?;

        let vars_file = variables.files().first().ok_or(ClusterError::MissingVariablesFile)?;
        workdir.stage(&vars_file.filename, &vars_file.data)
               .map_err(ClusterError::StageVariables)?;

        let mut metadata = ClusterMetadata::new(config.name());

        // Pasos 3-5: el primer error se recuerda; la finalización corre
        // también tras un aborto temprano del despacho.
        let mut first_err = self.provision(&workdir, config, &mut metadata).err();

        // Finalización diferida.
        match serde_json::to_vec(&metadata) {
            Ok(data) => self.file_list.push(AssetFile::new(METADATA_FILE_NAME, data)),
            Err(e) => {
                let e = ClusterError::EncodeMetadata(e);
                match first_err {
                    None => first_err = Some(e),
                    Some(_) => log::error!("{e}"),
                }
            }
        }
        self.file_list.push(AssetFile::new(ADMIN_PASSWORD_PATH, password.password().as_bytes()));

        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    // Pasos 3-5: despacho de metadatos, invocación del motor y lectura del
    // archivo de estado, con precedencia primer-error-gana.
    fn provision(&mut self,
                 workdir: &WorkDir,
                 config: &InstallConfig,
                 metadata: &mut ClusterMetadata)
                 -> Result<(), ClusterError> {
        metadata.set_platform(match config.platform() {
            Platform::Aws(aws) => PlatformMetadata::Aws(platforms::aws::metadata(config.name(), aws)),
            Platform::Libvirt(libvirt) => PlatformMetadata::Libvirt(platforms::libvirt::metadata(libvirt)),
            Platform::OpenStack(osp) => PlatformMetadata::OpenStack(platforms::openstack::metadata(config.name(), osp)),
            Platform::None => return Err(ClusterError::UnknownPlatform),
        });

        log::info!("Creating cluster {}...", config.name());
        let mut pending: Option<ClusterError> = None;
        let state_file = match self.engine.apply(workdir.path(), config.platform().name()) {
            Ok(path) => Some(path),
            Err(e) => {
                // Contrato de éxito parcial: el fallo puede traer estado.
                let partial = e.state_file().map(Path::to_path_buf);
                pending = Some(ClusterError::Engine(e));
                partial
            }
        };

        if let Some(path) = state_file {
            match fs::read(&path) {
                Ok(data) => self.file_list.push(AssetFile::new(STATE_FILE_NAME, data)),
                Err(source) => {
                    let e = ClusterError::ReadState { path, source };
                    match pending {
                        None => pending = Some(e),
                        Some(_) => log::error!("{e}"),
                    }
                }
            }
        }

        match pending {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Guarda de re-entrada contra el doble aprovisionamiento.
    ///
    /// `Ok(false)`: no hay estado persistido, se puede generar.
    /// `Err(AlreadyProvisioned)`: el archivo de estado existe, regenerar está
    /// prohibido. Cualquier otro error de IO se propaga tal cual.
    pub fn load(&self, fetcher: &dyn FileFetcher) -> Result<bool, ClusterError> {
        match fetcher.fetch_by_name(Path::new(STATE_FILE_NAME)) {
            Ok(_) => Err(ClusterError::AlreadyProvisioned { file: STATE_FILE_NAME }),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(ClusterError::Fetch(e)),
        }
    }
}

impl<E: ProvisionEngine + 'static> Asset for Cluster<E> {
    fn name(&self) -> &'static str { "cluster" }

    fn dependencies(&self) -> Vec<Box<dyn Asset>> {
        vec![Box::new(InstallConfigAsset::default()),
             Box::new(ProvisionVariables::default()),
             Box::new(AdminPassword::default())]
    }

    fn generate(&mut self, parents: &Parents) -> Result<(), AssetError> {
        Cluster::generate(self, parents).map_err(AssetError::from)
    }

    fn as_any(&self) -> &dyn Any { self }
}

impl<E: ProvisionEngine + 'static> WritableAsset for Cluster<E> {
    fn files(&self) -> &[AssetFile] { &self.file_list }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> Result<bool, AssetError> {
        Cluster::load(self, fetcher).map_err(AssetError::from)
    }
}

/// Lee y decodifica los metadatos de clúster de un directorio de assets.
///
/// Camino auxiliar de sólo lectura para herramientas que necesitan los
/// metadatos post-aprovisionamiento sin regenerar nada; consume el mismo
/// formato que produce `generate`.
pub fn load_metadata(dir: &Path) -> Result<ClusterMetadata, ClusterError> {
    let path = dir.join(METADATA_FILE_NAME);
    let raw = fs::read(&path).map_err(|source| ClusterError::ReadMetadata { path: path.clone(), source })?;
    serde_json::from_slice(&raw).map_err(|source| ClusterError::DecodeMetadata { path, source })
}
