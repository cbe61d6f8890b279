use forge_core::{Asset, AssetError, AssetFile, AssetStore, DirFetcher, FetchError, FileFetcher, Parents,
                 WritableAsset};
use std::any::Any;
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

// Asset hoja: produce un valor fijo y cuenta cuántas veces se genera.
#[derive(Debug, Default)]
struct SeedAsset {
    value: u32,
    generated: Rc<Cell<u32>>,
}

impl Asset for SeedAsset {
    fn name(&self) -> &'static str { "seed" }

    fn generate(&mut self, _parents: &Parents) -> Result<(), AssetError> {
        self.value = 7;
        self.generated.set(self.generated.get() + 1);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any { self }
}

// Asset intermedio que depende de SeedAsset.
#[derive(Default)]
struct DoubleAsset {
    value: u32,
}

impl Asset for DoubleAsset {
    fn name(&self) -> &'static str { "double" }

    fn dependencies(&self) -> Vec<Box<dyn Asset>> { vec![Box::new(SeedAsset::default())] }

    fn generate(&mut self, parents: &Parents) -> Result<(), AssetError> {
        let seed = parents.get::<SeedAsset>()?;
        self.value = seed.value * 2;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any { self }
}

// Asset escribible que depende dos veces (directa e indirecta) de SeedAsset.
#[derive(Default)]
struct ReportAsset {
    files: Vec<AssetFile>,
}

impl Asset for ReportAsset {
    fn name(&self) -> &'static str { "report" }

    fn dependencies(&self) -> Vec<Box<dyn Asset>> {
        vec![Box::new(SeedAsset::default()), Box::new(DoubleAsset::default())]
    }

    fn generate(&mut self, parents: &Parents) -> Result<(), AssetError> {
        let seed = parents.get::<SeedAsset>()?;
        let double = parents.get::<DoubleAsset>()?;
        self.files.push(AssetFile::new("report.txt", format!("{} {}", seed.value, double.value)));
        self.files.push(AssetFile::new("nested/copy.txt", "copy"));
        Ok(())
    }

    fn as_any(&self) -> &dyn Any { self }
}

impl WritableAsset for ReportAsset {
    fn files(&self) -> &[AssetFile] { &self.files }

    fn load(&mut self, fetcher: &dyn FileFetcher) -> Result<bool, AssetError> {
        match fetcher.fetch_by_name(Path::new("report.txt")) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[test]
fn parents_get_missing_dependency_errors() {
    let parents = Parents::default();
    let err = parents.get::<SeedAsset>().unwrap_err();
    assert!(matches!(err, AssetError::MissingParent(_)));
}

#[test]
fn parents_get_returns_inserted_instance() {
    let mut parents = Parents::default();
    parents.insert(SeedAsset { value: 42,
                               generated: Rc::default() });
    assert_eq!(parents.get::<SeedAsset>().unwrap().value, 42);
}

#[test]
fn store_resolves_dependencies_and_persists_target() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = AssetStore::new(dir.path());

    let report = store.run_target(ReportAsset::default()).unwrap();
    assert_eq!(report.files().len(), 2);
    assert_eq!(std::fs::read(dir.path().join("report.txt")).unwrap(), b"7 14");
    assert_eq!(std::fs::read(dir.path().join("nested/copy.txt")).unwrap(), b"copy");
}

#[test]
fn store_memoizes_shared_dependencies() {
    // SeedAsset es dependencia directa del target e indirecta vía DoubleAsset:
    // debe generarse una única vez.
    let dir = tempfile::tempdir().unwrap();
    let mut store = AssetStore::new(dir.path());
    let counter = Rc::new(Cell::new(0));

    let seed = SeedAsset { value: 0,
                           generated: counter.clone() };
    store.resolve(Box::new(seed)).unwrap();
    store.run_target(ReportAsset::default()).unwrap();
    assert_eq!(counter.get(), 1, "shared dependency must generate once");
}

#[test]
fn store_skips_generation_when_target_already_loaded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("report.txt"), "previous").unwrap();

    let mut store = AssetStore::new(dir.path());
    let report = store.run_target(ReportAsset::default()).unwrap();
    assert!(report.files().is_empty(), "loaded target must not regenerate");
    assert_eq!(std::fs::read(dir.path().join("report.txt")).unwrap(), b"previous");
}

#[test]
fn dir_fetcher_distinguishes_not_found_from_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let fetcher = DirFetcher::new(dir.path());

    let err = fetcher.fetch_by_name(Path::new("absent.json")).unwrap_err();
    assert!(err.is_not_found());

    std::fs::write(dir.path().join("present.json"), b"{}").unwrap();
    assert_eq!(fetcher.fetch_by_name(Path::new("present.json")).unwrap(), b"{}");

    // Leer un directorio como archivo produce un error de IO distinto de NotFound.
    std::fs::create_dir(dir.path().join("as-dir")).unwrap();
    let err = fetcher.fetch_by_name(Path::new("as-dir")).unwrap_err();
    assert!(!err.is_not_found());
    assert!(matches!(err, FetchError::Io { .. }));
}
