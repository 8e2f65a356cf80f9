//! Directory-backed template store with a JSON extension registry.
//!
//! # Layout
//!
//! ```text
//! <data_dir>/
//! ├── registry.json      ← { "<name>": "<.ext>", ... }
//! └── templates/
//!     ├── greet          ← raw bytes, copied verbatim
//!     └── rust-main
//! ```
//!
//! # Write ordering
//!
//! Every file write is atomic (see [`Filesystem::write_file`]), but a body
//! and the registry are still two writes. The order is fixed so that an
//! interruption can only leave one kind of damage per operation:
//!
//! - `create` writes the body, then the registry (worst case: orphan body)
//! - `remove` deletes the body, then the registry (worst case: dangling entry)
//!
//! [`TemplateStore::reconcile`] repairs both.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::{RwLock, RwLockWriteGuard},
};

use tracing::{debug, info, instrument, warn};

use templar_core::{
    application::{
        ApplicationError,
        ports::{Filesystem, ReconcileReport, TemplateStore},
    },
    domain::{Extension, Registry, TemplateName},
    error::TemplarResult,
};

/// Template store rooted at a data directory.
///
/// The registry is read once by [`RegistryStore::open`] and kept in memory
/// for the life of the store; every mutation flushes it back to disk in
/// full. Changes made to `registry.json` by other processes are not seen.
pub struct RegistryStore {
    templates_dir: PathBuf,
    registry_path: PathBuf,
    filesystem: Box<dyn Filesystem>,
    registry: RwLock<Registry>,
}

impl RegistryStore {
    /// Sub-directory holding template bodies.
    pub const TEMPLATES_DIR: &'static str = "templates";
    /// Registry file name.
    pub const REGISTRY_FILE: &'static str = "registry.json";

    /// Open (initialising if needed) the store under `data_dir`.
    ///
    /// Creates the template directory and an empty registry when absent,
    /// then loads the registry.
    #[instrument(skip_all, fields(data_dir = %data_dir.as_ref().display()))]
    pub fn open(data_dir: impl AsRef<Path>, filesystem: Box<dyn Filesystem>) -> TemplarResult<Self> {
        let data_dir = data_dir.as_ref();
        let templates_dir = data_dir.join(Self::TEMPLATES_DIR);
        let registry_path = data_dir.join(Self::REGISTRY_FILE);

        if !filesystem.exists(&templates_dir) {
            debug!(path = %templates_dir.display(), "Creating templates directory");
        }
        filesystem.create_dir_all(&templates_dir)?;

        if !filesystem.is_file(&registry_path) {
            debug!(path = %registry_path.display(), "Creating empty registry");
            filesystem.write_file(&registry_path, &Registry::new().to_json()?)?;
        }

        let raw = filesystem.read_file(&registry_path)?;
        let registry =
            Registry::from_json(&raw).map_err(|e| ApplicationError::RegistryCorrupted {
                path: registry_path.clone(),
                reason: e.to_string(),
            })?;
        debug!(entries = registry.len(), "Registry loaded");

        Ok(Self {
            templates_dir,
            registry_path,
            filesystem,
            registry: RwLock::new(registry),
        })
    }

    fn lock(&self) -> TemplarResult<RwLockWriteGuard<'_, Registry>> {
        Ok(self
            .registry
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?)
    }

    /// Rewrite the registry file from `registry`.
    fn flush(&self, registry: &Registry) -> TemplarResult<()> {
        self.filesystem
            .write_file(&self.registry_path, &registry.to_json()?)?;
        debug!(entries = registry.len(), "Registry flushed");
        Ok(())
    }

    /// Body file names, skipping in-flight temporary files.
    fn body_names(&self) -> TemplarResult<Vec<String>> {
        Ok(self
            .filesystem
            .list_files(&self.templates_dir)?
            .into_iter()
            .filter(|n| !n.starts_with('.'))
            .collect())
    }
}

impl TemplateStore for RegistryStore {
    #[instrument(skip_all, fields(template = %name, source = %source.display()))]
    fn create(&self, name: &TemplateName, source: &Path) -> TemplarResult<()> {
        let mut registry = self.lock()?;

        if !self.filesystem.is_file(source) {
            return Err(ApplicationError::SourceNotFound {
                path: source.to_path_buf(),
            }
            .into());
        }

        let body_path = self.path_of(name);
        if self.filesystem.exists(&body_path) {
            return Err(ApplicationError::TemplateExists {
                name: name.to_string(),
            }
            .into());
        }

        let content = self.filesystem.read_file(source)?;
        self.filesystem.write_file(&body_path, &content)?;

        let extension = Extension::of(source);
        registry.insert(name, extension.clone());

        if let Err(e) = self.flush(&registry) {
            // The body must not outlive its entry.
            warn!(error = %e, "Registry flush failed, rolling back body");
            registry.remove(name);
            if let Err(e) = self.filesystem.remove_file(&body_path) {
                warn!(error = %e, path = %body_path.display(), "Rollback failed");
            }
            return Err(e);
        }

        info!(bytes = content.len(), extension = %extension, "Template stored");
        Ok(())
    }

    #[instrument(skip_all, fields(template = %name))]
    fn remove(&self, name: &TemplateName) -> TemplarResult<()> {
        let mut registry = self.lock()?;

        let body_path = self.path_of(name);
        if !self.filesystem.is_file(&body_path) {
            return Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into());
        }

        self.filesystem.remove_file(&body_path)?;
        if registry.remove(name).is_none() {
            debug!("Template had no registry entry");
        }
        self.flush(&registry)?;

        info!("Template deleted");
        Ok(())
    }

    fn list(&self) -> TemplarResult<Vec<TemplateName>> {
        Ok(self
            .body_names()?
            .into_iter()
            .filter_map(|n| match TemplateName::parse(&n) {
                // Parsing trims; a padded file name cannot be addressed.
                Ok(name) if name.as_str() != n => {
                    warn!(file = %n, "Skipping template file with surrounding whitespace");
                    None
                }
                Ok(name) => Some(name),
                Err(e) => {
                    warn!(file = %n, error = %e, "Skipping unusable template file");
                    None
                }
            })
            .collect())
    }

    fn extension_of(&self, name: &TemplateName) -> TemplarResult<Option<Extension>> {
        let registry = self
            .registry
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(registry.get(name).cloned())
    }

    fn path_of(&self, name: &TemplateName) -> PathBuf {
        self.templates_dir.join(name)
    }

    fn contains(&self, name: &TemplateName) -> bool {
        self.filesystem.is_file(&self.path_of(name))
    }

    fn read(&self, name: &TemplateName) -> TemplarResult<Vec<u8>> {
        let path = self.path_of(name);
        if !self.filesystem.is_file(&path) {
            return Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
            }
            .into());
        }
        self.filesystem.read_file(&path)
    }

    #[instrument(skip_all)]
    fn reconcile(&self) -> TemplarResult<ReconcileReport> {
        let mut registry = self.lock()?;
        let bodies: HashSet<String> = self.body_names()?.into_iter().collect();
        let mut report = ReconcileReport::default();

        let dangling: Vec<String> = registry
            .keys()
            .filter(|key| !bodies.contains(*key))
            .map(str::to_string)
            .collect();
        for key in dangling {
            registry.remove_key(&key);
            warn!(template = %key, "Dropping registry entry without a body");
            report.dropped.push(key);
        }

        let mut orphans: Vec<&String> = bodies
            .iter()
            .filter(|body| !registry.keys().any(|key| key == body.as_str()))
            .collect();
        orphans.sort();
        for body in orphans {
            let Ok(name) = TemplateName::parse(body) else {
                continue;
            };
            if name.as_str() != body.as_str() {
                continue;
            }
            registry.insert(&name, Extension::none());
            warn!(template = %name, "Registering body without an entry");
            report.adopted.push(name.into_inner());
        }

        if !report.is_clean() {
            self.flush(&registry)?;
        }

        Ok(report)
    }
}
