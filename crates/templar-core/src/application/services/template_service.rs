//! Template Service - template management operations.
//!
//! Sequences the checks that sit above raw storage for the five user-facing
//! operations (create, load, remove, edit, list):
//!
//! 1. Validate the template name
//! 2. Resolve the source or target
//! 3. Check preconditions against the store
//! 4. Mutate or read through the store
//!
//! Any failed check ends the operation before anything is written. The
//! service never prompts; decisions that need the user come back as data
//! (see [`Confirmation`]).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ReconcileReport, TemplateStore},
    },
    domain::{Extension, TemplateName},
    error::TemplarResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    /// `None` when the body has no registry entry.
    pub extension: Option<String>,
}

/// The file a template is being loaded into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTarget {
    pub path: PathBuf,
    /// Whether the target currently holds no content.
    pub is_empty: bool,
}

impl LoadTarget {
    pub fn new(path: impl Into<PathBuf>, is_empty: bool) -> Self {
        Self {
            path: path.into(),
            is_empty,
        }
    }
}

/// A decision the caller must get from the user before applying a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// The target has content that the load will erase.
    Overwrite { target: PathBuf },
    /// The target's extension differs from the one recorded for the template.
    /// `template` is `None` when nothing was recorded.
    ExtensionMismatch {
        template: Option<Extension>,
        target: Extension,
    },
}

/// A validated load, waiting for the caller to resolve its confirmations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadPlan {
    pub name: TemplateName,
    pub body: Vec<u8>,
    pub confirmations: Vec<Confirmation>,
}

impl LoadPlan {
    /// `true` if the plan can be applied without asking anything.
    pub fn is_unconditional(&self) -> bool {
        self.confirmations.is_empty()
    }
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl TemplateService {
    /// Create a new template service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use templar_core::application::{TemplateService, ports::*};
    ///
    /// let service = TemplateService::new(
    ///     store,      // impl TemplateStore
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// Save a file as a new template.
    ///
    /// The source is `candidate` if that file exists, otherwise `fallback`
    /// (the file open in the user's editor) if one was given.
    #[instrument(skip_all, fields(template = %name))]
    pub fn create_template(
        &self,
        name: &str,
        candidate: Option<&Path>,
        fallback: Option<&Path>,
    ) -> TemplarResult<TemplateName> {
        let name = TemplateName::parse(name)?;
        let source = self.resolve_source(candidate, fallback)?;

        info!(source = %source.display(), "Copying template");
        self.store.create(&name, &source)?;

        info!("Template created");
        Ok(name)
    }

    /// Resolve `name` to a stored template.
    ///
    /// Lets callers fail with `TemplateNotFound` before asking the user
    /// anything else.
    pub fn find_template(&self, name: &str) -> TemplarResult<TemplateName> {
        let name = TemplateName::parse(name)?;

        if !self.store.contains(&name) {
            warn!(template = %name, "Template not found");
            return Err(ApplicationError::TemplateNotFound {
                name: name.into_inner(),
            }
            .into());
        }

        Ok(name)
    }

    /// Validate a load of `name` into `target`.
    ///
    /// Returns the body together with any confirmations the caller has to
    /// resolve; nothing is written until [`Self::apply_load`].
    #[instrument(skip_all, fields(template = %name))]
    pub fn load_template(&self, name: &str, target: Option<&LoadTarget>) -> TemplarResult<LoadPlan> {
        let name = self.find_template(name)?;

        let target = target.ok_or(ApplicationError::TargetRequired)?;
        debug!(target = %target.path.display(), "Target resolved");

        let mut confirmations = Vec::new();

        if !target.is_empty {
            info!(target = %target.path.display(), "Target is not empty");
            confirmations.push(Confirmation::Overwrite {
                target: target.path.clone(),
            });
        }

        let recorded = self.store.extension_of(&name)?;
        let actual = Extension::of(&target.path);
        if recorded.as_ref() != Some(&actual) {
            info!(
                template_ext = recorded.as_ref().map(Extension::as_str).unwrap_or("<none>"),
                target_ext = %actual,
                "Template and target have different extensions"
            );
            confirmations.push(Confirmation::ExtensionMismatch {
                template: recorded,
                target: actual,
            });
        }

        let body = self.store.read(&name)?;

        Ok(LoadPlan {
            name,
            body,
            confirmations,
        })
    }

    /// Replace the whole content of `target` with the plan's body.
    ///
    /// The target is rewritten in place rather than swapped for a new file,
    /// so its permissions and symlinks are kept. Callers must have resolved
    /// every confirmation in the plan first.
    #[instrument(skip_all, fields(template = %plan.name, target = %target.display()))]
    pub fn apply_load(&self, plan: &LoadPlan, target: &Path) -> TemplarResult<()> {
        self.filesystem.overwrite_file(target, &plan.body)?;
        info!(bytes = plan.body.len(), "Template loaded");
        Ok(())
    }

    /// Delete a template.
    #[instrument(skip_all, fields(template = %name))]
    pub fn remove_template(&self, name: &str) -> TemplarResult<TemplateName> {
        let name = TemplateName::parse(name)?;
        self.store.remove(&name)?;
        info!("Template removed");
        Ok(name)
    }

    /// List all templates with their recorded extensions, in store order.
    pub fn list_templates(&self) -> TemplarResult<Vec<TemplateInfo>> {
        let names = self.store.list()?;

        names
            .into_iter()
            .map(|name| {
                let extension = self.store.extension_of(&name)?.map(|e| e.to_string());
                Ok(TemplateInfo {
                    name: name.into_inner(),
                    extension,
                })
            })
            .collect()
    }

    /// Resolve the body path of `name` for direct editing.
    ///
    /// Edits made through the returned path go straight to the stored body;
    /// the service is not involved again.
    #[instrument(skip_all, fields(template = %name))]
    pub fn edit_template(&self, name: &str) -> TemplarResult<PathBuf> {
        let name = TemplateName::parse(name)?;
        let path = self.store.path_of(&name);

        if !self.filesystem.is_file(&path) {
            warn!(path = %path.display(), "Template file not found");
            return Err(ApplicationError::TemplateNotFound {
                name: name.into_inner(),
            }
            .into());
        }

        debug!(path = %path.display(), "Template to be edited");
        Ok(path)
    }

    /// Repair registry entries left behind by an interrupted write.
    #[instrument(skip_all)]
    pub fn reconcile(&self) -> TemplarResult<ReconcileReport> {
        let report = self.store.reconcile()?;
        if report.is_clean() {
            info!("Registry is consistent");
        } else {
            warn!(
                dropped = report.dropped.len(),
                adopted = report.adopted.len(),
                "Registry repaired"
            );
        }
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn resolve_source(
        &self,
        candidate: Option<&Path>,
        fallback: Option<&Path>,
    ) -> TemplarResult<PathBuf> {
        match (candidate, fallback) {
            (Some(path), _) if self.filesystem.is_file(path) => Ok(path.to_path_buf()),
            (candidate, Some(active)) => {
                if let Some(missing) = candidate {
                    info!(
                        missing = %missing.display(),
                        active = %active.display(),
                        "No file found, using active file"
                    );
                }
                Ok(active.to_path_buf())
            }
            (Some(missing), None) => Err(ApplicationError::SourceNotFound {
                path: missing.to_path_buf(),
            }
            .into()),
            (None, None) => Err(ApplicationError::NoSource.into()),
        }
    }
}
