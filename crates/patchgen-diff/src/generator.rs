//! Patch generation entry points.

use patchgen_patch::PatchDocument;
use serde::Serialize;
use tracing::debug;

use crate::error::DiffResult;
use crate::project::project;
use crate::settings::ProjectionSettings;
use crate::tree_diff::diff_trees;

/// Generate a patch turning `original` into `modified` with default settings.
///
/// See [`generate_with`].
pub fn generate<T>(original: &T, modified: &T) -> DiffResult<PatchDocument>
where
    T: Serialize + ?Sized,
{
    generate_with(original, modified, &ProjectionSettings::default())
}

/// Generate a patch turning `original` into `modified`.
///
/// If both references point at the same value the result is empty and
/// nothing is projected. Otherwise both values are projected with `settings`
/// and their trees compared from the root; both must project to objects.
///
/// The identity check compares addresses, so two distinct zero-sized values
/// may be treated as the same instance.
pub fn generate_with<T>(
    original: &T,
    modified: &T,
    settings: &ProjectionSettings,
) -> DiffResult<PatchDocument>
where
    T: Serialize + ?Sized,
{
    if std::ptr::eq(original, modified) {
        debug!("same instance on both sides; skipping comparison");
        return Ok(PatchDocument::new());
    }

    let original = project(original, settings)?;
    let modified = project(modified, settings)?;
    let patch = diff_trees(&original, &modified)?;

    debug!(
        operations = patch.len(),
        additions = patch.additions(),
        removals = patch.removals(),
        replacements = patch.replacements(),
        "patch generated"
    );
    Ok(patch)
}

/// A reusable patch generator holding its projection settings.
#[derive(Clone, Debug, Default)]
pub struct PatchGenerator {
    settings: ProjectionSettings,
}

impl PatchGenerator {
    /// A generator using default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator using `settings` for every call to [`generate`](Self::generate).
    pub fn with_settings(settings: ProjectionSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ProjectionSettings {
        &self.settings
    }

    /// Generate a patch with this generator's settings.
    pub fn generate<T>(&self, original: &T, modified: &T) -> DiffResult<PatchDocument>
    where
        T: Serialize + ?Sized,
    {
        generate_with(original, modified, &self.settings)
    }

    /// Generate a patch with explicit settings, ignoring the generator's own.
    pub fn generate_with<T>(
        &self,
        original: &T,
        modified: &T,
        settings: &ProjectionSettings,
    ) -> DiffResult<PatchDocument>
    where
        T: Serialize + ?Sized,
    {
        generate_with(original, modified, settings)
    }
}
