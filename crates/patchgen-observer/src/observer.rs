use patchgen_diff::{generate_with, DiffResult, ProjectionSettings};
use patchgen_patch::PatchDocument;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Tracks changes to an owned value against a snapshot taken at construction.
///
/// The snapshot is a deep copy made by serializing the value and deserializing
/// the result, so it shares nothing with the live value and holds only what
/// the value's serde representation exposes. It is never refreshed:
/// every call to [`generate`](Self::generate) reports all changes since the
/// observer was created. Create a new observer to start a new interval.
///
/// `generate` borrows the observer immutably, so the watched value cannot be
/// mutated while a patch is being generated. To share an observer across
/// threads, wrap it in a lock.
#[derive(Debug)]
pub struct ChangeObserver<T> {
    watched: Option<T>,
    snapshot: Option<T>,
}

impl<T> ChangeObserver<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Start watching `watched`, snapshotting its current state.
    pub fn new(watched: T) -> DiffResult<Self> {
        Self::from_option(Some(watched))
    }

    /// Start watching a value that may be absent.
    ///
    /// With no value there is no snapshot, and every generated patch is empty.
    pub fn from_option(watched: Option<T>) -> DiffResult<Self> {
        let snapshot = watched.as_ref().map(deep_copy).transpose()?;
        if snapshot.is_some() {
            debug!(kind = std::any::type_name::<T>(), "snapshot captured");
        }
        Ok(Self { watched, snapshot })
    }

    /// Patch from the snapshot to the current value, with default settings.
    pub fn generate(&self) -> DiffResult<PatchDocument> {
        self.generate_with(&ProjectionSettings::default())
    }

    /// Patch from the snapshot to the current value, projecting both with
    /// `settings`.
    pub fn generate_with(&self, settings: &ProjectionSettings) -> DiffResult<PatchDocument> {
        match (&self.snapshot, &self.watched) {
            (Some(snapshot), Some(watched)) => generate_with(snapshot, watched, settings),
            _ => Ok(PatchDocument::new()),
        }
    }

    /// The live value.
    pub fn watched(&self) -> Option<&T> {
        self.watched.as_ref()
    }

    /// Mutable access to the live value.
    pub fn watched_mut(&mut self) -> Option<&mut T> {
        self.watched.as_mut()
    }

    /// The value as it was when observation started.
    pub fn snapshot(&self) -> Option<&T> {
        self.snapshot.as_ref()
    }

    /// Stop observing and return the live value.
    pub fn into_inner(self) -> Option<T> {
        self.watched
    }
}

fn deep_copy<T>(value: &T) -> DiffResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let text = serde_json::to_string(value)?;
    Ok(serde_json::from_str(&text)?)
}
