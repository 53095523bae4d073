//! Change observer for patchgen.
//!
//! A [`ChangeObserver`] owns a value, snapshots it on construction, and on
//! request reports everything that changed since then as a patch document.

pub mod observer;

pub use observer::ChangeObserver;
