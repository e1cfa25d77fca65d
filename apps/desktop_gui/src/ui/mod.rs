//! UI layer for the desktop GUI: the directory list, the detail view and the annotation modal.

pub mod app;

pub use app::DetailApp;
