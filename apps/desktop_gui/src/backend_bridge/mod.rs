//! Backend bridge: commands from the UI and the worker thread that owns the store.

pub mod commands;
pub mod runtime;
