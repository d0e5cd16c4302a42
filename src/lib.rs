//! lectio - text highlighting engine
//!
//! This crate provides the tokenizer, drag-selection state machine and
//! highlight reconciliation for a scripture reader, implementing the Elm
//! Architecture pattern over a pluggable highlight store.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod messages;
pub mod model;
pub mod reconcile;
pub mod runtime;
pub mod store;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AppConfig;
pub use messages::Msg;
pub use model::ReaderModel;
pub use runtime::Runtime;
