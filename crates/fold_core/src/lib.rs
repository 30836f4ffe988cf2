//! Byte-stream line folding: the `fold` command as a library.

pub mod common;

pub use common::{logging, FoldError, FoldResult, UsageError};

pub mod config;

pub use config::{BreakColumn, FoldConfig};

pub mod args;

pub use args::{resolve, Resolution};

pub mod fold;

pub use fold::{fold, fold_bytes, Folder};

pub mod cli;

pub use cli::{fold_cli, Exit};
