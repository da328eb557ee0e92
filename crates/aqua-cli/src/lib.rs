//! CLI library components for the upload cleaner.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
