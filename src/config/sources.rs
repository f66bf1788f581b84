//! Configuration sources, in increasing precedence.

pub mod global_file;
pub mod level_tables;
pub mod workspace_file;
