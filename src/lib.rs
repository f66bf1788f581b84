//! Drill: level-keyed question routing for algebra practice
//!
//! A [`generator::QuestionGenerator`] looks a level key up in an injected
//! [`level::LevelRegistry`] and delegates to the registered level, or serves a
//! fixed placeholder question when the level is not registered.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod level;
pub mod logging;
pub mod question;
