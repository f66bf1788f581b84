//! CLI domain: parse, route, output, and presentation only.
//! No domain logic; the route table dispatches to the question generator and config.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{format_levels_json, format_levels_text, format_questions, LevelSummary};
pub use route::RunContext;
