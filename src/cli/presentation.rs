//! CLI presentation: text and json formatters for questions and levels.

use crate::cli::parse::OutputFormat;
use crate::error::ApiError;
use crate::question::Question;
use comfy_table::Table;
use serde::Serialize;

/// Row of the `levels` listing
#[derive(Debug, Clone, Serialize)]
pub struct LevelSummary {
    pub key: String,
    pub description: Option<String>,
    pub questions: Option<usize>,
}

pub fn format_questions(
    questions: &[Question],
    format: OutputFormat,
    hide_answer: bool,
) -> Result<String, ApiError> {
    if format == OutputFormat::Json {
        let arr: Vec<serde_json::Value> = questions
            .iter()
            .map(|q| {
                if hide_answer {
                    serde_json::json!({ "problem": q.problem })
                } else {
                    serde_json::json!({ "problem": q.problem, "answer": q.answer })
                }
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&arr)?);
    }

    let mut lines = Vec::with_capacity(questions.len() * 2);
    for (index, q) in questions.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, q.problem));
        if !hide_answer {
            lines.push(format!("   answer: {}", q.answer));
        }
    }
    Ok(lines.join("\n"))
}

pub fn format_levels_text(levels: &[LevelSummary]) -> String {
    if levels.is_empty() {
        return "No levels registered. Run `drill init` to create a starter config.".to_string();
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Level", "Description", "Questions"]);
    for level in levels {
        table.add_row(vec![
            level.key.clone(),
            level.description.clone().unwrap_or_else(|| "-".to_string()),
            level
                .questions
                .map(|n| n.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table.to_string()
}

pub fn format_levels_json(levels: &[LevelSummary]) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(levels)?)
}
