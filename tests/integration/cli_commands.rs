//! Integration tests for CLI commands, through RunContext and the built binary

use drill::cli::{Commands, OutputFormat, RunContext};
use drill::config::{workspace_config_path, DrillConfig, LevelConfig};
use drill::error::ApiError;
use drill::question::Question;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

use crate::integration::with_config_env;

fn context_with_level() -> RunContext {
    let mut config = DrillConfig::default();
    config.levels.insert(
        "one-step".to_string(),
        LevelConfig {
            description: Some("Solve x + a = b".to_string()),
            questions: vec![
                Question::new("x + 2 = 5", "x = 3"),
                Question::new("x + 9 = 10", "x = 1"),
            ],
        },
    );
    RunContext::from_config(config, std::env::temp_dir())
}

#[test]
fn test_question_command_cycles_bank() {
    let context = context_with_level();
    let output = context
        .execute(&Commands::Question {
            level: "one-step".to_string(),
            count: 3,
            format: OutputFormat::Text,
            hide_answer: false,
        })
        .unwrap();

    assert_eq!(
        output,
        "1. x + 2 = 5\n   answer: x = 3\n2. x + 9 = 10\n   answer: x = 1\n3. x + 2 = 5\n   answer: x = 3"
    );
}

#[test]
fn test_question_command_unknown_level_prints_fallback() {
    let context = context_with_level();
    let output = context
        .execute(&Commands::Question {
            level: "unknown-level".to_string(),
            count: 1,
            format: OutputFormat::Json,
            hide_answer: false,
        })
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{ "problem": "2(x + 3)", "answer": "2x + 6" }])
    );
}

#[test]
fn test_levels_command_json() {
    let context = context_with_level();
    let output = context
        .execute(&Commands::Levels {
            format: OutputFormat::Json,
        })
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
    assert_eq!(value[0]["key"], "one-step");
    assert_eq!(value[0]["description"], "Solve x + a = b");
    assert_eq!(value[0]["questions"], 2);
}

#[test]
fn test_validate_command() {
    let context = context_with_level();
    let output = context.execute(&Commands::Validate).unwrap();
    assert_eq!(output, "Configuration is valid (1 level)");

    let mut config = DrillConfig::default();
    config
        .levels
        .insert("empty".to_string(), LevelConfig::default());
    let context = RunContext::from_config(config, std::env::temp_dir());
    match context.execute(&Commands::Validate) {
        Err(ApiError::ConfigError(msg)) => {
            assert!(msg.contains("Level 'empty'"), "unexpected message: {}", msg)
        }
        other => panic!("expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_level_keys_keep_their_case() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("drill.toml");
    fs::write(
        &config_file,
        r#"
[levels.oneStep]
questions = [{ problem = "x + 2 = 5", answer = "x = 3" }]

[levels.Distributive]
questions = [{ problem = "2(x + 5)", answer = "2x + 10" }]

[levels."linear.easy"]
questions = [{ problem = "3x = 12", answer = "x = 4" }]
"#,
    )
    .unwrap();

    let context = RunContext::new(temp_dir.path().to_path_buf(), Some(config_file)).unwrap();
    let ask = |level: &str| {
        context
            .execute(&Commands::Question {
                level: level.to_string(),
                count: 1,
                format: OutputFormat::Text,
                hide_answer: false,
            })
            .unwrap()
    };

    assert_eq!(ask("oneStep"), "1. x + 2 = 5\n   answer: x = 3");
    assert_eq!(ask("Distributive"), "1. 2(x + 5)\n   answer: 2x + 10");
    assert_eq!(ask("linear.easy"), "1. 3x = 12\n   answer: x = 4");
    assert_eq!(ask("onestep"), "1. 2(x + 3)\n   answer: 2x + 6");

    let levels = context
        .execute(&Commands::Levels {
            format: OutputFormat::Json,
        })
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&levels).unwrap();
    let keys: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["Distributive", "linear.easy", "oneStep"]);
}

#[test]
fn test_invalid_config_rejected_at_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("drill.toml");
    fs::write(
        &config_file,
        r#"
[levels.empty]
description = "No questions yet"
"#,
    )
    .unwrap();

    match RunContext::new(temp_dir.path().to_path_buf(), Some(config_file)) {
        Err(ApiError::ConfigError(msg)) => {
            assert!(msg.contains("Level 'empty'"), "unexpected message: {}", msg)
        }
        Err(other) => panic!("expected ConfigError, got {:?}", other),
        Ok(_) => panic!("invalid configuration should not load"),
    }
}

#[test]
fn test_init_writes_starter_and_refuses_overwrite() {
    let test_dir = TempDir::new().unwrap();
    with_config_env(&test_dir, || {
        let workspace = test_dir.path().join("ws");
        fs::create_dir_all(&workspace).unwrap();

        let context = RunContext::new(workspace.clone(), None).unwrap();
        let output = context.execute(&Commands::Init { force: false }).unwrap();
        let path = workspace_config_path(&workspace);
        assert!(path.exists());
        assert!(output.contains("Wrote starter configuration"));

        let again = context.execute(&Commands::Init { force: false });
        assert!(matches!(again, Err(ApiError::ConfigError(_))));
        assert!(context.execute(&Commands::Init { force: true }).is_ok());

        let reloaded = RunContext::new(workspace.clone(), None).unwrap();
        assert!(reloaded.config().levels.contains_key("distributive"));
        assert_eq!(
            reloaded
                .generator()
                .generate_question("distributive")
                .unwrap(),
            Question::new("3(x + 4)", "3x + 12")
        );
    });
}

#[test]
fn test_binary_prints_fallback_and_logs_key() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = temp_dir.path().join("ws");
    let home = temp_dir.path().join("home");
    fs::create_dir_all(&workspace).unwrap();
    fs::create_dir_all(&home).unwrap();

    let bin = env!("CARGO_BIN_EXE_drill");
    let output = Command::new(bin)
        .env("HOME", home.as_os_str())
        .env("XDG_CONFIG_HOME", temp_dir.path().join("xdg").as_os_str())
        .env_remove("DRILL_LOG")
        .env_remove("DRILL_LOG_OUTPUT")
        .env_remove("DRILL_LOG_FORMAT")
        .env_remove("DRILL_ENV")
        .arg("--workspace")
        .arg(&workspace)
        .arg("--log-output")
        .arg("stderr")
        .arg("question")
        .arg("unknown-level")
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "drill question should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "1. 2(x + 3)\n   answer: 2x + 6");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown-level"), "stderr={}", stderr);
}

#[test]
fn test_binary_reports_bad_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("broken.toml");
    fs::write(&config_file, "[levels.one-step\nquestions = 3").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_drill"))
        .arg("--quiet")
        .arg("--config")
        .arg(&config_file)
        .arg("levels")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: Configuration error"), "stderr={}", stderr);
}
