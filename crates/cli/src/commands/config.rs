use std::env;
use std::fs;
use std::path::Path;

use stackquiz_core::config::{resolve_config_path, AppConfig, LoadOptions};
use stackquiz_core::ApplicationError;
use toml::Value;

use crate::commands::CommandResult;

pub fn run(options: &LoadOptions) -> CommandResult {
    let config = match AppConfig::load(options.clone()) {
        Ok(config) => config,
        Err(error) => {
            let error = ApplicationError::from(error);
            return CommandResult::failure("config", error.error_class(), error.to_string(), 2);
        }
    };

    let config_file_path = resolve_config_path(options.config_path.as_deref());
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];

    let cart_url = match &config.quiz.cart_url {
        Some(url) => url.clone(),
        None => format!("<unset> (uses {})", config.quiz.cart_endpoint()),
    };
    lines.push(render_line(
        "quiz.cart_url",
        &cart_url,
        source("quiz.cart_url", &["STACKQUIZ_CART_URL"]),
    ));
    lines.push(render_line(
        "quiz.auto_advance",
        &config.quiz.auto_advance.to_string(),
        source("quiz.auto_advance", &["STACKQUIZ_AUTO_ADVANCE"]),
    ));
    lines.push(render_line(
        "logging.level",
        &config.logging.level,
        source("logging.level", &["STACKQUIZ_LOGGING_LEVEL", "STACKQUIZ_LOG_LEVEL"]),
    ));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format),
        source("logging.format", &["STACKQUIZ_LOGGING_FORMAT", "STACKQUIZ_LOG_FORMAT"]),
    ));

    CommandResult::ok(lines.join("\n"))
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    let env_key = env_keys
        .iter()
        .find(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()));
    if let Some(env_key) = env_key {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
