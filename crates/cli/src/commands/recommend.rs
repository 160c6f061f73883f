use anyhow::{bail, Context};
use serde::Serialize;
use stackquiz_core::config::{AppConfig, LoadOptions};
use stackquiz_core::{
    Answer, ApplicationError, DeterministicRecommendationEngine, ProfileField, RecommendationBundle,
    RecommendationEngine, UserProfile,
};

use crate::commands::CommandResult;
use crate::presenter;

#[derive(Debug, Serialize)]
struct RecommendReport {
    command: &'static str,
    profile: UserProfile,
    recommendation: RecommendationBundle,
}

pub fn run(options: &LoadOptions, raw_answers: &[String], json: bool) -> CommandResult {
    let config = match AppConfig::load(options.clone()) {
        Ok(config) => config,
        Err(error) => {
            let error = ApplicationError::from(error);
            return CommandResult::failure("recommend", error.error_class(), error.to_string(), 2);
        }
    };

    let parsed: anyhow::Result<Vec<Answer>> =
        raw_answers.iter().map(|raw| parse_answer(raw)).collect();
    let answers = match parsed {
        Ok(answers) => answers,
        Err(error) => {
            return CommandResult::failure("recommend", "invalid_input", format!("{error:#}"), 3)
        }
    };

    let profile = UserProfile::from_answers(&answers);
    let engine = DeterministicRecommendationEngine::from_config(&config.quiz);
    let recommendation = engine.recommend(&profile);

    if json {
        let report = RecommendReport { command: "recommend", profile, recommendation };
        return match serde_json::to_string_pretty(&report) {
            Ok(output) => CommandResult::ok(output),
            Err(error) => CommandResult::failure("recommend", "serialization", error.to_string(), 1),
        };
    }

    CommandResult::ok(format!(
        "{}\n\n{}",
        presenter::render_bundle(&recommendation),
        presenter::render_insights(&profile)
    ))
}

/// Accepts `field=value` or `<question>=value`. Later answers to the same
/// question replace earlier ones.
pub fn parse_answer(raw: &str) -> anyhow::Result<Answer> {
    let (key, value) =
        raw.split_once('=').with_context(|| format!("answer `{raw}` must look like FIELD=VALUE"))?;
    let (key, value) = (key.trim(), value.trim());
    if value.is_empty() {
        bail!("answer `{raw}` has an empty value");
    }

    let field = match key.parse::<u8>() {
        Ok(question) => ProfileField::for_question(question)
            .with_context(|| format!("question {question} is outside 1..=12"))?,
        Err(_) => {
            ProfileField::from_key(key).with_context(|| format!("unknown profile field `{key}`"))?
        }
    };
    Ok(Answer::new(field.question(), value))
}

#[cfg(test)]
mod tests {
    use super::parse_answer;

    #[test]
    fn accepts_field_names_and_question_numbers() {
        let by_name = parse_answer("budget=premium").expect("field name");
        assert_eq!((by_name.question, by_name.value.as_str()), (10, "premium"));

        let by_index = parse_answer("4=daily").expect("question number");
        assert_eq!((by_index.question, by_index.value.as_str()), (4, "daily"));

        let camel = parse_answer("workoutfreq = 5-6days").expect("case-insensitive key");
        assert_eq!(camel.question, 4);
    }

    #[test]
    fn rejects_malformed_answers() {
        assert!(parse_answer("budget").is_err());
        assert!(parse_answer("budget=").is_err());
        assert!(parse_answer("13=daily").is_err());
        assert!(parse_answer("mood=happy").is_err());
    }
}
