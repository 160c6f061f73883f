use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Serialize;
use stackquiz_core::audit::{AuditContext, AuditSink, TracingAuditSink};
use stackquiz_core::config::{AppConfig, LoadOptions};
use stackquiz_core::{
    ApplicationError, DeterministicRecommendationEngine, QuizEvent, QuizSession,
    RecommendationBundle, UserProfile, TOTAL_QUESTIONS,
};
use tracing::info;

use crate::commands::CommandResult;
use crate::presenter;

#[derive(Clone, Debug, Default)]
pub struct TakeOptions {
    pub script: Option<PathBuf>,
    /// `None` keeps the configured policy.
    pub auto_advance: Option<bool>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TakeReport {
    command: &'static str,
    session_id: String,
    started_at: String,
    complete: bool,
    current_index: u8,
    answered: usize,
    events_applied: usize,
    events_ignored: usize,
    ignored: Vec<IgnoredEvent>,
    profile: UserProfile,
    recommendation: Option<RecommendationBundle>,
}

#[derive(Debug, Serialize)]
struct IgnoredEvent {
    event: String,
    error_class: &'static str,
    message: String,
}

pub fn run(options: &LoadOptions, take: &TakeOptions) -> CommandResult {
    let mut options = options.clone();
    if take.auto_advance.is_some() {
        options.overrides.auto_advance = take.auto_advance;
    }

    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            let error = ApplicationError::from(error);
            return CommandResult::failure("take", error.error_class(), error.to_string(), 2);
        }
    };

    let result =
        read_input(take.script.as_deref()).and_then(|input| run_script(&input, &config, take.json));
    match result {
        Ok(output) => CommandResult::ok(output),
        Err(error) => CommandResult::failure("take", "invalid_input", format!("{error:#}"), 3),
    }
}

/// Plays a whole script against a fresh session. The script is parsed up front
/// so a malformed line fails before any event is applied.
pub fn run_script(input: &str, config: &AppConfig, json: bool) -> anyhow::Result<String> {
    run_script_with_sink(input, config, json, &TracingAuditSink)
}

pub fn run_script_with_sink<S>(
    input: &str,
    config: &AppConfig,
    json: bool,
    sink: &S,
) -> anyhow::Result<String>
where
    S: AuditSink,
{
    let events = parse_script(input)?;
    let engine = DeterministicRecommendationEngine::from_config(&config.quiz);
    let mut session = QuizSession::new();
    let audit = AuditContext::new(session.id().0.clone(), "cli");

    let mut transcript = vec![presenter::progress_line(&session)];
    let mut applied = 0;
    let mut ignored = Vec::new();

    for event in events {
        let label = describe(&event);
        let selects = matches!(event, QuizEvent::OptionSelected { .. });

        if let Err(error) = session.apply_with_audit(event, sink, &audit) {
            transcript.push(format!("> {label} (ignored: {error})"));
            let error = ApplicationError::from(error);
            ignored.push(IgnoredEvent {
                event: label,
                error_class: error.error_class(),
                message: error.to_string(),
            });
            continue;
        }
        applied += 1;
        transcript.push(format!("> {label}"));

        if selects && config.quiz.auto_advance {
            if let Err(error) = session.apply_with_audit(QuizEvent::NavigateNext, sink, &audit) {
                transcript.push(format!("  auto-advance skipped: {error}"));
            }
        }
        transcript.push(presenter::progress_line(&session));
    }

    let recommendation = session.recommend_with_audit(&engine, sink, &audit);
    let profile = session.profile();

    info!(
        event_name = "cli.take.completed",
        session_id = %session.id().0,
        complete = session.is_complete(),
        events_applied = applied,
        events_ignored = ignored.len(),
        "quiz script finished"
    );

    if json {
        let report = TakeReport {
            command: "take",
            session_id: session.id().0.clone(),
            started_at: session.started_at().to_rfc3339(),
            complete: session.is_complete(),
            current_index: session.current_index(),
            answered: session.answers().count(),
            events_applied: applied,
            events_ignored: ignored.len(),
            ignored,
            profile,
            recommendation,
        };
        return serde_json::to_string_pretty(&report).context("could not serialize take report");
    }

    match recommendation {
        Some(bundle) => {
            transcript.push(String::new());
            transcript.push(presenter::render_bundle(&bundle));
            transcript.push(String::new());
            transcript.push(presenter::render_insights(&profile));
        }
        None => transcript.push(format!(
            "quiz incomplete: {} of {TOTAL_QUESTIONS} questions answered",
            session.answers().count()
        )),
    }
    Ok(transcript.join("\n"))
}

pub fn parse_script(input: &str) -> anyhow::Result<Vec<QuizEvent>> {
    let mut events = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let event = parse_event(line)
            .with_context(|| format!("line {}: `{}`", index + 1, line.trim()))?;
        events.extend(event);
    }
    Ok(events)
}

/// Blank lines and `#` comments yield `None`.
pub fn parse_event(line: &str) -> anyhow::Result<Option<QuizEvent>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default().to_ascii_lowercase();
    let event = match command.as_str() {
        "select" => {
            let question = words
                .next()
                .context("select needs a question number")?
                .parse::<u32>()
                .context("question number must be a non-negative integer")?;
            // Indices past u8 are as out of range as 13 and are left for the session to reject.
            let question = u8::try_from(question).unwrap_or(u8::MAX);
            let value = words.collect::<Vec<_>>().join(" ");
            if value.is_empty() {
                bail!("select needs an option value");
            }
            QuizEvent::OptionSelected { question, value }
        }
        "next" => QuizEvent::NavigateNext,
        "back" => QuizEvent::NavigateBack,
        "restart" => QuizEvent::RestartRequested,
        other => bail!("unknown command `{other}` (expected select|next|back|restart)"),
    };
    Ok(Some(event))
}

fn describe(event: &QuizEvent) -> String {
    match event {
        QuizEvent::OptionSelected { question, value } => format!("select {question} {value}"),
        QuizEvent::NavigateNext => "next".to_string(),
        QuizEvent::NavigateBack => "back".to_string(),
        QuizEvent::RestartRequested => "restart".to_string(),
    }
}

fn read_input(script: Option<&Path>) -> anyhow::Result<String> {
    match script {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("could not read script `{}`", path.display())),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input).context("could not read events from stdin")?;
            Ok(input)
        }
    }
}
