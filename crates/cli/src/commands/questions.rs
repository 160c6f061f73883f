use stackquiz_core::{QUESTIONS, TOTAL_QUESTIONS};

pub fn run() -> String {
    let mut lines = vec![format!("{TOTAL_QUESTIONS} questions (question -> profile field):")];
    for field in QUESTIONS {
        let note = if field.is_scored() { "" } else { " (captured, not scored)" };
        lines.push(format!("- {:>2}. {}{note}", field.question(), field.key()));
    }
    lines.join("\n")
}
