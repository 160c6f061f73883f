use stackquiz_core::{QuizSession, QuizState, TOTAL_QUESTIONS};

/// What the back and next controls should show for the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationState {
    pub back_visible: bool,
    pub next_enabled: bool,
}

impl NavigationState {
    pub fn for_session(session: &QuizSession) -> Self {
        match session.state() {
            QuizState::Question(question) => Self {
                back_visible: question > 1,
                next_enabled: session.is_answered(question),
            },
            QuizState::Results => Self { back_visible: false, next_enabled: false },
        }
    }
}

pub fn milestone(question: u8) -> &'static str {
    match question {
        0..=4 => "Getting to know your goals...",
        5..=8 => "Optimizing your recommendations...",
        _ => "Finalizing your perfect stack...",
    }
}

/// Rounded to the nearest whole percent.
pub fn percent_complete(question: u8) -> u32 {
    let total = u32::from(TOTAL_QUESTIONS);
    (u32::from(question) * 100 + total / 2) / total
}

pub fn progress_line(session: &QuizSession) -> String {
    let QuizState::Question(question) = session.state() else {
        let answered = session.answers().count();
        return format!("Results ready ({answered} of {TOTAL_QUESTIONS} answered)");
    };

    let navigation = NavigationState::for_session(session);
    format!(
        "Question {question} of {TOTAL_QUESTIONS} ({}%) - {} [back: {}, next: {}]",
        percent_complete(question),
        milestone(question),
        if navigation.back_visible { "shown" } else { "hidden" },
        if navigation.next_enabled { "enabled" } else { "disabled" },
    )
}
