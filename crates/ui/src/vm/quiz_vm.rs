use quiz_core::{CertificateStatus, OptionMark, QuizMachine};

use super::html::{paragraphs_html, sanitize_html};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WelcomeVm {
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonVm {
    pub progress_label: String,
    pub question: String,
    pub lesson_image: Option<String>,
    pub lesson_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub class: &'static str,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintPanelVm {
    pub title: &'static str,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub progress_label: String,
    pub level_label: String,
    pub score_label: String,
    pub question: String,
    pub image: Option<String>,
    pub options: Vec<OptionVm>,
    pub hint_panel: Option<HintPanelVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub name: String,
    pub heading: String,
    pub score_label: String,
    pub percent_label: String,
    pub passed: bool,
    pub message: &'static str,
    pub sending: bool,
    pub status: Option<(bool, String)>,
}

#[must_use]
pub fn map_welcome(machine: &QuizMachine) -> WelcomeVm {
    WelcomeVm {
        loading: machine.is_loading(),
        error: machine.load_error().map(str::to_string),
    }
}

fn progress_label(machine: &QuizMachine) -> String {
    let session = machine.session();
    format!("{} / {}", session.index() + 1, session.question_count())
}

#[must_use]
pub fn map_lesson(machine: &QuizMachine) -> Option<LessonVm> {
    let question = machine.session().current_question()?;
    let lesson = question.lesson.as_deref().unwrap_or_default();
    Some(LessonVm {
        progress_label: progress_label(machine),
        question: question.question.clone(),
        lesson_image: question.lesson_image.clone(),
        lesson_html: lesson_html(lesson),
    })
}

fn lesson_html(text: &str) -> String {
    if text.contains('<') {
        sanitize_html(text)
    } else {
        paragraphs_html(text)
    }
}

fn option_class(mark: Option<OptionMark>) -> &'static str {
    match mark {
        Some(OptionMark::Correct) => "quiz-option quiz-option--correct",
        Some(OptionMark::Wrong) => "quiz-option quiz-option--wrong",
        None => "quiz-option",
    }
}

#[must_use]
pub fn map_question(machine: &QuizMachine) -> Option<QuestionVm> {
    let session = machine.session();
    let question = session.current_question()?;
    let locked = machine.options_locked();
    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(index, label)| OptionVm {
            index,
            label: label.clone(),
            class: option_class(machine.option_mark(index)),
            disabled: locked,
        })
        .collect();
    let hint_panel = machine.hint_panel().map(|panel| HintPanelVm {
        title: panel.tier.label(),
        text: panel.text.clone(),
    });

    Some(QuestionVm {
        progress_label: progress_label(machine),
        level_label: format!("Level: {}", session.level()),
        score_label: format!("Score: {}", session.score()),
        question: question.question.clone(),
        image: question.image.clone(),
        options,
        hint_panel,
    })
}

#[must_use]
pub fn map_result(machine: &QuizMachine) -> ResultVm {
    let result = machine.result();
    let (sending, status) = match machine.certificate() {
        CertificateStatus::Idle => (false, None),
        CertificateStatus::Sending => (true, None),
        CertificateStatus::Done { ok, message } => (false, Some((*ok, message.clone()))),
    };
    let name = machine.session().name();
    let heading = if result.passed {
        format!("Well done, {name}!")
    } else {
        format!("Nice try, {name}!")
    };
    ResultVm {
        name: name.to_string(),
        heading,
        score_label: format!("{} / {}", result.score, result.total),
        percent_label: format!("{}%", result.percent),
        passed: result.passed,
        message: result.message(),
        sending,
        status,
    }
}
