use std::collections::HashSet;
use std::time::Duration;

use serde::Serialize;

use crate::model::{HintTier, Level, Mode, Question, QuestionId};
use crate::scoring::{QuizResult, points_for};

/// Pause between answering and moving on, so the marks stay visible.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(700);

pub const DEFAULT_NAME: &str = "Dog Fan";
pub const NO_HINT_TEXT: &str = "No hint.";
pub const CERTIFICATE_SENT_MESSAGE: &str = "Certificate sent! Check your inbox.";
pub const CERTIFICATE_FALLBACK_ERROR: &str = "Could not send the certificate.";
pub const NO_QUESTIONS_MESSAGE: &str = "No questions are available for this level yet.";

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Mutable state of one quiz or learning run.
///
/// Replaced wholesale by every `Start`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    mode: Mode,
    name: String,
    level: Level,
    questions: Vec<Question>,
    index: usize,
    score: u32,
    used_aid1: HashSet<QuestionId>,
    used_aid2: HashSet<QuestionId>,
}

impl SessionState {
    /// Fresh state; a blank name becomes [`DEFAULT_NAME`].
    #[must_use]
    pub fn new(mode: Mode, name: &str, level: Level) -> Self {
        let name = name.trim();
        let name = if name.is_empty() { DEFAULT_NAME } else { name };
        Self {
            mode,
            name: name.to_string(),
            level,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    #[must_use]
    pub fn used_aids(&self, tier: HintTier) -> &HashSet<QuestionId> {
        match tier {
            HintTier::Aid1 => &self.used_aid1,
            HintTier::Aid2 => &self.used_aid2,
        }
    }

    #[must_use]
    pub fn result(&self) -> QuizResult {
        QuizResult::compute(self.score, self.questions.len())
    }

    fn mark_aid(&mut self, tier: HintTier, id: QuestionId) {
        match tier {
            HintTier::Aid1 => self.used_aid1.insert(id),
            HintTier::Aid2 => self.used_aid2.insert(id),
        };
    }

    fn clear_aids(&mut self) {
        self.used_aid1.clear();
        self.used_aid2.clear();
    }
}

//
// ─── EVENTS AND EFFECTS ────────────────────────────────────────────────────────
//

/// Visible screen; exactly one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Welcome,
    Learning,
    Quiz,
    Result,
}

/// How an answer option should be displayed once the question is answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Wrong,
}

/// The quiz-local hint panel (separate from the reusable dialog).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintPanel {
    pub tier: HintTier,
    pub text: String,
}

/// Body of `POST /api/certificate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CertificateRequest {
    pub name: String,
    pub level: Level,
    pub mode: Mode,
    pub score: u32,
    pub total: u32,
    pub email: String,
}

/// What came back from a certificate request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CertificateOutcome {
    Sent,
    Rejected { error: Option<String> },
    Saved { path: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CertificateStatus {
    #[default]
    Idle,
    Sending,
    Done { ok: bool, message: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    Start {
        mode: Mode,
        name: String,
        level: Level,
    },
    QuestionsLoaded {
        ticket: u64,
        questions: Vec<Question>,
    },
    QuestionsFailed {
        ticket: u64,
        message: String,
    },
    ContinueLesson,
    ShowHint(HintTier),
    DismissHint,
    SelectAnswer(usize),
    Advance {
        ticket: u64,
    },
    RequestCertificate {
        email: String,
    },
    CertificateResolved(CertificateOutcome),
    Restart,
}

/// Side effects requested by a transition; executed by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizEffect {
    FetchQuestions {
        ticket: u64,
        mode: Mode,
        level: Level,
    },
    ScheduleAdvance {
        ticket: u64,
        delay: Duration,
    },
    CancelAdvance,
    SubmitCertificate(CertificateRequest),
    Show(Screen),
}

//
// ─── MACHINE ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct AnswerMarks {
    chosen: usize,
    correct: usize,
}

/// Quiz controller state machine.
///
/// `apply` mutates state synchronously and returns the effects to run. Async
/// results come back as events carrying the ticket they were issued with;
/// results for a superseded ticket are dropped.
#[derive(Debug, Clone, Default)]
pub struct QuizMachine {
    screen: Screen,
    session: SessionState,
    loading: bool,
    load_error: Option<String>,
    answer: Option<AnswerMarks>,
    hint_panel: Option<HintPanel>,
    certificate: CertificateStatus,
    next_ticket: u64,
    pending_fetch: Option<u64>,
    pending_advance: Option<u64>,
}

impl QuizMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: QuizEvent) -> Vec<QuizEffect> {
        let mut effects = Vec::new();
        match event {
            QuizEvent::Start { mode, name, level } => {
                self.start(mode, &name, level, &mut effects);
            }
            QuizEvent::QuestionsLoaded { ticket, questions } => {
                self.questions_loaded(ticket, questions, &mut effects);
            }
            QuizEvent::QuestionsFailed { ticket, message } => {
                if self.pending_fetch == Some(ticket) {
                    self.pending_fetch = None;
                    self.loading = false;
                    self.load_error = Some(message);
                }
            }
            QuizEvent::ContinueLesson => {
                if self.screen == Screen::Learning {
                    self.show(Screen::Quiz, &mut effects);
                }
            }
            QuizEvent::ShowHint(tier) => self.show_hint(tier),
            QuizEvent::DismissHint => self.hint_panel = None,
            QuizEvent::SelectAnswer(index) => self.select_answer(index, &mut effects),
            QuizEvent::Advance { ticket } => self.advance(ticket, &mut effects),
            QuizEvent::RequestCertificate { email } => {
                if self.screen == Screen::Result && self.certificate != CertificateStatus::Sending {
                    self.certificate = CertificateStatus::Sending;
                    effects.push(QuizEffect::SubmitCertificate(
                        self.certificate_request(email.trim()),
                    ));
                }
            }
            QuizEvent::CertificateResolved(outcome) => {
                if self.certificate == CertificateStatus::Sending {
                    self.certificate = certificate_status(outcome);
                }
            }
            QuizEvent::Restart => {
                self.cancel_advance(&mut effects);
                self.pending_fetch = None;
                self.loading = false;
                self.load_error = None;
                self.answer = None;
                self.hint_panel = None;
                self.certificate = CertificateStatus::Idle;
                self.show(Screen::Welcome, &mut effects);
            }
        }
        debug_assert!(self.session.index <= self.session.questions.len());
        effects
    }

    fn start(&mut self, mode: Mode, name: &str, level: Level, effects: &mut Vec<QuizEffect>) {
        self.cancel_advance(effects);
        self.session = SessionState::new(mode, name, level.clone());
        self.answer = None;
        self.hint_panel = None;
        self.certificate = CertificateStatus::Idle;
        self.load_error = None;
        self.loading = true;
        self.show(Screen::Welcome, effects);

        let ticket = self.issue_ticket();
        self.pending_fetch = Some(ticket);
        effects.push(QuizEffect::FetchQuestions {
            ticket,
            mode,
            level,
        });
    }

    fn questions_loaded(
        &mut self,
        ticket: u64,
        questions: Vec<Question>,
        effects: &mut Vec<QuizEffect>,
    ) {
        if self.pending_fetch != Some(ticket) {
            return;
        }
        self.pending_fetch = None;
        self.loading = false;

        if questions.is_empty() {
            self.load_error = Some(NO_QUESTIONS_MESSAGE.to_string());
            return;
        }
        if let Some(err) = questions.iter().find_map(|q| q.validate().err()) {
            self.load_error = Some(err.to_string());
            return;
        }

        self.session.questions = questions;
        let next = match self.session.mode {
            Mode::Learn => Screen::Learning,
            Mode::Quiz => Screen::Quiz,
        };
        self.show(next, effects);
    }

    fn show_hint(&mut self, tier: HintTier) {
        if self.screen != Screen::Quiz {
            return;
        }
        let Some(question) = self.session.current_question() else {
            return;
        };
        let text = question.aid(tier).unwrap_or(NO_HINT_TEXT).to_string();
        let id = question.id.clone();
        self.session.mark_aid(tier, id);
        self.hint_panel = Some(HintPanel { tier, text });
    }

    fn select_answer(&mut self, chosen: usize, effects: &mut Vec<QuizEffect>) {
        if self.screen != Screen::Quiz || self.answer.is_some() {
            return;
        }
        let Some(question) = self.session.current_question() else {
            return;
        };
        if chosen >= question.options.len() {
            return;
        }

        let correct = question.answer_index;
        let points = points_for(
            question.is_correct(chosen),
            self.session.used_aid1.contains(&question.id),
            self.session.used_aid2.contains(&question.id),
        );
        self.session.score = self.session.score.saturating_add(points);
        self.answer = Some(AnswerMarks { chosen, correct });

        let ticket = self.issue_ticket();
        self.pending_advance = Some(ticket);
        effects.push(QuizEffect::ScheduleAdvance {
            ticket,
            delay: ADVANCE_DELAY,
        });
    }

    fn advance(&mut self, ticket: u64, effects: &mut Vec<QuizEffect>) {
        if self.pending_advance != Some(ticket) {
            return;
        }
        self.pending_advance = None;
        self.session.clear_aids();
        self.answer = None;
        self.hint_panel = None;
        if !self.session.is_finished() {
            self.session.index += 1;
        }

        let next = if self.session.is_finished() {
            Screen::Result
        } else if self.session.mode == Mode::Learn {
            Screen::Learning
        } else {
            Screen::Quiz
        };
        self.show(next, effects);
    }

    fn cancel_advance(&mut self, effects: &mut Vec<QuizEffect>) {
        if self.pending_advance.take().is_some() {
            effects.push(QuizEffect::CancelAdvance);
        }
    }

    fn show(&mut self, screen: Screen, effects: &mut Vec<QuizEffect>) {
        if self.screen != screen {
            self.screen = screen;
            effects.push(QuizEffect::Show(screen));
        }
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }

    fn certificate_request(&self, email: &str) -> CertificateRequest {
        let result = self.session.result();
        CertificateRequest {
            name: self.session.name.clone(),
            level: self.session.level.clone(),
            mode: self.session.mode,
            score: result.score,
            total: result.total,
            email: email.to_string(),
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    #[must_use]
    pub fn hint_panel(&self) -> Option<&HintPanel> {
        self.hint_panel.as_ref()
    }

    #[must_use]
    pub fn certificate(&self) -> &CertificateStatus {
        &self.certificate
    }

    /// Options stop accepting input once the current question is answered.
    #[must_use]
    pub fn options_locked(&self) -> bool {
        self.answer.is_some()
    }

    #[must_use]
    pub fn option_mark(&self, index: usize) -> Option<OptionMark> {
        let answer = self.answer?;
        if index == answer.correct {
            Some(OptionMark::Correct)
        } else if index == answer.chosen {
            Some(OptionMark::Wrong)
        } else {
            None
        }
    }

    #[must_use]
    pub fn pending_advance(&self) -> Option<u64> {
        self.pending_advance
    }

    #[must_use]
    pub fn result(&self) -> QuizResult {
        self.session.result()
    }
}

fn certificate_status(outcome: CertificateOutcome) -> CertificateStatus {
    match outcome {
        CertificateOutcome::Sent => CertificateStatus::Done {
            ok: true,
            message: CERTIFICATE_SENT_MESSAGE.to_string(),
        },
        CertificateOutcome::Saved { path } => CertificateStatus::Done {
            ok: true,
            message: format!("Certificate saved to {path}."),
        },
        CertificateOutcome::Rejected { error } => CertificateStatus::Done {
            ok: false,
            message: error
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| CERTIFICATE_FALLBACK_ERROR.to_string()),
        },
    }
}
