use dioxus::prelude::*;
use quiz_core::model::{HintTier, Level, Mode};
use quiz_core::{QuizEvent, Screen};
use services::LOAD_ERROR_MESSAGE;

use super::test_harness::{FakeApi, drive_dom, question, setup_quiz_harness};
use crate::views::{ResultScreen, WelcomeScreen};
use crate::vm::{ResultVm, WelcomeVm};

fn start(mode: Mode) -> QuizEvent {
    QuizEvent::Start {
        mode,
        name: "Biscuit".into(),
        level: Level::new("11-15"),
    }
}

fn two_questions() -> FakeApi {
    FakeApi {
        questions: vec![question(1, 1), question(2, 0)],
        ..FakeApi::default()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn welcome_smoke_renders_controls() {
    let harness = setup_quiz_harness(two_questions());
    let html = harness.render();
    for expected in ["Start Quiz", "Learn First", "How scoring works", "U10", "16+"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("hint-modal hidden"), "modal should start hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn start_quiz_renders_first_question() {
    let mut harness = setup_quiz_harness(two_questions());
    harness.send(start(Mode::Quiz));
    harness.drive_async().await;

    assert_eq!(harness.machine().read().screen(), Screen::Quiz);
    let html = harness.render();
    for expected in [
        "Which breed is number 1?",
        "Question 1 / 2",
        "Level: 11-15",
        "Score: 0",
        "Beagle",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn answering_marks_options_and_schedules_advance() {
    let mut harness = setup_quiz_harness(two_questions());
    harness.send(start(Mode::Quiz));
    harness.drive_async().await;

    harness.send(QuizEvent::SelectAnswer(0));
    let html = harness.render();
    assert!(html.contains("quiz-option--wrong"), "missing wrong mark in {html}");
    assert!(html.contains("quiz-option--correct"), "missing correct mark in {html}");
    assert!(harness.machine().read().pending_advance().is_some());
    assert_eq!(harness.machine().read().session().score(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn hint_panel_shows_aid_text() {
    let mut harness = setup_quiz_harness(two_questions());
    harness.send(start(Mode::Quiz));
    harness.drive_async().await;

    harness.send(QuizEvent::ShowHint(HintTier::Aid2));
    let html = harness.render();
    assert!(html.contains("It starts with P."), "missing hint text in {html}");

    harness.send(QuizEvent::DismissHint);
    let html = harness.render();
    assert!(!html.contains("It starts with P."), "hint still visible in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn learn_mode_shows_lesson_first() {
    let mut harness = setup_quiz_harness(two_questions());
    harness.send(start(Mode::Learn));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Breed 1 loves long walks."), "missing lesson in {html}");
    assert!(html.contains("Continue"), "missing continue in {html}");

    harness.send(QuizEvent::ContinueLesson);
    let html = harness.render();
    assert!(html.contains("Question 1 / 2"), "missing question in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn fetch_failure_shows_error_on_welcome() {
    let mut harness = setup_quiz_harness(FakeApi {
        fail_fetch: true,
        ..FakeApi::default()
    });
    harness.send(start(Mode::Quiz));
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains(LOAD_ERROR_MESSAGE), "missing error in {html}");
    assert!(html.contains("Start Quiz"), "welcome not shown in {html}");
}

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

#[test]
fn welcome_disables_buttons_while_loading() {
    let html = render(|| {
        rsx! {
            WelcomeScreen {
                vm: WelcomeVm { loading: true, error: None },
                default_level: Level::default(),
                on_event: |_| {},
            }
        }
    });
    assert!(html.contains("Loading questions"), "missing loading line in {html}");
    assert!(html.contains("disabled"), "buttons not disabled in {html}");
}

#[test]
fn result_screen_renders_score_and_certificate_status() {
    let html = render(|| {
        rsx! {
            ResultScreen {
                vm: ResultVm {
                    name: "Biscuit".into(),
                    heading: "Nice try, Biscuit!".into(),
                    score_label: "59 / 80".into(),
                    percent_label: "74%".into(),
                    passed: false,
                    message: quiz_core::scoring::FAIL_MESSAGE,
                    sending: false,
                    status: Some((false, "bad email".into())),
                },
                on_event: |_| {},
            }
        }
    });
    assert!(!html.contains("Well done"), "failing result congratulates in {html}");
    for expected in ["Nice try, Biscuit!", "59 / 80", "74%", "bad email", "Play again", "About certificates"] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("certificate-status--error"), "missing error class in {html}");
}
