use dioxus::prelude::*;
use quiz_core::HintTrigger;
use quiz_core::QuizEvent;
use quiz_core::model::{Level, Mode};

use crate::components::HintTriggerButton;
use crate::vm::WelcomeVm;

const SCORING_HELP_HTML: &str = "<p>Each question is worth up to 4 points.</p>\
<ul><li>No hints: 4 points</li><li>Hint 1: 2 points</li><li>Hint 2: 1 point</li></ul>\
<p>Score 75% or more to pass and earn a certificate.</p>";

#[component]
pub fn WelcomeScreen(vm: WelcomeVm, default_level: Level, on_event: EventHandler<QuizEvent>) -> Element {
    let mut name = use_signal(String::new);
    let mut level = use_signal(move || default_level.as_str().to_string());

    let start = move |mode: Mode| {
        on_event.call(QuizEvent::Start {
            mode,
            name: name(),
            level: Level::new(level()),
        });
    };

    rsx! {
        section { class: "screen screen--welcome",
            h1 { "Dog Quiz" }
            p { class: "screen-lead", "How well do you know your dogs?" }

            label { class: "field",
                span { "Your name" }
                input {
                    id: "playerName",
                    r#type: "text",
                    placeholder: "Dog Fan",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            label { class: "field",
                span { "Level" }
                select {
                    id: "levelSelect",
                    value: "{level}",
                    onchange: move |evt| level.set(evt.value()),
                    for preset in Level::PRESETS {
                        option { value: "{preset}", selected: level() == preset, "{preset}" }
                    }
                }
            }

            div { class: "screen-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: vm.loading,
                    onclick: move |_| start(Mode::Quiz),
                    "Start Quiz"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: vm.loading,
                    onclick: move |_| start(Mode::Learn),
                    "Learn First"
                }
                HintTriggerButton {
                    trigger: HintTrigger::hint1(SCORING_HELP_HTML).with_title("How scoring works"),
                    label: "How scoring works",
                }
            }

            if vm.loading {
                p { class: "screen-status", "Loading questions…" }
            }
            if let Some(error) = vm.error {
                p { class: "screen-error", role: "alert", "{error}" }
            }
        }
    }
}
