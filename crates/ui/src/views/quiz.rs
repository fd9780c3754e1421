use dioxus::prelude::*;
use quiz_core::QuizEvent;
use quiz_core::model::HintTier;

use crate::vm::QuestionVm;

#[component]
pub fn QuizScreen(vm: QuestionVm, on_event: EventHandler<QuizEvent>) -> Element {
    rsx! {
        section { class: "screen screen--quiz",
            header { class: "quiz-header",
                span { class: "quiz-progress", "Question {vm.progress_label}" }
                span { class: "quiz-level", "{vm.level_label}" }
                span { class: "quiz-score", "{vm.score_label}" }
            }
            h2 { class: "quiz-question", "{vm.question}" }
            if let Some(src) = vm.image {
                img { class: "quiz-image", src: "{src}", alt: "" }
            }

            div { class: "quiz-options",
                for option in vm.options {
                    button {
                        key: "{option.index}",
                        class: option.class,
                        r#type: "button",
                        disabled: option.disabled,
                        onclick: move |_| on_event.call(QuizEvent::SelectAnswer(option.index)),
                        "{option.label}"
                    }
                }
            }

            div { class: "quiz-hints",
                button {
                    class: "btn btn-hint",
                    r#type: "button",
                    onclick: move |_| on_event.call(QuizEvent::ShowHint(HintTier::Aid1)),
                    "Hint 1"
                }
                button {
                    class: "btn btn-hint",
                    r#type: "button",
                    onclick: move |_| on_event.call(QuizEvent::ShowHint(HintTier::Aid2)),
                    "Hint 2"
                }
            }

            if let Some(panel) = vm.hint_panel {
                aside { class: "hint-panel",
                    h3 { "{panel.title}" }
                    p { "{panel.text}" }
                    button {
                        class: "btn btn-link",
                        r#type: "button",
                        onclick: move |_| on_event.call(QuizEvent::DismissHint),
                        "Close"
                    }
                }
            }
        }
    }
}
