use dioxus::prelude::*;
use quiz_core::QuizEvent;

use crate::vm::LessonVm;

#[component]
pub fn LearningScreen(vm: LessonVm, on_event: EventHandler<QuizEvent>) -> Element {
    rsx! {
        section { class: "screen screen--learning",
            p { class: "quiz-progress", "Lesson {vm.progress_label}" }
            h2 { class: "lesson-question", "{vm.question}" }
            if let Some(src) = vm.lesson_image {
                img { class: "lesson-image", src: "{src}", alt: "" }
            }
            div { class: "lesson-body", dangerous_inner_html: "{vm.lesson_html}" }
            div { class: "screen-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_event.call(QuizEvent::ContinueLesson),
                    "Continue"
                }
            }
        }
    }
}
