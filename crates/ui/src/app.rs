use dioxus::prelude::*;

use crate::components::HintModalHost;
use crate::views::QuizPage;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Dog Quiz" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                HintModalHost {
                    QuizPage {}
                }
            }
        }
    }
}
