use dioxus::prelude::*;
use quiz_core::{HintTrigger, QuizEvent};

use crate::components::HintTriggerButton;
use crate::vm::ResultVm;

const CERTIFICATE_HELP_HTML: &str = "<p>Enter an email address and we will send your \
certificate there.</p><p>Leave it empty to save the PDF on this computer instead.</p>";

#[component]
pub fn ResultScreen(vm: ResultVm, on_event: EventHandler<QuizEvent>) -> Element {
    let mut email = use_signal(String::new);
    let verdict = if vm.passed { "result-verdict result-verdict--pass" } else { "result-verdict" };
    let status = vm.status.clone().map(|(ok, message)| {
        let class = if ok {
            "certificate-status certificate-status--ok"
        } else {
            "certificate-status certificate-status--error"
        };
        (class, message)
    });

    rsx! {
        section { class: "screen screen--result",
            h1 { class: "result-heading", "{vm.heading}" }
            p { class: "result-score", "Score: {vm.score_label}" }
            p { class: "result-percent", "{vm.percent_label}" }
            p { class: verdict, "{vm.message}" }

            div { class: "certificate-panel",
                h2 { "Get your certificate" }
                label { class: "field",
                    span { "Email" }
                    input {
                        id: "certificateEmail",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "screen-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: vm.sending,
                        onclick: move |_| on_event.call(QuizEvent::RequestCertificate { email: email() }),
                        if vm.sending { "Sending…" } else { "Send certificate" }
                    }
                    HintTriggerButton {
                        trigger: HintTrigger::hint2(CERTIFICATE_HELP_HTML).with_title("About certificates"),
                        label: "About certificates",
                    }
                }
                if let Some((class, message)) = status {
                    p { class, role: "status", "{message}" }
                }
            }

            div { class: "screen-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_event.call(QuizEvent::Restart),
                    "Play again"
                }
            }
        }
    }
}
