use std::sync::Arc;

use dioxus::core::Task;
use dioxus::prelude::*;
use quiz_core::{QuizEffect, QuizEvent, QuizMachine, Screen};
use services::QuizService;

use crate::context::AppContext;
use crate::vm::{map_lesson, map_question, map_result, map_welcome};

use super::learning::LearningScreen;
use super::quiz::QuizScreen;
use super::result::ResultScreen;
use super::welcome::WelcomeScreen;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Copy)]
struct QuizHandles {
    machine: Signal<QuizMachine>,
    advance_task: Signal<Option<Task>>,
}

/// Apply `event` and run the resulting effects.
///
/// Async effects are spawned on the current scope and feed their follow-up
/// event back through here. Only the advance timer is tracked, so it can be
/// cancelled when a new round starts.
fn dispatch_event(handles: QuizHandles, service: &Arc<QuizService>, event: QuizEvent) {
    let QuizHandles {
        mut machine,
        mut advance_task,
    } = handles;
    let effects = machine.write().apply(event);

    for effect in effects {
        match effect {
            QuizEffect::CancelAdvance => {
                if let Some(task) = advance_task.write().take() {
                    task.cancel();
                }
            }
            QuizEffect::Show(screen) => {
                tracing::debug!(?screen, "quiz screen changed");
            }
            effect => {
                let is_advance = matches!(effect, QuizEffect::ScheduleAdvance { .. });
                let service = Arc::clone(service);
                let task = spawn(async move {
                    let next = service.run_effect(effect).await;
                    if is_advance {
                        let mut advance_task = handles.advance_task;
                        advance_task.set(None);
                    }
                    if let Some(next) = next {
                        dispatch_event(handles, &service, next);
                    }
                });
                if is_advance {
                    advance_task.set(Some(task));
                }
            }
        }
    }
}

#[component]
pub fn QuizPage() -> Element {
    let ctx = use_context::<AppContext>();
    let machine = use_signal(QuizMachine::new);
    let advance_task = use_signal(|| None::<Task>);
    let handles = QuizHandles {
        machine,
        advance_task,
    };

    let dispatch = {
        let service = ctx.quiz_service();
        use_callback(move |event: QuizEvent| dispatch_event(handles, &service, event))
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(test_handles) = try_consume_context::<QuizTestHandles>() {
                test_handles.register(dispatch, machine);
            }
        }
    }

    let state = machine.read();
    let body = match state.screen() {
        Screen::Welcome => rsx! {
            WelcomeScreen {
                vm: map_welcome(&state),
                default_level: ctx.default_level().clone(),
                on_event: dispatch,
            }
        },
        Screen::Learning => match map_lesson(&state) {
            Some(vm) => rsx! { LearningScreen { vm, on_event: dispatch } },
            None => rsx! {},
        },
        Screen::Quiz => match map_question(&state) {
            Some(vm) => rsx! { QuizScreen { vm, on_event: dispatch } },
            None => rsx! {},
        },
        Screen::Result => rsx! {
            ResultScreen { vm: map_result(&state), on_event: dispatch }
        },
    };

    rsx! {
        main { class: "quiz-page", {body} }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizEvent>>>>,
    machine: Rc<RefCell<Option<Signal<QuizMachine>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizEvent>, machine: Signal<QuizMachine>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.machine.borrow_mut() = Some(machine);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizEvent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn machine(&self) -> Signal<QuizMachine> {
        (*self.machine.borrow()).expect("quiz machine registered")
    }
}
