use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{Level, Mode, Question, QuestionId};
use quiz_core::{CertificateRequest, QuizEvent, QuizMachine};
use services::{ApiConfig, ApiError, CertificateReply, QuizApi, QuizService};

use crate::components::HintModalHost;
use crate::context::{UiApp, build_app_context};
use crate::views::QuizPage;
use crate::views::quiz_page::QuizTestHandles;

#[derive(Default)]
pub struct FakeApi {
    pub questions: Vec<Question>,
    pub fail_fetch: bool,
    pub reply: Option<CertificateReply>,
}

fn transport_error() -> ApiError {
    match ApiConfig::new("not a url") {
        Err(err) => err,
        Ok(_) => unreachable!("invalid url accepted"),
    }
}

#[async_trait::async_trait]
impl QuizApi for FakeApi {
    async fn fetch_questions(&self, _mode: Mode, _level: &Level) -> Result<Vec<Question>, ApiError> {
        if self.fail_fetch {
            return Err(transport_error());
        }
        Ok(self.questions.clone())
    }

    async fn request_certificate(
        &self,
        _request: &CertificateRequest,
    ) -> Result<CertificateReply, ApiError> {
        self.reply.clone().ok_or_else(transport_error)
    }
}

struct TestApp {
    service: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.service)
    }

    fn default_level(&self) -> Level {
        Level::new("11-15")
    }
}

#[derive(Props, Clone)]
struct PageHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for PageHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn PageHarness(props: PageHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! {
        HintModalHost { QuizPage {} }
    }
}

pub struct QuizHarness {
    pub dom: VirtualDom,
    handles: QuizTestHandles,
}

impl QuizHarness {
    pub fn send(&mut self, event: QuizEvent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(event));
        drive_dom(&mut self.dom);
    }

    pub fn machine(&self) -> Signal<QuizMachine> {
        self.handles.machine()
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn question(id: i64, answer_index: usize) -> Question {
    Question {
        id: QuestionId::number(id),
        question: format!("Which breed is number {id}?"),
        image: None,
        lesson_image: None,
        lesson: Some(format!("Breed {id} loves long walks.")),
        options: vec!["Beagle".into(), "Poodle".into(), "Husky".into()],
        answer_index,
        aid1: Some("It has a curly coat.".into()),
        aid2: Some("It starts with P.".into()),
    }
}

pub fn setup_quiz_harness(api: FakeApi) -> QuizHarness {
    let api: Arc<dyn QuizApi> = Arc::new(api);
    let service = Arc::new(QuizService::new(api));
    let handles = QuizTestHandles::default();

    let mut dom = VirtualDom::new_with_props(
        PageHarness,
        PageHarnessProps {
            app: Arc::new(TestApp { service }),
            handles: handles.clone(),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    QuizHarness { dom, handles }
}
