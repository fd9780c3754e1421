mod html;
mod quiz_vm;

pub use html::{paragraphs_html, sanitize_html};
pub use quiz_vm::{
    HintPanelVm, LessonVm, OptionVm, QuestionVm, ResultVm, WelcomeVm, map_lesson, map_question,
    map_result, map_welcome,
};
