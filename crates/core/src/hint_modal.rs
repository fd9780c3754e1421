//! State of the reusable hint dialog.
//!
//! The dialog is domain-agnostic: it shows a title and an HTML body, and can be
//! closed from the overlay, a close button or the Escape key. Hosts render it
//! from this state; triggers resolve to [`OpenOptions`] at click time.

pub const DEFAULT_TITLE: &str = "Hint";
pub const MORE_HELP_TITLE: &str = "More Help";
pub const EMPTY_BODY_HTML: &str = "<p>No extra info for this one yet.</p>";
pub const NO_CONTENT_HTML: &str = "<p>No extra info provided.</p>";

/// Arguments to [`HintModal::open`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenOptions {
    pub title_text: Option<String>,
    pub html: Option<String>,
}

impl OpenOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title_text = Some(title.into());
        self
    }

    #[must_use]
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }
}

/// What the user did to dismiss the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    Overlay,
    CloseButton,
    EscapeKey,
}

/// Typed description of an element that opens the dialog.
///
/// `hint1` takes precedence over `hint2`; `title` overrides the default title
/// of whichever one is used.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HintTrigger {
    pub hint1: Option<String>,
    pub hint2: Option<String>,
    pub title: Option<String>,
}

impl HintTrigger {
    #[must_use]
    pub fn hint1(html: impl Into<String>) -> Self {
        Self {
            hint1: Some(html.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn hint2(html: impl Into<String>) -> Self {
        Self {
            hint2: Some(html.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn resolve(&self) -> OpenOptions {
        let title = self.title.as_deref().filter(|value| !value.is_empty());
        let populated = |value: &Option<String>| value.clone().filter(|html| !html.is_empty());

        if let Some(html) = populated(&self.hint1) {
            OpenOptions::new()
                .title(title.unwrap_or(DEFAULT_TITLE))
                .html(html)
        } else if let Some(html) = populated(&self.hint2) {
            OpenOptions::new()
                .title(title.unwrap_or(MORE_HELP_TITLE))
                .html(html)
        } else {
            OpenOptions::new().title(DEFAULT_TITLE).html(NO_CONTENT_HTML)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HintModal {
    present: bool,
    visible: bool,
    title: String,
    body_html: String,
    scroll_locked: bool,
}

impl HintModal {
    /// A modal whose structure has not been created yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A modal with its structure in place, hidden.
    #[must_use]
    pub fn mounted() -> Self {
        let mut modal = Self::new();
        modal.ensure_presence();
        modal
    }

    /// Create the dialog structure if missing. Returns `true` when it was created.
    pub fn ensure_presence(&mut self) -> bool {
        if self.present {
            return false;
        }
        self.present = true;
        self.title = DEFAULT_TITLE.to_string();
        true
    }

    /// Show the dialog. No-op when the structure is missing.
    pub fn open(&mut self, options: OpenOptions) {
        if !self.present {
            return;
        }
        self.title = options
            .title_text
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        self.body_html = options
            .html
            .filter(|html| !html.trim().is_empty())
            .unwrap_or_else(|| EMPTY_BODY_HTML.to_string());
        self.visible = true;
        self.scroll_locked = true;
    }

    /// Hide the dialog and release the scroll lock. Idempotent.
    pub fn close(&mut self) {
        if !self.present {
            return;
        }
        self.visible = false;
        self.scroll_locked = false;
    }

    /// Close in response to a user gesture.
    ///
    /// Returns `true` when the gesture was consumed and its default action
    /// should be suppressed. Escape is only consumed while the dialog is open.
    pub fn dismiss(&mut self, trigger: CloseTrigger) -> bool {
        if !self.present {
            return false;
        }
        if trigger == CloseTrigger::EscapeKey && !self.visible {
            return false;
        }
        self.close();
        true
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.present
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body_html(&self) -> &str {
        &self.body_html
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_presence_is_idempotent() {
        let mut modal = HintModal::new();
        assert!(modal.ensure_presence());
        assert!(!modal.ensure_presence());
        assert!(modal.is_present());
        assert!(!modal.is_visible());
    }

    #[test]
    fn open_without_structure_is_a_no_op() {
        let mut modal = HintModal::new();
        modal.open(OpenOptions::new().html("<p>hi</p>"));
        assert!(!modal.is_visible());
        assert!(!modal.scroll_locked());
        modal.close();
        assert_eq!(modal, HintModal::new());
    }

    #[test]
    fn open_uses_placeholder_for_blank_html() {
        let mut modal = HintModal::mounted();
        modal.open(OpenOptions::new().html("   \n"));
        assert_eq!(modal.body_html(), EMPTY_BODY_HTML);
        assert_eq!(modal.title(), DEFAULT_TITLE);
        assert!(modal.is_visible());
        assert!(modal.scroll_locked());
    }

    #[test]
    fn open_shows_html_verbatim_and_title() {
        let mut modal = HintModal::mounted();
        modal.open(OpenOptions::new().title("Clue").html(" <b>Wag</b> "));
        assert_eq!(modal.body_html(), " <b>Wag</b> ");
        assert_eq!(modal.title(), "Clue");

        modal.open(OpenOptions::new().title("").html("x"));
        assert_eq!(modal.title(), DEFAULT_TITLE);
    }

    #[test]
    fn every_close_path_yields_the_same_state() {
        let mut expected = HintModal::mounted();
        expected.open(OpenOptions::new().html("<p>a</p>"));
        expected.close();

        for trigger in [
            CloseTrigger::Overlay,
            CloseTrigger::CloseButton,
            CloseTrigger::EscapeKey,
        ] {
            let mut modal = HintModal::mounted();
            modal.open(OpenOptions::new().html("<p>a</p>"));
            assert!(modal.dismiss(trigger));
            assert_eq!(modal, expected);
            assert!(!modal.scroll_locked());
        }
    }

    #[test]
    fn escape_is_ignored_while_hidden() {
        let mut modal = HintModal::mounted();
        assert!(!modal.dismiss(CloseTrigger::EscapeKey));
        assert!(modal.dismiss(CloseTrigger::Overlay));
        modal.close();
        assert!(!modal.is_visible());
    }

    #[test]
    fn trigger_resolution_prefers_hint1() {
        let trigger = HintTrigger {
            hint1: Some("<p>one</p>".into()),
            hint2: Some("<p>two</p>".into()),
            title: None,
        };
        assert_eq!(
            trigger.resolve(),
            OpenOptions::new().title(DEFAULT_TITLE).html("<p>one</p>")
        );
    }

    #[test]
    fn trigger_resolution_uses_more_help_for_hint2() {
        assert_eq!(
            HintTrigger::hint2("<p>two</p>").resolve(),
            OpenOptions::new().title(MORE_HELP_TITLE).html("<p>two</p>")
        );
        assert_eq!(
            HintTrigger::hint2("<p>two</p>").with_title("Extra").resolve(),
            OpenOptions::new().title("Extra").html("<p>two</p>")
        );
    }

    #[test]
    fn empty_trigger_falls_back_to_generic_message() {
        let trigger = HintTrigger::hint1("").with_title("Ignored");
        assert_eq!(
            trigger.resolve(),
            OpenOptions::new().title(DEFAULT_TITLE).html(NO_CONTENT_HTML)
        );
    }
}
