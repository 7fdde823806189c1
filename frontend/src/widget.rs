//! Upload widget state machine.
//!
//! One [`WidgetState`] exists per upload form. The view layer feeds it DOM
//! events and renders its flags as classes; all transitions live here so they
//! can be exercised without a browser.
//!
//! ```text
//!   idle ──dragover──▶ dragging ──drop/leave──▶ idle
//!    │                                           │
//!    └──────────────── submit ◀──────────────────┘
//!                        │
//!                    uploading ──▶ success | error ──restart──▶ idle
//! ```

use crate::capability::AdvancedUpload;
use crate::gallery::Gallery;
use crate::types::{PredictionResponse, SubmitError, SubmitResult};

/// A selected or dropped file, as far as the widget is concerned.
pub trait FileHandle: Clone {
    /// Display name of the file.
    fn file_name(&self) -> String;
}

impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

/// Outcome flag of the last completed submission.
///
/// Error and success are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Status {
    #[default]
    Idle,
    Error,
    Success,
}

/// What the widget label currently shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Label {
    /// The initial "choose files" prompt.
    #[default]
    Prompt,
    /// Name of the only selected file.
    Single(String),
    /// Number of selected files.
    Multiple(usize),
}

impl Label {
    /// Label describing a file selection.
    pub fn for_files<F: FileHandle>(files: &[F]) -> Self {
        match files {
            [] => Label::Prompt,
            [file] => Label::Single(file.file_name()),
            _ => Label::Multiple(files.len()),
        }
    }

    /// Caption text, `None` for the prompt.
    ///
    /// `template` is the multi-file caption, `{count}` being replaced.
    pub fn caption(&self, template: &str) -> Option<String> {
        match self {
            Label::Prompt => None,
            Label::Single(name) => Some(name.clone()),
            Label::Multiple(count) => Some(template.replace("{count}", &count.to_string())),
        }
    }
}

/// Decision taken when the form is submitted.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitGate<F> {
    /// A submission is already in flight; ignore this one.
    Busy,
    /// Nothing to send; the user must pick files first.
    NoFiles,
    /// Send these files.
    Send(Vec<F>),
}

/// Interaction state of one upload form.
#[derive(Clone, Debug)]
pub struct WidgetState<F> {
    advanced: bool,
    is_uploading: bool,
    status: Status,
    is_dragover: bool,
    has_focus: bool,
    dropped_files: Option<Vec<F>>,
    label: Label,
    error_message: Option<String>,
}

impl<F: FileHandle> WidgetState<F> {
    pub fn new(advanced: AdvancedUpload) -> Self {
        Self {
            advanced: advanced.enabled(),
            is_uploading: false,
            status: Status::Idle,
            is_dragover: false,
            has_focus: false,
            dropped_files: None,
            label: Label::Prompt,
            error_message: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn has_advanced_upload(&self) -> bool {
        self.advanced
    }

    pub fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    pub fn is_dragover(&self) -> bool {
        self.is_dragover
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    #[cfg(test)]
    fn dropped_files(&self) -> Option<&[F]> {
        self.dropped_files.as_deref()
    }

    /// Text of the error slot, set by the last failed submission.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    // =========================================================================
    // File selection
    // =========================================================================

    /// Files picked through the native chooser. Only the label changes:
    /// files dropped earlier still win at submit time.
    pub fn select_files(&mut self, files: &[F]) {
        self.label = Label::for_files(files);
    }

    /// Pointer dragging files over the form (`dragenter`/`dragover`).
    ///
    /// Returns whether the browser default must be suppressed, which is the
    /// case whenever drag & drop is enabled.
    pub fn drag_over(&mut self) -> bool {
        if !self.advanced {
            return false;
        }
        self.is_dragover = true;
        true
    }

    /// Drag left the form or ended (`dragleave`/`dragend`).
    pub fn drag_leave(&mut self) {
        self.is_dragover = false;
    }

    /// Files dropped on the form. Never submits by itself.
    ///
    /// A drop carrying no files (text, links) keeps the current selection.
    pub fn drop_files(&mut self, files: Vec<F>) {
        self.is_dragover = false;
        if !self.advanced || files.is_empty() {
            return;
        }
        self.label = Label::for_files(&files);
        self.dropped_files = Some(files);
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Form submitted; `selected` is the native input's current selection.
    ///
    /// Dropped files take precedence over `selected`. Only [`SubmitGate::Send`]
    /// leaves the widget busy.
    pub fn begin_submit(&mut self, selected: Vec<F>) -> SubmitGate<F> {
        if self.is_uploading {
            return SubmitGate::Busy;
        }
        self.is_uploading = true;
        if self.status == Status::Error {
            self.status = Status::Idle;
        }
        self.error_message = None;

        let files = match &self.dropped_files {
            Some(dropped) => dropped.clone(),
            None => selected,
        };
        if files.is_empty() {
            self.is_uploading = false;
            return SubmitGate::NoFiles;
        }
        SubmitGate::Send(files)
    }

    /// Submission completed, whatever the outcome. Always clears the busy flag.
    pub fn finish<T>(&mut self, outcome: &SubmitResult<T>) {
        self.is_uploading = false;
        match outcome {
            Ok(_) => {
                self.status = Status::Success;
                self.label = Label::Prompt;
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: &SubmitError) {
        self.status = Status::Error;
        self.error_message = Some(err.user_message().to_string());
    }

    /// "Try again" / "upload more": back to idle so files can be picked again.
    pub fn restart(&mut self) {
        self.status = Status::Idle;
        self.error_message = None;
    }

    /// Focus moved onto (`true`) or away from the file input.
    pub fn set_focus(&mut self, focused: bool) {
        self.has_focus = focused;
    }
}

/// Apply a finished request: render predictions into `gallery` on success,
/// then settle the widget. Returns how many entries were appended.
///
/// Nothing is appended unless every result renders.
pub fn complete_submission<F: FileHandle>(
    state: &mut WidgetState<F>,
    gallery: &mut Gallery,
    response: SubmitResult<PredictionResponse>,
) -> SubmitResult<usize> {
    let outcome = response.and_then(|results| Ok(gallery.append(results)?.len()));
    state.finish(&outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MULTIPLE_CAPTION;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile(&'static str);

    impl FileHandle for FakeFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn widget() -> WidgetState<FakeFile> {
        WidgetState::new(AdvancedUpload(true))
    }

    fn files(names: &[&'static str]) -> Vec<FakeFile> {
        names.iter().copied().map(FakeFile).collect()
    }

    #[test]
    fn test_label_captions() {
        assert_eq!(Label::Prompt.caption(MULTIPLE_CAPTION), None);
        assert_eq!(
            Label::for_files(&files(&["a.png"])).caption(MULTIPLE_CAPTION).as_deref(),
            Some("a.png")
        );
        assert_eq!(
            Label::for_files(&files(&["a.png", "b.png"])).caption("{count} files"),
            Some("2 files".to_string())
        );
    }

    #[test]
    fn test_select_files_does_not_submit() {
        let mut state = widget();
        state.select_files(&files(&["a.png", "b.png"]));
        assert_eq!(state.label(), &Label::Multiple(2));
        assert!(!state.is_uploading());
    }

    #[test]
    fn test_drop_three_files() {
        let mut state = widget();
        assert!(state.drag_over());
        assert!(state.is_dragover());

        state.drop_files(files(&["a.png", "b.png", "c.nd2"]));
        assert!(!state.is_dragover());
        assert_eq!(
            state.label().caption(MULTIPLE_CAPTION).as_deref(),
            Some("3 files selected")
        );
        assert_eq!(state.dropped_files().map(<[_]>::len), Some(3));
        assert!(!state.is_uploading());
    }

    #[test]
    fn test_drag_leave_clears_dragover() {
        let mut state = widget();
        state.drag_over();
        state.drag_leave();
        assert!(!state.is_dragover());
    }

    #[test]
    fn test_without_advanced_upload_drag_is_inert() {
        let mut state = WidgetState::<FakeFile>::new(AdvancedUpload(false));
        assert!(!state.has_advanced_upload());
        assert!(!state.drag_over());
        assert!(!state.is_dragover());
        state.drop_files(files(&["a.png"]));
        assert_eq!(state.dropped_files(), None);
        assert_eq!(state.label(), &Label::Prompt);
    }

    #[test]
    fn test_empty_drop_keeps_selection() {
        let mut state = widget();
        state.drop_files(files(&["a.png"]));
        state.drop_files(Vec::new());
        assert_eq!(state.label(), &Label::Single("a.png".to_string()));
        assert_eq!(state.dropped_files().map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_submit_sends_selection() {
        let mut state = widget();
        let gate = state.begin_submit(files(&["a.png", "b.png"]));
        assert_eq!(gate, SubmitGate::Send(files(&["a.png", "b.png"])));
        assert!(state.is_uploading());
    }

    #[test]
    fn test_dropped_files_take_precedence() {
        let mut state = widget();
        state.drop_files(files(&["dropped.png"]));
        let gate = state.begin_submit(files(&["picked.png"]));
        assert_eq!(gate, SubmitGate::Send(files(&["dropped.png"])));
    }

    #[test]
    fn test_dropped_files_survive_chooser_pick() {
        let mut state = widget();
        state.drop_files(files(&["dropped.png"]));
        state.select_files(&files(&["picked.png"]));
        assert_eq!(state.label(), &Label::Single("picked.png".to_string()));

        let gate = state.begin_submit(files(&["picked.png"]));
        assert_eq!(gate, SubmitGate::Send(files(&["dropped.png"])));
    }

    #[test]
    fn test_submit_without_files() {
        let mut state = widget();
        assert_eq!(state.begin_submit(Vec::new()), SubmitGate::NoFiles);
        assert!(!state.is_uploading());
    }

    #[test]
    fn test_submit_while_uploading_is_noop() {
        let mut state = widget();
        state.begin_submit(files(&["a.png"]));
        let before = format!("{:?}", state);

        assert_eq!(state.begin_submit(files(&["b.png"])), SubmitGate::Busy);
        assert_eq!(format!("{:?}", state), before);
    }

    #[test]
    fn test_busy_cleared_for_every_outcome() {
        let outcomes: Vec<SubmitResult<()>> = vec![
            Ok(()),
            Err(SubmitError::Server { status: 500, body: String::new() }),
            Err(SubmitError::Transport("offline".to_string())),
            Err(SubmitError::MalformedBody("eof".to_string())),
        ];
        for outcome in outcomes {
            let mut state = widget();
            state.begin_submit(files(&["a.png"]));
            state.finish(&outcome);
            assert!(!state.is_uploading(), "still busy after {:?}", outcome);
        }
    }

    #[test]
    fn test_success_resets_label() {
        let mut state = widget();
        state.select_files(&files(&["a.png", "b.png"]));
        state.begin_submit(files(&["a.png", "b.png"]));
        state.finish::<()>(&Ok(()));
        assert!(state.is_success());
        assert!(!state.is_error());
        assert_eq!(state.label(), &Label::Prompt);
    }

    #[test]
    fn test_server_error_sets_message() {
        let mut state = widget();
        state.select_files(&files(&["a.png"]));
        state.begin_submit(files(&["a.png"]));
        state.finish::<()>(&Err(SubmitError::Server { status: 502, body: String::new() }));
        assert!(state.is_error());
        assert!(!state.is_success());
        assert_eq!(state.error_message(), Some("Error. Please, contact the operator!"));
        assert_eq!(state.label(), &Label::Single("a.png".to_string()));
    }

    #[test]
    fn test_resubmit_clears_error() {
        let mut state = widget();
        state.begin_submit(files(&["a.png"]));
        state.finish::<()>(&Err(SubmitError::Transport("offline".to_string())));

        state.begin_submit(files(&["a.png"]));
        assert!(!state.is_error());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_restart_clears_status() {
        let mut state = widget();
        state.begin_submit(files(&["a.png"]));
        state.finish::<()>(&Err(SubmitError::Transport("offline".to_string())));
        state.restart();
        assert!(!state.is_error());
        assert!(!state.is_success());
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_focus_toggle() {
        let mut state = widget();
        state.set_focus(true);
        assert!(state.has_focus());
        state.set_focus(false);
        assert!(!state.has_focus());
    }

    const PNG_B64: &str = "iVBORw0KGgo=\n";

    fn two_file_response() -> PredictionResponse {
        serde_json::from_value(serde_json::json!([
            {"filename": "a.png", "image": PNG_B64, "mask": [{"mask_data": PNG_B64, "model_name": "m1"}]},
            {"filename": "b.png", "image": PNG_B64, "mask": []}
        ]))
        .unwrap()
    }

    #[test]
    fn test_complete_two_files() {
        let mut state = widget();
        let mut gallery = Gallery::new();
        state.select_files(&files(&["a.png", "b.png"]));
        state.begin_submit(files(&["a.png", "b.png"]));

        let added = complete_submission(&mut state, &mut gallery, Ok(two_file_response()));

        assert_eq!(added, Ok(2));
        assert_eq!(gallery.len(), 2);
        assert_eq!(gallery.entries()[0].masks.len(), 1);
        assert!(gallery.entries()[1].masks.is_empty());
        assert_eq!(state.label(), &Label::Prompt);
        assert!(state.is_success());
        assert!(!state.is_uploading());
    }

    #[test]
    fn test_complete_server_rejection() {
        let mut state = widget();
        let mut gallery = Gallery::new();
        gallery.append(two_file_response()).unwrap();
        state.begin_submit(files(&["c.png"]));

        let outcome = complete_submission(
            &mut state,
            &mut gallery,
            Err(SubmitError::Server { status: 500, body: "boom".to_string() }),
        );

        assert!(matches!(outcome, Err(SubmitError::Server { status: 500, .. })));
        assert_eq!(gallery.len(), 2);
        assert!(!state.is_uploading());
        assert!(state.is_error());
        assert_eq!(state.error_message(), Some("Error. Please, contact the operator!"));
    }

    #[test]
    fn test_complete_invalid_image_payload() {
        let mut state = widget();
        let mut gallery = Gallery::new();
        state.begin_submit(files(&["a.png", "b.png"]));
        let mut response = two_file_response();
        response[1].image = "not base64!".to_string();

        let outcome = complete_submission(&mut state, &mut gallery, Ok(response));

        assert!(matches!(outcome, Err(SubmitError::MalformedBody(_))));
        assert!(gallery.is_empty());
        assert!(state.is_error());
        assert!(!state.is_uploading());
    }
}
