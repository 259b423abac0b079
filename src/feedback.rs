// ---------------------------------------------------------------------------
// Feedback intake
// ---------------------------------------------------------------------------

/// Where submitted feedback notes go.
pub trait FeedbackSink {
    fn emit(&mut self, note: &str);
}

/// Writes each note to the log under the `feedback` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl FeedbackSink for LogSink {
    fn emit(&mut self, note: &str) {
        log::info!(target: "feedback", "User feedback: {note}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackState {
    #[default]
    Idle,
    Submitted,
}

/// The sidebar feedback text box.
#[derive(Debug, Default)]
pub struct FeedbackBox {
    pub text: String,
    state: FeedbackState,
}

impl FeedbackBox {
    pub fn state(&self) -> FeedbackState {
        self.state
    }

    /// Call after the user edits the text.
    pub fn edited(&mut self) {
        self.state = FeedbackState::Idle;
    }

    /// Emit the current text if it is non-blank, then clear the box.
    /// Returns whether anything was emitted.
    pub fn submit(&mut self, sink: &mut dyn FeedbackSink) -> bool {
        let note = self.text.trim();
        if note.is_empty() {
            return false;
        }
        sink.emit(note);
        self.text.clear();
        self.state = FeedbackState::Submitted;
        true
    }
}
