//! Display sinks
//!
//! The state machine never renders anything itself. After each state change
//! it hands the text to show to a [`DisplaySink`], which keeps it testable
//! without a terminal or a browser.

/// Something that can show the calculator's display text
pub trait DisplaySink {
    /// Shows `text`, replacing whatever was shown before
    fn show(&mut self, text: &str);
}

impl<S: DisplaySink + ?Sized> DisplaySink for &mut S {
    fn show(&mut self, text: &str) {
        (**self).show(text);
    }
}

impl<S: DisplaySink + ?Sized> DisplaySink for Box<S> {
    fn show(&mut self, text: &str) {
        (**self).show(text);
    }
}

/// Adapter turning a closure into a [`DisplaySink`]
pub struct FnDisplay<F>(pub F);

impl<F: FnMut(&str)> DisplaySink for FnDisplay<F> {
    fn show(&mut self, text: &str) {
        (self.0)(text);
    }
}

impl<F> std::fmt::Debug for FnDisplay<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnDisplay").finish_non_exhaustive()
    }
}

/// In-memory display that remembers every frame it was shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingDisplay {
    frames: Vec<String>,
}

impl RecordingDisplay {
    /// Creates an empty display
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The text currently shown (empty before the first frame)
    #[must_use]
    pub fn current(&self) -> &str {
        self.frames.last().map_or("", String::as_str)
    }

    /// Every frame in the order it was shown
    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Number of frames shown so far
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Forgets recorded frames, keeping only the current one
    pub fn truncate_history(&mut self) {
        if let Some(last) = self.frames.pop() {
            self.frames.clear();
            self.frames.push(last);
        }
    }
}

impl DisplaySink for RecordingDisplay {
    fn show(&mut self, text: &str) {
        self.frames.push(text.to_string());
    }
}
