//! Workflow context and output sinks
//!
//! A [`Workflow`] collects items for a single run and hands the finished
//! [`Feedback`] to an [`OutputSink`]. It is created once in `main` and passed
//! explicitly to the stages that produce output.

use std::io::Write;

use tracing::{error, info};

use crate::feedback::{Feedback, Item, ICON_ERROR, ICON_WARNING};
use crate::{DisplayItem, Result};

/// Placeholder title shown when no pull requests are open
pub const EMPTY_TITLE: &str = "No Open Pull Requests!";

/// Placeholder subtitle shown when no pull requests are open
pub const EMPTY_SUBTITLE: &str = "Good job 😁";

/// Destination for finished feedback
pub trait OutputSink {
    fn send(&mut self, feedback: &Feedback) -> Result<()>;
}

/// Writes Script Filter JSON to any writer (stdout in production)
#[derive(Debug)]
pub struct ScriptFilterSink<W: Write> {
    writer: W,
}

impl ScriptFilterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ScriptFilterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputSink for ScriptFilterSink<W> {
    fn send(&mut self, feedback: &Feedback) -> Result<()> {
        serde_json::to_writer(&mut self.writer, feedback)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Records every feedback document it receives
impl OutputSink for Vec<Feedback> {
    fn send(&mut self, feedback: &Feedback) -> Result<()> {
        self.push(feedback.clone());
        Ok(())
    }
}

/// Per-run context owning the pending items and the sink
#[derive(Debug)]
pub struct Workflow<S: OutputSink> {
    sink: S,
    feedback: Feedback,
}

impl<S: OutputSink> Workflow<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            feedback: Feedback::default(),
        }
    }

    /// Queue display items
    pub fn add_items(&mut self, items: impl IntoIterator<Item = DisplayItem>) {
        self.feedback.items.extend(items.into_iter().map(Item::from));
    }

    /// Add a warning placeholder if nothing has been queued
    ///
    /// Returns whether the placeholder was added.
    pub fn warn_empty(&mut self, title: &str, subtitle: &str) -> bool {
        if !self.feedback.is_empty() {
            return false;
        }
        info!(title, "No items, showing placeholder");
        self.feedback
            .items
            .push(Item::message(title, subtitle, ICON_WARNING));
        true
    }

    /// Queue the presented pull requests, falling back to the empty placeholder,
    /// and send the result
    pub fn show_pull_requests(&mut self, items: Vec<DisplayItem>) -> Result<()> {
        self.add_items(items);
        self.warn_empty(EMPTY_TITLE, EMPTY_SUBTITLE);
        self.send_feedback()
    }

    /// Send everything queued so far
    pub fn send_feedback(&mut self) -> Result<()> {
        let feedback = std::mem::take(&mut self.feedback);
        self.sink.send(&feedback)
    }

    /// Replace pending items with a single error item and send it
    ///
    /// The caller is expected to terminate the run afterwards.
    pub fn fatal_error(&mut self, message: impl std::fmt::Display) -> Result<()> {
        let message = message.to_string();
        error!(error = %message, "Fatal error");
        self.feedback = Feedback {
            items: vec![Item::message(message, "", ICON_ERROR)],
        };
        self.send_feedback()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
