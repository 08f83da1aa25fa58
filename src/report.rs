//! Run result reporting.

use serde::{Deserialize, Serialize};

use crate::apply::Outcome;

/// The idempotent result of one run, as shown to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchReport {
    /// Whether the target was (or would be) modified.
    pub changed: bool,
    /// Optional human-readable note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl PatchReport {
    pub fn from_outcome(outcome: Outcome) -> Self {
        Self {
            changed: outcome.changed(),
            msg: None,
        }
    }

    pub fn with_msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = Some(msg.into());
        self
    }

    /// Plain-text rendering for the default output mode.
    pub fn render_text(&self) -> String {
        let state = if self.changed { "changed" } else { "unchanged" };
        match &self.msg {
            Some(msg) => format!("{} ({})", state, msg),
            None => state.to_string(),
        }
    }

    /// JSON rendering for `--json`.
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
