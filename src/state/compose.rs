#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

/// Email draft state for the emails page. Kept in context so a draft
/// survives navigating away and back.
#[derive(Clone, Debug, Default)]
pub struct ComposeState {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub sending: bool,
}

impl ComposeState {
    /// Check the draft before handing it to the send endpoint.
    /// `None` means ready; `Some` is the message to show.
    pub fn validation_error(&self) -> Option<&'static str> {
        let to = self.to.trim();
        if to.is_empty() {
            return Some("a recipient address is required");
        }
        if !to.contains('@') {
            return Some("the recipient address looks invalid");
        }
        if self.subject.trim().is_empty() {
            return Some("a subject is required");
        }
        None
    }

    /// Clear the draft after a successful send.
    pub fn reset(&mut self) {
        self.to.clear();
        self.subject.clear();
        self.body.clear();
        self.sending = false;
    }
}
