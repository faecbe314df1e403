//! Assistant-tab transcript state.
//!
//! The transcript is append-only except for the streaming model message: a
//! placeholder is appended when a send starts and its text grows in place,
//! under the same id, as fragments arrive — the view updates one message
//! instead of appending duplicates.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
    /// Localized in-transcript failure notice; rendered distinctly.
    Error,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub sending: bool,
    /// Set once the tab has been opened and the greeting seeded.
    pub started: bool,
}

impl ChatState {
    /// Seed the localized greeting the first time the tab opens.
    pub fn seed_greeting(&mut self, greeting: &str) {
        if self.started {
            return;
        }
        self.started = true;
        self.push(ChatRole::Model, greeting);
    }

    /// Start a send: append the user message and a streaming placeholder.
    ///
    /// Guarded no-op (returns `None`) on blank input, a missing session, or a
    /// send already in flight.
    pub fn begin_send(&mut self, input: &str, session_ready: bool) -> Option<(String, String)> {
        let text = input.trim();
        if text.is_empty() || !session_ready || self.sending {
            return None;
        }
        self.sending = true;
        self.push(ChatRole::User, text);
        let placeholder_id = self.push(ChatRole::Model, "");
        Some((text.to_owned(), placeholder_id))
    }

    /// Grow the streaming message in place, preserving its identity.
    pub fn append_fragment(&mut self, message_id: &str, fragment: &str) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == message_id) {
            message.text.push_str(fragment);
        }
    }

    pub fn finish_send(&mut self) {
        self.sending = false;
    }

    /// Transport failure: drop the placeholder if nothing streamed into it,
    /// append a distinct error message, and clear the in-flight flag.
    pub fn fail_send(&mut self, placeholder_id: &str, error_text: &str) {
        self.messages.retain(|m| !(m.id == placeholder_id && m.text.is_empty()));
        self.push(ChatRole::Error, error_text);
        self.sending = false;
    }

    /// Language toggle: drop the transcript and greet again.
    pub fn reset_with_greeting(&mut self, greeting: &str) {
        self.messages.clear();
        self.sending = false;
        self.started = true;
        self.push(ChatRole::Model, greeting);
    }

    fn push(&mut self, role: ChatRole, text: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.messages.push(ChatMessage { id: id.clone(), role, text: text.to_owned() });
        id
    }
}
