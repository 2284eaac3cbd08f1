use chrono::Utc;

use crate::api::LambdaReply;
use crate::chat_message::ChatMessage;
use crate::constants::{
    ASSISTANT_LABEL, MIN_QUESTION_CHARS, USER_LABEL, VALIDATION_MESSAGE, WELCOME_MESSAGE,
};
use crate::status_indicator::StatusIndicator;
use crate::transcript::Transcript;

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Empty input: nothing happens, the input keeps focus.
    Ignored,
    /// Input too short: a local validation message was appended.
    Rejected,
    /// The question was appended and should be forwarded to the backend.
    Sent(String),
}

pub struct App {
    pub transcript: Transcript,
    pub input: String,
    pub pending: bool,
    pub scroll: u16,
    pub status_indicator: StatusIndicator,
    pub should_quit: bool,
    session_id: String,
}

impl App {
    pub fn new() -> App {
        let mut app = App {
            transcript: Transcript::new(),
            input: String::new(),
            pending: false,
            scroll: 0,
            status_indicator: StatusIndicator::new(),
            should_quit: false,
            session_id: Utc::now().timestamp_millis().to_string(),
        };
        app.push_message(ChatMessage::new(WELCOME_MESSAGE, ASSISTANT_LABEL));
        app
    }

    /// Correlation token sent unchanged with every outbound request,
    /// generated once per view activation.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Validates the current input and, when valid, appends the user's
    /// message and marks a request as outstanding. The caller forwards
    /// the returned question to the backend.
    pub fn submit(&mut self) -> Submission {
        if self.input.is_empty() {
            // Input keeps focus; in a terminal it never lost it.
            return Submission::Ignored;
        }
        if self.input.chars().count() < MIN_QUESTION_CHARS {
            // Local validation message only; the input is left as typed.
            self.push_message(ChatMessage::new(VALIDATION_MESSAGE, ASSISTANT_LABEL));
            return Submission::Rejected;
        }

        let question = self.input.drain(..).collect::<String>();
        self.push_message(ChatMessage::new(question.clone(), USER_LABEL));
        self.pending = true;
        self.status_indicator.set_thinking(true);
        Submission::Sent(question)
    }

    /// Completion hook for an outbound request. Always clears the pending
    /// flag; appends the reply when the request produced one. Failures
    /// leave the transcript untouched.
    pub fn finish_request(&mut self, reply: Option<LambdaReply>) {
        self.pending = false;
        self.status_indicator.set_thinking(false);
        if let Some(reply) = reply {
            self.push_message(ChatMessage::new(reply.message, reply.transmitter));
        }
    }

    fn push_message(&mut self, message: ChatMessage) {
        self.transcript.push(message);
        // Stick to the end of the transcript; the draw pass clamps this
        // to the rendered height.
        self.scroll = u16::MAX;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(app: &App) -> Vec<String> {
        app.transcript.iter().map(|m| m.text().to_string()).collect()
    }

    #[test]
    fn starts_with_welcome_message() {
        let app = App::new();
        assert_eq!(app.transcript.len(), 1);
        let first = app.transcript.last().unwrap();
        assert_eq!(first.text(), WELCOME_MESSAGE);
        assert_eq!(first.sender(), ASSISTANT_LABEL);
        assert!(!app.pending);
    }

    #[test]
    fn session_id_is_numeric_and_stable() {
        let app = App::new();
        assert!(!app.session_id().is_empty());
        assert!(app.session_id().chars().all(|c| c.is_ascii_digit()));
        assert_eq!(app.session_id(), app.session_id.as_str());
    }

    #[test]
    fn empty_submit_mutates_nothing() {
        let mut app = App::new();
        let before = app.transcript.len();
        assert_eq!(app.submit(), Submission::Ignored);
        assert_eq!(app.transcript.len(), before);
        assert!(!app.pending);
    }

    #[test]
    fn one_char_submit_appends_single_validation_message() {
        let mut app = App::new();
        app.input.push('a');
        let before = app.transcript.len();
        assert_eq!(app.submit(), Submission::Rejected);
        assert_eq!(app.transcript.len(), before + 1);
        let last = app.transcript.last().unwrap();
        assert_eq!(last.text(), VALIDATION_MESSAGE);
        assert_eq!(last.sender(), ASSISTANT_LABEL);
        assert!(!app.pending);
        // a rejected input stays in the field
        assert_eq!(app.input, "a");
    }

    #[test]
    fn valid_submit_appends_user_message_and_sets_pending() {
        let mut app = App::new();
        app.input.push_str("what is kendra?");
        assert_eq!(
            app.submit(),
            Submission::Sent("what is kendra?".to_string())
        );
        let last = app.transcript.last().unwrap();
        assert_eq!(last.text(), "what is kendra?");
        assert_eq!(last.sender(), USER_LABEL);
        assert!(app.pending);
        assert!(app.input.is_empty());
    }

    #[test]
    fn reply_is_appended_under_transmitter_label() {
        let mut app = App::new();
        app.input.push_str("hello bot");
        app.submit();
        app.finish_request(Some(LambdaReply {
            message: "Hi! How can I help?".to_string(),
            transmitter: "Lex".to_string(),
        }));
        assert!(!app.pending);
        let last = app.transcript.last().unwrap();
        assert_eq!(last.text(), "Hi! How can I help?");
        assert_eq!(last.sender(), "Lex");
    }

    #[test]
    fn failed_request_clears_pending_and_appends_nothing() {
        let mut app = App::new();
        app.input.push_str("hello bot");
        app.submit();
        let before = app.transcript.len();
        app.finish_request(None);
        assert!(!app.pending);
        assert_eq!(app.transcript.len(), before);
    }

    #[test]
    fn transcript_order_is_preserved_across_turns() {
        let mut app = App::new();
        app.input.push_str("first question");
        app.submit();
        app.finish_request(Some(LambdaReply {
            message: "first answer".to_string(),
            transmitter: "Lex".to_string(),
        }));
        app.input.push_str("second question");
        app.submit();
        app.finish_request(Some(LambdaReply {
            message: "second answer".to_string(),
            transmitter: "Kendra".to_string(),
        }));

        assert_eq!(
            texts(&app),
            vec![
                WELCOME_MESSAGE.to_string(),
                "first question".to_string(),
                "first answer".to_string(),
                "second question".to_string(),
                "second answer".to_string(),
            ]
        );
    }

    #[test]
    fn transcript_sticks_to_end_after_push() {
        let mut app = App::new();
        app.scroll = 0;
        app.input.push_str("scroll me");
        app.submit();
        assert_eq!(app.scroll, u16::MAX);
    }
}
