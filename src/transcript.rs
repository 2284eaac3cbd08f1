use crate::chat_message::ChatMessage;

/// Ordered, append-only sequence of chat messages. Messages are never
/// reordered, deleted, or truncated; `push` is the only mutation.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_insertion_order() {
        let mut transcript = Transcript::new();
        for i in 0..5 {
            transcript.push(ChatMessage::new(format!("message {i}"), "You"));
        }
        assert_eq!(transcript.len(), 5);
        let texts: Vec<_> = transcript.iter().map(|m| m.text().to_string()).collect();
        assert_eq!(
            texts,
            vec![
                "message 0",
                "message 1",
                "message 2",
                "message 3",
                "message 4"
            ]
        );
    }

    #[test]
    fn last_returns_most_recent_push() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());
        transcript.push(ChatMessage::new("first", "You"));
        transcript.push(ChatMessage::new("second", "Lex"));
        assert_eq!(transcript.last().map(|m| m.text()), Some("second"));
    }
}
