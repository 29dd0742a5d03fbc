// src/session/mod.rs
use std::fmt;

/// Cue appended to every prompt so the provider answers as the assistant.
const ASSISTANT_CUE: &str = "Assistant:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Assistant => write!(f, "assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub message: String,
}

/// Append-only log of the current session's conversation. Owned by the
/// application state, one per session; mutated only by appends and a full
/// clear, never reordered or edited in place.
#[derive(Debug, Default)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a turn onto the end of the log. Prior turns are never touched.
    pub fn append(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.turns.push(ConversationTurn {
            speaker,
            message: message.into(),
        });
    }

    /// Serializes the whole log, oldest first, as "{speaker}: {message}"
    /// lines followed by the assistant cue. The log is unbounded, so the
    /// prompt grows with the conversation; truncation is a caller policy
    /// and is not applied here.
    pub fn build_prompt(&self) -> String {
        let mut prompt = String::new();
        for turn in &self.turns {
            prompt.push_str(&format!("{}: {}\n", turn.speaker, turn.message));
        }
        prompt.push_str(ASSISTANT_CUE);
        prompt
    }

    /// Oldest-first, read-only walk of the log. Restartable: every call
    /// begins again at the first turn.
    pub fn replay(&self) -> impl Iterator<Item = &ConversationTurn> {
        self.turns.iter()
    }

    /// Resets the log to its initial empty state.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_serializes_turns_oldest_first_with_cue() {
        let mut log = ConversationLog::new();
        log.append(Speaker::User, "hi");
        log.append(Speaker::Assistant, "hello");
        assert_eq!(log.build_prompt(), "user: hi\nassistant: hello\nAssistant:");
    }

    #[test]
    fn empty_log_prompt_is_just_the_cue() {
        assert_eq!(ConversationLog::new().build_prompt(), "Assistant:");
    }

    #[test]
    fn clear_returns_to_the_initial_state() {
        let mut log = ConversationLog::new();
        log.append(Speaker::User, "one");
        log.append(Speaker::Assistant, "two");
        log.clear();

        assert!(log.is_empty());
        assert_eq!(log.replay().count(), 0);
        assert_eq!(log.build_prompt(), "Assistant:");

        // Empty is reentrant, not terminal.
        log.append(Speaker::User, "again");
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn replay_is_ordered_and_restartable() {
        let mut log = ConversationLog::new();
        log.append(Speaker::User, "first");
        log.append(Speaker::Assistant, "second");
        log.append(Speaker::User, "third");

        let first_pass: Vec<_> = log.replay().cloned().collect();
        let second_pass: Vec<_> = log.replay().cloned().collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(
            first_pass.iter().map(|t| t.message.as_str()).collect::<Vec<_>>(),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn append_never_drops_prior_turns() {
        let mut log = ConversationLog::new();
        for i in 0..10 {
            log.append(Speaker::User, format!("message {}", i));
            assert_eq!(log.len(), i + 1);
        }
    }
}
