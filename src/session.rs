//! Per-session state: everything that survives across frames but not
//! across runs of the program.

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Session-scoped key/value state. One instance lives on the `App` and
/// is dropped (reset) when the process exits.
#[derive(Debug)]
pub struct Session {
    pub counter: i64,
    pub chat: Vec<ChatMessage>,
    pub todos: Vec<String>,
    pub form_submitted: bool,
    pub theme_name: String,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            counter: 0,
            chat: Vec::new(),
            todos: Vec::new(),
            form_submitted: false,
            theme_name: crate::theme::DEFAULT_THEME.to_string(),
        }
    }
}

impl Session {
    pub fn increment(&mut self) {
        self.counter += 1;
    }

    pub fn decrement(&mut self) {
        self.counter -= 1;
    }

    pub fn reset_counter(&mut self) {
        self.counter = 0;
    }

    pub fn push_chat(&mut self, role: Role, content: impl Into<String>) {
        self.chat.push(ChatMessage {
            role,
            content: content.into(),
        });
    }

    pub fn clear_chat(&mut self) {
        self.chat.clear();
    }

    /// Append a todo. Empty (after trimming) and duplicate entries are
    /// rejected so the list length only grows for genuinely new items.
    pub fn add_todo(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() || self.todos.iter().any(|t| t == text) {
            return false;
        }
        self.todos.push(text.to_string());
        true
    }

    /// Remove a todo by index, preserving the order of the rest.
    pub fn remove_todo(&mut self, index: usize) -> bool {
        if index < self.todos.len() {
            self.todos.remove(index);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_tracks_net_sum() {
        let mut s = Session::default();
        s.increment();
        s.increment();
        s.increment();
        s.decrement();
        assert_eq!(s.counter, 2);
        s.reset_counter();
        assert_eq!(s.counter, 0);
        s.decrement();
        assert_eq!(s.counter, -1);
    }

    #[test]
    fn todo_add_rejects_empty_and_duplicates() {
        let mut s = Session::default();
        assert!(s.add_todo("buy milk"));
        assert_eq!(s.todos.len(), 1);
        assert!(!s.add_todo("buy milk"));
        assert!(!s.add_todo("   "));
        assert_eq!(s.todos.len(), 1);
        assert!(s.add_todo("  walk dog  "));
        assert_eq!(s.todos, vec!["buy milk", "walk dog"]);
    }

    #[test]
    fn todo_remove_preserves_order() {
        let mut s = Session::default();
        s.add_todo("a");
        s.add_todo("b");
        s.add_todo("c");
        assert!(s.remove_todo(1));
        assert_eq!(s.todos, vec!["a", "c"]);
        assert!(!s.remove_todo(5));
        assert_eq!(s.todos.len(), 2);
    }

    #[test]
    fn chat_append_and_clear() {
        let mut s = Session::default();
        s.push_chat(Role::User, "hi");
        s.push_chat(Role::Assistant, "hello");
        assert_eq!(s.chat.len(), 2);
        assert_eq!(s.chat[0].role, Role::User);
        s.clear_chat();
        assert!(s.chat.is_empty());
    }
}
