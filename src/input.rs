//! Input state machine.
//!
//! Translates terminal key events into domain-level [`InputAction`]s. Two
//! modes: `Browse` (list navigation, detail, reload, quit) and `SearchEntry`
//! (live search editing). Every edit in `SearchEntry` emits the full buffer
//! so the shell can re-filter as the user types.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Current input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    SearchEntry,
}

/// High-level input actions emitted by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    SelectionUp(usize),
    SelectionDown(usize),
    PageUp,
    PageDown,
    GoToFirst,
    GoToLast,
    /// Open the detail pane for the highlighted player
    OpenSelected,
    /// Jump to the n-th entry (1-based) of the open similar-players list
    OpenSimilar(usize),
    /// Esc in browse mode: close detail, else clear the search filter
    Back,
    StartSearch,
    /// Live buffer update while in search-entry mode
    UpdateSearchTerm(String),
    /// Enter: keep the current filter and return to browsing
    CommitSearch,
    /// Esc: drop the filter and return to browsing
    CancelSearch,
    Reload,
    Quit,
    Resize { width: u16, height: u16 },
    NoAction,
    InvalidInput,
}

/// Mode-switching key state machine, modeled on `less`-style viewers.
pub struct InputStateMachine {
    mode: InputMode,
    search_buffer: String,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self {
            mode: InputMode::Browse,
            search_buffer: String::new(),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn search_buffer(&self) -> &str {
        &self.search_buffer
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        // Ctrl-C quits from any mode
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return InputAction::Quit;
        }

        match self.mode {
            InputMode::Browse => self.handle_browse_key(key_event),
            InputMode::SearchEntry => self.handle_search_key(key_event),
        }
    }

    fn handle_browse_key(&mut self, key_event: KeyEvent) -> InputAction {
        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Char('j') if plain => InputAction::SelectionDown(1),
            KeyCode::Down => InputAction::SelectionDown(1),
            KeyCode::Char('k') if plain => InputAction::SelectionUp(1),
            KeyCode::Up => InputAction::SelectionUp(1),
            KeyCode::PageDown => InputAction::PageDown,
            KeyCode::Char('f') if plain => InputAction::PageDown,
            KeyCode::PageUp => InputAction::PageUp,
            KeyCode::Char('b') if plain => InputAction::PageUp,
            KeyCode::Char('g') if plain => InputAction::GoToFirst,
            KeyCode::Home => InputAction::GoToFirst,
            KeyCode::Char('G') if plain => InputAction::GoToLast,
            KeyCode::End => InputAction::GoToLast,
            KeyCode::Enter => InputAction::OpenSelected,
            KeyCode::Char(ch @ '1'..='9') if plain => {
                InputAction::OpenSimilar(ch as usize - '0' as usize)
            }
            KeyCode::Esc => InputAction::Back,
            KeyCode::Char('/') if plain => {
                self.mode = InputMode::SearchEntry;
                self.search_buffer.clear();
                InputAction::StartSearch
            }
            KeyCode::Char('r') if plain => InputAction::Reload,
            KeyCode::Char('q') if plain => InputAction::Quit,
            _ => InputAction::InvalidInput,
        }
    }

    fn handle_search_key(&mut self, key_event: KeyEvent) -> InputAction {
        let plain = !key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key_event.code {
            KeyCode::Char(ch) if plain && (ch.is_ascii_graphic() || ch == ' ') => {
                self.search_buffer.push(ch);
                InputAction::UpdateSearchTerm(self.search_buffer.clone())
            }
            KeyCode::Backspace => {
                self.search_buffer.pop();
                InputAction::UpdateSearchTerm(self.search_buffer.clone())
            }
            KeyCode::Enter => {
                self.mode = InputMode::Browse;
                InputAction::CommitSearch
            }
            KeyCode::Esc => {
                self.mode = InputMode::Browse;
                self.search_buffer.clear();
                InputAction::CancelSearch
            }
            _ => InputAction::InvalidInput,
        }
    }
}

impl Default for InputStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn browse_navigation_keys() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('j'))),
            InputAction::SelectionDown(1)
        );
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('k'))),
            InputAction::SelectionUp(1)
        );
        assert_eq!(sm.handle_key_event(key(KeyCode::PageDown)), InputAction::PageDown);
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('g'))),
            InputAction::GoToFirst
        );
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('G'))),
            InputAction::GoToLast
        );
        assert_eq!(sm.handle_key_event(key(KeyCode::Enter)), InputAction::OpenSelected);
    }

    #[test]
    fn quit_and_reload() {
        let mut sm = InputStateMachine::new();
        assert_eq!(sm.handle_key_event(key(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(sm.handle_key_event(ctrl('c')), InputAction::Quit);
        assert_eq!(sm.handle_key_event(key(KeyCode::Char('r'))), InputAction::Reload);
    }

    #[test]
    fn slash_enters_search_mode_and_typing_streams_the_buffer() {
        let mut sm = InputStateMachine::new();
        assert_eq!(sm.handle_key_event(key(KeyCode::Char('/'))), InputAction::StartSearch);
        assert_eq!(sm.mode(), InputMode::SearchEntry);

        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('c'))),
            InputAction::UpdateSearchTerm("c".to_string())
        );
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('o'))),
            InputAction::UpdateSearchTerm("co".to_string())
        );
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Backspace)),
            InputAction::UpdateSearchTerm("c".to_string())
        );
    }

    #[test]
    fn enter_commits_and_keeps_the_filter() {
        let mut sm = InputStateMachine::new();
        sm.handle_key_event(key(KeyCode::Char('/')));
        sm.handle_key_event(key(KeyCode::Char('x')));

        assert_eq!(sm.handle_key_event(key(KeyCode::Enter)), InputAction::CommitSearch);
        assert_eq!(sm.mode(), InputMode::Browse);
        assert_eq!(sm.search_buffer(), "x");
    }

    #[test]
    fn esc_cancels_and_clears_the_buffer() {
        let mut sm = InputStateMachine::new();
        sm.handle_key_event(key(KeyCode::Char('/')));
        sm.handle_key_event(key(KeyCode::Char('x')));

        assert_eq!(sm.handle_key_event(key(KeyCode::Esc)), InputAction::CancelSearch);
        assert_eq!(sm.mode(), InputMode::Browse);
        assert_eq!(sm.search_buffer(), "");
    }

    #[test]
    fn backspace_on_empty_buffer_stays_in_search_mode() {
        let mut sm = InputStateMachine::new();
        sm.handle_key_event(key(KeyCode::Char('/')));

        assert_eq!(
            sm.handle_key_event(key(KeyCode::Backspace)),
            InputAction::UpdateSearchTerm(String::new())
        );
        assert_eq!(sm.mode(), InputMode::SearchEntry);
    }

    #[test]
    fn digits_jump_into_the_similar_list() {
        let mut sm = InputStateMachine::new();
        assert_eq!(
            sm.handle_key_event(key(KeyCode::Char('3'))),
            InputAction::OpenSimilar(3)
        );
    }

    #[test]
    fn esc_in_browse_is_back() {
        let mut sm = InputStateMachine::new();
        assert_eq!(sm.handle_key_event(key(KeyCode::Esc)), InputAction::Back);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut sm = InputStateMachine::new();
        let mut event = key(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(sm.handle_key_event(event), InputAction::NoAction);
    }
}
