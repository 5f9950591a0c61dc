//! UI renderer trait.
//!
//! Seam between the application event loop and the concrete terminal. The
//! loop owns all data; a renderer only draws the supplied [`ViewState`] and
//! translates raw terminal events into [`InputAction`]s.

use crate::error::Result;
use crate::input::InputAction;
use crate::ui::ViewState;
use std::time::Duration;

/// Core trait for UI rendering and event handling
pub trait UIRenderer {
    /// Render the current view state to the terminal
    fn render(&mut self, view_state: &ViewState) -> Result<()>;

    /// Poll for user input and return the next action.
    ///
    /// Returns `None` on timeout so the loop can keep ticking.
    fn handle_input(&mut self, timeout: Option<Duration>) -> Result<Option<InputAction>>;

    /// Initialize the terminal (raw mode, alternate screen)
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions as (width, height)
    fn get_terminal_size(&self) -> Result<(u16, u16)>;
}
