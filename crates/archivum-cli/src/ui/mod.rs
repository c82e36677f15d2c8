// Interactive browser (ratatui). The App owns all view state and is
// advanced purely by key events and elapsed ticks, so everything here is
// testable without a terminal.

pub mod app;
pub mod clipboard;
pub mod quotes;
pub mod render;

pub use app::{App, InputMode, Section};
pub use quotes::{QuoteSequencer, QuoteState, WELCOME_QUOTES};
