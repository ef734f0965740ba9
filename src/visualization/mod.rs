pub mod board;
mod display;
mod terminal;

pub use display::{DisplayError, TerminalDisplay};
pub use terminal::{Command, run_interactive_terminal};
