//! Console collaborators used by the prompter: an output sink, a blocking
//! line source and a screen clear.

use alloc::string::String;

/// One interactive console. Only one prompt may use it at a time.
pub trait Console {
    /// Append one line to the display.
    fn write_line(&mut self, line: &str) -> anyhow::Result<()>;

    /// Show `prompt` and block for one line of input, without its line
    /// terminator. `Ok(None)` means the input has ended.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;

    /// Clear the display. With `warn` set, a note is printed first in case
    /// the clear does not work on this terminal.
    fn clear(&mut self, warn: bool) -> anyhow::Result<()>;
}

pub const CLEAR_WARNING: &str =
    "Note: Attempting to clear screen. Please use a standard terminal emulator.";

pub mod scripted;
#[cfg(feature = "std")]
pub mod terminal;

pub use scripted::ScriptedConsole;
#[cfg(feature = "std")]
pub use terminal::Terminal;
