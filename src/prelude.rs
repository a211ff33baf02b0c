//! Commonly used types and utilities for ease of import.

pub use crate::{
    Answer, Console, InputFormat, PromptConfig, PromptError, PromptRequest, Prompter, Response,
    ScriptedConsole,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, Terminal};
