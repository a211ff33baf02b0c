#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;
mod config;
pub mod console;
mod engine;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod render;
mod validate;
mod wrap;

pub use common::*;
pub use config::*;
pub use console::{Console, ScriptedConsole, CLEAR_WARNING};
#[cfg(feature = "std")]
pub use console::Terminal;
pub use engine::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level, LOG_ENV};
pub use render::*;
pub use validate::*;
pub use wrap::*;
