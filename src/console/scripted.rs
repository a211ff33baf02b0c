use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::console::{Console, CLEAR_WARNING};

/// In-memory console fed from a fixed list of input lines.
///
/// Everything written, every prompt shown and every clear is recorded, so a
/// whole prompt exchange can be inspected afterwards.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    history: Vec<String>,
    screen_start: usize,
    prompts: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Queue another input line.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
    }

    /// Every line ever written, echoed input included.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Lines written since the last clear.
    pub fn screen(&self) -> &[String] {
        &self.history[self.screen_start..]
    }

    /// Every prompt passed to `read_line`, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn clears(&self) -> usize {
        self.clears
    }

    /// Input lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.history.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        let line = self.inputs.pop_front();
        // echo the way a terminal shows it: prompt and typed text on one line
        let mut shown = prompt.to_string();
        shown.push_str(line.as_deref().unwrap_or(""));
        self.history.push(shown);
        Ok(line)
    }

    fn clear(&mut self, warn: bool) -> anyhow::Result<()> {
        if warn {
            self.history.push(CLEAR_WARNING.to_string());
        }
        self.clears += 1;
        self.screen_start = self.history.len();
        Ok(())
    }
}
