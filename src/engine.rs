//! The prompt loop.
//!
//! [`PromptSession`] is the pure state machine for one question: it renders
//! the frame, names the prompt line and judges each submitted line.
//! [`Prompter`] drives a session against a [`Console`] until it yields a
//! [`Response`].

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::common::{ConfigError, PromptError};
use crate::config::PromptConfig;
use crate::console::Console;
use crate::render::render_box;
use crate::validate::{validate, Answer, InputFormat, Response, Rules, Validation};

const INVALID_PREFIX: &str = "Invalid Input: ";

/// One question to ask. Only `query` is mandatory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptRequest {
    pub query: String,
    pub options: Vec<String>,
    pub format: InputFormat,
    pub input_length: Option<usize>,
    pub screen_width: Option<usize>,
    pub header: Option<String>,
    pub required: Option<bool>,
    pub instructions: Option<String>,
}

impl PromptRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Show a numbered menu below the question.
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    /// Non-empty responses must be exactly `len` chars long.
    pub fn input_length(mut self, len: usize) -> Self {
        self.input_length = Some(len);
        self
    }

    /// Box width for this question only.
    pub fn screen_width(mut self, width: usize) -> Self {
        self.screen_width = Some(width);
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Replace the default prompt line.
    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}

/// Outcome of submitting one line to a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Input rejected; the message is shown on the next frame.
    Retry(String),
    Done(Response),
}

/// State of one question between reads.
#[derive(Debug)]
pub struct PromptSession<'a> {
    app_header: Option<&'a str>,
    box_lines: Vec<String>,
    instructions: &'a str,
    rules: Rules,
    error: Option<String>,
    attempts: usize,
}

impl<'a> PromptSession<'a> {
    /// Resolve the request against `config` and lay out its box.
    pub fn new(
        config: &'a PromptConfig,
        request: &'a PromptRequest,
    ) -> Result<Self, ConfigError> {
        let required = request.required.unwrap_or(config.default_required());
        let width = request.screen_width.unwrap_or(config.width());
        if request.format == InputFormat::Selection && request.options.is_empty() {
            return Err(ConfigError::SelectionWithoutMenu);
        }
        let options = Some(request.options.as_slice());
        let box_lines = render_box(
            &config.style(),
            &request.query,
            width,
            options,
            request.header.as_deref(),
        )?;
        let instructions = match &request.instructions {
            Some(text) => text.as_str(),
            None => default_instructions(!request.options.is_empty(), request.format, required),
        };
        Ok(Self {
            app_header: config.app_header(),
            box_lines,
            instructions,
            rules: Rules {
                format: request.format,
                required,
                input_length: request.input_length,
                option_count: request.options.len(),
            },
            error: None,
            attempts: 0,
        })
    }

    /// Lines to show before reading: application header, box and the error
    /// from the previous attempt, if any.
    pub fn frame(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.box_lines.len() + 2);
        if let Some(header) = self.app_header {
            lines.push(header.to_string());
        }
        lines.extend(self.box_lines.iter().cloned());
        if let Some(error) = &self.error {
            let mut line = INVALID_PREFIX.to_string();
            line.push_str(error);
            lines.push(line);
        }
        lines
    }

    /// Prompt line shown while reading.
    pub fn instructions(&self) -> &str {
        self.instructions
    }

    pub fn required(&self) -> bool {
        self.rules.required
    }

    /// Pending error message from the last rejected line.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Lines submitted so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Judge one raw input line.
    pub fn submit(&mut self, raw: &str) -> Step {
        self.attempts += 1;
        match validate(raw.trim(), &self.rules) {
            Validation::Valid(answer) => Step::Done(Response::Answered(answer)),
            Validation::Skipped => Step::Done(Response::Skipped),
            Validation::Invalid(msg) => {
                log::debug!("attempt {} rejected: {}", self.attempts, msg);
                self.error = Some(msg.clone());
                Step::Retry(msg)
            }
        }
    }
}

/// Default prompt line. A menu takes precedence over the input format.
pub fn default_instructions(has_menu: bool, format: InputFormat, required: bool) -> &'static str {
    match (has_menu, format, required) {
        (true, _, true) => "Enter your selection number: ",
        (true, _, false) => "Enter your selection number [enter nothing to skip]: ",
        (false, InputFormat::YesNo, true) => "Enter <yes/no>: ",
        (false, InputFormat::YesNo, false) => "Enter <yes/no/leave blank>: ",
        (false, InputFormat::Integer, true) => "Enter digits only, no commas or symbols: ",
        (false, InputFormat::Integer, false) => {
            "Enter digits only, no commas or symbols [enter nothing to skip]: "
        }
        (false, _, true) => ": ",
        (false, _, false) => "[enter nothing to skip]: ",
    }
}

/// Asks questions with one shared configuration.
#[derive(Clone, Debug)]
pub struct Prompter {
    config: PromptConfig,
}

impl Prompter {
    /// Fails if `config` cannot draw a box.
    pub fn new(config: PromptConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    /// Ask `request` until a valid answer or an accepted skip.
    ///
    /// Invalid input never ends the loop. End of input does, with
    /// [`PromptError::InputClosed`].
    pub fn ask<C>(
        &self,
        request: &PromptRequest,
        console: &mut C,
    ) -> Result<Response, PromptError>
    where
        C: Console + ?Sized,
    {
        let mut session = PromptSession::new(&self.config, request)?;
        log::debug!(
            "asking {:?} as {:?} (required: {})",
            request.query,
            request.format,
            session.required()
        );
        let mut warned_height = false;
        loop {
            console
                .clear(self.config.warn_screen_clear())
                .map_err(PromptError::Io)?;
            let frame = session.frame();
            if !warned_height && frame.len() + 1 > self.config.max_lines() {
                warned_height = true;
                log::warn!(
                    "prompt needs {} lines, more than the {} configured",
                    frame.len() + 1,
                    self.config.max_lines()
                );
            }
            for line in &frame {
                console.write_line(line).map_err(PromptError::Io)?;
            }
            let raw = console
                .read_line(session.instructions())
                .map_err(PromptError::Io)?
                .ok_or(PromptError::InputClosed)?;
            match session.submit(&raw) {
                Step::Done(response) => {
                    log::debug!("answered after {} attempt(s)", session.attempts());
                    return Ok(response);
                }
                Step::Retry(_) => {}
            }
        }
    }

    /// Free text question. `None` only when skipped, which free text never is.
    pub fn ask_text<C>(
        &self,
        request: PromptRequest,
        console: &mut C,
    ) -> Result<Option<String>, PromptError>
    where
        C: Console + ?Sized,
    {
        let request = request.format(InputFormat::FreeText);
        Ok(match self.ask(&request, console)? {
            Response::Answered(Answer::Text(text)) => Some(text),
            _ => None,
        })
    }

    /// Yes/no question. `None` when skipped.
    pub fn ask_yes_no<C>(
        &self,
        request: PromptRequest,
        console: &mut C,
    ) -> Result<Option<bool>, PromptError>
    where
        C: Console + ?Sized,
    {
        let request = request.format(InputFormat::YesNo);
        Ok(match self.ask(&request, console)? {
            Response::Answered(Answer::YesNo(yes)) => Some(yes),
            _ => None,
        })
    }

    /// Integer question. `None` when skipped.
    pub fn ask_integer<C>(
        &self,
        request: PromptRequest,
        console: &mut C,
    ) -> Result<Option<u64>, PromptError>
    where
        C: Console + ?Sized,
    {
        let request = request.format(InputFormat::Integer);
        Ok(match self.ask(&request, console)? {
            Response::Answered(Answer::Integer(n)) => Some(n),
            _ => None,
        })
    }

    /// Menu question answered by option number. Returns the zero-based index
    /// of the chosen option, `None` when skipped.
    pub fn choose<C>(
        &self,
        request: PromptRequest,
        console: &mut C,
    ) -> Result<Option<usize>, PromptError>
    where
        C: Console + ?Sized,
    {
        let request = request.format(InputFormat::Selection);
        Ok(match self.ask(&request, console)? {
            Response::Answered(Answer::Choice(i)) => Some(i),
            _ => None,
        })
    }
}
