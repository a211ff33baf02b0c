//! Response validation and coercion for each input format.
//!
//! All functions expect a response already stripped of surrounding
//! whitespace.

use alloc::format;
use alloc::string::{String, ToString};

pub const MSG_CANNOT_SKIP: &str = "Question cannot be skipped";
pub const MSG_YES_NO: &str = "Response must start with 'y' or 'n'";
pub const MSG_DIGITS: &str = "Response must contain only digits 0-9";
pub const MSG_TOO_LARGE: &str = "Response is too large";

/// How a response is checked and what type it is coerced to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputFormat {
    /// Any text.
    #[default]
    FreeText,
    /// Anything starting with `y` or `n`, case-insensitive.
    YesNo,
    /// Non-negative decimal integer, ASCII digits only.
    Integer,
    /// Unfinished: behaves exactly like `FreeText`.
    Numeric,
    /// Number of a menu option, 1-based on screen, 0-based in the answer.
    Selection,
}

/// A coerced, valid answer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Answer {
    Text(String),
    YesNo(bool),
    Integer(u64),
    /// Zero-based index into the menu options.
    Choice(usize),
}

/// What the caller of a prompt gets back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Response {
    Answered(Answer),
    /// The user left a question that was not required blank.
    Skipped,
}

impl Response {
    pub fn answer(&self) -> Option<&Answer> {
        match self {
            Response::Answered(a) => Some(a),
            Response::Skipped => None,
        }
    }

    pub fn into_answer(self) -> Option<Answer> {
        match self {
            Response::Answered(a) => Some(a),
            Response::Skipped => None,
        }
    }
}

/// Result of checking one response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Valid(Answer),
    Skipped,
    /// Rejected; the message is shown before asking again.
    Invalid(String),
}

impl Validation {
    fn invalid(msg: &str) -> Self {
        Validation::Invalid(msg.to_string())
    }
}

/// Everything about the question that affects validation.
#[derive(Clone, Copy, Debug)]
pub struct Rules {
    pub format: InputFormat,
    pub required: bool,
    /// Exact char count a non-empty response must have.
    pub input_length: Option<usize>,
    /// Number of menu options on screen.
    pub option_count: usize,
}

/// Check `response` against `rules`.
pub fn validate(response: &str, rules: &Rules) -> Validation {
    if let Some(expected) = rules.input_length {
        let len = response.chars().count();
        if len > 0 && len != expected {
            return Validation::Invalid(format!("Response must be {} characters long", expected));
        }
    }
    match rules.format {
        InputFormat::YesNo => validate_yes_no(response, rules.required),
        InputFormat::Integer => validate_integer(response, rules.required),
        InputFormat::Selection => validate_selection(response, rules.required, rules.option_count),
        // TODO: give Numeric its own rule once decimals and signs are decided
        InputFormat::FreeText | InputFormat::Numeric => {
            validate_free_text(response, rules.required)
        }
    }
}

fn empty(required: bool) -> Validation {
    if required {
        Validation::invalid(MSG_CANNOT_SKIP)
    } else {
        Validation::Skipped
    }
}

pub fn validate_yes_no(response: &str, required: bool) -> Validation {
    match response.chars().next() {
        None => empty(required),
        Some('y') | Some('Y') => Validation::Valid(Answer::YesNo(true)),
        Some('n') | Some('N') => Validation::Valid(Answer::YesNo(false)),
        Some(_) => Validation::invalid(MSG_YES_NO),
    }
}

pub fn validate_integer(response: &str, required: bool) -> Validation {
    if response.is_empty() {
        return empty(required);
    }
    match parse_digits(response) {
        Ok(n) => Validation::Valid(Answer::Integer(n)),
        Err(msg) => Validation::invalid(msg),
    }
}

/// An empty response that is not required is the empty string, not a skip.
pub fn validate_free_text(response: &str, required: bool) -> Validation {
    if required && response.is_empty() {
        Validation::invalid(MSG_CANNOT_SKIP)
    } else {
        Validation::Valid(Answer::Text(response.to_string()))
    }
}

pub fn validate_selection(response: &str, required: bool, option_count: usize) -> Validation {
    if response.is_empty() {
        return empty(required);
    }
    match parse_digits(response) {
        Ok(n) if n >= 1 && n <= option_count as u64 => {
            Validation::Valid(Answer::Choice(n as usize - 1))
        }
        _ => Validation::Invalid(format!("Response must be a number from 1 to {}", option_count)),
    }
}

fn parse_digits(response: &str) -> Result<u64, &'static str> {
    if !response.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MSG_DIGITS);
    }
    response.parse().map_err(|_| MSG_TOO_LARGE)
}
