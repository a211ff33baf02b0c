//! Common error types for the prompter.

/// Errors raised when a box cannot be laid out with the requested geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Box width leaves no room for content.
    WidthTooSmall { width: usize, minimum: usize },
    /// Line length of zero passed to the line splitter.
    ZeroLength,
    /// Border glyph is a control character.
    InvalidGlyph(char),
    /// `InputFormat::Selection` requested without menu options.
    SelectionWithoutMenu,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::WidthTooSmall { width, minimum } => {
                write!(f, "Width {} is too small, need at least {}", width, minimum)
            }
            ConfigError::ZeroLength => write!(f, "Line length must be at least 1"),
            ConfigError::InvalidGlyph(c) => write!(f, "Border glyph {:?} is a control character", c),
            ConfigError::SelectionWithoutMenu => {
                write!(f, "Selection format needs at least one menu option")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Errors that end a prompt without an answer.
#[derive(Debug)]
pub enum PromptError {
    /// The request could not be rendered.
    Config(ConfigError),
    /// Input source reached end of input before a valid answer.
    InputClosed,
    /// Console collaborator failed.
    Io(anyhow::Error),
}

impl From<ConfigError> for PromptError {
    fn from(err: ConfigError) -> Self {
        PromptError::Config(err)
    }
}

impl core::fmt::Display for PromptError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PromptError::Config(e) => write!(f, "Configuration error: {}", e),
            PromptError::InputClosed => write!(f, "Input closed before a valid response"),
            PromptError::Io(e) => write!(f, "Console error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::Config(e) => Some(e),
            PromptError::Io(e) => Some(&**e),
            PromptError::InputClosed => None,
        }
    }
}
