//! Prompter configuration: defaults and the immutable `PromptConfig`.

use alloc::string::String;

use crate::common::ConfigError;
use crate::render::BoxStyle;

pub const DEFAULT_SCREEN_WIDTH: usize = 80;
pub const DEFAULT_MAX_LINES: usize = 30;
pub const DEFAULT_H_BORDER: char = '-';
pub const DEFAULT_V_BORDER: char = '|';
pub const DEFAULT_I_BORDER: char = '-';

/// Columns taken by the two vertical borders and their padding spaces.
pub const CONTENT_MARGIN: usize = 4;
/// Smallest box width that still leaves one column of content.
pub const MIN_SCREEN_WIDTH: usize = CONTENT_MARGIN + 1;

/// Settings shared by every prompt a [`Prompter`](crate::Prompter) asks.
///
/// Built with [`PromptConfig::default`] and the `with_*` setters, then handed
/// to `Prompter::new`, which validates it. It is never changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PromptConfig {
    width: usize,
    max_lines: usize,
    v_border: char,
    h_border: char,
    i_border: char,
    default_required: bool,
    app_header: Option<String>,
    warn_screen_clear: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SCREEN_WIDTH,
            max_lines: DEFAULT_MAX_LINES,
            v_border: DEFAULT_V_BORDER,
            h_border: DEFAULT_H_BORDER,
            i_border: DEFAULT_I_BORDER,
            default_required: true,
            app_header: None,
            warn_screen_clear: true,
        }
    }
}

impl PromptConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total box width in columns, borders included.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Advisory frame height. Taller frames are logged, not paged.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_v_border(mut self, glyph: char) -> Self {
        self.v_border = glyph;
        self
    }

    pub fn with_h_border(mut self, glyph: char) -> Self {
        self.h_border = glyph;
        self
    }

    /// Glyph of the divider between the question and the menu.
    pub fn with_i_border(mut self, glyph: char) -> Self {
        self.i_border = glyph;
        self
    }

    pub fn with_default_required(mut self, required: bool) -> Self {
        self.default_required = required;
        self
    }

    /// Line printed above every box.
    pub fn with_app_header(mut self, header: impl Into<String>) -> Self {
        self.app_header = Some(header.into());
        self
    }

    pub fn with_warn_screen_clear(mut self, warn: bool) -> Self {
        self.warn_screen_clear = warn;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    pub fn default_required(&self) -> bool {
        self.default_required
    }

    pub fn app_header(&self) -> Option<&str> {
        self.app_header.as_deref()
    }

    pub fn warn_screen_clear(&self) -> bool {
        self.warn_screen_clear
    }

    pub fn style(&self) -> BoxStyle {
        BoxStyle {
            v_border: self.v_border,
            h_border: self.h_border,
            i_border: self.i_border,
        }
    }

    /// Check that a box can be drawn with these settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_SCREEN_WIDTH {
            return Err(ConfigError::WidthTooSmall {
                width: self.width,
                minimum: MIN_SCREEN_WIDTH,
            });
        }
        for glyph in [self.v_border, self.h_border, self.i_border] {
            if glyph.is_control() {
                return Err(ConfigError::InvalidGlyph(glyph));
            }
        }
        Ok(())
    }
}
