/// Target context of a rendered literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralMode {
    /// Inline SQL literal: `'text'`, `NULL`, `TRUE`.
    #[default]
    Sql,
    /// JSON / JSON-path context: `"text"`, `null`, `true`.
    JsonPath,
}

/// Formatting directives applied when a value is bound.
///
/// The default renders inline SQL literals using the `E'...'` extended string
/// syntax, which understands backslash escapes regardless of the server's
/// `standard_conforming_strings` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindOptions {
    /// Target context of the literal.
    pub mode: LiteralMode,
    /// Prefix text literals with `E` and escape with backslashes. When
    /// disabled, quotes are doubled instead and backslashes are left as-is.
    pub extended_strings: bool,
}

impl Default for BindOptions {
    fn default() -> Self {
        Self {
            mode: LiteralMode::Sql,
            extended_strings: true,
        }
    }
}

impl BindOptions {
    /// Create options with defaults (SQL mode, extended strings).
    pub fn new() -> Self {
        Self::default()
    }

    /// Render for a JSON-path context.
    pub fn json_path(mut self) -> Self {
        self.mode = LiteralMode::JsonPath;
        self
    }

    /// Set the literal mode.
    pub fn with_mode(mut self, mode: LiteralMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use standard-conforming `'...'` strings without the `E` prefix.
    pub fn without_extended_strings(mut self) -> Self {
        self.extended_strings = false;
        self
    }

    /// Enable or disable the `E'...'` string form.
    pub fn with_extended_strings(mut self, enabled: bool) -> Self {
        self.extended_strings = enabled;
        self
    }

    pub(crate) fn is_json(&self) -> bool {
        self.mode == LiteralMode::JsonPath
    }
}
