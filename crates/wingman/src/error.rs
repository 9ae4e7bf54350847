//! Error types for window binding
//!
//! Only binding a window to its host element can fail. Option problems are
//! reported as [`ValidationWarning`](crate::options::ValidationWarning)s and
//! corrected to defaults, never surfaced as errors.

/// Errors that can occur while binding or building a window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WingmanError {
    /// A CSS selector matched no element in the document
    Resolution {
        /// The selector that was queried
        selector: String,
    },

    /// The target was neither a CSS selector nor an HTML element
    InvalidTarget(String),

    /// A DOM call failed while building chrome or registering listeners
    Dom(String),
}

impl std::fmt::Display for WingmanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolution { selector } => {
                write!(f, "no element matches selector '{}'", selector)
            }
            Self::InvalidTarget(target) => write!(
                f,
                "invalid window target ({}): expected an HTML element or a CSS selector",
                target
            ),
            Self::Dom(msg) => write!(f, "dom error: {}", msg),
        }
    }
}

impl std::error::Error for WingmanError {}

/// Result type alias for binding operations
pub type WingmanResult<T> = Result<T, WingmanError>;
