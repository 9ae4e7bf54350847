//! Window display mode

use serde::{Deserialize, Serialize};
use super::classes;

/// Mutually exclusive display state of a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

impl WindowMode {
    /// Lowercase name, as exposed to JavaScript
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Minimized => "minimized",
            Self::Maximized => "maximized",
        }
    }

    /// Class token marking this mode on the window root, if any
    pub fn class_token(&self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Minimized => Some(classes::MINIMIZED),
            Self::Maximized => Some(classes::MAXIMIZED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_serializes_lowercase() {
        let json = serde_json::to_string(&WindowMode::Maximized).unwrap();
        assert_eq!(json, "\"maximized\"");
        assert_eq!(WindowMode::Minimized.as_str(), "minimized");
    }

    #[test]
    fn test_mode_class_token() {
        assert_eq!(WindowMode::Normal.class_token(), None);
        assert_eq!(WindowMode::Minimized.class_token(), Some("wingman-minimized"));
        assert_eq!(WindowMode::Maximized.class_token(), Some("wingman-maximized"));
    }
}
