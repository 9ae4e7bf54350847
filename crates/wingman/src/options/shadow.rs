//! Shadow display mode

use serde::{Deserialize, Serialize};
use crate::window::classes;

/// When the window's drop shadow is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowMode {
    #[default]
    Always,
    Hover,
    Active,
    None,
}

impl ShadowMode {
    /// Parse a shadow mode name, ignoring surrounding whitespace
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "always" => Some(Self::Always),
            "hover" => Some(Self::Hover),
            "active" => Some(Self::Active),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Lowercase name as accepted by [`ShadowMode::parse`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hover => "hover",
            Self::Active => "active",
            Self::None => "none",
        }
    }

    /// Class token applied to the window root, if any
    pub fn class_token(&self) -> Option<&'static str> {
        match self {
            Self::Always => Some(classes::SHADOW_ALWAYS),
            Self::Hover => Some(classes::SHADOW_HOVER),
            Self::Active => Some(classes::SHADOW_ACTIVE),
            Self::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ShadowMode::parse("hover"), Some(ShadowMode::Hover));
        assert_eq!(ShadowMode::parse("  active "), Some(ShadowMode::Active));
        assert_eq!(ShadowMode::parse("none"), Some(ShadowMode::None));
        assert_eq!(ShadowMode::parse("Always"), None);
        assert_eq!(ShadowMode::parse(""), None);
    }

    #[test]
    fn test_class_token() {
        assert_eq!(ShadowMode::Always.class_token(), Some("wingman-shadow-always"));
        assert_eq!(ShadowMode::None.class_token(), None);
    }

    #[test]
    fn test_as_str_round_trips_parse() {
        for mode in [ShadowMode::Always, ShadowMode::Hover, ShadowMode::Active, ShadowMode::None] {
            assert_eq!(ShadowMode::parse(mode.as_str()), Some(mode));
        }
    }
}
