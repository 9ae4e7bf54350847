//! Field-by-field option resolution

use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{ButtonOptions, ShadowMode, WindowOptions, DEFAULT_MIN_SIZE, DEFAULT_SIZE, DEFAULT_TITLE};
use crate::math::Size;

/// Why a field fell back to its default
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationIssue {
    /// Absent or `null`
    Missing,
    /// Present with the wrong type or out of range
    Invalid,
}

/// A field that was replaced by its default during resolution
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Option path, e.g. `height` or `buttons.min`
    pub field: &'static str,
    /// What was wrong with the supplied value
    pub issue: ValidationIssue,
    /// The default that was used instead, rendered for display
    pub fallback: String,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let what = match self.issue {
            ValidationIssue::Missing => "was not specified",
            ValidationIssue::Invalid => "is invalid",
        };
        write!(
            f,
            "option '{}' {}; using default '{}'",
            self.field, what, self.fallback
        )
    }
}

/// Outcome of resolving a raw option value
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub options: WindowOptions,
    pub warnings: Vec<ValidationWarning>,
}

impl Resolved {
    /// Warnings for fields that were present but unusable
    pub fn invalid(&self) -> impl Iterator<Item = &ValidationWarning> {
        self.warnings
            .iter()
            .filter(|w| w.issue == ValidationIssue::Invalid)
    }

    /// Find the warning for a field, if one was raised
    pub fn warning_for(&self, field: &str) -> Option<&ValidationWarning> {
        self.warnings.iter().find(|w| w.field == field)
    }
}

/// Collects warnings while reading fields out of one JSON object
struct FieldReader<'a> {
    fields: Option<&'a Map<String, Value>>,
    warnings: &'a mut Vec<ValidationWarning>,
}

impl<'a> FieldReader<'a> {
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|fields| fields.get(key))
            .filter(|v| !v.is_null())
    }

    fn fallback(&mut self, field: &'static str, present: bool, fallback: String) {
        let issue = if present {
            ValidationIssue::Invalid
        } else {
            ValidationIssue::Missing
        };
        let warning = ValidationWarning {
            field,
            issue,
            fallback,
        };
        match issue {
            ValidationIssue::Invalid => warn!(field, "{}", warning),
            ValidationIssue::Missing => debug!(field, "{}", warning),
        }
        self.warnings.push(warning);
    }

    /// A strictly positive, finite number
    fn positive(&mut self, key: &'static str, field: &'static str, default: f32) -> f32 {
        let value = self.get(key);
        let parsed = value
            .and_then(Value::as_f64)
            .map(|n| n as f32)
            .filter(|n| n.is_finite() && *n > 0.0);
        match parsed {
            Some(n) => n,
            None => {
                self.fallback(field, value.is_some(), default.to_string());
                default
            }
        }
    }

    fn flag(&mut self, key: &'static str, field: &'static str, default: bool) -> bool {
        let value = self.get(key);
        match value.and_then(Value::as_bool) {
            Some(b) => b,
            None => {
                self.fallback(field, value.is_some(), default.to_string());
                default
            }
        }
    }

    fn shadow(&mut self) -> ShadowMode {
        let value = self.get("shadow");
        match value.and_then(Value::as_str).and_then(ShadowMode::parse) {
            Some(mode) => mode,
            None => {
                let default = ShadowMode::default();
                self.fallback("shadow", value.is_some(), default.as_str().to_string());
                default
            }
        }
    }

    fn title(&mut self) -> String {
        let value = self.get("title");
        let parsed = value
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty());
        match parsed {
            Some(title) => title.to_string(),
            None => {
                self.fallback("title", value.is_some(), DEFAULT_TITLE.to_string());
                DEFAULT_TITLE.to_string()
            }
        }
    }
}

pub(super) fn resolve(raw: &Value) -> Resolved {
    let mut warnings = Vec::new();
    let mut reader = FieldReader {
        fields: raw.as_object(),
        warnings: &mut warnings,
    };

    // `debug` falls back silently
    let debug = reader.get("debug").and_then(Value::as_bool).unwrap_or(false);

    let size = Size::new(
        reader.positive("width", "width", DEFAULT_SIZE.width),
        reader.positive("height", "height", DEFAULT_SIZE.height),
    );
    let min_size = Size::new(
        reader.positive("minWidth", "minWidth", DEFAULT_MIN_SIZE.width),
        reader.positive("minHeight", "minHeight", DEFAULT_MIN_SIZE.height),
    );
    let draggable = reader.flag("draggable", "draggable", true);
    let resizable = reader.flag("resizable", "resizable", true);
    let centered = reader.flag("centered", "centered", true);
    let shadow = reader.shadow();
    let title = reader.title();
    let dark_mode = reader.flag("darkMode", "darkMode", true);

    let buttons_value = reader.get("buttons");
    let buttons = match buttons_value.and_then(Value::as_object) {
        Some(fields) => {
            let mut buttons = FieldReader {
                fields: Some(fields),
                warnings: &mut *reader.warnings,
            };
            ButtonOptions {
                min: buttons.flag("min", "buttons.min", true),
                max: buttons.flag("max", "buttons.max", true),
                exit: buttons.flag("exit", "buttons.exit", true),
            }
        }
        None => {
            let default = ButtonOptions::default();
            reader.fallback(
                "buttons",
                buttons_value.is_some(),
                format!("min={} max={} exit={}", default.min, default.max, default.exit),
            );
            default
        }
    };

    Resolved {
        options: WindowOptions {
            size,
            min_size,
            draggable,
            resizable,
            centered,
            dark_mode,
            shadow,
            title,
            buttons,
            debug,
        },
        warnings,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn any_json() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<f64>().prop_map(|n| json!(n)),
            any::<i64>().prop_map(Value::from),
            ".{0,12}".prop_map(Value::from),
        ]
    }

    proptest! {
        /// Every resolved field is usable whatever the input
        #[test]
        fn resolved_fields_always_valid(
            width in any_json(),
            height in any_json(),
            min_width in any_json(),
            min_height in any_json(),
            draggable in any_json(),
            shadow in any_json(),
            title in any_json(),
        ) {
            let raw = json!({
                "width": width,
                "height": height,
                "minWidth": min_width,
                "minHeight": min_height,
                "draggable": draggable,
                "shadow": shadow,
                "title": title,
            });
            let options = WindowOptions::resolve(&raw).options;

            prop_assert!(options.size.width.is_finite() && options.size.width > 0.0);
            prop_assert!(options.size.height.is_finite() && options.size.height > 0.0);
            prop_assert!(options.min_size.width.is_finite() && options.min_size.width > 0.0);
            prop_assert!(options.min_size.height.is_finite() && options.min_size.height > 0.0);
            prop_assert!(!options.title.trim().is_empty());
            prop_assert_eq!(options.title.trim(), options.title.as_str());
        }

        /// Positive finite numbers are taken as given
        #[test]
        fn positive_numbers_pass_through(w in 1.0f32..5000.0, h in 1.0f32..5000.0) {
            let options = WindowOptions::resolve(&json!({ "width": w, "height": h })).options;
            prop_assert!((options.size.width - w).abs() < 0.01);
            prop_assert!((options.size.height - h).abs() < 0.01);
        }
    }
}
