//! Serializable view of a window

use serde::{Deserialize, Serialize};

use crate::input::GestureKind;
use crate::math::Rect;
use super::{WindowId, WindowMode};

/// Point-in-time view of a window for inspection from JavaScript
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub title: String,
    pub mode: WindowMode,
    pub geometry: Rect,
    pub saved_geometry: Option<Rect>,
    pub gesture: Option<GestureKind>,
    pub closed: bool,
}

impl WindowSnapshot {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = WindowSnapshot {
            id: WindowId::new(),
            title: "Notes".to_string(),
            mode: WindowMode::Maximized,
            geometry: Rect::new(0.0, 0.0, 800.0, 600.0),
            saved_geometry: Some(Rect::new(10.0, 20.0, 300.0, 300.0)),
            gesture: None,
            closed: false,
        };

        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(value["mode"], "maximized");
        assert_eq!(value["title"], "Notes");
        assert_eq!(value["savedGeometry"]["width"], 300.0);
        assert!(value["gesture"].is_null());

        let back: WindowSnapshot = serde_json::from_value(value).unwrap();
        assert_eq!(back, snapshot);
    }
}
