//! Window state and control
//!
//! [`WindowState`] holds the pure geometry/mode arithmetic.
//! [`WindowController`] drives it from user events and mirrors every change
//! onto a [`Surface`].

pub mod classes;
mod controller;
mod mode;
mod snapshot;
mod state;
mod surface;

pub use controller::WindowController;
pub use mode::WindowMode;
pub use snapshot::WindowSnapshot;
pub use state::WindowState;
pub use surface::Surface;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique window identifier (UUID v4)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(Uuid);

impl WindowId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID
    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WindowId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_window_ids_are_unique() {
        let ids: HashSet<WindowId> = (0..1000).map(|_| WindowId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_window_id_is_uuid_v4() {
        let id = WindowId::new();
        assert_eq!(id.as_uuid().get_version_num(), 4);

        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(&text[14..15], "4");
    }

    #[test]
    fn test_window_id_serializes_as_string() {
        let id = WindowId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
