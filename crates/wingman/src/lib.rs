//! Wingman: window chrome for browser documents
//!
//! This crate turns an element of a web page into a desktop-style window:
//! - Title bar dragging
//! - Edge and corner resizing
//! - Minimize / maximize / restore with geometry snapshots
//! - Close with listener cleanup
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Rect`, `Size`)
//! - [`options`]: Option resolution with per-field defaults
//! - [`window`]: Window state machine and the `Surface` rendering seam
//! - [`input`]: Gesture sessions and pointer tracking
//! - [`headless`]: In-memory surface and tracker for running without a browser
//! - [`dom`], [`logging`], `wasm`: browser adapter and JS exports (feature `wasm`)
//!
//! ## Example
//!
//! ```rust
//! use wingman::headless::{HeadlessSurface, HeadlessTracker};
//! use wingman::{Rect, Vec2, WindowController, WindowMode, WindowOptions};
//!
//! let options = WindowOptions::resolve(&serde_json::json!({ "title": "Notes" })).options;
//! let surface = HeadlessSurface::new(Rect::new(0.0, 0.0, 1280.0, 720.0));
//! let mut window = WindowController::new(options, surface, HeadlessTracker::new());
//!
//! window.begin_drag(Vec2::new(100.0, 100.0));
//! window.pointer_move(Vec2::new(130.0, 95.0));
//! window.pointer_up();
//!
//! window.maximize();
//! assert_eq!(window.mode(), WindowMode::Maximized);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Scoped Listeners**: Document listeners live exactly as long as a gesture
//! 3. **Never Fail on Options**: Bad options fall back to defaults with a warning

pub mod error;
pub mod headless;
pub mod input;
pub mod math;
pub mod options;
pub mod window;

#[cfg(feature = "wasm")]
pub mod dom;
#[cfg(feature = "wasm")]
pub mod logging;
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use dom::{DomPointerTracker, DomSurface};
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use error::{WingmanError, WingmanResult};
pub use input::{GestureKind, GestureSession, InputRouter, PointerTracker, ResizeHandle};
pub use math::{Rect, Size, Vec2};
pub use options::{ButtonOptions, ShadowMode, ValidationIssue, ValidationWarning, WindowOptions};
pub use window::{Surface, WindowController, WindowId, WindowMode, WindowSnapshot, WindowState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
