//! Document-level pointer tracking

use crate::error::WingmanResult;
use crate::window::WindowId;
use super::GestureKind;

/// Source of pointer move/up events for an active gesture
///
/// `subscribe` registers for document-level events and returns a
/// subscription; dropping the subscription must release that registration.
/// A window holds at most one subscription at a time.
pub trait PointerTracker {
    type Subscription;

    fn subscribe(&mut self, window: WindowId, kind: GestureKind) -> WingmanResult<Self::Subscription>;
}
