//! Input router owning the gesture session and its subscription

use crate::error::WingmanResult;
use crate::math::{Size, Vec2};
use crate::window::WindowId;
use super::{GestureKind, GestureSession, PointerTracker, ResizeHandle};

/// Active gesture plus the document subscription feeding it
struct ActiveGesture<S> {
    session: GestureSession,
    _subscription: S,
}

/// Per-window gesture state machine
///
/// Starting a gesture while another is active drops the old subscription
/// before the new one is registered, so at most one is alive.
pub struct InputRouter<T: PointerTracker> {
    tracker: T,
    active: Option<ActiveGesture<T::Subscription>>,
}

impl<T: PointerTracker> InputRouter<T> {
    /// Create a new input router
    pub fn new(tracker: T) -> Self {
        Self {
            tracker,
            active: None,
        }
    }

    /// Get current gesture session
    #[inline]
    pub fn session(&self) -> Option<&GestureSession> {
        self.active.as_ref().map(|a| &a.session)
    }

    #[inline]
    pub(crate) fn session_mut(&mut self) -> Option<&mut GestureSession> {
        self.active.as_mut().map(|a| &mut a.session)
    }

    /// Check if a gesture is active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start a drag at `pointer`
    pub fn start_drag(&mut self, window: WindowId, pointer: Vec2) -> WingmanResult<()> {
        self.start(window, GestureSession::Drag { last: pointer })
    }

    /// Start a resize from `handle` at `pointer` with the window at `start_size`
    pub fn start_resize(
        &mut self,
        window: WindowId,
        handle: ResizeHandle,
        pointer: Vec2,
        start_size: Size,
    ) -> WingmanResult<()> {
        self.start(
            window,
            GestureSession::Resize {
                handle,
                start_pointer: pointer,
                start_size,
            },
        )
    }

    /// End the current gesture, releasing its subscription
    ///
    /// Returns the kind of gesture that was ended, if any.
    pub fn end(&mut self) -> Option<GestureKind> {
        self.active.take().map(|a| a.session.kind())
    }

    fn start(&mut self, window: WindowId, session: GestureSession) -> WingmanResult<()> {
        self.end();
        let subscription = self.tracker.subscribe(window, session.kind())?;
        self.active = Some(ActiveGesture {
            session,
            _subscription: subscription,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WingmanError;
    use crate::headless::HeadlessTracker;

    #[test]
    fn test_input_router_drag() {
        let tracker = HeadlessTracker::new();
        let mut router = InputRouter::new(tracker.clone());
        assert!(!router.is_active());

        router.start_drag(WindowId::new(), Vec2::new(100.0, 100.0)).unwrap();
        assert!(router.is_active());
        assert!(matches!(router.session(), Some(GestureSession::Drag { .. })));
        assert_eq!(tracker.active(), 1);

        assert_eq!(router.end(), Some(GestureKind::Drag));
        assert!(!router.is_active());
        assert_eq!(tracker.active(), 0);
        assert_eq!(router.end(), None);
    }

    #[test]
    fn test_new_gesture_replaces_old_subscription() {
        let tracker = HeadlessTracker::new();
        let mut router = InputRouter::new(tracker.clone());
        let id = WindowId::new();

        router.start_drag(id, Vec2::ZERO).unwrap();
        router
            .start_resize(id, ResizeHandle::SouthEast, Vec2::ZERO, Size::new(400.0, 300.0))
            .unwrap();

        assert_eq!(tracker.active(), 1);
        assert_eq!(tracker.total(), 2);
        assert!(router.session().map(GestureSession::is_resize).unwrap_or(false));
    }

    #[test]
    fn test_failed_subscription_leaves_router_idle() {
        let tracker = HeadlessTracker::new();
        tracker.fail_next(WingmanError::Dom("addEventListener failed".to_string()));
        let mut router = InputRouter::new(tracker.clone());

        let result = router.start_drag(WindowId::new(), Vec2::ZERO);
        assert!(result.is_err());
        assert!(!router.is_active());
        assert_eq!(tracker.active(), 0);
    }
}
