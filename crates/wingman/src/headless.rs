//! In-memory surface and pointer tracker
//!
//! Lets the window state machine run without a browser: everything the
//! controller writes is recorded and can be inspected afterwards.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::error::{WingmanError, WingmanResult};
use crate::input::{GestureKind, PointerTracker};
use crate::math::{Rect, Size, Vec2};
use crate::window::{Surface, WindowId};

/// Surface that records geometry and class writes
#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    offset: Vec2,
    container: Option<Rect>,
    viewport: Rect,
    rect: Rect,
    min_size: Size,
    classes: BTreeSet<String>,
    content_visible: bool,
    listening: bool,
    attached: bool,
}

impl HeadlessSurface {
    /// A surface inside a viewport of the given bounds, with no container
    pub fn new(viewport: Rect) -> Self {
        Self {
            offset: Vec2::ZERO,
            container: None,
            viewport,
            rect: Rect::ZERO,
            min_size: Size::ZERO,
            classes: BTreeSet::new(),
            content_visible: true,
            listening: true,
            attached: true,
        }
    }

    /// Place the window inside a container with these bounds
    pub fn with_container(mut self, bounds: Rect) -> Self {
        self.container = Some(bounds);
        self
    }

    /// Start the element at this offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Last rectangle written
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Last minimum size written
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn has_class(&self, token: &str) -> bool {
        self.classes.contains(token)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn is_content_visible(&self) -> bool {
        self.content_visible
    }

    /// Whether chrome listeners are still registered
    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Whether the element is still in the document
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Surface for HeadlessSurface {
    fn offset(&self) -> Vec2 {
        self.offset
    }

    fn container_bounds(&self) -> Option<Rect> {
        self.container
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }

    fn apply_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.offset = rect.position();
    }

    fn apply_min_size(&mut self, size: Size) {
        self.min_size = size;
    }

    fn add_class(&mut self, token: &str) {
        self.classes.insert(token.to_string());
    }

    fn remove_class(&mut self, token: &str) {
        self.classes.remove(token);
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.content_visible = visible;
    }

    fn detach(&mut self, remove_element: bool) {
        self.listening = false;
        if remove_element {
            self.attached = false;
        }
    }
}

#[derive(Debug, Default)]
struct TrackerLog {
    active: usize,
    total: usize,
    last: Option<(WindowId, GestureKind)>,
    fail_next: Option<WingmanError>,
}

/// Pointer tracker that counts live subscriptions
///
/// Clones share the same counters, so a test can keep one handle while the
/// controller owns another.
#[derive(Clone, Debug, Default)]
pub struct HeadlessTracker {
    log: Rc<RefCell<TrackerLog>>,
}

impl HeadlessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscriptions currently alive
    pub fn active(&self) -> usize {
        self.log.borrow().active
    }

    /// Subscriptions ever created
    pub fn total(&self) -> usize {
        self.log.borrow().total
    }

    /// Window and gesture of the most recent subscription
    pub fn last(&self) -> Option<(WindowId, GestureKind)> {
        self.log.borrow().last
    }

    /// Make the next `subscribe` fail with `error`
    pub fn fail_next(&self, error: WingmanError) {
        self.log.borrow_mut().fail_next = Some(error);
    }
}

/// Live subscription; decrements the tracker's active count on drop
#[derive(Debug)]
pub struct HeadlessSubscription {
    log: Rc<RefCell<TrackerLog>>,
}

impl Drop for HeadlessSubscription {
    fn drop(&mut self) {
        let mut log = self.log.borrow_mut();
        log.active = log.active.saturating_sub(1);
    }
}

impl PointerTracker for HeadlessTracker {
    type Subscription = HeadlessSubscription;

    fn subscribe(&mut self, window: WindowId, kind: GestureKind) -> WingmanResult<HeadlessSubscription> {
        let mut log = self.log.borrow_mut();
        if let Some(err) = log.fail_next.take() {
            return Err(err);
        }
        log.active += 1;
        log.total += 1;
        log.last = Some((window, kind));
        Ok(HeadlessSubscription {
            log: Rc::clone(&self.log),
        })
    }
}
