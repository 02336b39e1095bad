use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::tilt::BoundingBox;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub bounds: BoundingBox,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

pub type PointerMoveHandler = Box<dyn FnMut(PointerSample)>;
pub type PointerLeaveHandler = Box<dyn FnMut()>;
pub type ViewportHandler = Box<dyn FnMut(Viewport)>;

pub trait HostEvents {
    fn on_pointer_move(&self, handler: PointerMoveHandler) -> Subscription;
    fn on_pointer_leave(&self, handler: PointerLeaveHandler) -> Subscription;
    fn on_resize(&self, handler: ViewportHandler) -> Subscription;
    fn on_scroll(&self, handler: ViewportHandler) -> Subscription;
}

#[must_use = "dropping a subscription unregisters its handler"]
pub struct Subscription {
    _guard: Box<dyn Any>,
}

impl Subscription {
    pub fn new(guard: impl Any) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Subscription")
    }
}

struct Slots<H> {
    next_id: u64,
    handlers: Vec<(u64, H)>,
    dispatch_depth: u32,
    released: Vec<u64>,
}

impl<H> Default for Slots<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            handlers: Vec::new(),
            dispatch_depth: 0,
            released: Vec::new(),
        }
    }
}

impl<H> Slots<H> {
    fn insert(&mut self, handler: H) -> u64 {
        self.next_id += 1;
        self.handlers.push((self.next_id, handler));
        self.next_id
    }

    fn remove(&mut self, id: u64) -> Option<Box<dyn Any>>
    where
        H: 'static,
    {
        // A running dispatch holds the handler outside `handlers`.
        if self.dispatch_depth > 0 {
            self.released.push(id);
        }
        let index = self.handlers.iter().position(|(existing, _)| *existing == id)?;
        let (_, handler) = self.handlers.remove(index);
        Some(Box::new(handler))
    }

    fn begin_dispatch(&mut self) -> Vec<(u64, H)> {
        self.dispatch_depth += 1;
        std::mem::take(&mut self.handlers)
    }

    fn is_released(&self, id: u64) -> bool {
        self.released.contains(&id)
    }

    fn finish_dispatch(&mut self, dispatched: Vec<(u64, H)>) -> Vec<(u64, H)> {
        self.dispatch_depth -= 1;
        let released = if self.dispatch_depth == 0 {
            std::mem::take(&mut self.released)
        } else {
            self.released.clone()
        };
        let (stale, mut kept): (Vec<_>, Vec<_>) = dispatched
            .into_iter()
            .partition(|(id, _)| released.contains(id));
        kept.append(&mut self.handlers);
        self.handlers = kept;
        stale
    }
}

#[derive(Default)]
struct Registry {
    pointer_move: Slots<PointerMoveHandler>,
    pointer_leave: Slots<PointerLeaveHandler>,
    resize: Slots<ViewportHandler>,
    scroll: Slots<ViewportHandler>,
}

/// Host driven by hand: tests register components against it and then fire
/// notifications directly. Handlers run with the registry unborrowed, so a
/// handler may subscribe or drop subscriptions, its own included.
#[derive(Clone, Default)]
pub struct ManualHost {
    registry: Rc<RefCell<Registry>>,
}

struct Release {
    registry: Rc<RefCell<Registry>>,
    remove: fn(&mut Registry, u64) -> Option<Box<dyn Any>>,
    id: u64,
}

impl Drop for Release {
    fn drop(&mut self) {
        let removed = (self.remove)(&mut self.registry.borrow_mut(), self.id);
        // Released outside the borrow: the handler may own subscriptions too.
        drop(removed);
    }
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler_count(&self) -> usize {
        let registry = self.registry.borrow();
        registry.pointer_move.handlers.len()
            + registry.pointer_leave.handlers.len()
            + registry.resize.handlers.len()
            + registry.scroll.handlers.len()
    }

    pub fn pointer_move(&self, sample: PointerSample) {
        self.dispatch(
            |registry| &mut registry.pointer_move,
            |handler: &mut PointerMoveHandler| handler(sample),
        );
    }

    pub fn pointer_leave(&self) {
        self.dispatch(
            |registry| &mut registry.pointer_leave,
            |handler: &mut PointerLeaveHandler| handler(),
        );
    }

    pub fn resize(&self, viewport: Viewport) {
        self.dispatch(
            |registry| &mut registry.resize,
            |handler: &mut ViewportHandler| handler(viewport),
        );
    }

    pub fn scroll(&self, viewport: Viewport) {
        self.dispatch(
            |registry| &mut registry.scroll,
            |handler: &mut ViewportHandler| handler(viewport),
        );
    }

    fn dispatch<H>(
        &self,
        slots: fn(&mut Registry) -> &mut Slots<H>,
        mut call: impl FnMut(&mut H),
    ) {
        let mut dispatched = slots(&mut self.registry.borrow_mut()).begin_dispatch();
        for (id, handler) in dispatched.iter_mut() {
            if !slots(&mut self.registry.borrow_mut()).is_released(*id) {
                call(handler);
            }
        }
        let stale = slots(&mut self.registry.borrow_mut()).finish_dispatch(dispatched);
        drop(stale);
    }

    fn subscription(
        &self,
        remove: fn(&mut Registry, u64) -> Option<Box<dyn Any>>,
        id: u64,
    ) -> Subscription {
        Subscription::new(Release {
            registry: Rc::clone(&self.registry),
            remove,
            id,
        })
    }
}

impl HostEvents for ManualHost {
    fn on_pointer_move(&self, handler: PointerMoveHandler) -> Subscription {
        let id = self.registry.borrow_mut().pointer_move.insert(handler);
        self.subscription(|registry, id| registry.pointer_move.remove(id), id)
    }

    fn on_pointer_leave(&self, handler: PointerLeaveHandler) -> Subscription {
        let id = self.registry.borrow_mut().pointer_leave.insert(handler);
        self.subscription(|registry, id| registry.pointer_leave.remove(id), id)
    }

    fn on_resize(&self, handler: ViewportHandler) -> Subscription {
        let id = self.registry.borrow_mut().resize.insert(handler);
        self.subscription(|registry, id| registry.resize.remove(id), id)
    }

    fn on_scroll(&self, handler: ViewportHandler) -> Subscription {
        let id = self.registry.borrow_mut().scroll.insert(handler);
        self.subscription(|registry, id| registry.scroll.remove(id), id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport {
            width: 1280.0,
            height: 720.0,
            scroll_y,
        }
    }

    #[test]
    fn handlers_receive_notifications_while_subscribed() {
        let host = ManualHost::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let subscription = host.on_scroll(Box::new(move |viewport| {
            sink.borrow_mut().push(viewport.scroll_y);
        }));

        host.scroll(viewport(10.0));
        host.scroll(viewport(60.0));
        host.resize(viewport(99.0));

        assert_eq!(*seen.borrow(), vec![10.0, 60.0]);
        drop(subscription);
    }

    #[test]
    fn dropping_subscription_releases_handler() {
        let host = ManualHost::new();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let subscription = host.on_pointer_leave(Box::new(move || {
            *counter.borrow_mut() += 1;
        }));
        let resize = host.on_resize(Box::new(|_| {}));
        assert_eq!(host.handler_count(), 2);

        host.pointer_leave();
        drop(subscription);
        host.pointer_leave();

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(host.handler_count(), 1);
        drop(resize);
        assert_eq!(host.handler_count(), 0);
    }

    #[test]
    fn handler_can_drop_its_own_subscription() {
        let host = ManualHost::new();
        let calls = Rc::new(RefCell::new(0));
        let own: Rc<RefCell<Option<Subscription>>> = Rc::default();

        let counter = Rc::clone(&calls);
        let slot = Rc::clone(&own);
        let subscription = host.on_pointer_leave(Box::new(move || {
            *counter.borrow_mut() += 1;
            slot.borrow_mut().take();
        }));
        *own.borrow_mut() = Some(subscription);

        host.pointer_leave();
        assert_eq!(host.handler_count(), 0);
        host.pointer_leave();
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn handler_can_release_another_subscription_mid_dispatch() {
        let host = ManualHost::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let other: Rc<RefCell<Option<Subscription>>> = Rc::default();

        let released = Rc::clone(&other);
        let first = host.on_scroll(Box::new(move |_| {
            released.borrow_mut().take();
        }));
        let sink = Rc::clone(&seen);
        *other.borrow_mut() = Some(host.on_scroll(Box::new(move |viewport| {
            sink.borrow_mut().push(viewport.scroll_y);
        })));

        host.scroll(viewport(10.0));
        host.scroll(viewport(20.0));

        assert!(seen.borrow().is_empty());
        assert_eq!(host.handler_count(), 1);
        drop(first);
        assert_eq!(host.handler_count(), 0);
    }

    #[test]
    fn handler_registered_mid_dispatch_is_kept() {
        let host = ManualHost::new();
        let late: Rc<RefCell<Vec<Subscription>>> = Rc::default();

        let registrar = host.clone();
        let store = Rc::clone(&late);
        let subscription = host.on_resize(Box::new(move |_| {
            if store.borrow().is_empty() {
                store.borrow_mut().push(registrar.on_resize(Box::new(|_| {})));
            }
        }));

        host.resize(viewport(0.0));
        assert_eq!(host.handler_count(), 2);
        host.resize(viewport(0.0));
        assert_eq!(host.handler_count(), 2);

        drop(subscription);
        late.borrow_mut().clear();
        assert_eq!(host.handler_count(), 0);
    }
}
