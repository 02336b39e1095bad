use folio::events::{
    HostEvents, PointerLeaveHandler, PointerMoveHandler, PointerSample, Subscription, Viewport,
    ViewportHandler,
};
use folio::storage::{KeyValueStore, MemoryStore, StorageError};
use folio::theme::Theme;
use folio::tilt::BoundingBox;
use gloo::events::EventListener;
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, MouseEvent, ScrollBehavior, ScrollToOptions, Storage, Window};

const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
    scroll_y: 0.0,
};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let storage = window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|err| StorageError::Read {
            key: key.to_string(),
            message: format!("{err:?}"),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write {
                key: key.to_string(),
                message: format!("{err:?}"),
            })
    }
}

pub enum BrowserStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open() -> Self {
        match LocalStorage::open() {
            Ok(local) => Self::Local(local),
            Err(err) => {
                log::warn!("{err}; theme preference will not survive a reload");
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Local(store) => store.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }
}

/// Browser host: pointer notifications come from one element, resize and
/// scroll from the window. Each subscription owns a gloo listener, which
/// detaches itself when dropped.
pub struct DomHost {
    pointer_target: Option<Element>,
    window: Option<Window>,
}

impl DomHost {
    pub fn for_element(element: Element) -> Self {
        Self {
            pointer_target: Some(element),
            window: window(),
        }
    }

    pub fn for_window() -> Self {
        Self {
            pointer_target: None,
            window: window(),
        }
    }

    fn window_listener(&self, event_type: &'static str, mut handler: ViewportHandler) -> Subscription {
        let Some(win) = self.window.clone() else {
            return Subscription::new(());
        };

        let listener = EventListener::new(&win, event_type, move |_event| {
            handler(viewport());
        });
        Subscription::new(listener)
    }
}

impl HostEvents for DomHost {
    fn on_pointer_move(&self, mut handler: PointerMoveHandler) -> Subscription {
        let Some(element) = self.pointer_target.clone() else {
            return Subscription::new(());
        };

        let measured = element.clone();
        let listener = EventListener::new(&element, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            handler(PointerSample {
                x: f64::from(event.client_x()),
                y: f64::from(event.client_y()),
                bounds: bounding_box(&measured),
            });
        });
        Subscription::new(listener)
    }

    fn on_pointer_leave(&self, mut handler: PointerLeaveHandler) -> Subscription {
        let Some(element) = self.pointer_target.clone() else {
            return Subscription::new(());
        };

        let listener = EventListener::new(&element, "mouseleave", move |_event| handler());
        Subscription::new(listener)
    }

    fn on_resize(&self, handler: ViewportHandler) -> Subscription {
        self.window_listener("resize", handler)
    }

    fn on_scroll(&self, handler: ViewportHandler) -> Subscription {
        self.window_listener("scroll", handler)
    }
}

pub fn bounding_box(element: &Element) -> BoundingBox {
    let rect = element.get_bounding_client_rect();
    BoundingBox::new(rect.left(), rect.top(), rect.width(), rect.height())
}

pub fn viewport() -> Viewport {
    let Some(win) = window() else {
        return FALLBACK_VIEWPORT;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.width);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.height);
    let scroll_y = win.scroll_y().unwrap_or(0.0);

    Viewport {
        width,
        height,
        scroll_y,
    }
}

pub fn element_top(anchor: &str) -> Option<f64> {
    let element = window()?.document()?.get_element_by_id(anchor)?;
    Some(element.get_bounding_client_rect().top())
}

pub fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

fn matches_media(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn system_prefers_dark() -> bool {
    matches_media("(prefers-color-scheme: dark)")
}

fn prefers_reduced_motion() -> bool {
    matches_media("(prefers-reduced-motion: reduce)")
}

pub fn apply_theme(theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    if let Err(err) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        log::warn!("could not apply {} theme: {err:?}", theme.as_str());
    }
}

pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    // The browser runs the update callback asynchronously, so the closure
    // must outlive this call.
    let callback = Closure::once_into_js(move || apply_theme(theme));
    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}
