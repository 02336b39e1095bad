use std::cell::RefCell;
use std::rc::Rc;

use folio::config::AppConfig;
use folio::events::HostEvents;
use folio::tilt::{TiltBinding, TiltState};
use folio::viewport::{NavState, RevealTracker, Section};
use web_sys::Element;
use yew::prelude::*;

use super::dom::{self, DomHost};

#[hook]
pub fn use_tilt(max_degrees: f64) -> (NodeRef, TiltState) {
    let node = use_node_ref();
    let state = use_state(|| TiltState::new(max_degrees));

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with(max_degrees, move |max_degrees| {
            let binding = node.cast::<Element>().map(|element| {
                let host = DomHost::for_element(element);
                TiltBinding::attach(&host, *max_degrees, move |next| state.set(next))
            });
            move || drop(binding)
        });
    }

    (node, *state)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub nav: NavState,
    pub reveal: RevealTracker,
}

impl PageState {
    fn new(config: &AppConfig) -> Self {
        Self {
            nav: NavState::new(config, dom::viewport()),
            reveal: RevealTracker::new(config.reveal_threshold_ratio),
        }
    }

    fn observe_sections(&mut self, viewport_height: f64) -> bool {
        let mut changed = false;
        for section in Section::in_page_order() {
            if let Some(top) = dom::element_top(section.anchor()) {
                changed |= self.reveal.observe(section, top, viewport_height);
            }
        }
        changed
    }
}

pub type PageHandle = Rc<RefCell<PageState>>;

#[hook]
pub fn use_page_state(config: Rc<AppConfig>) -> (PageHandle, UseForceUpdateHandle) {
    let page = use_mut_ref(|| PageState::new(&config));
    let rerender = use_force_update();

    {
        let page = page.clone();
        let rerender = rerender.clone();
        use_effect_with((), move |_| {
            let host = DomHost::for_window();

            let initial = dom::viewport();
            if page.borrow_mut().observe_sections(initial.height) {
                rerender.force_update();
            }

            let scroll_page = page.clone();
            let scroll_rerender = rerender.clone();
            let on_scroll = host.on_scroll(Box::new(move |viewport| {
                let changed = {
                    let mut page = scroll_page.borrow_mut();
                    let scrolled = page.nav.scrolled_to(viewport);
                    page.observe_sections(viewport.height) || scrolled
                };
                if changed {
                    scroll_rerender.force_update();
                }
            }));

            let resize_page = page;
            let on_resize = host.on_resize(Box::new(move |viewport| {
                if resize_page.borrow_mut().nav.resized(viewport) {
                    rerender.force_update();
                }
            }));

            move || {
                drop(on_scroll);
                drop(on_resize);
            }
        });
    }

    (page, rerender)
}
