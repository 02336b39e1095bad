use std::collections::HashSet;

use strum::{EnumIter, IntoEnumIterator};

use crate::config::AppConfig;
use crate::events::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub fn anchor(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn in_page_order() -> impl Iterator<Item = Section> {
        Section::iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    scrolled_threshold_px: f64,
    mobile_breakpoint_px: f64,
    mobile_nav_offset_px: f64,
    desktop_nav_offset_px: f64,
    scrolled: bool,
    mobile: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new(config: &AppConfig, viewport: Viewport) -> Self {
        let mut state = Self {
            scrolled_threshold_px: config.scrolled_threshold_px,
            mobile_breakpoint_px: config.mobile_breakpoint_px,
            mobile_nav_offset_px: config.mobile_nav_offset_px,
            desktop_nav_offset_px: config.desktop_nav_offset_px,
            scrolled: false,
            mobile: false,
            menu_open: false,
        };
        state.resized(viewport);
        state.scrolled_to(viewport);
        state
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scrolled_to(&mut self, viewport: Viewport) -> bool {
        let scrolled = viewport.scroll_y > self.scrolled_threshold_px;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Returns true when the state changed. Growing past the breakpoint
    /// closes the mobile menu.
    pub fn resized(&mut self, viewport: Viewport) -> bool {
        let before = (self.mobile, self.menu_open);
        self.mobile = viewport.width < self.mobile_breakpoint_px;
        if !self.mobile {
            self.menu_open = false;
        }
        before != (self.mobile, self.menu_open)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn scroll_target(&self, section: Section, element_top: f64, scroll_y: f64) -> f64 {
        if section == Section::Home {
            return 0.0;
        }

        let offset = if self.mobile {
            self.mobile_nav_offset_px
        } else {
            self.desktop_nav_offset_px
        };
        element_top + scroll_y - offset
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTracker {
    threshold_ratio: f64,
    revealed: HashSet<Section>,
}

impl RevealTracker {
    pub fn new(threshold_ratio: f64) -> Self {
        Self {
            threshold_ratio,
            revealed: HashSet::new(),
        }
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    pub fn observe(&mut self, section: Section, top: f64, viewport_height: f64) -> bool {
        if self.revealed.contains(&section) {
            return false;
        }

        if top < viewport_height * self.threshold_ratio {
            log::debug!("revealing section {}", section.anchor());
            self.revealed.insert(section);
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(width: f64, scroll_y: f64) -> Viewport {
        Viewport {
            width,
            height: 800.0,
            scroll_y,
        }
    }

    #[test]
    fn navbar_compacts_past_threshold() {
        let mut nav = NavState::new(&AppConfig::default(), viewport(1280.0, 0.0));
        assert!(!nav.is_scrolled());

        assert!(!nav.scrolled_to(viewport(1280.0, 50.0)));
        assert!(nav.scrolled_to(viewport(1280.0, 51.0)));
        assert!(nav.is_scrolled());
        assert!(!nav.scrolled_to(viewport(1280.0, 400.0)));
    }

    #[test]
    fn widening_to_desktop_closes_menu() {
        let mut nav = NavState::new(&AppConfig::default(), viewport(500.0, 0.0));
        assert!(nav.is_mobile());

        nav.toggle_menu();
        assert!(nav.is_menu_open());
        assert!(!nav.resized(viewport(700.0, 0.0)));
        assert!(nav.is_menu_open());

        assert!(nav.resized(viewport(768.0, 0.0)));
        assert!(!nav.is_mobile());
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn scroll_target_leaves_room_for_navbar() {
        let desktop = NavState::new(&AppConfig::default(), viewport(1280.0, 0.0));
        let mobile = NavState::new(&AppConfig::default(), viewport(400.0, 0.0));

        assert_eq!(desktop.scroll_target(Section::About, 600.0, 200.0), 680.0);
        assert_eq!(mobile.scroll_target(Section::About, 600.0, 200.0), 700.0);
        assert_eq!(desktop.scroll_target(Section::Home, 600.0, 200.0), 0.0);
    }

    #[test]
    fn reveal_is_sticky() {
        let mut tracker = RevealTracker::new(0.75);

        assert!(!tracker.observe(Section::About, 700.0, 800.0));
        assert!(!tracker.is_revealed(Section::About));
        assert!(tracker.observe(Section::About, 599.0, 800.0));
        assert!(!tracker.observe(Section::About, 2_000.0, 800.0));
        assert!(tracker.is_revealed(Section::About));
        assert!(!tracker.is_revealed(Section::Contact));
    }

    #[test]
    fn sections_iterate_in_page_order() {
        let anchors: Vec<&str> = Section::in_page_order().map(Section::anchor).collect();
        assert_eq!(anchors, vec!["home", "about", "skills", "projects", "contact"]);
    }
}
