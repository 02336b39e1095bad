mod carousel_view;
mod dom;
mod hooks;
mod sections;

use std::rc::Rc;

use folio::carousel::Carousel;
use folio::config::AppConfig;
use folio::content::{Contact, Owner, Portfolio, Project, Skill, SocialLink};
use folio::theme::ThemePreference;
use folio::viewport::Section;
use web_sys::window;
use yew::prelude::*;

use carousel_view::ProjectCarousel;
use dom::BrowserStore;
use hooks::use_page_state;
use sections::{About, ContactSection, Hero, NavBar, Skills};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: Rc<AppConfig>,
    owner: Rc<Owner>,
    skills: Rc<Vec<Skill>>,
    contact: Rc<Contact>,
    socials: Rc<Vec<SocialLink>>,
    carousel: Rc<Carousel<Project>>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let preference = use_memo(config.theme_key.clone(), |key| {
        ThemePreference::new(BrowserStore::open(), key.clone())
    });
    let theme = {
        let preference = preference.clone();
        use_state(move || preference.load(dom::system_prefers_dark()))
    };
    let (page, rerender) = use_page_state(config.clone());

    {
        let current = *theme;
        use_effect_with((), move |_| {
            dom::apply_theme(current);
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        let preference = preference.clone();
        Callback::from(move |_: ()| {
            let next = preference.toggle(*theme);
            dom::apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let on_toggle_menu = {
        let page = page.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: ()| {
            page.borrow_mut().nav.toggle_menu();
            rerender.force_update();
        })
    };

    let on_navigate = {
        let page = page.clone();
        let rerender = rerender.clone();
        Callback::from(move |section: Section| {
            let scroll_y = dom::viewport().scroll_y;
            let target = {
                let mut page = page.borrow_mut();
                page.nav.close_menu();
                match dom::element_top(section.anchor()) {
                    Some(top) => Some(page.nav.scroll_target(section, top, scroll_y)),
                    None if section == Section::Home => Some(0.0),
                    None => None,
                }
            };

            if let Some(target) = target {
                dom::smooth_scroll_to(target);
            } else {
                log::warn!("no element for section #{}", section.anchor());
            }
            rerender.force_update();
        })
    };

    let on_contact = on_navigate.reform(|_: ()| Section::Contact);

    let page = page.borrow().clone();
    let current = *theme;
    let revealed = |section| page.reveal.is_revealed(section);

    html! {
        <div class={classes!(
            "min-h-screen", "flex", "flex-col", "items-center", "transition-colors", "duration-300",
            current.pick(
                "bg-gradient-to-br from-orange-100 via-purple-100 to-blue-100 text-gray-900",
                "bg-gray-900 text-white"
            )
        )}>
            <NavBar
                brand={AttrValue::from(props.owner.brand.clone())}
                theme={current}
                scrolled={page.nav.is_scrolled()}
                menu_open={page.nav.is_menu_open()}
                on_navigate={on_navigate}
                on_toggle_menu={on_toggle_menu}
                on_toggle_theme={on_toggle_theme}
            />
            <Hero
                owner={props.owner.clone()}
                theme={current}
                revealed={revealed(Section::Home)}
                on_contact={on_contact}
            />
            <div class="h-32 md:h-48 lg:h-56 xl:h-64"></div>
            <About owner={props.owner.clone()} theme={current} revealed={revealed(Section::About)} />
            <Skills
                skills={props.skills.clone()}
                theme={current}
                revealed={revealed(Section::Skills)}
                max_degrees={config.tilt_max_degrees}
            />
            <ProjectCarousel
                seed={props.carousel.clone()}
                theme={current}
                revealed={revealed(Section::Projects)}
                transition_delay={config.transition_delay}
            />
            <ContactSection
                contact={props.contact.clone()}
                socials={props.socials.clone()}
                theme={current}
                revealed={revealed(Section::Contact)}
            />
        </div>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_build_env();
    console_log::init_with_level(config.log_level).ok();

    let portfolio = match Portfolio::embedded() {
        Ok(portfolio) => portfolio,
        Err(err) => {
            log::error!("{err}");
            return;
        }
    };
    let carousel = match Carousel::new(portfolio.projects) {
        Ok(carousel) => carousel,
        Err(err) => {
            log::error!("project carousel unavailable: {err}");
            return;
        }
    };

    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        log::error!("missing #app mount point");
        return;
    };

    log::info!(
        "rendering portfolio: {} projects, {} skills",
        carousel.len(),
        portfolio.skills.len()
    );

    let props = AppProps {
        config: Rc::new(config),
        owner: Rc::new(portfolio.owner),
        skills: Rc::new(portfolio.skills),
        contact: Rc::new(portfolio.contact),
        socials: Rc::new(portfolio.socials),
        carousel: Rc::new(carousel),
    };
    yew::Renderer::<App>::with_root_and_props(root, props).render();
}
