use std::rc::Rc;

use folio::content::{Contact, Owner, Skill, SocialLink};
use folio::theme::Theme;
use folio::viewport::Section;
use yew::prelude::*;

use super::hooks::use_tilt;

static MARQUEE_WORDS: [&str; 3] = ["SKILLS", "TOOLS", "TECHNOLOGIES"];
const MARQUEE_REPEATS: usize = 10;

pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    }
}

fn glass(theme: Theme) -> Classes {
    classes!(
        theme.pick("bg-white/30", "bg-gray-800/20"),
        "backdrop-blur-md",
        "border",
        theme.pick("border-gray-200/50", "border-white/5")
    )
}

fn muted(theme: Theme) -> &'static str {
    theme.pick("text-gray-600", "text-gray-300")
}

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub brand: AttrValue,
    pub theme: Theme,
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let theme = props.theme;
    let scale = if props.scrolled { "scale-90" } else { "scale-100" };
    let size = if props.scrolled {
        "w-[90%] md:w-[60%] py-2 px-4 md:px-8"
    } else {
        "w-[95%] md:w-[70%] py-3 md:py-4 px-6 md:px-10"
    };

    let link = |section: Section, class: Classes, underline: bool| {
        let on_navigate = props.on_navigate.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_navigate.emit(section);
        });

        html! {
            <a key={section.anchor()} href={format!("#{}", section.anchor())} onclick={onclick} class={class}>
                {section.label()}
                if underline {
                    <span class={classes!(
                        "absolute", "-bottom-1", "left-0", "w-0", "h-0.5", "group-hover:w-full", "transition-all", "duration-300",
                        theme.pick("bg-gray-800", "bg-white")
                    )}></span>
                }
            </a>
        }
    };

    let desktop_links = Section::in_page_order().map(|section| {
        link(
            section,
            classes!("hover:text-black", "dark:hover:text-white", "relative", "group", "transition-all", "duration-300"),
            true,
        )
    });
    let mobile_links = Section::in_page_order().map(|section| {
        link(
            section,
            classes!("py-2", "hover:text-black", "dark:hover:text-white", "transition-all", "duration-300"),
            false,
        )
    });

    let on_toggle_menu = props.on_toggle_menu.reform(|_: MouseEvent| ());
    let on_toggle_theme = props.on_toggle_theme.reform(|_: MouseEvent| ());
    let icon_button = "p-2 rounded-full hover:bg-white/10 dark:hover:bg-white/5 transition-all duration-300";

    html! {
        <>
            <nav class={classes!(
                "fixed", "top-4", "left-1/2", "transform", "-translate-x-1/2", "rounded-full", "shadow-lg",
                "flex", "items-center", "justify-between", "z-50", "transition-all", "duration-300",
                theme.pick("bg-white/30", "bg-gray-800/10"), "backdrop-blur-md", "border",
                theme.pick("border-gray-200/50", "border-white/5"),
                size
            )}>
                <div class={classes!("text-xl", "md:text-2xl", "font-bold", "transition-all", "duration-300", "hover:scale-100", scale)}>
                    {props.brand.clone()}
                </div>
                <div class={classes!("hidden", "md:flex", "gap-4", "lg:gap-8", "text-base", "md:text-lg", "font-medium", "transition-all", "duration-300", "hover:scale-100", scale)}>
                    { for desktop_links }
                </div>
                <div class="md:hidden">
                    <button
                        class={icon_button}
                        onclick={on_toggle_menu}
                        aria-label={if props.menu_open { "Close menu" } else { "Open menu" }}
                    >
                        <span aria-hidden="true">{if props.menu_open { "✕" } else { "☰" }}</span>
                    </button>
                </div>
                <div class={classes!("flex", "gap-4", "items-center", "transition-all", "duration-300", "hover:scale-100", scale)}>
                    <button
                        class={icon_button}
                        onclick={on_toggle_theme}
                        aria-label={theme.toggle_label()}
                        aria-pressed={theme.is_dark().to_string()}
                    >
                        <span aria-hidden="true">{theme.pick("☾", "☀")}</span>
                    </button>
                </div>
            </nav>
            if props.menu_open {
                <div class={classes!(
                    "fixed", "top-24", "left-1/2", "transform", "-translate-x-1/2", "rounded-2xl", "shadow-lg",
                    "z-40", "w-[90%]", "py-4", "px-6", "backdrop-blur-md", "border",
                    theme.pick("bg-white/90", "bg-gray-800/90"),
                    theme.pick("border-gray-200/50", "border-white/5")
                )}>
                    <div class="flex flex-col gap-4 text-center">
                        { for mobile_links }
                    </div>
                </div>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub owner: Rc<Owner>,
    pub theme: Theme,
    pub revealed: bool,
    pub on_contact: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let theme = props.theme;
    let on_contact = props.on_contact.reform(|_: MouseEvent| ());

    html! {
        <section
            id="home"
            class={classes!(
                "mt-32", "md:mt-48", "w-[90%]", "md:w-[80%]", "max-w-5xl", "flex", "flex-col", "md:flex-row",
                "items-center", "justify-between", "relative", "z-10", "gap-8", "md:gap-0",
                "transition-all", "duration-1000", "ease-out",
                reveal_class(props.revealed)
            )}
        >
            <div class="text-left max-w-xl order-2 md:order-1">
                <h1 class="text-4xl md:text-5xl font-extrabold">
                    <span class={theme.pick("text-gray-500", "text-gray-400")}>{"I'm"}</span>
                    {" "}
                    <span class={theme.pick("text-gray-900", "text-white")}>{props.owner.name.clone()}</span>
                </h1>
                <p class={classes!("mt-4", "text-base", "md:text-lg", muted(theme))}>{props.owner.intro.clone()}</p>
                <div class="mt-6 flex gap-4">
                    <button
                        onclick={on_contact}
                        class={classes!(
                            theme.pick("bg-white hover:bg-gray-50 text-gray-900", "bg-gray-700 hover:bg-gray-600 text-white"),
                            "px-4", "md:px-6", "py-2", "md:py-3", "rounded-md", "flex", "items-center", "gap-2",
                            "font-medium", "shadow-lg", "transition-all"
                        )}
                    >
                        {"Contact Me!"}
                        <span aria-hidden="true">{"➤"}</span>
                    </button>
                </div>
            </div>
            <div class="order-1 md:order-2 md:ml-12">
                <img src={props.owner.hero_image.clone()} alt="emoji" class="w-40 md:w-52 drop-shadow-xl" />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub owner: Rc<Owner>,
    pub theme: Theme,
    pub revealed: bool,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let theme = props.theme;
    let paragraphs = props.owner.about.iter().map(|paragraph| {
        html! {
            <p class={classes!("text-base", "md:text-lg", "mb-4", "md:mb-6", muted(theme))}>{paragraph.clone()}</p>
        }
    });

    html! {
        <section
            id="about"
            class={classes!(
                "w-[90%]", "md:w-[80%]", "max-w-5xl", "rounded-2xl", "p-6", "md:p-12", "shadow-lg",
                "mb-20", "md:mb-32", "flex", "flex-col", "md:flex-row", "items-center", "gap-8", "md:gap-12",
                "transition-all", "duration-1000", "ease-out",
                glass(theme),
                reveal_class(props.revealed)
            )}
        >
            <div class="flex-shrink-0 w-40 h-40 md:w-64 md:h-64 rounded-xl overflow-hidden border-2 border-white/20">
                <img src={props.owner.portrait.clone()} alt="Profile" class="w-full h-full object-contain bg-gray-100/20 p-2" />
            </div>
            <div class="flex-grow">
                <h2 class="text-2xl md:text-4xl font-bold mb-4 md:mb-6">
                    {"I am an ordinary "}
                    <span class={theme.pick("text-gray-900", "text-white")}>{props.owner.role.clone()}</span>
                </h2>
                { for paragraphs }
                <div class="flex gap-4">
                    <button class={classes!(
                        theme.pick("bg-gray-900 hover:bg-gray-800", "bg-gray-700 hover:bg-gray-600"),
                        "text-white", "px-4", "md:px-6", "py-2", "md:py-3", "rounded-md", "flex", "items-center",
                        "gap-2", "font-medium", "shadow-lg", "transition-all"
                    )}>
                        <span aria-hidden="true">{"⤓"}</span>
                        {" Download CV"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct SkillBoxProps {
    skill: Skill,
    theme: Theme,
    max_degrees: f64,
}

#[function_component(SkillBox)]
fn skill_box(props: &SkillBoxProps) -> Html {
    let theme = props.theme;
    let (node, tilt) = use_tilt(props.max_degrees);
    let style = format!("transform: {}; {}", tilt.tilt().to_css(), tilt.glow().to_css_vars());

    html! {
        <div
            ref={node}
            style={style}
            class={classes!(
                "skill-box", "aspect-square", "relative", "rounded-lg", "p-2", "md:p-4", "flex", "flex-col",
                "items-center", "justify-center", "cursor-pointer", "transition-all", "duration-300", "ease-out",
                "hover:z-10",
                glass(theme)
            )}
        >
            <div class="absolute inset-0 rounded-lg overflow-hidden pointer-events-none opacity-0 hover:opacity-100 transition-opacity duration-300">
                <div class="absolute inset-0 skill-glow" />
            </div>
            <div class="w-full h-full flex flex-col items-center justify-center transition-transform duration-300 transform-gpu">
                <div class="w-8 h-8 md:w-12 md:h-12 mb-1 md:mb-2">
                    <img src={props.skill.image.clone()} alt={props.skill.title.clone()} class="w-full h-full object-contain" />
                </div>
                <h3 class="text-sm md:text-lg font-bold text-center">{props.skill.title.clone()}</h3>
                <p class={classes!("text-xs", theme.pick("text-gray-600", "text-gray-400"))}>{props.skill.subtitle.clone()}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub skills: Rc<Vec<Skill>>,
    pub theme: Theme,
    pub revealed: bool,
    pub max_degrees: f64,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let theme = props.theme;
    let marquee = (0..MARQUEE_REPEATS).flat_map(|round| {
        MARQUEE_WORDS.iter().enumerate().map(move |(position, word)| {
            html! {
                <div
                    key={format!("{round}-{position}")}
                    class={classes!(
                        "inline-flex", "items-center", "mx-4", "md:mx-8", "text-3xl", "md:text-6xl", "font-bold",
                        "hover:scale-105", "transition-transform",
                        theme.pick("text-gray-900/10", "text-white/10")
                    )}
                >
                    {*word}
                </div>
            }
        })
    });
    let boxes = props.skills.iter().map(|skill| {
        html! {
            <SkillBox key={skill.id} skill={skill.clone()} theme={theme} max_degrees={props.max_degrees} />
        }
    });

    html! {
        <section id="skills" class="w-full py-8 md:py-12 px-4">
            <div class={classes!(
                "w-full", "overflow-hidden", "relative", "mb-8", "md:mb-12", "transition-all", "duration-1000",
                "ease-out", "delay-300",
                reveal_class(props.revealed)
            )}>
                <div class="flex animate-scroll-left whitespace-nowrap">
                    { for marquee }
                </div>
            </div>
            <div class={classes!(
                "w-full", "max-w-md", "md:max-w-2xl", "mx-auto", "grid", "grid-cols-3", "gap-2", "md:gap-4",
                "transition-all", "duration-1000", "ease-out", "delay-500",
                reveal_class(props.revealed)
            )}>
                { for boxes }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub contact: Rc<Contact>,
    pub socials: Rc<Vec<SocialLink>>,
    pub theme: Theme,
    pub revealed: bool,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let theme = props.theme;
    let field = classes!(
        "w-full", "px-4", "py-2", "rounded-lg", "border", "focus:ring-2", "focus:outline-none", "transition-all",
        theme.pick(
            "bg-white border-gray-300 focus:ring-blue-500 focus:border-blue-500 text-gray-900",
            "bg-gray-700/50 border-gray-600 focus:ring-purple-500 focus:border-purple-500 text-white"
        )
    );
    let label = classes!("block", "text-sm", "font-medium", "mb-1", theme.pick("text-gray-700", "text-gray-300"));
    let heading = classes!("text-sm", "font-medium", theme.pick("text-gray-500", "text-gray-400"));
    let badge = classes!("p-3", "rounded-full", theme.pick("bg-blue-100", "bg-purple-900/30"));
    let anchor = classes!("hover:underline", theme.pick("text-blue-600", "text-purple-400"));

    let socials = props.socials.iter().map(|social| {
        html! {
            <a
                key={social.name.clone()}
                href={social.url.clone()}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={social.name.clone()}
                class={classes!("p-2", "rounded-full", "hover:scale-110", "transition-all", theme.pick("hover:bg-gray-200/50", "hover:bg-gray-700/50"))}
            >
                <img src={social.icon.clone()} alt={social.name.clone()} class="w-6 h-6" />
            </a>
        }
    });

    html! {
        <section
            id="contact"
            class={classes!(
                "w-[90%]", "md:w-[80%]", "max-w-5xl", "py-20", "transition-all", "duration-1000", "ease-out",
                reveal_class(props.revealed)
            )}
        >
            <div class="text-center mb-12">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">{"Get In Touch"}</h2>
                <p class={classes!("text-lg", "max-w-2xl", "mx-auto", muted(theme))}>
                    {"Have a project in mind or want to collaborate? Feel free to reach out!"}
                </p>
            </div>
            <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "gap-8", "rounded-2xl", "p-8", "shadow-lg", glass(theme))}>
                <div class="space-y-6">
                    <h3 class="text-xl font-semibold">{"Send me a message"}</h3>
                    <form class="space-y-4">
                        <div>
                            <label for="name" class={label.clone()}>{"Name"}</label>
                            <input type="text" id="name" class={field.clone()} placeholder="Your name" />
                        </div>
                        <div>
                            <label for="email" class={label.clone()}>{"Email"}</label>
                            <input type="email" id="email" class={field.clone()} placeholder="Your Email" />
                        </div>
                        <div>
                            <label for="message" class={label}>{"Message"}</label>
                            <textarea id="message" rows="4" class={field} placeholder="Your message here..." />
                        </div>
                        <button
                            type="submit"
                            class={classes!(
                                "px-6", "py-3", "rounded-lg", "font-medium", "transition-all", "duration-300", "flex",
                                "items-center", "gap-2", "text-white",
                                theme.pick("bg-blue-600 hover:bg-blue-700", "bg-purple-600 hover:bg-purple-700")
                            )}
                        >
                            <span aria-hidden="true">{"➤"}</span>
                            {"Send Message"}
                        </button>
                    </form>
                </div>
                <div class="space-y-6">
                    <h3 class="text-xl font-semibold">{"Contact Information"}</h3>
                    <div class="space-y-4">
                        <div class="flex items-start gap-4">
                            <div class={badge.clone()} aria-hidden="true">{"✉"}</div>
                            <div>
                                <h4 class={heading.clone()}>{"Email"}</h4>
                                <a href={format!("mailto:{}", props.contact.email)} class={anchor.clone()}>
                                    {props.contact.email.clone()}
                                </a>
                            </div>
                        </div>
                        <div class="flex items-start gap-4">
                            <div class={badge.clone()} aria-hidden="true">{"☏"}</div>
                            <div>
                                <h4 class={heading.clone()}>{"Phone"}</h4>
                                <a href={props.contact.phone_href.clone()} class={anchor}>{props.contact.phone.clone()}</a>
                            </div>
                        </div>
                        <div class="flex items-start gap-4">
                            <div class={badge} aria-hidden="true">{"⌖"}</div>
                            <div>
                                <h4 class={heading.clone()}>{"Location"}</h4>
                                <p class={theme.pick("text-gray-700", "text-gray-300")}>{props.contact.location.clone()}</p>
                            </div>
                        </div>
                    </div>
                    <div class="pt-4">
                        <h4 class={classes!(heading, "mb-3")}>{"Follow me"}</h4>
                        <div class="flex gap-4">
                            { for socials }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
