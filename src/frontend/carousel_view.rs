use std::rc::Rc;
use std::time::Duration;

use folio::carousel::{Carousel, CommitTicket, Slot, Step, TransitionOffset};
use folio::content::Project;
use folio::theme::Theme;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use super::sections::reveal_class;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Navigation {
    Step(Step),
    Jump(usize),
    Click(usize),
}

fn card_classes(slot: Slot, offset: Option<TransitionOffset>, theme: Theme) -> Classes {
    let placement = match slot {
        Slot::Center => {
            "z-20 w-full md:w-2/3 left-1/2 transform -translate-x-1/2 scale-100 opacity-100"
        }
        Slot::LeftPreview => {
            "z-10 w-1/2 md:w-1/3 left-0 scale-90 opacity-70 blur-sm hover:blur-0 hover:opacity-90"
        }
        Slot::RightPreview => {
            "z-10 w-1/2 md:w-1/3 right-0 scale-90 opacity-70 blur-sm hover:blur-0 hover:opacity-90"
        }
        Slot::Hidden => "hidden",
    };
    let shift = offset.map(|offset| match offset {
        TransitionOffset::Settled => "translate-x-0",
        TransitionOffset::ShiftedLeft => "-translate-x-full",
        TransitionOffset::ShiftedRight => "translate-x-full",
    });

    classes!(
        "absolute",
        "h-[400px]",
        "md:h-[500px]",
        "rounded-xl",
        "shadow-2xl",
        "overflow-hidden",
        "border-2",
        "transition-all",
        "duration-500",
        "ease-in-out",
        "cursor-pointer",
        theme.pick("border-gray-200", "border-gray-700"),
        placement,
        shift
    )
}

#[derive(Properties, PartialEq)]
pub struct ProjectCarouselProps {
    pub seed: Rc<Carousel<Project>>,
    pub theme: Theme,
    pub revealed: bool,
    pub transition_delay: Duration,
}

#[function_component(ProjectCarousel)]
pub fn project_carousel(props: &ProjectCarouselProps) -> Html {
    let carousel = use_mut_ref(|| (*props.seed).clone());
    let pending_commit = use_mut_ref(|| None::<Timeout>);
    let rerender = use_force_update();
    let theme = props.theme;

    let navigate = {
        let carousel = carousel.clone();
        let pending_commit = pending_commit.clone();
        let rerender = rerender.clone();
        let delay_ms = u32::try_from(props.transition_delay.as_millis()).unwrap_or(u32::MAX);

        Callback::from(move |navigation: Navigation| {
            let ticket: Option<CommitTicket> = {
                let mut carousel = carousel.borrow_mut();
                match navigation {
                    Navigation::Step(step) => Some(carousel.advance(step)),
                    Navigation::Jump(index) => carousel.jump_to(index),
                    Navigation::Click(index) => carousel.click(index),
                }
            };
            let Some(ticket) = ticket else {
                return;
            };
            rerender.force_update();

            let commit_carousel = carousel.clone();
            let commit_rerender = rerender.clone();
            let timer = Timeout::new(delay_ms, move || {
                if commit_carousel.borrow_mut().commit(ticket) {
                    commit_rerender.force_update();
                }
            });
            // Replacing the handle cancels the superseded timer.
            *pending_commit.borrow_mut() = Some(timer);
        })
    };

    let carousel = carousel.borrow();
    let center = carousel.center_index();

    let cards = carousel.items().iter().enumerate().map(|(index, project)| {
        let is_center = index == center;
        let onclick = navigate.reform(move |_: MouseEvent| Navigation::Click(index));

        html! {
            <div
                key={project.id}
                onclick={onclick}
                class={card_classes(carousel.slot_of(index), carousel.offset_of(index), theme)}
            >
                <img src={project.image.clone()} alt={project.title.clone()} class="w-full h-full object-cover" />
                <div class={classes!(
                    "absolute", "inset-0", "bg-gradient-to-t", "from-black/80", "via-black/40", "to-transparent",
                    "flex", "flex-col", "justify-end", "p-6", "transition-opacity",
                    if is_center { "opacity-100" } else { "opacity-0 hover:opacity-100" }
                )}>
                    <span class={classes!(
                        "text-xs", "font-semibold", "px-2", "py-1", "rounded-full", "self-start", "mb-2", "text-white",
                        project.badge_class()
                    )}>
                        {project.tag.clone()}
                    </span>
                    <h3 class="text-white text-xl md:text-2xl font-bold mb-2">{project.title.clone()}</h3>
                    <p class="text-gray-300 text-sm md:text-base mb-4">{project.description.clone()}</p>
                    if is_center {
                        <a
                            href={project.link.clone()}
                            class="bg-white text-gray-800 px-4 py-2 rounded-md text-sm font-medium hover:bg-gray-100 transition-colors self-start"
                        >
                            {"Visit Project"}
                        </a>
                    }
                </div>
            </div>
        }
    });

    let indicators = (0..carousel.len()).map(|index| {
        let onclick = navigate.reform(move |_: MouseEvent| Navigation::Jump(index));
        let state = if carousel.is_indicator_active(index) {
            theme.pick("bg-gray-800 w-6", "bg-white w-6")
        } else {
            theme.pick("bg-gray-800/30", "bg-white/30")
        };

        html! {
            <button
                key={index}
                onclick={onclick}
                class={classes!("w-3", "h-3", "rounded-full", "transition-all", state)}
                aria-label={format!("Go to project {}", index + 1)}
            />
        }
    });

    let on_prev = navigate.reform(|_: MouseEvent| Navigation::Step(Step::Back));
    let on_next = navigate.reform(|_: MouseEvent| Navigation::Step(Step::Forward));
    let arrow_class = "absolute z-30 p-2 rounded-full bg-white/30 dark:bg-gray-800/30 backdrop-blur-md shadow-lg border dark:border-white/10 border-gray-200 hover:scale-110 transition-transform";

    html! {
        <section
            id="projects"
            class={classes!(
                "w-[90%]", "md:w-[80%]", "max-w-5xl", "py-20", "transition-all", "duration-1000", "ease-out",
                reveal_class(props.revealed)
            )}
        >
            <h2 class="text-3xl md:text-4xl font-bold mb-12 text-center">{"My Projects"}</h2>
            <div class="relative h-[500px] md:h-[600px] overflow-hidden">
                <button onclick={on_prev} class={classes!(arrow_class, "left-0", "md:left-4")} aria-label="Previous project">
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                    </svg>
                </button>
                <button onclick={on_next} class={classes!(arrow_class, "right-0", "md:right-4")} aria-label="Next project">
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                    </svg>
                </button>
                <div class="relative w-full h-full">
                    { for cards }
                </div>
                <div class="absolute bottom-4 left-0 right-0 flex justify-center gap-2 z-20">
                    { for indicators }
                </div>
            </div>
        </section>
    }
}
