use shared::navigation::{SidebarLayout, SidebarState};
use shared::Section;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_config::use_config;
use crate::hooks::use_viewport_width::use_viewport_width;

#[derive(Properties, PartialEq)]
pub struct SidebarProps {
    pub current_section: Section,
    pub on_navigate: Callback<Section>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let config = use_config();
    let viewport_width = use_viewport_width();
    let state = use_state(|| {
        SidebarState::new(props.current_section, viewport_width, config.mobile_breakpoint_px)
    });

    // Follow viewport changes
    use_effect_with(viewport_width, {
        let state = state.clone();
        move |width| {
            let mut next = (*state).clone();
            next.resize(*width);
            if next != *state {
                state.set(next);
            }
            || ()
        }
    });

    // Parent owns the current section; keep the highlight in sync with it
    use_effect_with(props.current_section, {
        let state = state.clone();
        move |section| {
            if state.current != *section {
                let mut next = (*state).clone();
                next.current = *section;
                state.set(next);
            }
            || ()
        }
    });

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            next.toggle();
            state.set(next);
        })
    };

    let on_backdrop_click = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = (*state).clone();
            next.close_drawer();
            state.set(next);
        })
    };

    let (sidebar_class, show_labels, show_backdrop) = match state.layout {
        SidebarLayout::Desktop { collapsed } => (
            classes!("sidebar", "desktop", collapsed.then_some("collapsed")),
            !collapsed,
            false,
        ),
        SidebarLayout::Mobile { drawer_open } => (
            classes!("sidebar", "mobile", drawer_open.then_some("open")),
            true,
            drawer_open,
        ),
    };

    html! {
        <>
            if state.layout.is_mobile() {
                <button class="sidebar-drawer-button" onclick={on_toggle.clone()} aria-label="Open menu">
                    {"☰"}
                </button>
            }
            if show_backdrop {
                <div class="sidebar-backdrop" onclick={on_backdrop_click}></div>
            }
            <aside class={sidebar_class}>
                <div class="sidebar-brand">
                    <span class="brand-mark">{"🦀"}</span>
                    if show_labels {
                        <span class="brand-name">{shared::content::PRODUCT_NAME}</span>
                    }
                    if !state.layout.is_mobile() {
                        <button class="sidebar-collapse" onclick={on_toggle} aria-label="Toggle sidebar">
                            {if show_labels { "«" } else { "»" }}
                        </button>
                    }
                </div>
                <nav class="sidebar-nav">
                    {for state.entries().into_iter().map(|(item, active)| {
                        let onclick = {
                            let state = state.clone();
                            let on_navigate = props.on_navigate.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*state).clone();
                                if let Some(section) = next.navigate(item.section.id()) {
                                    state.set(next);
                                    on_navigate.emit(section);
                                }
                            })
                        };
                        html! {
                            <button
                                key={item.section.id()}
                                class={classes!("sidebar-item", active.then_some("active"))}
                                aria-current={active.then_some("page")}
                                title={item.label}
                                {onclick}
                            >
                                <span class="sidebar-icon">{item.icon}</span>
                                if show_labels {
                                    <span class="sidebar-label">{item.label}</span>
                                }
                            </button>
                        }
                    })}
                </nav>
            </aside>
        </>
    }
}
