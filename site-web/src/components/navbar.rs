//! Navigation bar with the collapsible mobile menu

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::icons::{Icon, IconKind};
use crate::routes::{SiteRoute, NAV_LINKS};
use crate::state::NavigationViewState;
use crate::utils::constants::APP_STORE_URL;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let nav = RwSignal::new(NavigationViewState::new(location.pathname.get_untracked()));

    // Keep highlighting in step with history and footer navigation.
    Effect::new(move |_| {
        let path = location.pathname.get();
        nav.update(|state| state.set_current_path(&path));
    });

    let toggle_menu = move |_| {
        nav.update(|state| state.toggle_menu());
        log::debug!("[NAV] Menu open: {}", nav.with_untracked(|state| state.is_menu_open()));
    };

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <A href=SiteRoute::Home.path()>
                    <span class="nav-logo" on:click=move |_| nav.update(|state| state.select_link("/"))>
                        <Icon kind=IconKind::Smartphone size=28 class="nav-logo-icon"/>
                        "Expenzez"
                    </span>
                </A>

                <div class="nav-links">
                    <NavLinks nav=nav/>
                    <a href=APP_STORE_URL class="btn btn-primary" target="_blank" rel="noopener noreferrer">
                        "Download App"
                    </a>
                </div>

                <div class="mobile-menu-btn">
                    <button
                        type="button"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || nav.with(|state| state.is_menu_open()).to_string()
                        on:click=toggle_menu
                    >
                        {move || {
                            if nav.with(|state| state.is_menu_open()) {
                                view! { <Icon kind=IconKind::Close/> }.into_any()
                            } else {
                                view! { <Icon kind=IconKind::Menu/> }.into_any()
                            }
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || nav.with(|state| state.is_menu_open())>
                <div class="mobile-menu">
                    <NavLinks nav=nav/>
                    <a href=APP_STORE_URL class="btn btn-primary" target="_blank" rel="noopener noreferrer">
                        "Download App"
                    </a>
                </div>
            </Show>
        </nav>
    }
}

/// Home, Support and Privacy links. Following one closes the mobile menu.
#[component]
fn NavLinks(nav: RwSignal<NavigationViewState>) -> impl IntoView {
    NAV_LINKS
        .into_iter()
        .map(|(route, label)| {
            let path = route.path();
            view! {
                <A href=path>
                    <span
                        class="nav-link"
                        class:active=move || nav.with(|state| state.is_active(path))
                        on:click=move |_| nav.update(|state| state.select_link(path))
                    >
                        {label}
                    </span>
                </A>
            }
        })
        .collect_view()
}
