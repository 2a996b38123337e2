// crates/ayayron-app/src/components.rs
// Navbar and route outlet, driven by the shared shell model

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use ayayron_types::components::classes;
use ayayron_types::{Location, NavBar, NavBarState, Router, View};

use crate::pages::Homepage;

// ============================================================================
// Navigation Bar
// ============================================================================

#[component]
pub fn AppNavBar(navbar: NavBar) -> impl IntoView {
    // Collapse state is local to the navbar; nothing else subscribes to it
    let (state, set_state) = signal(navbar.state());
    let collapse_on_select = navbar.collapse_on_select();
    let brand = navbar.brand().to_string();

    let icon_bars = (0..NavBar::ICON_BARS)
        .map(|_| view! { <span class=classes::ICON_BAR></span> })
        .collect_view();

    view! {
        <div class=classes::NAVBAR>
            <nav class=classes::NAV>
                <div class=classes::NAV_CONTAINER>
                    <div class=classes::NAV_HEADER>
                        <span
                            class=classes::BRAND
                            on:click=move |_| set_state.update(|s| s.select(collapse_on_select))
                        >
                            <A href=NavBar::BRAND_HREF>{brand}</A>
                        </span>
                        <button
                            type="button"
                            class=move || state.get().toggle_class()
                            aria-expanded=move || state.get().aria_expanded()
                            on:click=move |_| set_state.update(NavBarState::toggle)
                        >
                            <span class=classes::SR_ONLY>{NavBar::TOGGLE_LABEL}</span>
                            {icon_bars}
                        </button>
                    </div>
                </div>
            </nav>
        </div>
    }
}

// ============================================================================
// Route Outlet
// ============================================================================

/// Renders the view the router model selects for the current location, or
/// nothing when no route matches.
#[component]
pub fn AppRoutes(router: Router) -> impl IntoView {
    let location = use_location();

    move || {
        let current = Location::parse(&location.pathname.get());
        router.select(&current).map(|target| render_view(target, &router))
    }
}

fn render_view(target: View, router: &Router) -> AnyView {
    match target {
        View::Homepage => view! { <Homepage page=router.homepage().clone()/> }.into_any(),
    }
}
