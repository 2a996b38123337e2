// crates/ayayron-app/src/lib.rs
// Ayayron - Leptos WASM front end (CSR)

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::Router;
use wasm_bindgen::prelude::*;

use ayayron_types::components::classes;
use ayayron_types::{config, RootShell, ShellConfig};

mod components;
mod pages;

use components::{AppNavBar, AppRoutes};

const CONFIG_TOML: &str = include_str!("../config/ayayron.toml");

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    // Initialize logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Ayayron starting...");

    leptos::mount::mount_to_body(App);
}

// ============================================================================
// App Root
// ============================================================================

/// Navbar above the routed view; built once and never re-evaluated
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config: ShellConfig = config::load_or_default(CONFIG_TOML, "ayayron");
    let RootShell { navbar, router } = RootShell::new(&config);
    let brand = navbar.brand().to_string();

    view! {
        <Stylesheet id="bootstrap" href="/css/bootstrap.min.css"/>
        <Title text=brand/>
        <Router>
            <div class=classes::SHELL>
                <AppNavBar navbar=navbar/>
                <AppRoutes router=router/>
            </div>
        </Router>
    }
}
