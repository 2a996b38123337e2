// crates/goldfish-app/src/lib.rs
// GoldFishes - Leptos WASM front end (CSR), mounted into a host element

use leptos::prelude::*;
use leptos_meta::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use ayayron_types::goldfish::APP_CLASS;
use ayayron_types::{config, AppError, GoldfishApp, GoldfishConfig, Result};

const CONFIG_TOML: &str = include_str!("../config/goldfish.toml");

// ============================================================================
// WASM Entry Point
// ============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let config: GoldfishConfig = config::load_or_default(CONFIG_TOML, "goldfish");

    if let Err(e) = mount(config) {
        log::error!("GoldFishes failed to start: {}", e);
    }
}

/// Mount `App` into the element with id `config.mount_id`
fn mount(config: GoldfishConfig) -> Result<()> {
    let app = GoldfishApp::from_config(&config);
    let mount_id = config.mount_id;

    let root = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| AppError::Mount("no document".to_string()))?
        .get_element_by_id(&mount_id)
        .ok_or_else(|| AppError::Mount(format!("no element with id '{}'", mount_id)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| AppError::Mount(format!("element '{}' is not an HTML element", mount_id)))?;

    log::info!("Mounting {} into #{}", app.title(), mount_id);

    leptos::mount::mount_to(root, move || view! { <App app=app/> }).forget();
    Ok(())
}

// ============================================================================
// App Root
// ============================================================================

#[component]
pub fn App(app: GoldfishApp) -> impl IntoView {
    provide_meta_context();
    let title = app.title().to_string();

    view! {
        <Title text=title.clone()/>
        <div class=APP_CLASS>
            <h1>{title}</h1>
        </div>
    }
}
