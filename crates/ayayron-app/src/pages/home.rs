// crates/ayayron-app/src/pages/home.rs
// Home page component

use leptos::prelude::*;

use ayayron_types::components::classes;

#[component]
pub fn Homepage(page: ayayron_types::Homepage) -> impl IntoView {
    view! {
        <div class=classes::HOMEPAGE>
            <div class=classes::LANDER>
                <h1>{page.heading().to_string()}</h1>
            </div>
        </div>
    }
}
