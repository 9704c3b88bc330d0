use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

use crate::{router::home_url, state::auth::use_auth, utils::browser};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);

    // Already signed in: skip the form and go home.
    create_effect(move |_| {
        if is_authenticated.get() {
            browser::navigate(&home_url());
        }
    });

    view! {
        <Show when=move || !is_authenticated.get() fallback=|| ()>
            <LoginPanel/>
        </Show>
    }
}
