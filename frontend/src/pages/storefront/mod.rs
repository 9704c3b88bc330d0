use leptos::*;

pub mod repository;
pub mod view_model;

mod panel;

pub use panel::StorefrontPanel;

#[component]
pub fn StorefrontPage() -> impl IntoView {
    view! { <StorefrontPanel/> }
}
