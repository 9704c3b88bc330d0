use super::view_model::{field_text, use_storefront_view_model};
use crate::{components::layout::LoadingSpinner, utils::storage};
use leptos::*;

#[component]
pub fn StorefrontPanel() -> impl IntoView {
    let vm = use_storefront_view_model();
    let loading = vm.loading;
    let entry_fields = vm.entry_fields;
    let tenant = storage::tenant().unwrap_or_else(|| "storefront".to_string());

    let title = move || {
        field_text(&entry_fields.get(), "title").unwrap_or_else(|| "Welcome back".to_string())
    };
    let tagline = move || field_text(&entry_fields.get(), "tagline");

    view! {
        <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
            <p class="text-sm font-semibold uppercase tracking-wider text-gray-500">{tenant}</p>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
                <h1 class="mt-2 text-4xl font-extrabold text-gray-900">{title.clone()}</h1>
                {move || {
                    tagline()
                        .map(|text| view! { <p class="mt-3 text-lg text-gray-600">{text}</p> }.into_view())
                        .unwrap_or_else(|| ().into_view())
                }}
            </Show>
        </div>
    }
}
