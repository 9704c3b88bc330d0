use leptos::*;

#[component]
pub fn InlineFieldMessage(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <p class="mt-1 text-sm text-status-error-text">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Dismissable error banner shown after a failed login. The view model hides
/// it again a few seconds later.
#[component]
pub fn ErrorNotification(
    open: RwSignal<bool>,
    message: RwSignal<Option<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="flex items-center justify-between gap-3 bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded"
                role="alert"
            >
                <span>{move || message.get().unwrap_or_default()}</span>
                <button
                    type="button"
                    class="font-bold"
                    aria-label="Close"
                    on:click=move |_| on_close.call(())
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}
