use crate::{
    pages::login::components::messages::{ErrorNotification, InlineFieldMessage},
    pages::login::utils::LoginFormState,
    router::signup_url,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    form: LoginFormState,
    pending: MaybeSignal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
    on_notification_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        "Log in to your account"
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        "Welcome back! Please enter your details"
                    </p>
                </div>

                <ErrorNotification
                    open=form.notification_open
                    message=form.message
                    on_close=on_notification_close
                />

                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="space-y-4">
                        <div>
                            <label for="email" class="block text-sm text-gray-900 pb-2">
                                "E-mail address"
                            </label>
                            <input
                                id="email"
                                name="email"
                                type="email"
                                required
                                class="appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                                placeholder="E-mail address"
                                prop:value=form.email
                                on:input=move |ev| on_email_input.call(event_target_value(&ev))
                            />
                            <InlineFieldMessage message=form.email_message />
                        </div>
                        <div>
                            <label for="password" class="block text-sm text-gray-900 pb-2">
                                "Password"
                            </label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                required
                                class="appearance-none relative block w-full px-3 py-2 border border-gray-300 placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm"
                                placeholder="Password"
                                prop:value=form.password
                                on:input=move |ev| on_password_input.call(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div>
                        <button
                            type="submit"
                            disabled=pending
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                        >
                            {move || if pending.get() { "Logging in..." } else { "Log in" }}
                        </button>
                    </div>
                </form>

                <p class="text-center text-sm text-gray-600">
                    "Don't have an account?"
                    <a href=signup_url() class="pl-2 font-semibold text-blue-600 underline hover:text-blue-700">
                        "Sign up"
                    </a>
                </p>
            </div>
        </div>
    }
}
