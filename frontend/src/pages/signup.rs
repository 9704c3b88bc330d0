use leptos::*;

use crate::router::login_url;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4">
            <div class="max-w-md w-full text-center space-y-4">
                <h2 class="text-3xl font-extrabold text-gray-900">"Create your account"</h2>
                <p class="text-sm text-gray-600">
                    "Sign-up is handled by your tenant administrator. Once your account exists, log in below."
                </p>
                <a href=login_url() class="font-semibold text-blue-600 underline hover:text-blue-700">
                    "Back to login"
                </a>
            </div>
        </div>
    }
}
