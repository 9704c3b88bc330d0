use leptos::*;
use leptos_router::*;

use crate::{
    api::{ApiClient, CmsClient},
    components::guard::RequireAuth,
    pages::{HomePage, LoginPage, SignupPage, StorefrontPage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/signup", "/:tenant"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/:tenant"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/signup"];

pub fn home_url() -> String {
    "/".to_string()
}

pub fn login_url() -> String {
    "/login".to_string()
}

pub fn signup_url() -> String {
    "/signup".to_string()
}

/// Tenant-scoped storefront route; an empty tenant falls back to home.
pub fn tenant_home_url(tenant: &str) -> String {
    format!("/{}", tenant)
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_context(CmsClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/signup" view=SignupPage/>
                    <Route path="/:tenant" view=ProtectedStorefront/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedStorefront() -> impl IntoView {
    view! { <RequireAuth><StorefrontPage/></RequireAuth> }
}
