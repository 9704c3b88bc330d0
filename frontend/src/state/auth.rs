use crate::{
    api::{ApiError, LoginRequest, UserResponse},
    pages::login::repository::LoginRepository,
    utils::storage,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

fn create_auth_context() -> AuthContext {
    // The session survives reloads through local storage; restoring it is
    // synchronous, so the context is never in a loading state at creation.
    let user = storage::read_current_user();
    let (auth_state, set_auth_state) = create_signal(AuthState {
        is_authenticated: user.is_some(),
        user,
        loading: false,
    });
    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Synchronizes the process-wide session with a freshly authenticated user.
pub fn sync_auth(set_auth_state: WriteSignal<AuthState>, user: UserResponse) {
    storage::persist_current_user(&user);
    set_auth_state.update(|state| {
        state.user = Some(user);
        state.is_authenticated = true;
        state.loading = false;
    });
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<UserResponse, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(user) => {
            sync_auth(set_auth_state, user.clone());
            Ok(user)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
            assert!(!snapshot.loading);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn sync_auth_marks_state_authenticated_and_persists_user() {
        storage::clear_current_user();
        with_runtime(|| {
            let (state, set_state) = create_signal(AuthState::default());
            let user = UserResponse {
                id: "u1".into(),
                email: "alice@example.com".into(),
                full_name: None,
                tenant: Some("acme".into()),
            };
            sync_auth(set_state, user);

            let snapshot = state.get();
            assert!(snapshot.is_authenticated);
            assert_eq!(snapshot.user.as_ref().map(|u| u.id.as_str()), Some("u1"));
            assert_eq!(
                storage::read_current_user().map(|u| u.email),
                Some("alice@example.com".to_string())
            );
        });
        storage::clear_current_user();
    }
}
