use super::{
    repository::LoginRepository,
    utils::{LoginFormState, LOGIN_FAILED_MESSAGE},
};
use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    router::tenant_home_url,
    state::auth,
    utils::{browser, storage},
};
use leptos::*;

#[cfg(target_arch = "wasm32")]
pub const NOTIFICATION_AUTO_HIDE_MS: u32 = 3_000;

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub tenant: String,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let (_auth, set_auth) = auth::use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(std::rc::Rc::new(api));

    let form = LoginFormState::default();
    // The tenant is read from persisted state once, when the page renders.
    let tenant = storage::tenant().unwrap_or_default();

    let login_action = create_action(move |request: &LoginRequest| {
        let request = request.clone();
        let repo = repository.clone();
        async move {
            let destination = tenant_home_url(&request.tenant);
            match auth::login_request(request, &repo, set_auth).await {
                Ok(_user) => {
                    form.password.set(String::new());
                    form.message.set(None);
                    form.notification_open.set(false);
                    browser::navigate(&destination);
                    Ok(())
                }
                Err(err) => {
                    // Invalid credentials, network failure and server errors
                    // all collapse into the same generic notification.
                    log::error!("login failed: {}", err);
                    form.message.set(Some(LOGIN_FAILED_MESSAGE.to_string()));
                    form.notification_open.set(true);
                    Err(err)
                }
            }
        }
    });

    #[cfg(target_arch = "wasm32")]
    create_effect(move |_| {
        if form.notification_open.get() {
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(NOTIFICATION_AUTO_HIDE_MS).await;
                form.notification_open.set(false);
            });
        }
    });

    LoginViewModel {
        form,
        tenant,
        login_action,
    }
}
