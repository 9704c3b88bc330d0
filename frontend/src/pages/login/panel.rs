use crate::{
    api::LoginRequest,
    pages::login::{components::form::LoginForm, utils, view_model::use_login_view_model},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;
    let login_action = vm.login_action;
    let pending = login_action.pending();
    let tenant = vm.tenant.clone();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email = form.email.get_untracked();
        let password = form.password.get_untracked();
        // Emptiness is the only thing that blocks; a malformed email submits.
        if !utils::credentials_present(&email, &password) {
            return;
        }

        login_action.dispatch(LoginRequest {
            email,
            password,
            tenant: tenant.clone(),
        });
    });

    let email_input = Callback::new(move |value: String| {
        form.email_message.set(utils::email_message(&value));
        form.email.set(value);
    });
    let password_input = Callback::new(move |value: String| form.password.set(value));
    let notification_close = Callback::new(move |_: ()| form.notification_open.set(false));

    view! {
        <LoginForm
            form=form
            pending=pending.into()
            on_email_input=email_input
            on_password_input=password_input
            on_submit=handle_submit
            on_notification_close=notification_close
        />
    }
}
