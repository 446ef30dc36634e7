use super::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let form = vm.form;

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            username=form.username.into()
            password=form.password.into()
            error=vm.error.into()
            pending=vm.login_action.pending().into()
            on_username_input=Callback::new(move |value| form.username.set(value))
            on_password_input=Callback::new(move |value| form.password.set(value))
            on_submit=on_submit
        />
    }
}
