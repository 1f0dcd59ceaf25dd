//! Registration page: account details, terms checkbox, submit and clear.

use leptos::html::Input;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{field_error, field_input, field_value, finish_submit};
use crate::components::field::{CheckboxField, TextField};
use crate::config::ApiConfig;
use crate::flow::{GuardedNavigator, MountGuard, submit_registration};
use crate::forms::register::{RegisterDraft, RegisterField};
use crate::forms::state::FormState;
use crate::net::api::HttpAuthApi;
use crate::util::browser::focus_on_mount;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = HttpAuthApi::new(use_context::<ApiConfig>().unwrap_or_default());
    let form = RwSignal::new(FormState::<RegisterDraft>::new());
    let navigate = use_navigate();

    let mounted = MountGuard::new();
    let cleanup = mounted.clone();
    on_cleanup(move || cleanup.release());

    let username_ref = NodeRef::<Input>::new();
    focus_on_mount(username_ref);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = form.try_update(FormState::begin_submit).flatten() else {
            return;
        };
        let api = api.clone();
        let navigate = navigate.clone();
        let navigator =
            GuardedNavigator::new(move |path: &str| navigate(path, NavigateOptions::default()), mounted.clone());
        leptos::task::spawn_local(async move {
            let outcome = submit_registration(&api, &navigator, &input).await;
            finish_submit(form, outcome);
        });
    };

    let on_reset = move |_| {
        form.update(|state| {
            state.reset();
        });
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Створення акаунта"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        id="username"
                        label="Ім'я користувача *"
                        placeholder="Ваше ім'я"
                        node_ref=username_ref
                        value=field_value(form, |d: &RegisterDraft| d.username.clone())
                        on_input=field_input(form, |d: &mut RegisterDraft, v: String| d.username = v)
                        error=field_error(form, RegisterField::Username)
                    />
                    <TextField
                        id="phone"
                        label="Номер телефону *"
                        input_type="tel"
                        placeholder="Номер телефону"
                        value=field_value(form, |d: &RegisterDraft| d.phone.clone())
                        on_input=field_input(form, |d: &mut RegisterDraft, v: String| d.phone = v)
                        error=field_error(form, RegisterField::Phone)
                    />
                    <TextField
                        id="age"
                        label="Вік"
                        input_type="number"
                        placeholder="Від 18 до 80 років"
                        value=field_value(form, |d: &RegisterDraft| d.age.clone())
                        on_input=field_input(form, |d: &mut RegisterDraft, v: String| d.age = v)
                        error=field_error(form, RegisterField::Age)
                    />
                    <TextField
                        id="email"
                        label="Адреса електронної пошти *"
                        input_type="email"
                        placeholder="name@mail.com"
                        value=field_value(form, |d: &RegisterDraft| d.email.clone())
                        on_input=field_input(form, |d: &mut RegisterDraft, v: String| d.email = v)
                        error=field_error(form, RegisterField::Email)
                    />
                    <TextField
                        id="password"
                        label="Пароль *"
                        input_type="password"
                        placeholder="Не менше 7 символів"
                        value=field_value(form, |d: &RegisterDraft| d.password.clone())
                        on_input=field_input(form, |d: &mut RegisterDraft, v: String| d.password = v)
                        error=field_error(form, RegisterField::Password)
                    />
                    <TextField
                        id="confirmPassword"
                        label="Підтвердження пароля *"
                        input_type="password"
                        placeholder="Не менше 7 символів"
                        value=field_value(form, |d: &RegisterDraft| d.confirm_password.clone())
                        on_input=field_input(form, |d: &mut RegisterDraft, v: String| d.confirm_password = v)
                        error=field_error(form, RegisterField::ConfirmPassword)
                    />
                    <CheckboxField
                        id="terms"
                        label="Я приймаю Умови використання"
                        checked=field_value(form, |d: &RegisterDraft| d.terms)
                        on_toggle=field_input(form, |d: &mut RegisterDraft, v: bool| d.terms = v)
                        error=field_error(form, RegisterField::Terms)
                    />
                    <div class="auth-form__actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || !form.with(FormState::can_submit)
                        >
                            "Створити акаунт"
                        </button>
                        <button
                            type="button"
                            class="btn btn-error"
                            disabled=move || !form.with(FormState::can_reset)
                            on:click=on_reset
                        >
                            "Очистити поля"
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
