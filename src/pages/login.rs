//! Login page: phone number and password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{field_error, field_input, field_value, finish_submit};
use crate::components::field::TextField;
use crate::config::ApiConfig;
use crate::flow::{GuardedNavigator, MountGuard, submit_login};
use crate::forms::login::{LoginDraft, LoginField};
use crate::forms::state::FormState;
use crate::net::api::HttpAuthApi;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = HttpAuthApi::new(use_context::<ApiConfig>().unwrap_or_default());
    let form = RwSignal::new(FormState::<LoginDraft>::new());
    let navigate = use_navigate();

    let mounted = MountGuard::new();
    let cleanup = mounted.clone();
    on_cleanup(move || cleanup.release());

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
            let outcome = submit_login(&api, &navigator, &input).await;
            finish_submit(form, outcome);
        });
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Вхід в акаунт"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        id="phone"
                        label="Номер телефону *"
                        input_type="tel"
                        placeholder="Номер телефону"
                        value=field_value(form, |d: &LoginDraft| d.phone.clone())
                        on_input=field_input(form, |d: &mut LoginDraft, v: String| d.phone = v)
                        error=field_error(form, LoginField::Phone)
                    />
                    <TextField
                        id="password"
                        label="Пароль *"
                        input_type="password"
                        placeholder="Не менше 7 символів"
                        value=field_value(form, |d: &LoginDraft| d.password.clone())
                        on_input=field_input(form, |d: &mut LoginDraft, v: String| d.password = v)
                        error=field_error(form, LoginField::Password)
                    />
                    <div class="auth-form__actions">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || !form.with(FormState::can_submit)
                        >
                            "Увійти"
                        </button>
                        <button
                            type="button"
                            class="btn btn-error"
                            disabled=move || !form.with(FormState::can_reset)
                            on:click=move |_| {
                                form.update(|state| {
                                    state.reset();
                                });
                            }
                        >
                            "Очистити поля"
                        </button>
                    </div>
                </form>
            </div>
        </section>
    }
}
