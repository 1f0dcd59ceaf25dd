//! Dashboard landing view shown after a successful login.
//!
//! The real dashboard belongs to another app; this route only confirms the
//! sign-in and links back to the forms.

use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Ласкаво просимо"</h1>
                <p class="auth-card__subtitle">"Ви успішно увійшли до акаунта."</p>
                <a class="btn btn-primary" href=AppRoute::Login.path()>"Увійти знову"</a>
            </div>
        </section>
    }
}
