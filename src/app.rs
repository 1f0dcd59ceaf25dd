//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::routes::AppRoute;

/// Root application component.
///
/// Provides the auth service config and maps every `AppRoute` to its page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_build_env());

    view! {
        <Title text="Auth Portal"/>

        <Router>
            <Routes fallback=|| "Сторінку не знайдено.".into_view()>
                <Route path=StaticSegment(AppRoute::Register.segment()) view=RegisterPage/>
                <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
            </Routes>
        </Router>
    }
}
