//! Submit flow shared by the registration and login pages.
//!
//! Each submit re-checks the validated input, renames it into the wire
//! payload, posts it once and navigates on success. Failures are handed back
//! to the page, which shows them in an alert; entered values are untouched.
//!
//! A response can arrive after the page that sent it has unmounted. Pages
//! therefore navigate through a [`GuardedNavigator`] bound to a
//! [`MountGuard`] that their cleanup hook releases.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::SubmitError;
use crate::forms::login::{LoginInput, LoginPayload};
use crate::forms::register::{RegisterPayload, RegistrationInput};
use crate::net::api::AuthApi;
use crate::routes::AppRoute;

/// Something that can move the app to another path.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Shared "is the page still mounted" flag.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the page as gone. Every clone observes it.
    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigator that drops requests once its page has unmounted.
pub struct GuardedNavigator<F> {
    navigate: F,
    guard: MountGuard,
}

impl<F: Fn(&str)> GuardedNavigator<F> {
    pub fn new(navigate: F, guard: MountGuard) -> Self {
        Self { navigate, guard }
    }
}

impl<F: Fn(&str)> Navigator for GuardedNavigator<F> {
    fn navigate(&self, path: &str) {
        if self.guard.is_mounted() {
            (self.navigate)(path);
        } else {
            log::warn!("dropping navigation to {path}: page already unmounted");
        }
    }
}

/// Send a registration and go to `/login` on success.
///
/// # Errors
///
/// Returns `SubmitError::Rejected` if the input fails re-validation (nothing
/// is sent), or the transport/status error from the auth service.
pub async fn submit_registration<A, N>(
    api: &A,
    navigator: &N,
    input: &RegistrationInput,
) -> Result<AppRoute, SubmitError>
where
    A: AuthApi + ?Sized,
    N: Navigator + ?Sized,
{
    let input = input.revalidate().map_err(|errors| SubmitError::Rejected(errors.to_string()))?;
    let payload = RegisterPayload::from(&input);
    let body = api.register(&payload).await?;
    log::info!("registration accepted: {body}");
    Ok(go(navigator, AppRoute::Login))
}

/// Send a login and go to `/dashboard` on success.
///
/// # Errors
///
/// Returns `SubmitError::Rejected` if the input fails re-validation (nothing
/// is sent), or the transport/status error from the auth service.
pub async fn submit_login<A, N>(api: &A, navigator: &N, input: &LoginInput) -> Result<AppRoute, SubmitError>
where
    A: AuthApi + ?Sized,
    N: Navigator + ?Sized,
{
    let input = input.revalidate().map_err(|errors| SubmitError::Rejected(errors.to_string()))?;
    let payload = LoginPayload::from(&input);
    let body = api.login(&payload).await?;
    log::info!("login accepted: {body}");
    Ok(go(navigator, AppRoute::Dashboard))
}

fn go<N: Navigator + ?Sized>(navigator: &N, route: AppRoute) -> AppRoute {
    log::debug!("navigating to {route}");
    navigator.navigate(route.path());
    route
}
