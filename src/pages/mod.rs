//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one `FormState` signal and the submit orchestration, and
//! delegates input rendering to `components::field`. The helpers below turn a
//! form signal into the per-field signals and callbacks those inputs take.

pub mod dashboard;
pub mod login;
pub mod register;

use leptos::prelude::*;

use crate::error::SubmitError;
use crate::forms::state::{FormDraft, FormState};
use crate::routes::AppRoute;
use crate::util::browser::alert;

/// Read one draft value as a derived signal.
pub(crate) fn field_value<D, T>(form: RwSignal<FormState<D>>, read: fn(&D) -> T) -> Signal<T>
where
    D: FormDraft,
    FormState<D>: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    Signal::derive(move || form.with(|state| read(state.values())))
}

/// Write one draft value on every input event.
pub(crate) fn field_input<D, T>(form: RwSignal<FormState<D>>, write: fn(&mut D, T)) -> Callback<T>
where
    D: FormDraft,
    FormState<D>: Send + Sync + 'static,
    T: 'static,
{
    Callback::new(move |value: T| form.update(|state| state.edit(|draft| write(draft, value))))
}

/// Inline error message for `field`, if any.
pub(crate) fn field_error<D>(form: RwSignal<FormState<D>>, field: D::Field) -> Signal<Option<String>>
where
    D: FormDraft,
    D::Field: Send + Sync + 'static,
    FormState<D>: Send + Sync + 'static,
{
    Signal::derive(move || form.with(|state| state.error(field).map(str::to_owned)))
}

/// Apply a finished submit to the form and surface failures.
///
/// The form may be gone by the time the response lands, so updates go through
/// `try_update` and silently no-op on a disposed signal.
pub(crate) fn finish_submit<D>(form: RwSignal<FormState<D>>, outcome: Result<AppRoute, SubmitError>)
where
    D: FormDraft,
    FormState<D>: Send + Sync + 'static,
{
    form.try_update(|state| state.finish(&outcome));
    if let Err(err) = &outcome {
        log::warn!("submit failed: {err}");
        alert(&err.alert_message());
        form.try_update(FormState::acknowledge_error);
    }
}
