//! Per-instance form state: draft values, field errors and submit phase.
//!
//! DESIGN
//! ======
//! Pages keep one `RwSignal<FormState<_>>` per mounted form. Button
//! enablement and inline errors are read from here, never computed in views.
//!
//! Phase flow:
//! `Idle -> Validating -> Submitting -> Navigated | ErrorShown`, and
//! `ErrorShown -> Idle` once the alert is dismissed. A failed validation
//! drops straight back to `Idle`.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::error::SubmitError;
use crate::routes::AppRoute;

use super::login::{LoginDraft, LoginField, LoginInput};
use super::register::{RegisterDraft, RegisterField, RegistrationInput};
use super::schema::{FieldErrors, FormField, Validation};

/// A draft type with a schema attached.
pub trait FormDraft: Clone + Default + PartialEq {
    type Field: FormField;
    type Input;

    fn check_draft(&self) -> Validation<Self::Input, Self::Field>;
}

impl FormDraft for RegisterDraft {
    type Field = RegisterField;
    type Input = RegistrationInput;

    fn check_draft(&self) -> Validation<RegistrationInput, RegisterField> {
        self.validate()
    }
}

impl FormDraft for LoginDraft {
    type Field = LoginField;
    type Input = LoginInput;

    fn check_draft(&self) -> Validation<LoginInput, LoginField> {
        self.validate()
    }
}

/// Where a form is in its submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting edits; nothing in flight.
    #[default]
    Idle,
    /// Schema check running for a submit attempt.
    Validating,
    /// Request in flight; submit and reset are locked.
    Submitting,
    /// The service accepted the form and the router moved on.
    Navigated,
    /// A submit failed and the alert is up.
    ErrorShown,
}

#[derive(Clone, Debug)]
pub struct FormState<D: FormDraft> {
    initial: D,
    values: D,
    errors: FieldErrors<D::Field>,
    phase: FormPhase,
    attempted: bool,
}

impl<D: FormDraft> Default for FormState<D> {
    fn default() -> Self {
        Self::with_initial(D::default())
    }
}

impl<D: FormDraft> FormState<D> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `initial`; dirtiness is measured against it.
    #[must_use]
    pub fn with_initial(initial: D) -> Self {
        Self {
            values: initial.clone(),
            initial,
            errors: FieldErrors::default(),
            phase: FormPhase::Idle,
            attempted: false,
        }
    }

    #[must_use]
    pub fn values(&self) -> &D {
        &self.values
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors<D::Field> {
        &self.errors
    }

    /// Message to render next to `field`, if it failed.
    #[must_use]
    pub fn error(&self, field: D::Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Apply one keystroke-level change.
    ///
    /// Before the first submit attempt errors are left alone; afterwards the
    /// whole draft is re-checked on every edit so messages clear as the user
    /// fixes them.
    pub fn edit(&mut self, change: impl FnOnce(&mut D)) {
        change(&mut self.values);
        if self.attempted {
            self.errors = match self.values.check_draft() {
                Validation::Valid(_) => FieldErrors::default(),
                Validation::Invalid(errors) => errors,
            };
        }
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_dirty() && !self.is_submitting()
    }

    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.is_dirty() && !self.is_submitting()
    }

    /// Validate the draft and, when clean, lock the form for sending.
    ///
    /// Returns the typed input to send, or `None` when submitting is not
    /// allowed right now or the draft has errors.
    pub fn begin_submit(&mut self) -> Option<D::Input> {
        if !self.can_submit() {
            return None;
        }
        self.attempted = true;
        self.phase = FormPhase::Validating;
        match self.values.check_draft() {
            Validation::Valid(input) => {
                self.errors = FieldErrors::default();
                self.phase = FormPhase::Submitting;
                Some(input)
            }
            Validation::Invalid(errors) => {
                self.errors = errors;
                self.phase = FormPhase::Idle;
                None
            }
        }
    }

    /// Record how the in-flight submission ended. Entered values are kept.
    pub fn finish(&mut self, outcome: &Result<AppRoute, SubmitError>) {
        if self.phase != FormPhase::Submitting {
            return;
        }
        self.phase = match outcome {
            Ok(_) => FormPhase::Navigated,
            Err(_) => FormPhase::ErrorShown,
        };
    }

    /// The failure alert was dismissed.
    pub fn acknowledge_error(&mut self) {
        if self.phase == FormPhase::ErrorShown {
            self.phase = FormPhase::Idle;
        }
    }

    /// Explicit "clear fields" action. Refused while a request is in flight.
    pub fn reset(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.values = self.initial.clone();
        self.errors = FieldErrors::default();
        self.phase = FormPhase::Idle;
        self.attempted = false;
        true
    }
}
