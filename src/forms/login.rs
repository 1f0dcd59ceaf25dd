//! Login form schema and its request payload.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::Serialize;

use super::schema::{FieldErrors, FormField, Validation, ascii_digits, exact_len, max_len, min_len};

pub const PHONE_WRONG_LENGTH: &str = "Номер телефону повинен містити 10 символів";
pub const PHONE_NOT_DIGITS: &str = "Номер телефону може містити лише цифри";
pub const PASSWORD_TOO_SHORT: &str = "Пароль повинен містити не менше 7 символів";
pub const PASSWORD_TOO_LONG: &str = "Пароль занадто довгий";

const PHONE_LEN: usize = 10;
const PASSWORD_MIN: usize = 7;
const PASSWORD_MAX: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Phone,
    Password,
}

impl FormField for LoginField {
    fn name(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Password => "password",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub phone: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginInput {
    pub phone: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginPayload {
    pub password: String,
    #[serde(rename = "numberOfPhone")]
    pub number_of_phone: String,
}

impl LoginDraft {
    #[must_use]
    pub fn validate(&self) -> Validation<LoginInput, LoginField> {
        let mut errors = FieldErrors::new();
        errors.check(
            LoginField::Phone,
            exact_len(&self.phone, PHONE_LEN, PHONE_WRONG_LENGTH)
                .and_then(|()| ascii_digits(&self.phone, PHONE_NOT_DIGITS)),
        );
        errors.check(
            LoginField::Password,
            min_len(&self.password, PASSWORD_MIN, PASSWORD_TOO_SHORT)
                .and_then(|()| max_len(&self.password, PASSWORD_MAX, PASSWORD_TOO_LONG)),
        );
        errors.finish(|| LoginInput { phone: self.phone.clone(), password: self.password.clone() })
    }
}

impl LoginInput {
    /// Run the schema again over already-validated values.
    ///
    /// # Errors
    ///
    /// Returns the field errors if the values no longer satisfy the schema.
    pub fn revalidate(&self) -> Result<Self, FieldErrors<LoginField>> {
        LoginDraft::from(self).validate().into_result()
    }
}

impl From<&LoginInput> for LoginDraft {
    fn from(input: &LoginInput) -> Self {
        Self { phone: input.phone.clone(), password: input.password.clone() }
    }
}

impl From<&LoginInput> for LoginPayload {
    fn from(input: &LoginInput) -> Self {
        Self { password: input.password.clone(), number_of_phone: input.phone.clone() }
    }
}
