//! Registration form schema and its request payload.
//!
//! The draft mirrors the inputs one-to-one (age stays raw text until
//! validated). The payload is what `/auth/register` expects: `phone` is
//! renamed to `numberOfPhone`, while the confirmation and terms fields
//! are not sent.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use serde::Serialize;

use super::schema::{
    FieldErrors, FormField, Validation, email_syntax, exact_len, in_range, max_len, min_len,
};

pub const USERNAME_TOO_SHORT: &str = "Ім’я користувача занадто коротке";
pub const USERNAME_TOO_LONG: &str = "Ім’я користувача занадто довге";
pub const AGE_NOT_A_NUMBER: &str = "Вік має бути числом";
pub const AGE_NOT_WHOLE: &str = "Вік має бути цілим числом";
pub const AGE_TOO_LOW: &str = "Має бути не менше 18 років";
pub const AGE_TOO_HIGH: &str = "Має бути не більше 80 років";
pub const EMAIL_TOO_SHORT: &str = "Email занадто короткий";
pub const EMAIL_TOO_LONG: &str = "Email занадто довгий";
pub const EMAIL_INVALID: &str = "Некоректний email";
pub const PHONE_WRONG_LENGTH: &str = "Номер телефону повинен містити 10 символів";
pub const PASSWORD_TOO_SHORT: &str = "Пароль повинен містити не менше 7 символів";
pub const CONFIRM_TOO_SHORT: &str = "Підтвердіть пароль";
pub const TERMS_NOT_ACCEPTED: &str = "Прийміть умови використання";
pub const PASSWORDS_DIFFER: &str = "Введені паролі не співпадають";

const USERNAME_MIN: usize = 11;
const USERNAME_MAX: usize = 500;
const AGE_MIN: i64 = 18;
const AGE_MAX: i64 = 80;
const EMAIL_MIN: usize = 5;
const EMAIL_MAX: usize = 1000;
const PHONE_LEN: usize = 10;
const PASSWORD_MIN: usize = 7;

/// Inputs of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegisterField {
    Username,
    Age,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Terms,
}

impl FormField for RegisterField {
    fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Age => "age",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Terms => "terms",
        }
    }
}

/// Raw registration values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub username: String,
    pub age: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

/// Registration values that passed every rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationInput {
    pub username: String,
    pub age: u8,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub terms: bool,
}

/// Request body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub password: String,
    #[serde(rename = "numberOfPhone")]
    pub number_of_phone: String,
    pub age: u8,
    pub email: String,
}

impl RegisterDraft {
    /// Check every field, then the password confirmation.
    ///
    /// The confirmation refinement runs alongside failed length and range
    /// rules, but not when terms are unaccepted or age is not a number. Its
    /// message is attached to `confirmPassword` unless that field already
    /// failed.
    #[must_use]
    pub fn validate(&self) -> Validation<RegistrationInput, RegisterField> {
        let mut errors = FieldErrors::new();

        errors.check(
            RegisterField::Username,
            min_len(&self.username, USERNAME_MIN, USERNAME_TOO_SHORT)
                .and_then(|()| max_len(&self.username, USERNAME_MAX, USERNAME_TOO_LONG)),
        );

        let parsed_age = parse_age(&self.age);
        let age = parsed_age.and_then(|age| {
            in_range(age, AGE_MIN, AGE_MAX, AGE_TOO_LOW, AGE_TOO_HIGH)?;
            u8::try_from(age).map_err(|_| AGE_TOO_HIGH)
        });
        errors.check(RegisterField::Age, age.map(|_| ()));

        errors.check(
            RegisterField::Email,
            min_len(&self.email, EMAIL_MIN, EMAIL_TOO_SHORT)
                .and_then(|()| max_len(&self.email, EMAIL_MAX, EMAIL_TOO_LONG))
                .and_then(|()| email_syntax(&self.email, EMAIL_INVALID)),
        );
        errors.check(RegisterField::Phone, exact_len(&self.phone, PHONE_LEN, PHONE_WRONG_LENGTH));
        errors.check(RegisterField::Password, min_len(&self.password, PASSWORD_MIN, PASSWORD_TOO_SHORT));
        errors.check(
            RegisterField::ConfirmPassword,
            min_len(&self.confirm_password, PASSWORD_MIN, CONFIRM_TOO_SHORT),
        );
        if !self.terms {
            errors.insert(RegisterField::Terms, TERMS_NOT_ACCEPTED);
        }

        if self.terms && parsed_age.is_ok() && self.password != self.confirm_password {
            errors.insert(RegisterField::ConfirmPassword, PASSWORDS_DIFFER);
        }

        match age {
            Ok(age) => errors.finish(|| RegistrationInput {
                username: self.username.clone(),
                age,
                email: self.email.clone(),
                phone: self.phone.clone(),
                password: self.password.clone(),
                confirm_password: self.confirm_password.clone(),
                terms: self.terms,
            }),
            Err(_) => Validation::Invalid(errors),
        }
    }
}

impl RegistrationInput {
    /// Run the schema again over already-validated values.
    ///
    /// # Errors
    ///
    /// Returns the field errors if the values no longer satisfy the schema.
    pub fn revalidate(&self) -> Result<Self, FieldErrors<RegisterField>> {
        RegisterDraft::from(self).validate().into_result()
    }
}

impl From<&RegistrationInput> for RegisterDraft {
    fn from(input: &RegistrationInput) -> Self {
        Self {
            username: input.username.clone(),
            age: input.age.to_string(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            password: input.password.clone(),
            confirm_password: input.confirm_password.clone(),
            terms: input.terms,
        }
    }
}

impl From<&RegistrationInput> for RegisterPayload {
    fn from(input: &RegistrationInput) -> Self {
        Self {
            username: input.username.clone(),
            password: input.password.clone(),
            number_of_phone: input.phone.clone(),
            age: input.age,
            email: input.email.clone(),
        }
    }
}

/// Read the age box the way a browser number input coerces it.
///
/// Blank input counts as zero; whole floats such as `25.0` are accepted.
fn parse_age(raw: &str) -> Result<i64, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if let Ok(whole) = trimmed.parse::<i64>() {
        return Ok(whole);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if !value.is_finite() => Err(AGE_NOT_A_NUMBER),
        Ok(value) if value.fract() != 0.0 => Err(AGE_NOT_WHOLE),
        #[allow(clippy::cast_possible_truncation)]
        Ok(value) => Ok(value.clamp(-1e9, 1e9) as i64),
        Err(_) => Err(AGE_NOT_A_NUMBER),
    }
}
