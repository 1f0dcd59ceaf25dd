//! Shared validation vocabulary for the auth forms.
//!
//! DESIGN
//! ======
//! Each form declares its own rules as plain functions over its draft. A rule
//! yields `Result<(), &'static str>`; rules for one field are chained with
//! `and_then` so the first failure wins, and [`FieldErrors::check`] records it.
//! Whole-object refinements run only after every field rule passed.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::collections::BTreeMap;
use std::fmt;

/// Outcome of validating a draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation<T, F: Ord> {
    /// Every rule passed; carries the typed input.
    Valid(T),
    /// At least one field failed.
    Invalid(FieldErrors<F>),
}

impl<T, F: Ord> Validation<T, F> {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Convert into a `Result` for `?`-style callers.
    ///
    /// # Errors
    ///
    /// Returns the collected field errors when validation failed.
    pub fn into_result(self) -> Result<T, FieldErrors<F>> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(errors),
        }
    }
}

/// Identifier of a form field, used as the error key.
pub trait FormField: Copy + Ord + fmt::Debug {
    /// Stable field name, matching the input element id.
    fn name(self) -> &'static str;
}

/// One message per failing field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    entries: BTreeMap<F, String>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self { entries: BTreeMap::new() }
    }
}

impl<F: FormField> FieldErrors<F> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.entries.entry(field).or_insert_with(|| message.into());
    }

    /// Record the outcome of a chained rule for `field`.
    pub fn check(&mut self, field: F, outcome: Result<(), &'static str>) {
        if let Err(message) = outcome {
            self.insert(field, message);
        }
    }

    #[must_use]
    pub fn get(&self, field: F) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: F) -> bool {
        self.entries.contains_key(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Failing fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.entries.keys().copied()
    }

    /// `Valid(build())` when no errors were recorded, otherwise `Invalid(self)`.
    pub fn finish<T>(self, build: impl FnOnce() -> T) -> Validation<T, F> {
        if self.is_empty() { Validation::Valid(build()) } else { Validation::Invalid(self) }
    }
}

impl<F: FormField> fmt::Display for FieldErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.name())?;
        }
        Ok(())
    }
}

// =============================================================================
// RULES
// =============================================================================

/// Length in Unicode scalar values.
#[must_use]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Fails with `message` when `value` is shorter than `min`.
///
/// # Errors
///
/// Returns `message` on failure.
pub fn min_len(value: &str, min: usize, message: &'static str) -> Result<(), &'static str> {
    if char_len(value) < min { Err(message) } else { Ok(()) }
}

/// Fails with `message` when `value` is longer than `max`.
///
/// # Errors
///
/// Returns `message` on failure.
pub fn max_len(value: &str, max: usize, message: &'static str) -> Result<(), &'static str> {
    if char_len(value) > max { Err(message) } else { Ok(()) }
}

/// Fails with `message` unless `value` has exactly `len` characters.
///
/// # Errors
///
/// Returns `message` on failure.
pub fn exact_len(value: &str, len: usize, message: &'static str) -> Result<(), &'static str> {
    if char_len(value) == len { Ok(()) } else { Err(message) }
}

/// Fails with `message` unless `value` is non-empty and all ASCII digits.
///
/// # Errors
///
/// Returns `message` on failure.
pub fn ascii_digits(value: &str, message: &'static str) -> Result<(), &'static str> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) { Ok(()) } else { Err(message) }
}

/// Fails with `message` when `value` is not a syntactically valid email address.
///
/// The domain must end in a dotted top-level label of two or more letters,
/// so `user@localhost` is rejected.
///
/// # Errors
///
/// Returns `message` on failure.
pub fn email_syntax(value: &str, message: &'static str) -> Result<(), &'static str> {
    use validator::ValidateEmail;

    if value.to_owned().validate_email() && has_letter_tld(value) { Ok(()) } else { Err(message) }
}

fn has_letter_tld(value: &str) -> bool {
    let Some((_, domain)) = value.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}

/// Fails with `below` or `above` when `value` leaves `min..=max`.
///
/// # Errors
///
/// Returns the matching message on failure.
pub fn in_range(
    value: i64,
    min: i64,
    max: i64,
    below: &'static str,
    above: &'static str,
) -> Result<(), &'static str> {
    if value < min {
        Err(below)
    } else if value > max {
        Err(above)
    } else {
        Ok(())
    }
}
