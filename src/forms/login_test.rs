use super::*;

fn draft(phone: &str, password: &str) -> LoginDraft {
    LoginDraft { phone: phone.to_owned(), password: password.to_owned() }
}

#[test]
fn valid_login_builds_payload() {
    let input = draft("0123456789", "abcdefg").validate().into_result().expect("valid login");
    let body = serde_json::to_value(LoginPayload::from(&input)).expect("serialize");
    assert_eq!(body, serde_json::json!({ "password": "abcdefg", "numberOfPhone": "0123456789" }));
}

#[test]
fn phone_with_non_digit_fails_at_correct_length() {
    let errors = draft("01234567a9", "abcdefg").validate().into_result().expect_err("letter in phone");
    assert_eq!(errors.get(LoginField::Phone), Some(PHONE_NOT_DIGITS));
}

#[test]
fn phone_with_non_digit_fails_at_wrong_length() {
    let errors = draft("0123-456", "abcdefg").validate().into_result().expect_err("short phone");
    assert_eq!(errors.get(LoginField::Phone), Some(PHONE_WRONG_LENGTH));
}

#[test]
fn phone_with_spaces_fails() {
    let errors = draft("012345678 ", "abcdefg").validate().into_result().expect_err("space in phone");
    assert_eq!(errors.get(LoginField::Phone), Some(PHONE_NOT_DIGITS));
}

#[test]
fn password_bounds() {
    let errors = draft("0123456789", "abcdef").validate().into_result().expect_err("short password");
    assert_eq!(errors.get(LoginField::Password), Some(PASSWORD_TOO_SHORT));

    let long = "p".repeat(101);
    let errors = draft("0123456789", &long).validate().into_result().expect_err("long password");
    assert_eq!(errors.get(LoginField::Password), Some(PASSWORD_TOO_LONG));

    assert!(draft("0123456789", &"p".repeat(100)).validate().is_valid());
}

#[test]
fn both_fields_reported_together() {
    let errors = LoginDraft::default().validate().into_result().expect_err("empty login");
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![LoginField::Phone, LoginField::Password]);
}

#[test]
fn revalidate_rejects_tampered_phone() {
    let mut input = draft("0123456789", "abcdefg").validate().into_result().expect("valid login");
    input.phone = "abcdefghij".to_owned();
    let errors = input.revalidate().expect_err("tampered phone");
    assert_eq!(errors.get(LoginField::Phone), Some(PHONE_NOT_DIGITS));
}
