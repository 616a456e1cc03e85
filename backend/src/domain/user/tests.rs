//! Tests for user field validation and serialisation.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case(0)]
#[case(-7)]
fn user_id_rejects_non_positive_values(#[case] raw: i64) {
    assert_eq!(UserId::new(raw), Err(UserValidationError::NonPositiveId));
}

#[rstest]
#[case("", UserValidationError::EmptyName)]
#[case("   ", UserValidationError::EmptyName)]
#[case(&"x".repeat(USER_NAME_MAX + 1), UserValidationError::NameTooLong { max: USER_NAME_MAX })]
fn user_name_rejects_invalid_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserName::new(raw), Err(expected));
}

#[rstest]
fn user_name_counts_characters_not_bytes() {
    let name = "é".repeat(USER_NAME_MAX);
    assert!(UserName::new(name).is_ok());
}

#[rstest]
#[case("ann@example.com", true)]
#[case("a@b", true)]
#[case("ann.example.com", false)]
#[case("@example.com", false)]
#[case("ann@", false)]
#[case("ann@@example.com", false)]
#[case("ann@exa@mple.com", false)]
#[case("ann smith@example.com", false)]
fn email_requires_single_at_with_both_parts(#[case] raw: &str, #[case] ok: bool) {
    assert_eq!(Email::new(raw).is_ok(), ok, "input: {raw}");
}

#[rstest]
fn email_rejects_overlong_addresses() {
    let raw = format!("{}@example.com", "a".repeat(EMAIL_MAX));
    assert_eq!(
        Email::new(raw),
        Err(UserValidationError::EmailTooLong { max: EMAIL_MAX })
    );
}

#[rstest]
#[case(UserValidationError::NonPositiveId, "id", "invalid_id")]
#[case(UserValidationError::EmptyName, "name", "empty_name")]
#[case(UserValidationError::InvalidEmail, "email", "invalid_email")]
fn validation_errors_name_field_and_code(
    #[case] error: UserValidationError,
    #[case] field: &str,
    #[case] code: &str,
) {
    assert_eq!(error.field(), field);
    assert_eq!(error.code(), code);
}

#[rstest]
fn into_user_attaches_identifier() {
    let draft = UserDraft::try_from_strings("Ann", Some("ann@example.com".into()))
        .expect("valid draft");
    let id = UserId::new(9).expect("positive id");
    let user = draft.clone().into_user(id);

    assert_eq!(user.id(), id);
    assert_eq!(user.name(), draft.name());
    assert_eq!(user.email(), draft.email());
}

#[rstest]
fn serialises_without_absent_email() {
    let user = User::try_from_parts(1, "Ann", None).expect("valid user");
    assert_eq!(
        serde_json::to_value(&user).expect("serialise"),
        json!({ "id": 1, "name": "Ann" })
    );
}

#[rstest]
fn serialises_present_email() {
    let user = User::try_from_parts(1, "Ann", Some("ann@example.com".into())).expect("valid user");
    assert_eq!(
        serde_json::to_value(&user).expect("serialise"),
        json!({ "id": 1, "name": "Ann", "email": "ann@example.com" })
    );
}

#[rstest]
#[case(json!({ "id": 0, "name": "Ann" }))]
#[case(json!({ "id": 1, "name": "" }))]
#[case(json!({ "id": 1, "name": "Ann", "email": "nope" }))]
#[case(json!({ "id": 1, "name": "Ann", "role": "admin" }))]
fn deserialisation_enforces_invariants(#[case] payload: serde_json::Value) {
    assert!(serde_json::from_value::<User>(payload).is_err());
}

#[rstest]
fn deserialises_valid_payload() {
    let user: User = serde_json::from_value(json!({ "id": 3, "name": "Bo", "email": "bo@x.io" }))
        .expect("valid payload");
    assert_eq!(user.id().get(), 3);
    assert_eq!(user.name().as_ref(), "Bo");
    assert_eq!(user.email().map(AsRef::as_ref), Some("bo@x.io"));
}
