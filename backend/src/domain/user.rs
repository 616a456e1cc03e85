//! User entity and its validated field types.
//!
//! A user exists in two shapes: [`UserDraft`] before the store has assigned
//! an identifier, and [`User`] afterwards. [`UserDraft::into_user`] is the
//! only way an identifier gets attached.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum length of a user name, in characters.
pub const USER_NAME_MAX: usize = 64;
/// Maximum length of an email address, in characters.
pub const EMAIL_MAX: usize = 254;

/// Validation errors raised while constructing user fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    NonPositiveId,
    EmptyName,
    NameTooLong { max: usize },
    InvalidEmail,
    EmailTooLong { max: usize },
}

impl UserValidationError {
    /// Field the error refers to, as it appears in JSON payloads.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveId => "id",
            Self::EmptyName | Self::NameTooLong { .. } => "name",
            Self::InvalidEmail | Self::EmailTooLong { .. } => "email",
        }
    }

    /// Stable snake_case code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NonPositiveId => "invalid_id",
            Self::EmptyName => "empty_name",
            Self::NameTooLong { .. } => "name_too_long",
            Self::InvalidEmail => "invalid_email",
            Self::EmailTooLong { .. } => "email_too_long",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveId => write!(f, "user id must be a positive integer"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::InvalidEmail => write!(
                f,
                "email must contain a single @ between a local part and a domain"
            ),
            Self::EmailTooLong { max } => write!(f, "email must be at most {max} characters"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Store-assigned user identifier.
///
/// # Examples
/// ```
/// use user_directory::domain::UserId;
///
/// let id = UserId::new(42).expect("positive id");
/// assert_eq!(id.get(), 42);
/// assert!(UserId::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct UserId(i64);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: i64) -> Result<Self, UserValidationError> {
        if id <= 0 {
            return Err(UserValidationError::NonPositiveId);
        }
        Ok(Self(id))
    }

    /// Raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for UserId {
    type Error = UserValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if name.chars().count() > USER_NAME_MAX {
            return Err(UserValidationError::NameTooLong {
                max: USER_NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Contact email address.
///
/// Only the shape is checked: exactly one `@` with something on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        let well_formed = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.is_empty()
                    && !domain.contains('@')
                    && !email.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !well_formed {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Field set of a user that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: UserName,
    email: Option<Email>,
}

impl UserDraft {
    /// Build a draft from validated fields.
    pub fn new(name: UserName, email: Option<Email>) -> Self {
        Self { name, email }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_strings(
        name: impl Into<String>,
        email: Option<String>,
    ) -> Result<Self, UserValidationError> {
        let name = UserName::new(name)?;
        let email = email.map(Email::new).transpose()?;
        Ok(Self::new(name, email))
    }

    /// Validated display name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Contact address, when one was given.
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// Attach the store-assigned identifier.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Persisted user.
///
/// ## Invariants
/// - `id` is positive and never changes after creation.
/// - `name` is non-blank and at most [`USER_NAME_MAX`] characters.
///
/// Serialises as `{"id":1,"name":"Ann"}`, adding `email` only when present.
///
/// # Examples
/// ```
/// use user_directory::domain::{User, UserDraft, UserId};
///
/// let draft = UserDraft::try_from_strings("Ann", None).expect("valid draft");
/// let user: User = draft.into_user(UserId::new(1).expect("positive id"));
/// let json = serde_json::to_string(&user).expect("serialise");
/// assert_eq!(json, r#"{"id":1,"name":"Ann"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: UserName,
    email: Option<Email>,
}

impl User {
    /// Build a user from validated components.
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        draft.into_user(id)
    }

    /// Fallible constructor from raw values.
    pub fn try_from_parts(
        id: i64,
        name: impl Into<String>,
        email: Option<String>,
    ) -> Result<Self, UserValidationError> {
        let id = UserId::new(id)?;
        Ok(UserDraft::try_from_strings(name, email)?.into_user(id))
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Validated display name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Contact address, when one was given.
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: i64,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, name, email } = value;
        Self {
            id: id.get(),
            name: name.into(),
            email: email.map(String::from),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_parts(value.id, value.name, value.email)
    }
}

#[cfg(test)]
mod tests;
