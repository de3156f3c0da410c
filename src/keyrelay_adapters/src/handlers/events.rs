use secrecy::Secret;
use serde::Deserialize;

/// Payload of `userForgotPassword`: `{"data": {"email": "..."}}`.
///
/// A missing `data` object or a missing or null `email` still deserializes,
/// so the handler can report it as invalid input.
#[derive(Debug, Default, Deserialize)]
pub struct ForgotPasswordEvent {
    #[serde(default)]
    pub data: ForgotPasswordData,
}

#[derive(Debug, Default, Deserialize)]
pub struct ForgotPasswordData {
    #[serde(default)]
    pub email: Option<Secret<String>>,
}

/// Payload of `userUpdatePassword`: `{"data": {"password": "..."}}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePasswordEvent {
    #[serde(default)]
    pub data: UpdatePasswordData,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePasswordData {
    #[serde(default)]
    pub password: Option<Secret<String>>,
}
