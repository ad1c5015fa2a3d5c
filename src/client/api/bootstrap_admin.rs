use serde::Deserialize;
use serde_json::Value;
use std::{borrow::Cow, fmt::Display};

/// Represents the JSON body returned by the `/auth/bootstrap-admin` endpoint.
///
/// The body is kept opaque: only `message` and `email` are looked at. Any other shape, including a body that is not an
/// object at all, is still a valid response. This type is not constructed directly, but gotten through
/// [`Client::bootstrap_admin()`](crate::Client::bootstrap_admin()).
///
/// # Example
///
/// ```no_run
/// # use bootstrap_admin::{Client, error::Error};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Error> {
/// let client = Client::new();
///
/// let response = client.bootstrap_admin().await?;
///
/// assert_eq!(Some("Admin user created"), response.message());
/// assert_eq!(Some("admin@example.com"), response.email().as_deref());
/// # Ok(())
/// # }
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct BootstrapResponse(Value);

impl BootstrapResponse {
    /// Returns the `message` field, if it is present and a string.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Returns the `email` field, if it is present and a string, number or boolean.
    ///
    /// Strings are returned as-is; numbers and booleans in their JSON form. `null`, arrays and objects count as
    /// absent.
    pub fn email(&self) -> Option<Cow<'_, str>> {
        match self.0.get("email")? {
            Value::String(email) => Some(Cow::Borrowed(email.as_str())),
            scalar @ (Value::Number(_) | Value::Bool(_)) => Some(Cow::Owned(scalar.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Returns the whole body as parsed.
    #[inline]
    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Serializes the whole body with two space indentation.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_err| self.0.to_string())
    }
}

impl From<Value> for BootstrapResponse {
    #[inline]
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Display for BootstrapResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
