//! The outcome of a bootstrap, as shown to the operator.

use crate::{client::BootstrapResponse, stdx::error::chain};
use std::{borrow::Cow, fmt::Display};

/// What the operator is told after a single bootstrap call.
///
/// Exactly one is produced per [`Invoker::run()`](crate::Invoker::run()). The [`Display`] impl is the text that gets
/// shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The endpoint reported that it created the admin user.
    Created {
        /// The admin email the endpoint answered with, if any.
        email: Option<String>,
    },
    /// The endpoint reported that the admin user was already there.
    AlreadyExists {
        /// The admin email the endpoint answered with, if any.
        email: Option<String>,
    },
    /// The endpoint answered with JSON whose `message` matched neither of the above.
    Unrecognized {
        /// The whole response, pretty printed.
        response: String,
    },
    /// The request failed or the answer was not JSON.
    Failed {
        /// The error, followed by each of its sources.
        description: String,
    },
}

impl Notification {
    /// Classifies a response by its `message`.
    ///
    /// A message containing `created` wins over one containing `already exists`. Anything else, including a missing
    /// or non-string `message`, falls back to [`Notification::Unrecognized`].
    ///
    /// # Example
    ///
    /// ```
    /// # use bootstrap_admin::{BootstrapResponse, Notification};
    /// let response = BootstrapResponse::from(serde_json::json!({
    ///     "message": "Admin user already exists",
    ///     "email": "admin@example.com",
    /// }));
    ///
    /// assert_eq!(
    ///     Notification::AlreadyExists { email: Some("admin@example.com".into()) },
    ///     Notification::from_response(&response),
    /// );
    /// ```
    pub fn from_response(response: &BootstrapResponse) -> Self {
        let email = response.email().map(Cow::into_owned);

        match response.message() {
            Some(message) if message.contains("created") => Self::Created { email },
            Some(message) if message.contains("already exists") => Self::AlreadyExists { email },
            _ => Self::Unrecognized {
                response: response.pretty(),
            },
        }
    }

    /// Describes a failure with its whole `source()` chain, joined by `": "`.
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::Failed {
            description: chain(error),
        }
    }

    /// Whether this reports a failed bootstrap.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created { email } => {
                let email = email.as_deref().unwrap_or("unknown");
                write!(
                    f,
                    "✅ Admin user created successfully!\n\nEmail: {email}\n\nYou can log in now!"
                )
            }
            Self::AlreadyExists { email } => {
                let email = email.as_deref().unwrap_or("unknown");
                write!(
                    f,
                    "ℹ️ Admin user already exists.\n\nEmail: {email}\n\nYou can log in now!"
                )
            }
            Self::Unrecognized { response } => write!(f, "⚠️ Response: {response}"),
            Self::Failed { description } => write!(
                f,
                "❌ Error: {description}\n\nCheck the log output for details."
            ),
        }
    }
}
