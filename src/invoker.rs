//! Runs one bootstrap and reports how it went.

use crate::{
    client::Client, error::BootstrapError, notification::Notification, notifier::Notifier,
    stdx::error::chain,
};
use tracing::{error, info};

/// Issues the bootstrap request and hands exactly one [`Notification`] to its [`Notifier`].
///
/// Holds no state between runs, so running it again simply repeats the request.
///
/// # Example
///
/// ```no_run
/// # use bootstrap_admin::{Client, Invoker, notifier::Terminal};
/// # #[tokio::main]
/// # async fn main() {
/// let invoker = Invoker::new(Client::new(), Terminal);
///
/// let notification = invoker.run().await;
/// assert!(!notification.is_failure());
/// # }
/// ```
#[derive(Debug)]
pub struct Invoker<N> {
    client: Client,
    notifier: N,
}

impl<N: Notifier> Invoker<N> {
    /// Creates an invoker that calls through `client` and reports to `notifier`.
    #[inline]
    pub fn new(client: Client, notifier: N) -> Self {
        Self { client, notifier }
    }

    /// The client the bootstrap request goes through.
    #[inline]
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Bootstraps the admin user once.
    ///
    /// The outcome is logged, shown through the notifier, and returned. Failures never escape as errors: they become
    /// [`Notification::Failed`].
    pub async fn run(&self) -> Notification {
        let notification = match self.client.bootstrap_admin().await {
            Ok(response) => {
                info!(%response, "bootstrap-admin result");
                Notification::from_response(&response)
            }
            Err(err) => {
                let body = match &err {
                    BootstrapError::MalformedResponse(malformed) => Some(malformed.body()),
                    BootstrapError::RequestFailed(_) => None,
                };

                error!(
                    error = %chain(&err),
                    ?body,
                    endpoint = %self.client.endpoint(),
                    "bootstrap-admin failed"
                );

                Notification::from_error(&err)
            }
        };

        self.notifier.notify(&notification);

        notification
    }
}
