//! Represents a client abstraction for the `/auth/bootstrap-admin` endpoint.

mod api;

pub use api::bootstrap_admin::BootstrapResponse;

use crate::{
    error::{BootstrapError, ClientBuilderError, MalformedResponse, RequestError},
    stdx::http::{DEFAULT_USER_AGENT, JSON_CONTENT_TYPE},
};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};
use url::Url;

/// The endpoint a [`Client`] calls unless [`ClientBuilder::endpoint()`] says otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://deployment-00vv.onrender.com/auth/bootstrap-admin";

/// A builder for configuring and creating instances of [`Client`] with custom settings.
///
/// The defaults target [`DEFAULT_ENDPOINT`] over https, with a user agent of
/// `$CARGO_PKG_NAME/$CARGO_PKG_VERSION`. The builder is only needed when one of those has to change, for example to
/// point at another deployment.
///
/// # Example
///
/// ```
/// # use bootstrap_admin::ClientBuilder;
/// let client = ClientBuilder::new()
///     .endpoint("https://example.com/auth/bootstrap-admin".parse().unwrap())
///     .user_agent("custom-agent/1.0")
///     .build()?;
/// # Ok::<(), bootstrap_admin::error::ClientBuilderError>(())
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    builder: reqwest::ClientBuilder,
    endpoint: Option<Url>,
    https_only: bool,
}

impl Default for ClientBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    ///
    /// # Example
    ///
    /// ```
    /// # use bootstrap_admin::ClientBuilder;
    /// let builder = ClientBuilder::new();
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        let builder = reqwest::Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .use_rustls_tls();

        Self {
            builder,
            endpoint: None,
            https_only: true,
        }
    }

    /// Sets the full URL of the bootstrap endpoint, replacing [`DEFAULT_ENDPOINT`].
    ///
    /// # Example
    ///
    /// ```
    /// # use bootstrap_admin::ClientBuilder;
    /// let builder = ClientBuilder::new().endpoint("https://example.com/auth/bootstrap-admin".parse().unwrap());
    /// ```
    #[inline]
    #[must_use]
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets a custom `User-Agent` header for the [`Client`].
    ///
    /// # Example
    ///
    /// ```
    /// # use bootstrap_admin::ClientBuilder;
    /// let builder = ClientBuilder::new().user_agent("custom-agent/1.0");
    /// ```
    #[inline]
    #[must_use]
    pub fn user_agent(self, user_agent: &str) -> Self {
        let builder = self.builder.user_agent(user_agent);
        Self { builder, ..self }
    }

    /// Whether only `https` URLs may be requested. Enabled by default.
    ///
    /// Turning it off is meant for talking to a local deployment over plain `http`.
    #[inline]
    #[must_use]
    pub fn https_only(mut self, enabled: bool) -> Self {
        self.https_only = enabled;
        self
    }

    /// Ignores `HTTP_PROXY`, `HTTPS_PROXY` and friends, connecting to the endpoint directly.
    #[inline]
    #[must_use]
    pub fn no_proxy(self) -> Self {
        let builder = self.builder.no_proxy();
        Self { builder, ..self }
    }

    /// Consumes the `ClientBuilder` and returns a fully-configured [`Client`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientBuilderError::InsecureEndpoint`] if the endpoint is not `https` while
    /// [`https_only`](ClientBuilder::https_only()) is enabled, and [`ClientBuilderError::BuildFailed`] if the
    /// underlying HTTP client could not be built, such as when TLS initialization fails.
    ///
    /// # Example
    ///
    /// ```
    /// # use bootstrap_admin::{ClientBuilder, Client};
    /// let client: Client = ClientBuilder::new().build()?;
    /// # Ok::<(), bootstrap_admin::error::ClientBuilderError>(())
    /// ```
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => Url::parse(DEFAULT_ENDPOINT).map_err(|_err| ClientBuilderError::BuildFailed)?,
        };

        if self.https_only && endpoint.scheme() != "https" {
            return Err(ClientBuilderError::InsecureEndpoint(endpoint.to_string()));
        }

        Ok(Client {
            http: self
                .builder
                .https_only(self.https_only)
                .build()
                .map_err(|_err| ClientBuilderError::BuildFailed)?,
            endpoint,
        })
    }
}

/// An asynchronous client for a deployment's `/auth/bootstrap-admin` endpoint.
///
/// # Example
///
/// ```
/// # use bootstrap_admin::Client;
/// let client = Client::new();
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
}

// Creation impls
impl Client {
    /// Instantiates a new [`Client`] for [`DEFAULT_ENDPOINT`].
    ///
    /// # Panics
    ///
    /// This function will panic if the TLS backend cannot be initialized. For an alternative that returns a
    /// `Result` instead of panicking, use the [`ClientBuilder`].
    ///
    /// # Example
    ///
    /// ```
    /// # use bootstrap_admin::Client;
    /// let client = Client::new();
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        #[allow(
            clippy::expect_used,
            reason = "it is documented that this can panic and that `ClientBuilder` should be used instead for a `Result`"
        )]
        let client = ClientBuilder::new().build().expect("Client::new()");
        client
    }

    /// Returns a [`ClientBuilder`] for creating a custom-configured `Client`.
    ///
    /// # Example
    ///
    /// ```
    /// # use bootstrap_admin::{Client, ClientBuilder};
    /// let builder: ClientBuilder = Client::builder();
    /// ```
    #[inline]
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl Default for Client {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Public facing impls
impl Client {
    /// The URL that [`bootstrap_admin()`](Client::bootstrap_admin()) posts to.
    #[inline]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Asks the deployment to create its admin user.
    ///
    /// Sends a `POST` with `Content-Type: application/json` and an empty body, then parses whatever comes back as
    /// JSON. The HTTP status is not checked: an error status with a JSON body is returned like any other response,
    /// and it is up to the caller to make sense of it.
    ///
    /// # Errors
    ///
    /// - [`BootstrapError::RequestFailed`] if the request could not be sent or the body could not be read.
    /// - [`BootstrapError::MalformedResponse`] if the body is not valid JSON.
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
    /// println!("{response}");
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn bootstrap_admin(&self) -> Result<BootstrapResponse, BootstrapError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .send()
            .await
            .map_err(RequestError)?;

        debug!(status = %response.status(), "received bootstrap-admin response");

        let body = response.text().await.map_err(RequestError)?;

        match serde_json::from_str::<BootstrapResponse>(&body) {
            Ok(response) => Ok(response),
            Err(err) => Err(MalformedResponse::new(err, body).into()),
        }
    }
}
