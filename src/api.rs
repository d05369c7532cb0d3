// API client module: a small blocking HTTP client for the Mathematics
// Genealogy Project (MGP) API. It is intentionally small and synchronous;
// one login call, then direct pass-through query calls.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Scheme the MGP API is served over.
pub const PROTOCOL: &str = "https";
/// Hostname of the MGP API server.
pub const HOSTNAME: &str = "mathgenealogy.org";
/// Port the MGP API listens on. The non-standard port together with
/// https is part of the server's actual configuration.
pub const PORT: &str = "8000";

/// Header the API expects the JWT under on every query request.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Errors surfaced by the client. Authentication and query failures
/// carry a fixed message only; the API does not promise anything useful
/// in its error bodies, so we do not echo status codes or bodies back.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to authenticate")]
    AuthenticationFailure,
    #[error("Error executing query")]
    QueryFailure,
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Login credentials, collected once per run. Sent as form fields to
/// the login endpoint and never persisted or logged (no `Debug` derive
/// so the password cannot leak through error formatting).
#[derive(Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response from the login endpoint: a JWT used as a bearer credential
/// for every subsequent query. Held in memory for the process lifetime;
/// there is no refresh or expiry handling.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token: String,
}

/// Blocking client bound to one base URL. Queries are independent of
/// each other; the only state shared between calls is the base URL.
#[derive(Clone)]
pub struct MgpClient {
    client: Client,
    base_url: String,
}

impl MgpClient {
    /// Create a client pointed at the real MGP server.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(format!("{PROTOCOL}://{HOSTNAME}:{PORT}"))
    }

    /// Create a client against an arbitrary base URL (no trailing
    /// slash). Used by tests to point at a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, Error> {
        // The connection is closed after every call; disabling the idle
        // pool means no socket is left open between requests.
        let client = Client::builder().pool_max_idle_per_host(0).build()?;
        Ok(MgpClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Log in to the MGP API and get a JWT for authentication.
    ///
    /// POSTs the credentials as form data to `/login`. On any 2xx the
    /// response body is parsed as JSON containing the token. Any other
    /// status is an [`Error::AuthenticationFailure`]; there is no retry.
    pub fn login(&self, credentials: &Credentials) -> Result<Token, Error> {
        let url = format!("{}/login", self.base_url);
        let res = self.client.post(&url).form(credentials).send()?;
        if !res.status().is_success() {
            return Err(Error::AuthenticationFailure);
        }
        Ok(res.json()?)
    }

    /// Run a query against the MGP API, returning the raw response body.
    ///
    /// `endpoint` is a path beginning with `/`, such as
    /// `/api/v2/MGP/acad`. `params` are attached verbatim as URL query
    /// parameters; their values are opaque to the client. The caller
    /// decides whether to interpret the result as JSON or CSV based on
    /// the `format` parameter it requested.
    pub fn query(
        &self,
        endpoint: &str,
        token: &Token,
        params: &[(&str, &str)],
    ) -> Result<String, Error> {
        let url = format!("{}{}", self.base_url, endpoint);
        let res = self
            .client
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, &token.token)
            .query(params)
            .send()?;
        if !res.status().is_success() {
            return Err(Error::QueryFailure);
        }
        Ok(res.text()?)
    }
}
