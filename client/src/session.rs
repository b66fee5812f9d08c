//! Chorus session lifecycle: login on open, logout on close.
//!
//! # Design
//! A `ChorusSession` only exists in the open state: `open` performs the
//! login exchange and a value is handed out solely when the server returned
//! a usable session id and cookie jar. `close` consumes the session, making
//! reuse after logout unrepresentable. `with_session` is the scoped form —
//! logout is attempted on every exit path once login has succeeded, and a
//! failure of the body takes precedence over a failure of the logout call.

use serde::Deserialize;

use crate::config::Config;
use crate::error::Error;
use crate::http::{CookieJar, HttpResponse};
use crate::request;
use crate::transport;

/// Shape of the login response body consumed by `open`.
#[derive(Debug, Deserialize)]
struct LoginBody {
    response: LoginReply,
}

#[derive(Debug, Deserialize)]
struct LoginReply {
    session_id: String,
}

/// An authenticated session against one Chorus instance.
///
/// Holds the session id and cookie jar returned by login; both are replayed
/// on every subsequent call. Each session owns its state exclusively.
#[derive(Debug)]
pub struct ChorusSession<'a> {
    config: &'a Config,
    sid: String,
    cookies: CookieJar,
}

impl<'a> ChorusSession<'a> {
    /// Log in with the configured credentials and return the open session.
    ///
    /// Fails if the exchange fails, if the body is not valid JSON, or if
    /// `response.session_id` is absent.
    pub fn open(config: &'a Config) -> Result<Self, Error> {
        tracing::debug!("opening chorus session");
        let request = request::login(&config.alpine.username, &config.alpine.password);
        let response = transport::execute(&config.alpine.host, &request)?;
        let body: LoginBody = serde_json::from_str(&response.body)
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;
        Ok(Self {
            config,
            sid: body.response.session_id,
            cookies: response.cookies,
        })
    }

    /// The session identifier returned by the server on login.
    pub fn sid(&self) -> &str {
        &self.sid
    }

    /// The cookie jar returned with the login response.
    pub fn cookies(&self) -> &CookieJar {
        &self.cookies
    }

    /// Forward a session status check and return the raw response.
    ///
    /// Standalone capability: not part of the open/close lifecycle, callers
    /// interpret the status themselves.
    pub fn check_login_status(&self) -> Result<HttpResponse, Error> {
        transport::execute(
            &self.config.alpine.host,
            &request::check_login(&self.cookies),
        )
    }

    /// Create a workfile in a workspace and return the raw response.
    pub fn create_workfile(
        &self,
        workspace_id: u64,
        workfile_name: &str,
    ) -> Result<HttpResponse, Error> {
        transport::execute(
            &self.config.alpine.host,
            &request::create_workfile(workspace_id, workfile_name, &self.sid, &self.cookies),
        )
    }

    /// Log out and consume the session. Transport failures propagate.
    pub fn close(self) -> Result<HttpResponse, Error> {
        tracing::debug!("closing chorus session");
        transport::execute(
            &self.config.alpine.host,
            &request::logout(&self.sid, &self.cookies),
        )
    }
}

/// Run `f` inside a session scope with guaranteed logout.
///
/// Opens a session, runs the body, then closes the session whether or not
/// the body succeeded. A body error is returned as-is; a logout error
/// surfaces only when the body itself succeeded.
pub fn with_session<T, F>(config: &Config, f: F) -> Result<T, Error>
where
    F: FnOnce(&ChorusSession) -> Result<T, Error>,
{
    let session = ChorusSession::open(config)?;
    let outcome = f(&session);
    let closed = session.close();
    let value = outcome?;
    closed?;
    Ok(value)
}
