//! Synchronous client library for the Chorus/Alpine analytics server.
//!
//! # Overview
//! Authenticates against a Chorus instance and issues plain-HTTP requests to
//! it: login, logout, session status check, and workfile creation. Requests
//! are first described as data (`ChorusRequest`) by pure builder functions,
//! then executed by a blocking dispatcher that returns the raw
//! `HttpResponse` for the caller to interpret.
//!
//! # Design
//! - `request` builders are total functions with no I/O; every description
//!   carries the same six fields (data, headers, params, cookies, url,
//!   method) even when a value is empty.
//! - `transport::execute` resolves the declared method to a concrete ureq
//!   call and logs the path and status code of each exchange. It never
//!   interprets the response body.
//! - `ChorusSession` wraps the login/logout pair; `with_session` gives the
//!   scoped form that guarantees logout on every exit path once login has
//!   succeeded.

pub mod config;
pub mod error;
pub mod http;
pub mod request;
pub mod session;
pub mod transport;

pub use config::{AlpineConfig, Config};
pub use error::Error;
pub use http::{ChorusRequest, CookieJar, HttpMethod, HttpResponse};
pub use session::{with_session, ChorusSession};
