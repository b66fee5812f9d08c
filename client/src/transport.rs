//! Blocking dispatcher from request descriptions to HTTP exchanges.
//!
//! # Design
//! `execute` resolves the declared `HttpMethod` to the matching ureq call —
//! the closed enum is the dispatch table, so only GET, POST and DELETE can
//! reach the wire. Status codes are returned as data
//! (`http_status_as_error(false)`), never as transport errors; the caller
//! interprets them. One info event is logged per exchange with the request
//! path and the numeric status.

use crate::error::Error;
use crate::http::{ChorusRequest, CookieJar, HttpMethod, HttpResponse};

/// Execute one request description against `http://{host}{url}`.
///
/// `headers`, `params` and `cookies` are applied exactly as declared; absent
/// parts are omitted from the wire request. The response body is never
/// interpreted here.
pub fn execute(host: &str, request: &ChorusRequest) -> Result<HttpResponse, Error> {
    let url = format!("http://{}{}", host, request.url);
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match request.method {
        HttpMethod::Get => apply_parts(agent.get(&url), request).call()?,
        HttpMethod::Delete => apply_parts(agent.delete(&url), request).call()?,
        HttpMethod::Post => {
            let builder = apply_parts(agent.post(&url), request);
            match &request.data {
                Some(data) => builder
                    .send_form(data.iter().map(|(name, value)| (name.as_str(), value.as_str())))?,
                None => builder.send_form(std::iter::empty::<(&str, &str)>())?,
            }
        }
    };

    let status = response.status().as_u16();
    let mut headers = Vec::new();
    let mut cookies = CookieJar::new();
    for (name, value) in response.headers() {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        if name.as_str() == "set-cookie" {
            cookies.insert_set_cookie(&value);
        }
        headers.push((name.as_str().to_string(), value));
    }
    let body = response.body_mut().read_to_string()?;

    tracing::info!(url = %request.url, status, "chorus request completed");

    Ok(HttpResponse {
        status,
        headers,
        cookies,
        body,
    })
}

/// Apply the declared headers, query params and cookie jar to a ureq
/// builder, in either body typestate.
fn apply_parts<Any>(
    mut builder: ureq::RequestBuilder<Any>,
    request: &ChorusRequest,
) -> ureq::RequestBuilder<Any> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(params) = &request.params {
        for (name, value) in params {
            builder = builder.query(name.as_str(), value.as_str());
        }
    }
    if let Some(cookies) = &request.cookies {
        if !cookies.is_empty() {
            builder = builder.header("cookie", cookies.header_value().as_str());
        }
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request;

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let req = request::check_login(&CookieJar::new());
        // Port 0 is never connectable, so this fails before any exchange.
        let err = execute("127.0.0.1:0", &req).unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }
}
