//! Pure builders for Chorus request descriptions.
//!
//! # Design
//! Each builder is a total function over its inputs: no I/O, no validation,
//! no failure. The returned `ChorusRequest` always carries all six fields,
//! and the content-type header is fixed to form-urlencoded for every
//! operation the Chorus API exposes here.

use crate::http::{ChorusRequest, CookieJar, HttpMethod};

pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn form_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), CONTENT_TYPE.to_string())]
}

/// Describe the login POST. Sent before any session exists, so the cookie
/// jar is absent and the `session_id` parameter is empty.
pub fn login(username: &str, password: &str) -> ChorusRequest {
    ChorusRequest {
        data: Some(vec![
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
        ]),
        headers: form_headers(),
        params: Some(vec![("session_id".to_string(), String::new())]),
        cookies: None,
        url: "/sessions?session_id=".to_string(),
        method: HttpMethod::Post,
    }
}

/// Describe the logout DELETE for an open session.
pub fn logout(sid: &str, cookies: &CookieJar) -> ChorusRequest {
    ChorusRequest {
        data: None,
        headers: form_headers(),
        params: Some(vec![("session_id".to_string(), sid.to_string())]),
        cookies: Some(cookies.clone()),
        url: "/sessions".to_string(),
        method: HttpMethod::Delete,
    }
}

/// Describe the session status check GET. Carries only the cookie jar.
pub fn check_login(cookies: &CookieJar) -> ChorusRequest {
    ChorusRequest {
        data: None,
        headers: form_headers(),
        params: None,
        cookies: Some(cookies.clone()),
        url: "/sessions".to_string(),
        method: HttpMethod::Get,
    }
}

/// Describe the workfile creation POST for a workspace.
pub fn create_workfile(
    workspace_id: u64,
    workfile_name: &str,
    sid: &str,
    cookies: &CookieJar,
) -> ChorusRequest {
    ChorusRequest {
        data: Some(vec![
            ("workspace_id".to_string(), workspace_id.to_string()),
            ("file_name".to_string(), workfile_name.to_string()),
        ]),
        headers: form_headers(),
        params: Some(vec![("session_id".to_string(), sid.to_string())]),
        cookies: Some(cookies.clone()),
        url: format!("/workspaces/{workspace_id}/workfiles"),
        method: HttpMethod::Post,
    }
}
