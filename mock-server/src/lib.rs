use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{AppendHeaders, IntoResponse, Response},
    routing::post,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// A workfile recorded by the mock, as declared in the request body.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workfile {
    pub workspace_id: u64,
    pub file_name: String,
}

/// Observable server state, exposed so tests can assert on session and
/// workfile bookkeeping after driving the client.
#[derive(Debug, Default)]
pub struct ServerState {
    /// Live sessions: session id to username.
    pub sessions: HashMap<String, String>,
    pub logout_count: usize,
    pub workfiles: Vec<Workfile>,
}

pub type SharedState = Arc<RwLock<ServerState>>;

pub fn state() -> SharedState {
    Arc::new(RwLock::new(ServerState::default()))
}

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/sessions", post(login).delete(logout).get(check_login))
        .route("/workspaces/{workspace_id}/workfiles", post(create_workfile))
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: SharedState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

#[derive(Deserialize)]
struct Credentials {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct CreateWorkfile {
    workspace_id: u64,
    file_name: String,
}

async fn login(
    State(state): State<SharedState>,
    Form(credentials): Form<Credentials>,
) -> Response {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"errors": {"fields": "username_or_password"}})),
        )
            .into_response();
    }
    let sid = Uuid::new_v4().to_string();
    state
        .write()
        .await
        .sessions
        .insert(sid.clone(), credentials.username);
    (
        StatusCode::CREATED,
        AppendHeaders([(header::SET_COOKIE, format!("session_id={sid}; Path=/"))]),
        Json(json!({"response": {"session_id": sid}})),
    )
        .into_response()
}

async fn logout(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let sid = params.get("session_id").cloned().unwrap_or_default();
    let mut state = state.write().await;
    if state.sessions.remove(&sid).is_none() {
        return StatusCode::NOT_FOUND.into_response();
    }
    state.logout_count += 1;
    (StatusCode::OK, Json(json!({"response": {}}))).into_response()
}

async fn check_login(State(state): State<SharedState>, headers: HeaderMap) -> StatusCode {
    let sid = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(session_cookie)
        .unwrap_or_default();
    if state.read().await.sessions.contains_key(&sid) {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn create_workfile(
    State(state): State<SharedState>,
    Path(workspace_id): Path<u64>,
    Query(params): Query<HashMap<String, String>>,
    Form(input): Form<CreateWorkfile>,
) -> Response {
    let sid = params.get("session_id").cloned().unwrap_or_default();
    let mut state = state.write().await;
    if !state.sessions.contains_key(&sid) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let workfile = Workfile {
        workspace_id: input.workspace_id,
        file_name: input.file_name,
    };
    state.workfiles.push(workfile.clone());
    (
        StatusCode::CREATED,
        Json(json!({
            "response": {
                "workspace_id": workspace_id,
                "file_name": workfile.file_name,
            }
        })),
    )
        .into_response()
}

/// Extract the `session_id` value from a `Cookie` header line.
fn session_cookie(header: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == "session_id")
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_extracts_value() {
        assert_eq!(
            session_cookie("session_id=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn session_cookie_scans_multiple_pairs() {
        assert_eq!(
            session_cookie("theme=dark; session_id=abc123; lang=en"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn session_cookie_missing_returns_none() {
        assert_eq!(session_cookie("theme=dark"), None);
        assert_eq!(session_cookie(""), None);
    }

    #[test]
    fn workfile_roundtrips_through_json() {
        let workfile = Workfile {
            workspace_id: 1,
            file_name: "foo".to_string(),
        };
        let json = serde_json::to_string(&workfile).unwrap();
        let back: Workfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, workfile);
    }
}
