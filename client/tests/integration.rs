//! Session lifecycle tests against the live mock server.
//!
//! # Design
//! Starts the mock Chorus server on a random port, then drives the client
//! over real HTTP. Server state is shared with the test so logout and
//! workfile bookkeeping can be asserted after the session scope closes.

use std::net::SocketAddr;

use chorus_client::{with_session, ChorusSession, Config, Error};
use mock_server::{SharedState, Workfile};

fn start_server() -> (SocketAddr, SharedState) {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let state = mock_server::state();
    let server_state = state.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, server_state).await
        })
        .unwrap();
    });

    (addr, state)
}

fn config_for(addr: SocketAddr, username: &str, password: &str) -> Config {
    Config::from_json(&format!(
        r#"{{"alpine": {{"host": "{addr}", "username": "{username}", "password": "{password}"}}}}"#
    ))
    .unwrap()
}

#[test]
fn session_scope_logs_in_and_out() {
    let (addr, state) = start_server();
    let config = config_for(addr, "chorusadmin", "secret");

    let mut seen_sid = String::new();
    with_session(&config, |session| {
        seen_sid = session.sid().to_string();
        assert!(!seen_sid.is_empty());
        // The login cookie jar replays the sid the server handed out.
        assert_eq!(session.cookies().get("session_id"), Some(session.sid()));

        let status = session.check_login_status()?;
        assert_eq!(status.status, 200);

        let created = session.create_workfile(1, "foo")?;
        assert_eq!(created.status, 201);
        Ok(())
    })
    .unwrap();

    let state = state.blocking_read();
    assert!(state.sessions.is_empty(), "logout removed the session");
    assert_eq!(state.logout_count, 1);
    assert_eq!(
        state.workfiles,
        vec![Workfile {
            workspace_id: 1,
            file_name: "foo".to_string(),
        }]
    );
}

#[test]
fn body_error_still_logs_out() {
    let (addr, state) = start_server();
    let config = config_for(addr, "chorusadmin", "secret");

    let err = with_session::<(), _>(&config, |_session| {
        Err(Error::MalformedResponse("body failed".to_string()))
    })
    .unwrap_err();

    assert!(matches!(err, Error::MalformedResponse(_)));
    let state = state.blocking_read();
    assert_eq!(state.logout_count, 1, "logout fires even when the body errors");
    assert!(state.sessions.is_empty());
}

#[test]
fn open_fails_on_rejected_credentials() {
    let (addr, _state) = start_server();
    let config = config_for(addr, "", "");

    // The 401 body has no response.session_id field.
    let err = ChorusSession::open(&config).unwrap_err();
    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[test]
fn open_fails_on_unreachable_host() {
    let config = config_for("127.0.0.1:0".parse().unwrap(), "chorusadmin", "secret");
    let err = ChorusSession::open(&config).unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[test]
fn explicit_open_close_pair() {
    let (addr, state) = start_server();
    let config = config_for(addr, "chorusadmin", "secret");

    let session = ChorusSession::open(&config).unwrap();
    let sid = session.sid().to_string();
    assert_eq!(state.blocking_read().sessions.len(), 1);

    let response = session.close().unwrap();
    assert_eq!(response.status, 200);

    let state = state.blocking_read();
    assert!(!state.sessions.contains_key(&sid));
    assert_eq!(state.logout_count, 1);
}
