mod common;

use axum::{Router, extract::ConnectInfo, routing::get};
use axum_test::TestServer;
use link_tracker::api::handlers::track_handler;
use link_tracker::domain::entities::TokenRecord;
use link_tracker::domain::log_event::LogEvent;
use link_tracker::domain::repositories::TokenRepository;
use std::net::SocketAddr;
use tower::Layer;

#[derive(Clone)]
struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

#[tokio::test]
async fn test_track_success() {
    let (state, _rx, store) = common::create_test_state();
    let app = Router::new()
        .route("/track/{token}", get(track_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_token(&store, "tok-redirect", "https://example.com/target").await;

    let response = server.get("/track/tok-redirect").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_track_unknown_token() {
    let (state, _rx, _store) = common::create_test_state();
    let app = Router::new()
        .route("/track/{token}", get(track_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/track/notfound").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_track_expired_token() {
    let (state, _rx, store) = common::create_test_state();
    let app = Router::new()
        .route("/track/{token}", get(track_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_expired_token(&store, "tok-stale", "https://example.com").await;

    let response = server.get("/track/tok-stale").await;

    assert_eq!(response.status_code(), 410);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "gone");
}

#[tokio::test]
async fn test_track_enqueues_click_event() {
    let (state, mut rx, store) = common::create_test_state();
    let app = Router::new()
        .route("/track/{token}", get(track_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_token(&store, "tok-click", "https://example.com").await;

    let response = server
        .get("/track/tok-click")
        .add_header("User-Agent", "TestBot/1.0")
        .await;

    assert_eq!(response.status_code(), 307);

    let event = rx.try_recv();
    assert!(event.is_ok());
    match event.unwrap() {
        LogEvent::ClickTracked {
            token,
            ip_address,
            user_agent,
            target_url,
            click_count,
            ..
        } => {
            assert_eq!(token, "tok-click");
            assert_eq!(ip_address, "127.0.0.1");
            assert_eq!(user_agent, "TestBot/1.0");
            assert_eq!(target_url, "https://example.com");
            assert_eq!(click_count, 1);
        }
        other => panic!("expected ClickTracked, got {:?}", other),
    }
}

#[tokio::test]
async fn test_track_without_user_agent() {
    let (state, mut rx, store) = common::create_test_state();
    let app = Router::new()
        .route("/track/{token}", get(track_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_token(&store, "tok-bare", "https://example.com").await;

    let response = server.get("/track/tok-bare").await;

    assert_eq!(response.status_code(), 307);

    match rx.try_recv().unwrap() {
        LogEvent::ClickTracked { user_agent, .. } => assert_eq!(user_agent, "Unknown"),
        other => panic!("expected ClickTracked, got {:?}", other),
    }
}

#[tokio::test]
async fn test_track_redirects_when_log_queue_full() {
    let (state, _rx, store) = common::create_test_state_with_queue(1);

    // Occupy the only queue slot so the handler's try_send fails.
    let filler = TokenRecord::issue(
        "filler".to_string(),
        "https://example.com".to_string(),
        None,
        None,
        90,
    );
    state
        .log_sender
        .try_send(LogEvent::token_created(&filler))
        .unwrap();

    let app = Router::new()
        .route("/track/{token}", get(track_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_token(&store, "tok-full", "https://example.com/busy").await;

    let response = server.get("/track/tok-full").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://example.com/busy");

    let info = store.find("tok-full").await.unwrap().unwrap();
    assert_eq!(info.record.click_count, 1);
}

#[tokio::test]
async fn test_track_repeat_clicks_accumulate() {
    let (state, _rx, store) = common::create_test_state();
    let app = Router::new()
        .route("/track/{token}", get(track_handler))
        .layer(MockConnectInfoLayer)
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_token(&store, "tok-again", "https://example.com").await;

    server.get("/track/tok-again").await;
    let response = server.get("/track/tok-again").await;

    assert_eq!(response.status_code(), 307);

    let info = store.find("tok-again").await.unwrap().unwrap();
    assert_eq!(info.record.click_count, 2);
    assert_eq!(info.clicks.len(), 2);
    assert_eq!(info.clicks[0].ip_address, "127.0.0.1");
}
