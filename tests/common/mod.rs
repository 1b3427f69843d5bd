#![allow(dead_code)]

use chrono::{Duration, Utc};
use link_tracker::application::services::TrackerService;
use link_tracker::domain::entities::TokenRecord;
use link_tracker::domain::log_event::LogEvent;
use link_tracker::domain::repositories::TokenRepository;
use link_tracker::infrastructure::sheet_log::NullSheetLog;
use link_tracker::infrastructure::store::MemoryTokenRepository;
use link_tracker::state::AppState;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn create_test_token(store: &MemoryTokenRepository, token: &str, url: &str) {
    let record = TokenRecord::issue(token.to_string(), url.to_string(), None, None, 90);
    store.insert(record).await.unwrap();
}

pub async fn create_token_with_details(
    store: &MemoryTokenRepository,
    token: &str,
    url: &str,
    email: Option<&str>,
    campaign: Option<&str>,
) {
    let record = TokenRecord::issue(
        token.to_string(),
        url.to_string(),
        email.map(str::to_string),
        campaign.map(str::to_string),
        90,
    );
    store.insert(record).await.unwrap();
}

pub async fn create_expired_token(store: &MemoryTokenRepository, token: &str, url: &str) {
    let mut record = TokenRecord::issue(token.to_string(), url.to_string(), None, None, 90);
    record.expires_at = Utc::now() - Duration::hours(1);
    store.insert(record).await.unwrap();
}

pub async fn create_test_click(store: &MemoryTokenRepository, token: &str, ip: &str) {
    store.record_click(token, ip, "TestBot/1.0").await.unwrap();
}

pub fn create_test_state() -> (
    AppState,
    mpsc::Receiver<LogEvent>,
    Arc<MemoryTokenRepository>,
) {
    create_test_state_with_queue(100)
}

pub fn create_test_state_with_queue(
    capacity: usize,
) -> (
    AppState,
    mpsc::Receiver<LogEvent>,
    Arc<MemoryTokenRepository>,
) {
    let store = Arc::new(MemoryTokenRepository::new());
    let (tx, rx) = mpsc::channel(capacity);

    let tracker_service = Arc::new(TrackerService::new(store.clone(), 32, 90));

    let state = AppState {
        tracker_service,
        sheet_log: Arc::new(NullSheetLog::new()),
        log_sender: tx,
        base_url: "http://localhost:3000".to_string(),
    };

    (state, rx, store)
}
