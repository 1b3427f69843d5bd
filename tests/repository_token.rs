mod common;

use link_tracker::domain::entities::{TokenRecord, TrackOutcome};
use link_tracker::domain::repositories::TokenRepository;
use link_tracker::infrastructure::store::MemoryTokenRepository;
use link_tracker::utils::click_hash::click_hash;
use std::sync::Arc;

#[tokio::test]
async fn test_insert_and_find() {
    let repo = MemoryTokenRepository::new();

    let record = TokenRecord::issue(
        "tok-1".to_string(),
        "https://example.com".to_string(),
        Some("user@example.com".to_string()),
        Some("spring".to_string()),
        90,
    );
    repo.insert(record).await.unwrap();

    let info = repo.find("tok-1").await.unwrap();

    assert!(info.is_some());
    let info = info.unwrap();
    assert_eq!(info.record.token, "tok-1");
    assert_eq!(info.record.target_url, "https://example.com");
    assert_eq!(info.record.email, Some("user@example.com".to_string()));
    assert_eq!(info.record.campaign, "spring");
    assert_eq!(info.record.click_count, 0);
    assert!(info.clicks.is_empty());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_find_not_found() {
    let repo = MemoryTokenRepository::new();

    let info = repo.find("missing").await.unwrap();

    assert!(info.is_none());
}

#[tokio::test]
async fn test_record_click_appends_and_increments() {
    let repo = MemoryTokenRepository::new();
    common::create_test_token(&repo, "tok-click", "https://example.com/page").await;

    let outcome = repo
        .record_click("tok-click", "203.0.113.9", "Mozilla/5.0")
        .await
        .unwrap();

    let TrackOutcome::Recorded(receipt) = outcome else {
        panic!("expected Recorded outcome");
    };
    assert_eq!(receipt.target_url, "https://example.com/page");
    assert_eq!(receipt.click_count, 1);

    let info = repo.find("tok-click").await.unwrap().unwrap();
    assert_eq!(info.record.click_count, 1);
    assert_eq!(info.clicks.len(), 1);

    let click = &info.clicks[0];
    assert_eq!(click.ip_address, "203.0.113.9");
    assert_eq!(click.user_agent, "Mozilla/5.0");
    assert_eq!(click.timestamp, receipt.timestamp);
    assert_eq!(click.click_hash, click_hash("tok-click", "203.0.113.9"));
}

#[tokio::test]
async fn test_record_click_receipts_carry_running_count() {
    let repo = MemoryTokenRepository::new();
    common::create_test_token(&repo, "tok-seq", "https://example.com").await;

    for expected in 1..=3u64 {
        let outcome = repo
            .record_click("tok-seq", "10.0.0.1", "TestBot/1.0")
            .await
            .unwrap();
        let TrackOutcome::Recorded(receipt) = outcome else {
            panic!("expected Recorded outcome");
        };
        assert_eq!(receipt.click_count, expected);
    }
}

#[tokio::test]
async fn test_record_click_unknown_token() {
    let repo = MemoryTokenRepository::new();

    let outcome = repo
        .record_click("missing", "10.0.0.1", "TestBot/1.0")
        .await
        .unwrap();

    assert!(matches!(outcome, TrackOutcome::UnknownToken));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_record_click_expired_token() {
    let repo = MemoryTokenRepository::new();
    common::create_expired_token(&repo, "tok-stale", "https://example.com").await;

    let outcome = repo
        .record_click("tok-stale", "10.0.0.1", "TestBot/1.0")
        .await
        .unwrap();

    assert!(matches!(outcome, TrackOutcome::Expired));

    let info = repo.find("tok-stale").await.unwrap().unwrap();
    assert_eq!(info.record.click_count, 0);
    assert!(info.clicks.is_empty());
}

#[tokio::test]
async fn test_find_expired_token_keeps_metadata() {
    let repo = MemoryTokenRepository::new();
    common::create_expired_token(&repo, "tok-old", "https://example.com/archived").await;

    let info = repo.find("tok-old").await.unwrap();

    assert!(info.is_some());
    assert_eq!(info.unwrap().record.target_url, "https://example.com/archived");
}

#[tokio::test]
async fn test_insert_replaces_existing_record() {
    let repo = MemoryTokenRepository::new();
    common::create_test_token(&repo, "tok-dup", "https://example.com/one").await;
    common::create_test_click(&repo, "tok-dup", "10.0.0.1").await;

    common::create_test_token(&repo, "tok-dup", "https://example.com/two").await;

    let info = repo.find("tok-dup").await.unwrap().unwrap();
    assert_eq!(info.record.target_url, "https://example.com/two");
    assert_eq!(info.record.click_count, 0);
    assert!(info.clicks.is_empty());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_clear_all() {
    let repo = MemoryTokenRepository::new();
    common::create_test_token(&repo, "tok-a", "https://example.com").await;
    common::create_test_token(&repo, "tok-b", "https://example.com").await;
    common::create_test_click(&repo, "tok-a", "10.0.0.1").await;

    repo.clear_all();

    assert_eq!(repo.count().await.unwrap(), 0);
    assert!(repo.find("tok-a").await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_clicks_are_all_counted() {
    let repo = Arc::new(MemoryTokenRepository::new());
    common::create_test_token(&repo, "tok-race", "https://example.com").await;

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..64 {
        let repo = repo.clone();
        tasks.spawn(async move {
            repo.record_click("tok-race", &format!("10.0.0.{}", i % 8), "LoadBot/1.0")
                .await
                .unwrap()
        });
    }

    while let Some(result) = tasks.join_next().await {
        assert!(result.unwrap().is_recorded());
    }

    let info = repo.find("tok-race").await.unwrap().unwrap();
    assert_eq!(info.record.click_count, 64);
    assert_eq!(info.clicks.len(), 64);
}
