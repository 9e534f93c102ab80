//! Integration tests for share create and access.

mod helpers;

use std::num::NonZeroU32;

use chrono::Duration;

use playshare::{CreateShareRequest, ErrorKind};
use playshare_core::traits::Clock;
use playshare_store::ShareStore;

fn request(tracks: &[&str], days: Option<u32>) -> CreateShareRequest {
    CreateShareRequest {
        playlist: tracks.iter().map(|t| t.to_string()).collect(),
        time: days.and_then(NonZeroU32::new),
    }
}

#[tokio::test]
async fn test_create_then_resolve() {
    let app = helpers::TestApp::new().await;
    let alice = app.user("alice");

    let record = app
        .ctx
        .issuer
        .create_share(&alice, request(&["a", "b"], None))
        .await
        .unwrap();

    let shared = app.ctx.resolver.lookup(&record.playlist_id).await.unwrap();
    assert_eq!(shared.token, record.token);
    assert_eq!(shared.playlist, vec!["a", "b"]);
}

#[tokio::test]
async fn test_create_response_shape() {
    let app = helpers::TestApp::in_memory().await;

    let record = app
        .ctx
        .issuer
        .create_share(&app.user("alice"), request(&["t1"], Some(3)))
        .await
        .unwrap();

    let body = serde_json::to_value(&record).unwrap();
    assert_eq!(body["playlistId"], record.playlist_id.as_str());
    assert_eq!(body["user"], "alice");
    assert_eq!(body["playlist"], serde_json::json!(["t1"]));
    assert!(body["expires"].is_i64());
    assert!(body["token"].is_string());

    let shared = app.ctx.resolver.lookup(&record.playlist_id).await.unwrap();
    let public = serde_json::to_value(&shared).unwrap();
    assert_eq!(public.as_object().unwrap().len(), 2);
    assert!(public.get("user").is_none());
}

#[tokio::test]
async fn test_one_day_share_expires() {
    let app = helpers::TestApp::new().await;
    let issued_at = app.clock.now();

    let record = app
        .ctx
        .issuer
        .create_share(&app.user("alice"), request(&["t1", "t2", "t3"], Some(1)))
        .await
        .unwrap();

    let shared = app.ctx.resolver.lookup(&record.playlist_id).await.unwrap();
    assert_eq!(shared.playlist, vec!["t1", "t2", "t3"]);

    let claims = app.ctx.tokens.verify(&shared.token).unwrap();
    let expected = (issued_at + Duration::days(1)).timestamp();
    assert!((claims.exp.unwrap() - expected).abs() <= 1);
    assert_eq!(claims.expires_at(), record.expires_at);

    app.clock.advance(Duration::days(2));
    let err = app
        .ctx
        .resolver
        .lookup(&record.playlist_id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::AccessDenied);
}

#[tokio::test]
async fn test_share_without_time_never_expires() {
    let app = helpers::TestApp::new().await;

    let record = app
        .ctx
        .issuer
        .create_share(&app.user("alice"), request(&["t1"], None))
        .await
        .unwrap();
    assert_eq!(record.expires_at, None);

    let claims = app.ctx.tokens.verify(&record.token).unwrap();
    assert_eq!(claims.exp, None);

    app.clock.advance(Duration::days(365 * 50));
    assert!(app.ctx.resolver.lookup(&record.playlist_id).await.is_ok());
}

#[tokio::test]
async fn test_denials_are_indistinguishable() {
    let app = helpers::TestApp::in_memory().await;
    let alice = app.user("alice");

    let expiring = app
        .ctx
        .issuer
        .create_share(&alice, request(&["t1"], Some(1)))
        .await
        .unwrap();
    app.clock.advance(Duration::days(2));

    let missing = app.ctx.resolver.lookup("nonexistent-id").await.unwrap_err();
    let expired = app
        .ctx
        .resolver
        .lookup(&expiring.playlist_id)
        .await
        .unwrap_err();

    assert_eq!(missing.kind, expired.kind);
    assert_eq!(missing.message, expired.message);
    assert_eq!(missing.to_string(), expired.to_string());

    // Internally the causes stay distinct.
    let why_missing = app.ctx.resolver.resolve("nonexistent-id").await.unwrap_err();
    let why_expired = app
        .ctx
        .resolver
        .resolve(&expiring.playlist_id)
        .await
        .unwrap_err();
    assert_eq!(why_missing.kind, ErrorKind::NotFound);
    assert_eq!(why_expired.kind, ErrorKind::Expired);
}

#[tokio::test]
async fn test_each_share_gets_a_fresh_id() {
    let app = helpers::TestApp::in_memory().await;
    let alice = app.user("alice");

    let first = app
        .ctx
        .issuer
        .create_share(&alice, request(&["t1"], None))
        .await
        .unwrap();
    let second = app
        .ctx
        .issuer
        .create_share(&alice, request(&["t1"], None))
        .await
        .unwrap();

    assert_ne!(first.playlist_id, second.playlist_id);
    assert_ne!(first.token, second.token);
    assert_eq!(first.playlist_id.len(), 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_issue_and_resolve() {
    let app = helpers::TestApp::in_memory().await;
    let mut handles = Vec::new();

    for i in 0..32 {
        let issuer = app.ctx.issuer.clone();
        let resolver = app.ctx.resolver.clone();
        let user = app.user(&format!("user-{i}"));
        handles.push(tokio::spawn(async move {
            let record = issuer
                .create(&user, vec![format!("track-{i}")], None)
                .await
                .unwrap();
            resolver.lookup(&record.playlist_id).await.unwrap()
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let shared = handle.await.unwrap();
        assert_eq!(shared.playlist, vec![format!("track-{i}")]);
    }
    assert_eq!(app.ctx.store.len().await.unwrap(), 32);
}
