//! Integration tests for durability, tampering, and wiring from configuration.

mod helpers;

use playshare::{ErrorKind, ShareContext};
use playshare_core::config::{AppConfig, LoggingConfig};
use playshare_store::ShareStore;

#[tokio::test]
async fn test_acknowledged_share_survives_restart() {
    let app = helpers::TestApp::new().await;
    let record = app
        .ctx
        .issuer
        .create(&app.user("alice"), vec!["t1".to_string(), "t2".to_string()], None)
        .await
        .unwrap();
    assert!(app.store_path().exists());

    let app = app.restart(helpers::TEST_SECRET).await;
    assert_eq!(app.ctx.store.len().await.unwrap(), 1);

    let shared = app.ctx.resolver.lookup(&record.playlist_id).await.unwrap();
    assert_eq!(shared.token, record.token);
    assert_eq!(shared.playlist, vec!["t1", "t2"]);
}

#[tokio::test]
async fn test_out_of_band_token_edit_is_denied() {
    let app = helpers::TestApp::new().await;
    let record = app
        .ctx
        .issuer
        .create(&app.user("alice"), vec!["t1".to_string()], None)
        .await
        .unwrap();

    // Edit the stored token behind the store's back.
    let path = app.store_path();
    let mut document: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    let token = document[0]["token"].as_str().unwrap().to_string();
    let last = token.chars().last().unwrap();
    let replacement = if last == 'A' { 'B' } else { 'A' };
    let tampered = format!("{}{}", &token[..token.len() - 1], replacement);
    document[0]["token"] = serde_json::Value::String(tampered);
    std::fs::write(&path, serde_json::to_vec(&document).unwrap()).unwrap();

    let app = app.restart(helpers::TEST_SECRET).await;

    let why = app.ctx.resolver.resolve(&record.playlist_id).await.unwrap_err();
    assert_eq!(why.kind, ErrorKind::InvalidSignature);

    let denied = app.ctx.resolver.lookup(&record.playlist_id).await.unwrap_err();
    let missing = app.ctx.resolver.lookup("nonexistent-id").await.unwrap_err();
    assert_eq!(denied.kind, ErrorKind::AccessDenied);
    assert_eq!(denied.to_string(), missing.to_string());
}

#[tokio::test]
async fn test_out_of_band_owner_edit_is_detected() {
    let app = helpers::TestApp::new().await;
    let record = app
        .ctx
        .issuer
        .create(&app.user("alice"), vec!["t1".to_string()], None)
        .await
        .unwrap();

    let path = app.store_path();
    let mut document: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    document[0]["user"] = serde_json::Value::String("mallory".to_string());
    std::fs::write(&path, serde_json::to_vec(&document).unwrap()).unwrap();

    let app = app.restart(helpers::TEST_SECRET).await;
    let why = app.ctx.resolver.resolve(&record.playlist_id).await.unwrap_err();
    assert_eq!(why.kind, ErrorKind::InvalidSignature);
}

#[tokio::test]
async fn test_rotating_secret_invalidates_existing_links() {
    let app = helpers::TestApp::new().await;
    let record = app
        .ctx
        .issuer
        .create(&app.user("alice"), vec!["t1".to_string()], None)
        .await
        .unwrap();

    let app = app.restart("a-brand-new-secret").await;

    let why = app.ctx.resolver.resolve(&record.playlist_id).await.unwrap_err();
    assert_eq!(why.kind, ErrorKind::InvalidSignature);
    assert_eq!(
        app.ctx
            .resolver
            .lookup(&record.playlist_id)
            .await
            .unwrap_err()
            .kind,
        ErrorKind::AccessDenied
    );
}

#[tokio::test]
async fn test_wiring_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("playshare.toml");
    std::fs::write(
        &config_path,
        format!(
            "[auth]\nshare_secret = \"from-file\"\n\n[store]\nbackend = \"file\"\npath = \"{}\"\n\n[share]\nid_length = 16\n",
            dir.path().join("shares.json").display()
        ),
    )
    .unwrap();

    let config = AppConfig::load(config_path.to_str().unwrap()).unwrap();
    assert_eq!(config.share.id_length, 16);

    let ctx = ShareContext::from_config(&config).await.unwrap();
    let record = ctx
        .issuer
        .create(&playshare::RequestContext::new("bob"), vec!["t1".to_string()], None)
        .await
        .unwrap();
    assert_eq!(record.playlist_id.len(), 16);
    assert!(ctx.resolver.lookup(&record.playlist_id).await.is_ok());
}

#[tokio::test]
async fn test_wiring_rejects_missing_secret() {
    let config = AppConfig::default();
    let err = ShareContext::from_config(&config).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}

#[test]
fn test_logging_bootstrap() {
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: "json".to_string(),
    };
    // A subscriber may already be installed by another test in this binary.
    let _ = playshare_core::logging::init(&config);
    tracing::info!("logging initialised");
}
