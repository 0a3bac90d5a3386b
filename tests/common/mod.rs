#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{extract::Request, ServiceExt};
use chrono::{Duration, TimeZone, Utc};
use reqwest::{redirect::Policy, Client, Response};
use uuid::Uuid;

use notes_dashboard::auth::{generate_jwt, Claims};
use notes_dashboard::config::AppConfig;
use notes_dashboard::database::models::Note;
use notes_dashboard::database::{MemoryNoteStore, NoteStore};
use notes_dashboard::{service, AppState};

pub const SECRET: &str = "integration-test-secret";

/// An in-process server on its own port with its own store
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    client: Client,
}

/// A user holding a valid token
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub token: String,
}

impl TestUser {
    pub fn new(name: &str) -> Self {
        let id = Uuid::new_v4();
        let claims = Claims::new(id, name, Duration::hours(1));
        let token = generate_jwt(&claims, SECRET).expect("sign test token");
        Self {
            id,
            name: name.to_string(),
            token,
        }
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.security.jwt_secret = SECRET.to_string();
    config.api.enable_request_logging = false;
    config
}

/// Fresh server backed by an empty in-memory store
pub async fn spawn_server() -> Result<(TestServer, MemoryNoteStore)> {
    spawn_with_memory(MemoryNoteStore::new()).await
}

/// Server sharing `store`, so tests can seed and inspect it directly
pub async fn spawn_with_memory(store: MemoryNoteStore) -> Result<(TestServer, MemoryNoteStore)> {
    let server = spawn_with_store(Arc::new(store.clone())).await?;
    Ok((server, store))
}

pub async fn spawn_with_store(store: Arc<dyn NoteStore>) -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind 127.0.0.1:{}", port))?;

    let app = service(AppState::new(store, test_config()));
    tokio::spawn(async move {
        let _ = axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await;
    });

    let client = Client::builder().redirect(Policy::none()).build()?;

    Ok(TestServer {
        port,
        base_url: format!("http://127.0.0.1:{}", port),
        client,
    })
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn get(&self, user: &TestUser, path: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(&user.token)
            .send()
            .await?)
    }

    pub async fn post_form(&self, user: &TestUser, path: &str, form: &[(&str, &str)]) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .bearer_auth(&user.token)
            .form(form)
            .send()
            .await?)
    }

    pub async fn put_form(&self, user: &TestUser, path: &str, form: &[(&str, &str)]) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .bearer_auth(&user.token)
            .form(form)
            .send()
            .await?)
    }

    pub async fn delete(&self, user: &TestUser, path: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .bearer_auth(&user.token)
            .send()
            .await?)
    }

    pub async fn json(&self, user: &TestUser, path: &str) -> Result<serde_json::Value> {
        let res = self.get(user, path).await?;
        anyhow::ensure!(res.status().is_success(), "GET {} returned {}", path, res.status());
        Ok(res.json().await?)
    }
}

/// A note for `user_id` whose timestamps sit `minutes` after a fixed epoch
pub fn note_at(user_id: Uuid, title: &str, body: &str, minutes: i64) -> Note {
    let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap() + Duration::minutes(minutes);
    Note {
        id: Uuid::new_v4(),
        user_id,
        title: title.to_string(),
        body: body.to_string(),
        created_at: ts,
        updated_at: ts,
    }
}

pub fn assert_redirects_to_dashboard(res: &Response) {
    assert_eq!(res.status(), reqwest::StatusCode::SEE_OTHER, "expected redirect, got {}", res.status());
    assert_eq!(
        res.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/dashboard")
    );
}
