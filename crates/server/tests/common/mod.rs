//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `roadmap-server`
//! integration tests. `TestApp` spawns a real server on a random port, with
//! an `httpmock::MockServer` standing in for the upstream completion API.

// Allow unused code because this is a test utility module, and not all
// functions are used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use httpmock::MockServer;
use reqwest::Client;
use roadmap_server::{
    config::{get_config, AppConfig, ProviderConfig},
    router::create_router,
    state::build_app_state,
};
use std::{fs::File, io::Write, net::SocketAddr};
use tempfile::TempDir;
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _config_dir: Option<TempDir>,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the server configured against the mock completion API.
    ///
    /// This path goes through `get_config` with a temporary `config.yml`, so
    /// it also exercises file loading.
    pub async fn spawn() -> Result<Self> {
        let mock_server = MockServer::start();
        let config_dir = tempfile::tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
provider:
  api_url: "{}"
  api_key: "test-api-key"
  model_name: "mock-chat-model"
"#,
            mock_server.url("/v1/chat/completions")
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config = get_config(Some(config_path.to_str().unwrap()))?;
        let mut app = TestApp::spawn_with_config(config, mock_server).await?;
        app._config_dir = Some(config_dir);
        Ok(app)
    }

    /// Spawns the server with no upstream credential (fallback-only mode).
    ///
    /// The config is built directly, without touching process environment,
    /// so this cannot be flipped to "configured" by a stray `GROQ_API_KEY`.
    pub async fn spawn_unconfigured() -> Result<Self> {
        let mock_server = MockServer::start();
        let config = AppConfig {
            port: 0,
            provider: ProviderConfig {
                api_url: mock_server.url("/v1/chat/completions"),
                api_key: None,
                model_name: "mock-chat-model".to_string(),
            },
        };
        TestApp::spawn_with_config(config, mock_server).await
    }

    /// Spawns the server with the given configuration on an ephemeral port.
    pub async fn spawn_with_config(config: AppConfig, mock_server: MockServer) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let app_state = build_app_state(config)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _config_dir: None,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
