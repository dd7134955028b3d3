#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use beacon::models::UrlStatus;
use beacon::services::probe::UrlProber;
use beacon::services::store::MemoryStore;
use beacon::utils::config::CorsSettings;
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("beacon=debug")
            .with_test_writer()
            .init();
    });
}

/// A mock prober that records probed URLs and answers without network access.
/// URLs containing "invalid" are reported unreachable; everything else is 200.
#[derive(Debug, Default)]
pub struct MockProber {
    probed: Mutex<Vec<String>>,
}

impl MockProber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all probed URLs for testing verification
    pub fn probed_urls(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }
}

#[async_trait]
impl UrlProber for MockProber {
    async fn probe(&self, url: &str) -> UrlStatus {
        self.probed.lock().unwrap().push(url.to_string());

        if url.contains("invalid") {
            UrlStatus::unreachable(url, "RequestException")
        } else {
            UrlStatus::from_response(url, 200)
        }
    }
}

/// Handles to a running test server
pub struct TestApp {
    pub address: String,
    pub store: Arc<MemoryStore>,
    pub prober: Arc<MockProber>,
}

/// Spawns the application with an in-memory store and wildcard CORS.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> TestApp {
    spawn_app_with_cors(CorsSettings::AnyOrigin).await
}

/// Spawns the application with an in-memory store and the given CORS policy.
pub async fn spawn_app_with_cors(cors: CorsSettings) -> TestApp {
    init_tracing_once();

    let store = Arc::new(MemoryStore::new());
    let prober = Arc::new(MockProber::new());

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let app = beacon::app(store.clone(), prober.clone(), &cors);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    TestApp {
        address,
        store,
        prober,
    }
}
