#![allow(dead_code)]

use card_validation_service::config::{
    CardValidationConfig, Environment, StoreBackend, StoreConfig,
};
use card_validation_service::services::CardValidationStore;
use card_validation_service::startup::Application;
use card_validation_service::{build_router, AppState};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const VALID_CARD: &str = "3379 5135 6110 8795";
pub const INVALID_CARD: &str = "3379 5135 6110 8794";

/// Primed lookup that counts how often it is consulted.
#[derive(Default)]
pub struct StubCardStore {
    validation: HashMap<String, bool>,
    calls: AtomicUsize,
}

impl StubCardStore {
    pub fn primed() -> Arc<Self> {
        Arc::new(Self {
            validation: HashMap::from([
                (VALID_CARD.to_string(), true),
                (INVALID_CARD.to_string(), false),
            ]),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CardValidationStore for StubCardStore {
    fn get_card_validation(&self, card_number: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.validation.get(card_number).copied().unwrap_or(false)
    }
}

pub fn test_config() -> CardValidationConfig {
    CardValidationConfig {
        common: service_core::config::Config {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0, // Random port
        },
        environment: Environment::Dev,
        service_name: "card-validation-service-test".to_string(),
        service_version: "test".to_string(),
        log_level: "error".to_string(),
        otlp_endpoint: None,
        store: StoreConfig {
            backend: StoreBackend::Luhn,
            valid_numbers: Vec::new(),
        },
    }
}

pub fn test_router(store: Arc<StubCardStore>) -> axum::Router {
    build_router(AppState::new(test_config(), store))
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<StubCardStore>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let store = StubCardStore::primed();

        let app = Application::build(test_config(), store.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
        }
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }

    pub fn validation_url(&self) -> String {
        format!("{}/credit_card_number/", self.address)
    }
}
