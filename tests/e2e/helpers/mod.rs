use audioguide_backend::controllers::markup::MarkupController;
use audioguide_backend::domain::narration::MarkupService;
use audioguide_backend::infrastructure::config::{Config, Environment, LogFormat};
use audioguide_backend::infrastructure::http::build_router;
use serde_json::{json, Value};
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod api_client;

use api_client::TestClient;

pub struct TestContext {
    pub client: TestClient,
    #[allow(dead_code)]
    pub config: Config,
}

pub fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0, // Will be assigned by the OS
        environment: Environment::Development,
        log_format: LogFormat::Pretty,
        markup_cache_enabled: false, // Keep tests independent of each other
        max_content_chars: 2000,
        max_terms: 5,
    }
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let config = test_config();

            let markup_service = Arc::new(MarkupService::new(
                config.markup_cache_enabled,
                config.max_content_chars,
                config.max_terms,
            ));
            let markup_controller = Arc::new(MarkupController::new(markup_service));
            let app = build_router(&config, markup_controller);

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&base_url),
                config,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Server task ends with the test runtime
        }
    }
}

/// Settings JSON in the collaborator wire shape
pub fn settings_json(vendor: &str) -> Value {
    json!({
        "vendor": vendor,
        "voiceIdentifier": "hy-AM-AnahitNeural",
        "pacingMultiplier": 0.95,
        "emphasisStrength": 0.85,
        "solemnity": 1.2,
        "outputContainer": "mp3"
    })
}

pub fn glossary_json() -> Value {
    json!([
        {
            "text": "Tsitsernakaberd",
            "phoneticTranscription": "t͡sit͡sɛrnɑkɑˈbɛrt",
            "category": "toponym"
        },
        {
            "text": "Armenia",
            "phoneticTranscription": "ɑrˈmeniə",
            "category": "toponym"
        },
        {
            "text": "Western Armenia",
            "phoneticTranscription": "ˈwɛstərn ɑrˈmeniə",
            "category": "toponym"
        }
    ])
}
