use std::net::SocketAddr;
use std::sync::Arc;

use cloudfront_redirect::config::SigningConfig;
use cloudfront_redirect::router::build_redirect_router;
use cloudfront_redirect::state::RedirectState;
use tokio::net::TcpListener;

use super::{DISTRIBUTION_DOMAIN, KEY_PAIR_ID, RSA_KEY_PEM};

pub struct TestClient {
    client: reqwest::Client,
    addr: SocketAddr,
}

impl TestClient {
    pub async fn new() -> Self {
        Self::with_private_key(RSA_KEY_PEM).await
    }

    pub async fn with_private_key(pem: &str) -> Self {
        let config = SigningConfig::new(pem, KEY_PAIR_ID, DISTRIBUTION_DOMAIN);
        let app = build_redirect_router(Arc::new(RedirectState::new(config)));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind ephemeral socket");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        // Redirects must reach the test untouched.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        TestClient { client, addr }
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder {
            builder: self.client.get(format!("http://{}{}", self.addr, url)),
        }
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder {
            builder: self.client.post(format!("http://{}{}", self.addr, url)),
        }
    }
}

pub struct RequestBuilder {
    builder: reqwest::RequestBuilder,
}

impl RequestBuilder {
    pub async fn send(self) -> TestResponse {
        TestResponse {
            response: self.builder.send().await.unwrap(),
        }
    }

    pub fn header(mut self, key: impl AsRef<str>, value: &str) -> Self {
        self.builder = self
            .builder
            .header(key.as_ref().to_string(), value.to_string());
        self
    }
}

/// A wrapper around [`reqwest::Response`] that provides common methods with internal `unwrap()`s.
#[derive(Debug)]
pub struct TestResponse {
    response: reqwest::Response,
}

impl TestResponse {
    pub fn assert_status_found(&self) {
        assert_eq!(self.status(), reqwest::StatusCode::FOUND);
    }

    pub fn assert_status_bad_request(&self) {
        assert_eq!(self.status(), reqwest::StatusCode::BAD_REQUEST);
    }

    pub fn assert_status_internal_server_error(&self) {
        assert_eq!(self.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);
    }

    pub fn assert_header_content_type_json(&self) {
        assert_eq!(
            self.response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .unwrap(),
            "application/json; charset=utf-8"
        );
    }

    pub fn assert_no_location(&self) {
        assert!(self
            .response
            .headers()
            .get(reqwest::header::LOCATION)
            .is_none());
    }

    pub fn location(&self) -> String {
        self.response
            .headers()
            .get(reqwest::header::LOCATION)
            .expect("response has a Location header")
            .to_str()
            .unwrap()
            .to_string()
    }

    pub async fn text(self) -> String {
        self.response.text().await.unwrap()
    }

    pub async fn json(self) -> serde_json::Value {
        let text = self.text().await;
        serde_json::from_str(&text).unwrap()
    }

    pub fn status(&self) -> reqwest::StatusCode {
        self.response.status()
    }
}
