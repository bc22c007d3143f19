//! Remote cat lookup against a public image search API.
//!
//! Failures never reach callers of [`RemoteCatFetcher::fetch_random_cat`]; they are
//! logged and replaced with the catalog's fallback cat.

use crate::catalog::{fallback_cat, FACTS, NAMES};
use crate::models::CatRecord;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://api.thecatapi.com/v1/images/search";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("cat API request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("cat API returned status {0}")]
    Status(u16),
    #[error("cat API response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("cat API returned no images")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct ApiImage {
    id: String,
    url: String,
}

#[derive(Clone)]
pub struct RemoteCatFetcher {
    client: Client,
    endpoint: String,
}

impl RemoteCatFetcher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub async fn try_fetch(&self) -> Result<CatRecord, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let images: Vec<ApiImage> = response.json().await.map_err(FetchError::Decode)?;
        let image = images.into_iter().next().ok_or(FetchError::Empty)?;

        let mut rng = rand::thread_rng();
        let fact = FACTS.choose(&mut rng).copied().unwrap_or(FACTS[0]);
        let name = NAMES.choose(&mut rng).copied().unwrap_or(NAMES[0]);

        Ok(CatRecord {
            id: image.id,
            image_url: image.url,
            fact: fact.to_string(),
            display_name: name.to_string(),
            is_personal: false,
        })
    }

    pub async fn fetch_random_cat(&self) -> CatRecord {
        match self.try_fetch().await {
            Ok(cat) => {
                debug!(id = %cat.id, "fetched remote cat");
                cat
            }
            Err(err) => {
                warn!(endpoint = %self.endpoint, "{err}; using fallback cat");
                fallback_cat()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/images/search")
    }

    fn fetcher(endpoint: String) -> RemoteCatFetcher {
        RemoteCatFetcher::new(endpoint, Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn builds_cat_from_first_image() {
        let router = Router::new().route(
            "/images/search",
            get(|| async {
                Json(serde_json::json!([
                    { "id": "abc", "url": "https://cdn.example.com/abc.jpg", "width": 500 },
                    { "id": "def", "url": "https://cdn.example.com/def.jpg" }
                ]))
            }),
        );
        let cat = fetcher(serve(router).await).fetch_random_cat().await;

        assert_eq!(cat.id, "abc");
        assert_eq!(cat.image_url, "https://cdn.example.com/abc.jpg");
        assert!(FACTS.contains(&cat.fact.as_str()));
        assert!(NAMES.contains(&cat.display_name.as_str()));
        assert!(!cat.is_personal);
    }

    #[tokio::test]
    async fn error_status_is_reported_and_absorbed() {
        let router = Router::new().route(
            "/images/search",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let fetcher = fetcher(serve(router).await);

        assert!(matches!(fetcher.try_fetch().await, Err(FetchError::Status(503))));
        assert_eq!(fetcher.fetch_random_cat().await, fallback_cat());
    }

    #[tokio::test]
    async fn empty_and_malformed_bodies_fall_back() {
        let router = Router::new()
            .route("/images/search", get(|| async { Json(serde_json::json!([])) }))
            .route("/broken", get(|| async { "not json" }));
        let endpoint = serve(router).await;
        let broken = endpoint.replace("/images/search", "/broken");

        let empty = fetcher(endpoint);
        assert!(matches!(empty.try_fetch().await, Err(FetchError::Empty)));
        assert_eq!(empty.fetch_random_cat().await, fallback_cat());

        let malformed = fetcher(broken);
        assert!(matches!(malformed.try_fetch().await, Err(FetchError::Decode(_))));
        assert_eq!(malformed.fetch_random_cat().await, fallback_cat());
    }

    #[tokio::test]
    async fn unreachable_host_falls_back() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let fetcher = fetcher(format!("http://127.0.0.1:{port}/images/search"));
        assert!(matches!(fetcher.try_fetch().await, Err(FetchError::Request(_))));
        assert_eq!(fetcher.fetch_random_cat().await, fallback_cat());
    }
}
