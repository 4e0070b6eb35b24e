//! HTTP seam
//!
//! `HttpService` abstracts a GET so the collection helpers can be tested
//! without a network.

use anyhow::Result;
use async_trait::async_trait;

use crate::client::{ApiResponse, RestClient};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpService: Send + Sync {
    async fn get(&self, path: &str) -> Result<ApiResponse>;
}

#[async_trait]
impl HttpService for RestClient {
    async fn get(&self, path: &str) -> Result<ApiResponse> {
        RestClient::get(self, path).await
    }
}

pub async fn fetch_posts<H: HttpService + ?Sized>(http: &H) -> Result<ApiResponse> {
    http.get("/posts").await
}

pub async fn fetch_users<H: HttpService + ?Sized>(http: &H) -> Result<ApiResponse> {
    http.get("/users").await
}

pub async fn fetch_todos<H: HttpService + ?Sized>(http: &H) -> Result<ApiResponse> {
    http.get("/todos").await
}

pub async fn fetch_comments<H: HttpService + ?Sized>(http: &H) -> Result<ApiResponse> {
    http.get("/comments").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expect_once(path: &'static str, response: ApiResponse) -> MockHttpService {
        let mut mock = MockHttpService::new();
        mock.expect_get()
            .withf(move |requested| requested == path)
            .times(1)
            .returning(move |_| Ok(response.clone()));
        mock
    }

    #[tokio::test]
    async fn fetch_users_calls_users_once() {
        let users = json!([{"id": 1, "name": "Leanne Graham"}]);
        let mock = expect_once("/users", ApiResponse::new(200, users.clone()));

        let response = fetch_users(&mock).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, users);
    }

    #[tokio::test]
    async fn fetch_posts_returns_empty_list() {
        let mock = expect_once("/posts", ApiResponse::new(200, json!([])));
        let response = fetch_posts(&mock).await.unwrap();
        assert_eq!(response.items().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn fetch_todos_passes_server_error_through() {
        let mock = expect_once("/todos", ApiResponse::new(500, json!({"error": "boom"})));
        let response = fetch_todos(&mock).await.unwrap();
        assert_eq!(response.status, 500);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn fetch_comments_passes_not_found_through() {
        let mock = expect_once("/comments", ApiResponse::new(404, json!({})));
        let response = fetch_comments(&mock).await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn fetch_propagates_transport_errors() {
        let mut mock = MockHttpService::new();
        mock.expect_get()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("connection refused")));

        let err = fetch_users(&mock).await.unwrap_err();
        assert_eq!(err.to_string(), "connection refused");
    }
}
