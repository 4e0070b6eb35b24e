//! Typed wrappers for the two public fake REST services
//!
//! Both default to the public hosts and can be pointed at a local
//! `fakeapi-server` through `from_env`.

use std::fmt::Display;

use anyhow::Result;
use serde_json::Value;

use crate::client::{ApiResponse, RestClient};

/// Client for jsonplaceholder.typicode.com
#[derive(Clone)]
pub struct JsonPlaceholder {
    client: RestClient,
}

impl JsonPlaceholder {
    pub const DEFAULT_BASE_URL: &'static str = "https://jsonplaceholder.typicode.com";
    pub const BASE_URL_ENV: &'static str = "FAKEAPI_JSONPLACEHOLDER_URL";

    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: RestClient::new(base_url)?,
        })
    }

    /// Base URL from `FAKEAPI_JSONPLACEHOLDER_URL`, or the public host
    pub fn from_env() -> Result<Self> {
        Self::new(&base_url_from_env(Self::BASE_URL_ENV, Self::DEFAULT_BASE_URL))
    }

    pub fn client(&self) -> &RestClient {
        &self.client
    }

    // --- Posts ---

    pub async fn get_all_posts(&self) -> Result<ApiResponse> {
        self.client.get("/posts").await
    }

    pub async fn get_post(&self, id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/posts/{}", id)).await
    }

    pub async fn create_post(&self, post: &Value) -> Result<ApiResponse> {
        self.client.post("/posts", post).await
    }

    pub async fn update_post(&self, id: impl Display, post: &Value) -> Result<ApiResponse> {
        self.client.put(&format!("/posts/{}", id), post).await
    }

    pub async fn delete_post(&self, id: impl Display) -> Result<ApiResponse> {
        self.client.delete(&format!("/posts/{}", id)).await
    }

    pub async fn get_posts_by_user(&self, user_id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/posts?userId={}", user_id)).await
    }

    pub async fn get_post_comments(&self, post_id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/posts/{}/comments", post_id)).await
    }

    // --- Users ---

    pub async fn get_all_users(&self) -> Result<ApiResponse> {
        self.client.get("/users").await
    }

    pub async fn get_user(&self, id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/users/{}", id)).await
    }

    pub async fn create_user(&self, user: &Value) -> Result<ApiResponse> {
        self.client.post("/users", user).await
    }

    pub async fn patch_user(&self, id: impl Display, patch: &Value) -> Result<ApiResponse> {
        self.client.patch(&format!("/users/{}", id), patch).await
    }

    pub async fn put_user(&self, id: impl Display, user: &Value) -> Result<ApiResponse> {
        self.client.put(&format!("/users/{}", id), user).await
    }

    pub async fn get_user_posts(&self, user_id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/users/{}/posts", user_id)).await
    }

    // --- Todos ---

    pub async fn get_todo(&self, id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/todos/{}", id)).await
    }

    pub async fn create_todo(&self, todo: &Value) -> Result<ApiResponse> {
        self.client.post("/todos", todo).await
    }

    pub async fn get_todos_by_completion(&self, completed: bool) -> Result<ApiResponse> {
        self.client.get(&format!("/todos?completed={}", completed)).await
    }

    // --- Comments ---

    pub async fn get_all_comments(&self) -> Result<ApiResponse> {
        self.client.get("/comments").await
    }

    pub async fn get_comment(&self, id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/comments/{}", id)).await
    }

    pub async fn create_comment(&self, comment: &Value) -> Result<ApiResponse> {
        self.client.post("/comments", comment).await
    }

    pub async fn get_comments_by_post(&self, post_id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/comments?postId={}", post_id)).await
    }
}

/// Client for the course's my-json-server instance
#[derive(Clone)]
pub struct MyJsonServer {
    client: RestClient,
}

impl MyJsonServer {
    pub const DEFAULT_BASE_URL: &'static str =
        "https://my-json-server.typicode.com/RuinedBreno/Trabalho-Final---Teste-de-Software";
    pub const BASE_URL_ENV: &'static str = "FAKEAPI_MY_JSON_SERVER_URL";

    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: RestClient::new(base_url)?,
        })
    }

    /// Base URL from `FAKEAPI_MY_JSON_SERVER_URL`, or the public host
    pub fn from_env() -> Result<Self> {
        Self::new(&base_url_from_env(Self::BASE_URL_ENV, Self::DEFAULT_BASE_URL))
    }

    pub fn client(&self) -> &RestClient {
        &self.client
    }

    pub async fn get_all_posts(&self) -> Result<ApiResponse> {
        self.client.get("/posts").await
    }

    pub async fn get_post_by_id(&self, id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/posts/{}", id)).await
    }

    pub async fn create_post(&self, post: &Value) -> Result<ApiResponse> {
        self.client.post("/posts", post).await
    }

    pub async fn delete_post(&self, id: impl Display) -> Result<ApiResponse> {
        self.client.delete(&format!("/posts/{}", id)).await
    }

    pub async fn get_all_users(&self) -> Result<ApiResponse> {
        self.client.get("/users").await
    }

    pub async fn get_user_by_id(&self, id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/users/{}", id)).await
    }

    pub async fn patch_user(&self, id: impl Display, patch: &Value) -> Result<ApiResponse> {
        self.client.patch(&format!("/users/{}", id), patch).await
    }

    pub async fn get_comments_by_post_id(&self, post_id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/comments?postId={}", post_id)).await
    }

    pub async fn create_comment(&self, comment: &Value) -> Result<ApiResponse> {
        self.client.post("/comments", comment).await
    }

    pub async fn get_nested_comments_by_post_id(&self, post_id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("/posts/{}/comments", post_id)).await
    }

    /// Users whose `key` field equals `value`
    pub async fn get_users_by_filter(&self, key: &str, value: &str) -> Result<ApiResponse> {
        self.client.get(&filter_path("/users", key, value)).await
    }
}

fn base_url_from_env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn filter_path(collection: &str, key: &str, value: &str) -> String {
    format!(
        "{}?{}={}",
        collection,
        urlencoding::encode(key),
        urlencoding::encode(value)
    )
}
