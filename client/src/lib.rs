//! FakeAPI client
//!
//! Async JSON client for JSONPlaceholder and my-json-server, plus the
//! `HttpService` seam used by the collection helpers.

pub mod client;
pub mod http;
pub mod services;

pub use client::{ApiResponse, RestClient};
pub use http::{fetch_comments, fetch_posts, fetch_todos, fetch_users, HttpService};
pub use services::{JsonPlaceholder, MyJsonServer};
