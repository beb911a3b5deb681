//! In-memory transport for tests.

use super::errors::TransportError;
use super::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;

/// Answers registered URLs; anything else behaves like a server that is down
#[derive(Default)]
pub struct MockTransport {
    gets: HashMap<String, HttpResponse>,
    posts: HashMap<String, HttpResponse>,
    requested: RefCell<Vec<String>>,
    posted: RefCell<Vec<serde_json::Value>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_get(mut self, url: &str, status: u16, body: &str) -> Self {
        self.gets.insert(url.to_string(), response(status, body));
        self
    }

    pub fn respond_post(mut self, url: &str, status: u16, body: &str) -> Self {
        self.posts.insert(url.to_string(), response(status, body));
        self
    }

    /// URLs in request order, prefixed with the method
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }

    pub fn posted_bodies(&self) -> Vec<serde_json::Value> {
        self.posted.borrow().clone()
    }
}

fn response(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        status_text: String::new(),
        body: body.to_string(),
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requested.borrow_mut().push(format!("GET {}", url));
        self.gets
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::NoResponse("connection refused".to_string()))
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        self.requested.borrow_mut().push(format!("POST {}", url));
        self.posted.borrow_mut().push(body.clone());
        self.posts
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::NoResponse("connection refused".to_string()))
    }
}
