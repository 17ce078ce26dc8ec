//! BDD test world for the status notifier

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use cucumber::World;
use status_notifier::config::TransportErrorPolicy;
use status_notifier::io::{HttpClient, HttpResponse};
use status_notifier::{NotifierError, RunReport};

/// HTTP client answering GETs from a script and recording every POST
#[derive(Debug, Default)]
pub struct ScriptedHttpClient {
    /// Status per URL; `None` simulates a transport failure
    pub statuses: HashMap<String, Option<u16>>,
    pub webhook_status: u16,
    pub gets: Mutex<Vec<String>>,
    pub posts: Mutex<Vec<(String, String)>>,
}

impl ScriptedHttpClient {
    pub fn posts(&self) -> Vec<(String, String)> {
        self.posts.lock().unwrap().clone()
    }

    pub fn gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl HttpClient for ScriptedHttpClient {
    async fn get(&self, url: &str) -> status_notifier::Result<HttpResponse> {
        self.gets.lock().unwrap().push(url.to_string());
        match self.statuses.get(url) {
            Some(Some(status)) => Ok(HttpResponse {
                status: *status,
                body: String::new(),
            }),
            Some(None) => Err(NotifierError::Http(format!(
                "GET {} failed: connection refused",
                url
            ))),
            None => panic!("no scripted response for {}", url),
        }
    }

    async fn post_json(&self, url: &str, body: &str) -> status_notifier::Result<HttpResponse> {
        self.posts
            .lock()
            .unwrap()
            .push((url.to_string(), body.to_string()));
        Ok(HttpResponse {
            status: self.webhook_status,
            body: String::new(),
        })
    }
}

#[derive(Debug, Default, World)]
pub struct NotifierWorld {
    pub endpoints: Vec<String>,
    pub statuses: HashMap<String, Option<u16>>,
    pub role_id: Option<String>,
    pub policy: TransportErrorPolicy,
    pub webhook_status: Option<u16>,

    pub http: Option<Arc<ScriptedHttpClient>>,
    pub reports: Vec<RunReport>,
    pub run_error: Option<NotifierError>,
}
