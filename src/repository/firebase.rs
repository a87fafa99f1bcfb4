//! Firebase Realtime Database backend over the REST API
//!
//! Each child of `{url}/{points_path}` is addressed as
//! `{url}/{points_path}/{key}.json`, with every segment percent-encoded.
//! A push answers `{"name": "<key>"}`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::{PointsBackend, PointsSnapshot};
use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
    models::location_point::{PointFields, UpdateLocationPoint},
};

#[derive(Deserialize)]
struct PushResponse {
    name: String,
}

#[derive(Clone)]
pub struct FirebasePoints {
    client: Client,
    base_url: Url,
    path: Vec<String>,
    auth: Option<String>,
}

impl FirebasePoints {
    pub fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = Url::parse(&config.url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| AppError::Internal(format!("Invalid database url: {}", config.url)))?;

        let path: Vec<String> = config
            .points_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
        if path.is_empty() {
            return Err(AppError::Internal("database.points_path is empty".to_string()));
        }

        Ok(Self {
            client,
            base_url,
            path,
            auth: config.auth.clone().filter(|a| !a.is_empty()),
        })
    }

    /// Base url followed by `segments`, the last one suffixed with `.json`
    fn json_url(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| AppError::Internal("Database url cannot be a base".to_string()))?;
            path.pop_if_empty();
            if let Some((last, parents)) = segments.split_last() {
                path.extend(parents);
                path.push(&format!("{}.json", last));
            }
        }
        Ok(url)
    }

    fn collection_url(&self) -> AppResult<Url> {
        let segments: Vec<&str> = self.path.iter().map(String::as_str).collect();
        self.json_url(&segments)
    }

    fn child_url(&self, key: &str) -> AppResult<Url> {
        let mut segments: Vec<&str> = self.path.iter().map(String::as_str).collect();
        segments.push(key);
        self.json_url(&segments)
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some(token) => request.query(&[("auth", token)]),
            None => request,
        }
    }

    /// Turn a non-2xx answer into a remote database error carrying the body
    async fn check(response: Response, action: &str) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::RemoteDatabase(format!(
            "{} failed with {}: {}",
            action, status, body
        )))
    }
}

/// Convert the collection value into keyed children
fn children_of(value: Value) -> AppResult<PointsSnapshot> {
    match value {
        Value::Null => Ok(PointsSnapshot::new()),
        Value::Object(map) => Ok(map.into_iter().collect()),
        // Integer-like keys come back as a sparse array
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .filter(|(_, v)| !v.is_null())
            .map(|(i, v)| (i.to_string(), v))
            .collect()),
        other => Err(AppError::RemoteDatabase(format!(
            "Unexpected collection value: {}",
            other
        ))),
    }
}

#[async_trait]
impl PointsBackend for FirebasePoints {
    async fn snapshot(&self) -> AppResult<PointsSnapshot> {
        let response = self
            .with_auth(self.client.get(self.collection_url()?))
            .send()
            .await?;
        let value: Value = Self::check(response, "Read").await?.json().await?;
        children_of(value)
    }

    async fn push(&self, fields: &PointFields) -> AppResult<String> {
        let response = self
            .with_auth(self.client.post(self.collection_url()?))
            .json(fields)
            .send()
            .await?;
        let pushed: PushResponse = Self::check(response, "Push").await?.json().await?;
        Ok(pushed.name)
    }

    async fn update(&self, key: &str, fields: &UpdateLocationPoint) -> AppResult<()> {
        let response = self
            .with_auth(self.client.patch(self.child_url(key)?))
            .json(fields)
            .send()
            .await?;
        Self::check(response, "Update").await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let response = self
            .with_auth(self.client.delete(self.child_url(key)?))
            .send()
            .await?;
        Self::check(response, "Delete").await?;
        Ok(())
    }
}
