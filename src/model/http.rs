/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::constants::{ACCESS_TOKEN_PARAM, DEFAULT_PAGE_SIZE, FIRST_PAGE, USER_AGENT};
use crate::error::AppError;
use reqwest::Client as HttpInternalClient;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Authenticated HTTP client for the Gitee REST API
///
/// Every request carries the configured `access_token`: in the query string
/// for `GET` and `DELETE`, in the JSON body for `POST`, `PUT` and `PATCH`.
/// Responses are returned as raw JSON so each endpoint can normalize them
/// against its own schema.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new HTTP client
    ///
    /// # Arguments
    /// * `config` - Configuration holding the token, base URL and timeout
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Client ready to send requests
    /// * `Err(AppError)` - If the underlying reqwest client cannot be built
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Gets the configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes a GET request
    pub async fn get<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Value, AppError> {
        self.request(Method::GET, path, params).await
    }

    /// Makes a POST request
    pub async fn post<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Value, AppError> {
        self.request(Method::POST, path, params).await
    }

    /// Makes a PUT request
    pub async fn put<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Value, AppError> {
        self.request(Method::PUT, path, params).await
    }

    /// Makes a PATCH request
    pub async fn patch<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Value, AppError> {
        self.request(Method::PATCH, path, params).await
    }

    /// Makes a DELETE request
    pub async fn delete<P: Serialize + ?Sized>(&self, path: &str, params: &P) -> Result<Value, AppError> {
        self.request(Method::DELETE, path, params).await
    }

    /// Sends one authenticated request and returns the raw JSON response
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API path relative to the base URL (e.g. `/repos/owner/repo`)
    /// * `params` - Any value serializing to a JSON object (or `()` for none)
    ///
    /// # Returns
    /// * `Ok(Value)` - Parsed body, `Value::Null` when the body is empty
    /// * `Err(AppError)` - Transport failure or non-success status, unmodified
    pub async fn request<P: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        params: &P,
    ) -> Result<Value, AppError> {
        let url = self.build_url(path);
        let params = self.authenticated_params(params)?;

        debug!("{} {}", method, url);

        let request = self
            .http_client
            .request(method.clone(), &url)
            .header("Accept", "application/json");
        let request = attach_params(request, &method, params);

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status == StatusCode::NOT_FOUND {
                debug!("{} {} not found: {}", method, path, body);
            } else {
                error!("{} {} failed with status {}: {}", method, path, status, body);
            }
            return Err(AppError::Api {
                status,
                message: body,
            });
        }

        parse_body(response).await
    }

    /// Fetches every page of a list endpoint and concatenates the rows
    ///
    /// `params` must serialize to an object; its `page` and `per_page` fields
    /// set the starting page and the page size (defaults: 1 and 100). Pages
    /// are requested in order until one returns fewer rows than `per_page`.
    /// A body that is not an array counts as an empty page.
    pub async fn paginate<P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> Result<Vec<Value>, AppError> {
        let mut query = to_object(params)?;
        let per_page = query
            .get("per_page")
            .and_then(Value::as_u64)
            .unwrap_or(u64::from(DEFAULT_PAGE_SIZE))
            .max(1);
        let mut page = query
            .get("page")
            .and_then(Value::as_u64)
            .unwrap_or(u64::from(FIRST_PAGE))
            .max(u64::from(FIRST_PAGE));

        let mut rows = Vec::new();
        loop {
            query.insert("page".to_string(), Value::from(page));
            query.insert("per_page".to_string(), Value::from(per_page));

            let batch = match self.get(path, &query).await? {
                Value::Array(items) => items,
                other => {
                    debug!("Page {} of {} is not a list: {}", page, path, other);
                    Vec::new()
                }
            };
            let count = batch.len();
            debug!("Page {} of {}: {} rows", page, path, count);
            rows.extend(batch);

            if (count as u64) < per_page {
                break;
            }
            page += 1;
        }

        Ok(rows)
    }

    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!(
                "{}/{}",
                self.config.rest_api.base_url.trim_end_matches('/'),
                path
            )
        }
    }

    /// Serializes `params` and adds the access token unless already present
    fn authenticated_params<P: Serialize + ?Sized>(
        &self,
        params: &P,
    ) -> Result<Map<String, Value>, AppError> {
        let mut params = to_object(params)?;
        params
            .entry(ACCESS_TOKEN_PARAM)
            .or_insert_with(|| Value::String(self.config.credentials.access_token.clone()));
        Ok(params)
    }
}

/// Serializes request parameters into a JSON object
///
/// `()` and `None` become an empty object; anything else that is not an
/// object is rejected.
pub fn to_object<P: Serialize + ?Sized>(params: &P) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(AppError::InvalidInput(format!(
            "request parameters must be an object, got {other}"
        ))),
    }
}

/// Flattens a parameter object into query pairs, dropping nulls
pub fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key.clone(), s.clone())),
            other => Some((key.clone(), other.to_string())),
        })
        .collect()
}

fn attach_params(request: RequestBuilder, method: &Method, params: Map<String, Value>) -> RequestBuilder {
    if *method == Method::GET || *method == Method::DELETE {
        request.query(&query_pairs(&params))
    } else {
        request.json(&Value::Object(params))
    }
}

async fn parse_body(response: Response) -> Result<Value, AppError> {
    let bytes = response.bytes().await?;
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(&bytes)?)
}
