use std::collections::HashMap;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Failed to send request: {0}")]
    SendError(#[source] reqwest::Error),

    #[error("API returned error status {status}")]
    StatusError { status: StatusCode, body: String },

    #[error("Failed to deserialize JSON response: {0}")]
    DeserializationError(#[source] reqwest::Error),
}

/// Creates the endpoint using the configured base URL and adding the
/// respective path and query parameters to be requested by the API.
///
/// The access key is always appended as the last query parameter.
///
/// ## Arguments
///
/// * `base_url` - The root of the REST API, without a trailing slash.
/// * `params` - A HashMap containing query and path parameters to be passed to the API.
/// * `access_key` - The Aviationstack API key.
///
/// ## Returns
///
/// A String that represents the REST API request to be made.
fn url(base_url: &str, params: &HashMap<String, Value>, access_key: &str) -> String {
    let query_parameters = params.get("query").and_then(|v| v.as_object());
    let url_path = params.get("urlPath").and_then(|v| v.as_str()).unwrap_or("");
    let mut url = String::from(base_url);
    let mut query_string = String::new();

    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(url_path);

    if let Some(query_params) = query_parameters {
        for (key, value) in query_params {
            if value.is_null() {
                continue;
            }
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            query_string.push_str(&format!("{}={}&", key, rendered));
        }
        if !query_string.is_empty() {
            query_string.pop(); // Remove trailing '&'
            url.push('?');
            url.push_str(&query_string);
        }
    }

    if query_string.is_empty() {
        url.push('?');
    } else {
        url.push('&');
    }

    url.push_str(&format!("access_key={}", access_key));

    url
}

/// Generates a nested JSON Object to accommodate the query parameters
/// that are going to be passed to the REST API.
///
/// ## Arguments
///
/// * `query_param` - An Option<Value> that contains key-value pairs to be added to the query parameters.
///
/// ## Returns
///
/// A HashMap that contains the query parameters which will be parsed by the `url` function.
pub fn generate_json(query_param: Option<Value>) -> HashMap<String, Value> {
    let mut params = HashMap::new();
    params.insert("query".to_string(), query_param.unwrap_or(Value::Null));
    params
}

/// Makes a GET request to the specified path with the given parameters.
///
/// Non-success statuses are returned as `StatusError` with the raw response
/// body text attached.
///
/// ## Arguments
///
/// * `config` - The loaded application configuration.
/// * `path` - A string slice that holds the API endpoint path.
/// * `params` - A HashMap containing additional parameters for the request.
/// * `access_key` - The Aviationstack API key.
///
/// ## Returns
///
/// A Result containing either the JSON response or an error.
pub async fn make_request(
    config: &Config,
    path: &str,
    params: HashMap<String, Value>,
    access_key: &str,
) -> Result<Value, RequestError> {
    let mut request_params = params;
    request_params.insert("urlPath".to_string(), Value::String(path.to_string()));
    let url = url(&config.api.base_url, &request_params, access_key);

    debug!("GET {}/{}", config.api.base_url, path);

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(RequestError::SendError)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RequestError::StatusError { status, body });
    }

    response
        .json::<Value>()
        .await
        .map_err(RequestError::DeserializationError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "https://api.aviationstack.com/v1";

    #[test]
    fn test_url_includes_limit_and_access_key() {
        let params = {
            let mut p = generate_json(Some(json!({ "limit": 5 })));
            p.insert("urlPath".to_string(), Value::String("flights".to_string()));
            p
        };
        let rendered = url(BASE, &params, "abcd1234");

        assert!(rendered.starts_with("https://api.aviationstack.com/v1/flights?"));
        assert!(rendered.contains("limit=5"));
        assert!(rendered.contains("access_key=abcd1234"));
    }

    #[test]
    fn test_url_without_query_params() {
        let params = {
            let mut p = generate_json(None);
            p.insert("urlPath".to_string(), Value::String("flights".to_string()));
            p
        };
        let rendered = url(BASE, &params, "abcd1234");

        assert_eq!(
            rendered,
            "https://api.aviationstack.com/v1/flights?access_key=abcd1234"
        );
    }

    #[test]
    fn test_url_renders_string_values_unquoted() {
        let params = {
            let mut p = generate_json(Some(json!({ "flight_iata": "AA100" })));
            p.insert("urlPath".to_string(), Value::String("flights".to_string()));
            p
        };
        let rendered = url(BASE, &params, "abcd1234");

        assert!(rendered.contains("flight_iata=AA100"));
        assert!(!rendered.contains('"'));
    }

    #[test]
    fn test_status_error_names_the_status() {
        let err = RequestError::StatusError {
            status: StatusCode::UNAUTHORIZED,
            body: "{\"error\":{\"code\":\"invalid_access_key\"}}".to_string(),
        };
        assert!(err.to_string().contains("401"));
    }
}
