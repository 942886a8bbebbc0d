use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::auth::{self, AuthError};
use crate::config::{Config, ConfigurationError};
use crate::requests::{generate_json, make_request, RequestError};

/// Number of flight records requested per check.
const FLIGHT_LIMIT: u32 = 5;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigurationError),
}

/// Functions for accessing real-time flight data from the Aviationstack API.
pub struct Flights;

impl Flights {
    /// Gets the latest real-time flights, capped at `limit` records.
    ///
    /// ## Arguments
    ///
    /// * `config` - The loaded application configuration.
    /// * `access_key` - The Aviationstack API key.
    /// * `limit` - Maximum number of flight records to return.
    ///
    /// ## Returns
    ///
    /// A Result containing either the JSON response or an error.
    pub async fn real_time(
        config: &Config,
        access_key: &str,
        limit: u32,
    ) -> Result<Value, RequestError> {
        let query_params = json!({ "limit": limit });
        make_request(config, "flights", generate_json(Some(query_params)), access_key).await
    }
}

/// Extracts `pagination.count` from a flights response, if present.
pub fn flight_count(data: &Value) -> Option<i64> {
    data.get("pagination")
        .and_then(|p| p.get("count"))
        .and_then(Value::as_i64)
}

fn summary_line(count: Option<i64>) -> String {
    match count {
        Some(count) => format!("Flights fetched: {}", count),
        None => "Flights fetched: N/A".to_string(),
    }
}

/// Runs the connectivity check: loads the credential, fetches one page of
/// real-time flights, and prints the outcome.
///
/// Request failures are reported here and consumed; configuration and
/// credential failures are returned to the caller.
pub async fn check() -> Result<(), CheckError> {
    let config = Config::new()?;
    let access_key = auth::aviation_api_key()?;

    println!("Using API Key: {}", auth::redact(&access_key));
    debug!("Requesting up to {} flights", FLIGHT_LIMIT);

    match Flights::real_time(&config, &access_key, FLIGHT_LIMIT).await {
        Ok(data) => {
            println!("API Request Successful!");
            println!("{}", summary_line(flight_count(&data)));
        }
        Err(err) => {
            eprintln!("API Request Error: {}", err);
            if let RequestError::StatusError { body, .. } = &err {
                eprintln!("Response: {}", body);
            }
        }
    }

    Ok(())
}
