use gloo_net::http::Response;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;

use crate::{Error, Result};

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.text().await?;
    decode_body(status, &body)
}

/// Decodes a response body.
///
/// An `error` field wins over the status code, so
/// the server's own message reaches the user.
pub fn decode_body<T>(status: u16, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let ok = (200..300).contains(&status);
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !ok => return Err(status_error(status)),
        Err(err) => return Err(err.into()),
    };
    if let Ok(failure) = casebook_boundary::Error::deserialize(&value) {
        return Err(failure.into());
    }
    // ensure we've got 2xx status
    if !ok {
        return Err(status_error(status));
    }
    Ok(serde_json::from_value(value)?)
}

fn status_error(status: u16) -> Error {
    Error::Api(format!("HTTP status {status}"))
}
