pub mod historical;
pub mod prediction;

use std::cell::Cell;
use std::rc::Rc;

use common::ErrorResponse;
use compute::ControllerError;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use web_sys::AbortController;
use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

/// Abort handle for one HTTP request.
///
/// The request is aborted either by the caller (a newer request superseded
/// it) or by the timeout armed in [`send`].
#[derive(Clone)]
pub struct RequestHandle {
    controller: AbortController,
    timed_out: Rc<Cell<bool>>,
}

impl RequestHandle {
    pub fn new() -> Result<Self, ControllerError> {
        let controller = AbortController::new().map_err(|e| {
            log::error!("Failed to create AbortController: {:?}", e);
            ControllerError::network("browser does not support request cancellation")
        })?;

        Ok(Self {
            controller,
            timed_out: Rc::new(Cell::new(false)),
        })
    }

    pub fn abort(&self) {
        self.controller.abort();
    }

    fn is_aborted(&self) -> bool {
        self.controller.signal().aborted()
    }
}

/// Sends the request and maps every failure to a `ControllerError`.
async fn send(
    method: &str,
    endpoint: &str,
    builder: RequestBuilder,
    body: Option<String>,
    handle: &RequestHandle,
) -> Result<Response, ControllerError> {
    let timeout_ms = settings::get_settings().request_timeout_ms;
    let signal = handle.controller.signal();
    let builder = builder.abort_signal(Some(&signal));

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(body),
        None => builder.build(),
    }
    .map_err(|e| {
        let error_msg = format!("Failed to build request: {}", e);
        log::error!("{} {} - {}", method, endpoint, error_msg);
        ControllerError::network(error_msg)
    })?;

    // Dropping the timeout before it fires cancels it.
    let _timeout = {
        let handle = handle.clone();
        Timeout::new(timeout_ms, move || {
            handle.timed_out.set(true);
            handle.abort();
        })
    };

    let response = request.send().await.map_err(|e| {
        let error_msg = if handle.timed_out.get() {
            format!("request timed out after {} ms", timeout_ms)
        } else if handle.is_aborted() {
            "request was cancelled".to_string()
        } else {
            format!("Request failed: {}", e)
        };
        log::error!("{} {} - {}", method, endpoint, error_msg);
        ControllerError::network(error_msg)
    })?;

    if !response.ok() {
        log::warn!("{} {} - Non-OK response: {}", method, endpoint, response.status());
        let status = response.status();
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(match error_response {
            Ok(err) if status == 400 || status == 422 => {
                log::error!("{} {} - Rejected input: {}", method, endpoint, err.error);
                ControllerError::validation(err.error)
            }
            Ok(err) => {
                log::error!("{} {} - API error: {}", method, endpoint, err.error);
                ControllerError::network(format!("HTTP {}: {}", status, err.error))
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", status);
                log::error!("{} {} - {}", method, endpoint, error_msg);
                ControllerError::network(error_msg)
            }
        });
    }

    Ok(response)
}

async fn decode<T>(method: &str, endpoint: &str, response: Response) -> Result<T, ControllerError>
where
    T: for<'de> Deserialize<'de>,
{
    log::trace!("{} {} - Response received, parsing JSON", method, endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("{} {} - {}", method, endpoint, error_msg);
        ControllerError::invalid_response(error_msg)
    })?;

    log::info!("{} {} - Success", method, endpoint);
    Ok(data)
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str, handle: &RequestHandle) -> Result<T, ControllerError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = send("GET", endpoint, Request::get(&url), None, handle).await?;
    decode("GET", endpoint, response).await
}

/// Common POST request handler
pub async fn post<T, B>(endpoint: &str, body: &B, handle: &RequestHandle) -> Result<T, ControllerError>
where
    T: for<'de> Deserialize<'de>,
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let body = serde_json::to_string(body).map_err(|e| {
        let error_msg = format!("Failed to serialize request: {}", e);
        log::error!("POST {} - {}", endpoint, error_msg);
        ControllerError::validation(error_msg)
    })?;

    let response = send("POST", endpoint, Request::post(&url), Some(body), handle).await?;
    decode("POST", endpoint, response).await
}
