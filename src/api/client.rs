//! Booking API client.
//!
//! `BookingApi` is the seam between the UI and the network. The TUI holds an
//! `Arc<dyn BookingApi>`; tests swap in a fake.

use async_trait::async_trait;
use log::{info, warn};
use reqwest::Method;

use crate::api::http::{ApiRequest, HttpClient, join_url};
use crate::api::types::{DataEnvelope, EnquiryPayload, MessagesResponse};
use crate::api::{AuthToken, RequestError};
use crate::core::messages::Message;

/// Where the two endpoints live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base_url: String,
    pub enquire_path: String,
    pub messages_path: String,
}

impl Endpoints {
    pub fn enquire_url(&self) -> String {
        join_url(&self.base_url, &self.enquire_path)
    }

    pub fn messages_url(&self) -> String {
        join_url(&self.base_url, &self.messages_path)
    }
}

#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Returns a short name for logging.
    fn name(&self) -> &str;

    /// POST one enquiry. `Ok` only for HTTP 200.
    async fn submit_enquiry(&self, payload: EnquiryPayload) -> Result<(), RequestError>;

    /// GET the message list, in server order.
    async fn fetch_messages(&self, token: &AuthToken) -> Result<Vec<Message>, RequestError>;
}

/// Builds the enquiry POST.
pub fn enquiry_request(
    endpoints: &Endpoints,
    payload: EnquiryPayload,
) -> Result<ApiRequest, RequestError> {
    let body = serde_json::to_string(&DataEnvelope { data: payload })
        .map_err(|e| RequestError::Decode(e.to_string()))?;
    Ok(ApiRequest::new(Method::POST, endpoints.enquire_url())
        .header("Accept", "*/*")
        .header("Content-Type", "application/json")
        .body(body))
}

/// Builds the messages GET. Requires a token, so an unauthenticated request
/// cannot be constructed.
pub fn messages_request(endpoints: &Endpoints, token: &AuthToken) -> ApiRequest {
    ApiRequest::new(Method::GET, endpoints.messages_url()).header("Authorization", token.bearer())
}

/// reqwest-backed implementation.
pub struct HttpBookingApi {
    http: HttpClient,
    endpoints: Endpoints,
}

impl HttpBookingApi {
    pub fn new(http: HttpClient, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    fn name(&self) -> &str {
        "http"
    }

    async fn submit_enquiry(&self, payload: EnquiryPayload) -> Result<(), RequestError> {
        info!(
            "Submitting enquiry for hotel {} ({})",
            payload.hotel, payload.enquiry_hotel
        );
        let request = enquiry_request(&self.endpoints, payload)?;
        let response = self.http.send(request).await?;
        if response.is_ok() {
            Ok(())
        } else {
            warn!(
                "Enquiry rejected: {} {}",
                response.status, response.status_text
            );
            Err(response.into_status_error())
        }
    }

    async fn fetch_messages(&self, token: &AuthToken) -> Result<Vec<Message>, RequestError> {
        let request = messages_request(&self.endpoints, token);
        let response = self.http.send(request).await?;
        if !response.is_ok() {
            warn!(
                "Messages fetch rejected: {} {}",
                response.status, response.status_text
            );
            return Err(response.into_status_error());
        }

        let parsed: MessagesResponse = serde_json::from_str(&response.body).map_err(|e| {
            warn!("Failed to parse messages response: {}", e);
            RequestError::Decode(e.to_string())
        })?;
        let messages: Vec<Message> = parsed.data.into_iter().map(Message::from).collect();
        info!("Fetched {} messages", messages.len());
        Ok(messages)
    }
}
