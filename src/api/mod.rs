pub mod auth;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use auth::AuthToken;
pub use client::{BookingApi, Endpoints, HttpBookingApi};
pub use error::RequestError;
pub use http::HttpClient;
pub use types::EnquiryPayload;
