//! Typed Rust client for the CloudSMS (cloudsms.gr) HTTP API.
//!
//! The crate is split into a domain layer of request/value types, a transport
//! layer for the JSON wire format, and a small client layer issuing requests.
//! Every operation returns an [`Envelope`]: either `Success { data }` or
//! `Error { message }`. Transport failures never surface as panics or `Err`.
//!
//! ```rust,no_run
//! use cloudsms::{CloudSmsClient, Envelope, SendSms};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = CloudSmsClient::new("api-token", "MyShop");
//!
//!     match client.get_balance().await {
//!         Envelope::Success { data } => println!("balance: {data}"),
//!         Envelope::Error { message } => eprintln!("balance failed: {message}"),
//!     }
//!
//!     let sent = client
//!         .send_sms(SendSms::new("306900000000", "hello"))
//!         .await;
//!     println!("{sent:?}");
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{ClientConfig, CloudSmsClient, CloudSmsClientBuilder, CloudSmsError};
pub use domain::{
    ApiToken, CampaignId, ContactListId, Envelope, EnvelopeError, Recipient, ScheduleTime,
    SendCampaign, SendOptions, SendSms, SenderId, SmsId,
};
