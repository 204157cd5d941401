//! Client-side adapter for Akbank's remote money-order service.
//!
//! Builds the service's rigid, field-order-sensitive request payloads from
//! plain domain parameters, dispatches them through an injectable
//! [`transport::Transport`], and reduces the heterogeneous replies to one
//! flat [`models::result::NormalizedResult`] with `ReturnCode == 0` as the
//! single success discriminator.

pub mod builder;
pub mod config;
pub mod error;
pub mod iban;
pub mod models;
pub mod normalize;
pub mod service;
pub mod transport;

pub use builder::WireDate;
pub use config::{ServiceConfig, TransportOptions, DEFAULT_ENDPOINT};
pub use error::{Error, TransportError};
pub use iban::{is_akbank_iban, is_valid_iban};
pub use models::result::NormalizedResult;
pub use service::TransferService;
