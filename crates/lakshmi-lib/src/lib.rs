//! Lakshmi Trails domain library.
//!
//! This crate holds everything about a contact inquiry that is independent of
//! HTTP: the [`Inquiry`] model, the validation rules shared with the site's
//! form client, the fixed display mappings for commitment levels and trip
//! selections, email rendering, and the Resend delivery client. The service
//! crates should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod display;
pub mod email;
pub mod error;
pub mod inquiry;
pub mod resend;

pub use display::{commitment_display, trip_display};
pub use email::{customer_confirmation, operator_notification, EmailMessage};
pub use error::{Error, Result};
pub use inquiry::{validate_email, Inquiry};
pub use resend::{ResendClient, SendReceipt, DEFAULT_API_BASE};
