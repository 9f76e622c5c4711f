//! Request dispatch core
//!
//! Shared by every resource module: validate arguments, build a
//! [`RequestDescriptor`](crate::transport::RequestDescriptor), hand it to the
//! transport and deliver the result through a callback, the returned future,
//! or both.
//!
//! # Module Structure
//!
//! - [`validate`] - argument checks that run before any network call
//! - [`request`] - URI composition and descriptor building
//! - [`outcome`] - settle-once dual-channel delivery and the shared `reject`
//!
//! # Example
//!
//! ```
//! use sparkpost::dispatch::{callback, reject, Outcome};
//! use serde_json::Value;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let outcome: Outcome<Value> = reject(
//!     "id is required",
//!     Some(callback(|err, _| assert_eq!(err.unwrap().message(), "id is required"))),
//! );
//! assert_eq!(outcome.await.unwrap_err().to_string(), "id is required");
//! # }
//! ```

pub mod outcome;
pub mod request;
pub mod validate;

pub use outcome::{callback, dispatch, reject, Callback, Outcome};
pub use request::{build_request, resource_uri};
pub use validate::{require_id, require_payload, ID_INVALID, ID_REQUIRED};
