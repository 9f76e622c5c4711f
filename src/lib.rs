//! SparkPost API client
//!
//! Every resource operation validates its arguments, builds a request
//! descriptor and sends it through a shared [`Transport`]. The result is
//! delivered through the returned [`Outcome`] future and, when one is
//! supplied, an error-first [`Callback`]. Both observe the same settlement.
//!
//! # Module Structure
//!
//! - [`client`] - the [`SparkPost`] facade owning the shared transport
//! - [`config`] - persistent configuration
//! - [`dispatch`] - validation, request building and dual-mode delivery
//! - [`error`] - validation and transport failures
//! - [`resource`] - resource modules built on one generic operation executor
//! - [`transport`] - transport trait, HTTP implementation and test mock
//!
//! # Example
//!
//! ```no_run
//! use sparkpost::{callback, Config, SparkPost};
//! use serde_json::json;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = SparkPost::from_config(&Config::load())?;
//!
//! // Await the result
//! let subaccounts = client.subaccounts().list(None).await?;
//!
//! // Or receive it in a callback; the returned future may be dropped
//! client.subaccounts().create(
//!     Some(json!({"name": "test", "key_label": "test", "key_grants": []})),
//!     Some(callback(|err, result| match err {
//!         Some(err) => eprintln!("create failed: {}", err),
//!         None => println!("created: {:?}", result),
//!     })),
//! );
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod resource;
pub mod transport;

pub use client::SparkPost;
pub use config::Config;
pub use dispatch::{callback, Callback, Outcome};
pub use error::{Error, Result, ValidationError};
pub use resource::{Operation, Resource, Subaccounts, Webhooks};
pub use transport::{RequestDescriptor, Transport, Verb};
