//! Background fetch execution.
//!
//! The event loop never performs network I/O itself: each fetch is described
//! by a [`FetchRequest`], executed by a spawned task in [`handler`], and
//! resolved by posting a [`FetchResponse`] back over the response channel.
//! Requests and responses carry the issuing controller's generation token so
//! superseded responses can be discarded on arrival.

pub mod handler;
pub mod messages;

pub use handler::run_fetch;
pub use messages::{FetchRequest, FetchResponse};
