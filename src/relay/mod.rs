//! Event-to-notification pipeline.
//!
//! Leaves first: [`watchlist`] holds the monitored channels, [`extractor`]
//! and [`formatter`] are pure functions, [`outbound`] is the delivery seam
//! and [`dispatcher`] ties them together per inbound event.

pub mod dispatcher;
pub mod extractor;
pub mod formatter;
pub mod outbound;
pub mod watchlist;

pub use dispatcher::{DispatchOutcome, RelayDispatcher};
pub use outbound::{DeliveryError, Outbound};
pub use watchlist::WatchList;
