//! Shared library for the dweet status card.
//!
//! Holds everything the CLI composes: widget parameter resolution, the feed
//! record model, the HTTP feed client, and view-model construction. No
//! terminal concerns live here; rendering belongs to the binary.

pub mod client;
pub mod params;
pub mod record;
pub mod view;

pub use client::{FeedClient, FetchError, DEFAULT_BASE_URL};
pub use params::{WidgetParams, DEFAULT_KEY, DEFAULT_TOPIC};
pub use record::{display_value, FeedRecord};
pub use view::{build_view, ViewModel};
