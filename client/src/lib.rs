//! Websocket client for the game server.
//!
//! The [`Bootstrapper`] derives the websocket endpoint from the page
//! address it was handed, opens one connection, and streams
//! [`ClientEvent`]s to the rest of the process.

pub mod bootstrap;
pub mod endpoint;

pub use bootstrap::{Bootstrapper, ClientError, ClientEvent};
pub use endpoint::{endpoint_url, EndpointError};
