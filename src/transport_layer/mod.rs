//!
//! The boundary between building an upload, and sending it.
//!
//! [`HttpTransportLayer`] sends requests over the network,
//! and [`MockTransportLayer`] hands them to an in-process Axum [`Router`](::axum::Router).
//!

mod http_transport_layer;
pub use self::http_transport_layer::*;

mod mock_transport_layer;
pub use self::mock_transport_layer::*;

mod transport_layer;
pub use self::transport_layer::*;
