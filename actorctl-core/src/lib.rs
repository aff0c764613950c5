//! # Actorctl Core
//!
//! `actorctl_core` is the library powering the `actorctl` CLI. It provides a typed
//! gRPC client for the easyharun actor service (`proto_actor.ActorService`), the
//! backend that tracks running actors.
//!
//! ## Key Components
//!
//! * **[`client::ActorClient`]:** The main entry point. It performs unary gRPC calls
//!   against a configured host and hands back decoded, typed responses.
//! * **[`proto`]:** The message types exchanged with the service, with both the binary
//!   Protobuf mapping (via `prost`) and a JSON mapping (via `serde`).
//! * **[`descriptor`]:** The static table of service methods. Each entry knows its
//!   service name, method name and HTTP/2 request path.
//! * **[`codec::ProtoCodec`]:** An implementation of `tonic::codec::Codec` generic over
//!   any request/response pair of `prost` messages.
//!
//! ## Transport
//!
//! The client is generic over the underlying transport. Production code connects over
//! a `tonic::transport::Channel`; tests inject an in-process service implementation
//! instead of a network connection.
//!
//! ## Re-exports
//!
//! This crate re-exports `prost` and `tonic` to ensure that consumers use compatible
//! versions of these underlying dependencies.
pub mod client;
pub mod codec;
pub mod descriptor;
pub mod proto;

// Re-exports
pub use prost;
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
