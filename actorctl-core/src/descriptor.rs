//! # Method Descriptors
//!
//! The static table of `proto_actor.ActorService` methods. Each descriptor pairs a
//! service name with a method name and produces the HTTP/2 request path used on the
//! wire. The table is fixed at compile time; there is no runtime schema discovery.
use http::uri::PathAndQuery;
use std::str::FromStr;

/// Fully qualified name of the actor service.
pub const SERVICE_NAME: &str = "proto_actor.ActorService";

/// Identifies one unary method of a gRPC service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    service: &'static str,
    method: &'static str,
}

impl MethodDescriptor {
    pub const fn new(service: &'static str, method: &'static str) -> Self {
        Self { service, method }
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    /// The HTTP/2 path of the method (e.g. `/proto_actor.ActorService/ping`).
    pub fn path(&self) -> PathAndQuery {
        let path = format!("/{}/{}", self.service, self.method);
        PathAndQuery::from_str(&path).expect("valid gRPC path")
    }
}

/// `ping(PingRequest) -> PingResponse`
pub const PING: MethodDescriptor = MethodDescriptor::new(SERVICE_NAME, "ping");

/// `actors_running_get(ActorsRunningGetRequest) -> ActorsRunningGetResponse`
pub const ACTORS_RUNNING_GET: MethodDescriptor =
    MethodDescriptor::new(SERVICE_NAME, "actors_running_get");

/// All methods of the actor service.
pub const METHODS: &[MethodDescriptor] = &[PING, ACTORS_RUNNING_GET];

/// Looks up a method of the actor service by name.
pub fn find(method: &str) -> Option<&'static MethodDescriptor> {
    METHODS.iter().find(|m| m.method == method)
}
