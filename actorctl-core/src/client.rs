//! # Actor Service Client
//!
//! This module wraps a standard `tonic` client into a typed interface for the
//! `proto_actor.ActorService` backend.
//!
//! ## How it works
//!
//! Every operation of the service is a unary call: the request is serialized via
//! [`ProtoCodec`], sent to the path given by its [`MethodDescriptor`], and the single
//! response is decoded into the matching message type. A call resolves exactly once —
//! with the decoded response on an OK status, or with a [`CallError`] otherwise.
//! There is no retry, no streaming and no cancellation.
//!
//! ## Configuration
//!
//! The host address is given when connecting, and default metadata (headers) can be
//! attached with [`ActorClient::with_metadata`]. Call-level metadata is merged on top
//! of the defaults, taking precedence on key collision.
//!
//! Consumers construct a client and pass it by reference; there is deliberately no
//! global instance, so tests can inject an in-process service as the transport.
use crate::{
    BoxError,
    codec::ProtoCodec,
    descriptor::{self, MethodDescriptor},
    proto::{ActorsRunningGetRequest, ActorsRunningGetResponse, PingRequest, PingResponse},
};
use http_body::Body as HttpBody;
use std::str::FromStr;
use tonic::{
    client::GrpcService,
    metadata::{
        MetadataKey, MetadataValue,
        errors::{InvalidMetadataKey, InvalidMetadataValue},
    },
    transport::{Channel, Endpoint},
};

/// Errors that can occur when connecting to the actor service.
#[derive(Debug, thiserror::Error)]
pub enum ClientConnectError {
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] tonic::transport::Error),
    #[error("Failed to connect to '{0}': {1}")]
    ConnectionFailed(String, #[source] tonic::transport::Error),
}

/// Errors that can occur during a unary call.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error("Internal error, the client was not ready: '{0}'")]
    ClientNotReady(#[source] BoxError),
    #[error("Invalid metadata (header) key '{key}': '{source}'")]
    InvalidMetadataKey {
        key: String,
        source: InvalidMetadataKey,
    },
    #[error("Invalid metadata (header) value for key '{key}': '{source}'")]
    InvalidMetadataValue {
        key: String,
        source: InvalidMetadataValue,
    },
    /// The server answered with a non-OK status. The carried [`tonic::Status`] exposes
    /// the status code, the human-readable message and any trailing metadata.
    #[error("Server returned non-OK status {:?}: '{}'", .0.code(), .0.message())]
    Status(tonic::Status),
}

/// A typed client for the `proto_actor.ActorService`.
#[derive(Debug, Clone)]
pub struct ActorClient<S = Channel> {
    client: tonic::client::Grpc<S>,
    metadata: Vec<(String, String)>,
}

impl ActorClient<Channel> {
    /// Connects to an actor service and initializes the client.
    ///
    /// # Arguments
    ///
    /// * `addr` - The server URI (e.g., `http://localhost:50051`).
    pub async fn connect(addr: &str) -> Result<Self, ClientConnectError> {
        let endpoint = Endpoint::new(addr.to_string())
            .map_err(|e| ClientConnectError::InvalidUrl(addr.to_string(), e))?;

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| ClientConnectError::ConnectionFailed(addr.to_string(), e))?;

        Ok(Self::from_service(channel))
    }
}

impl<S> ActorClient<S>
where
    S: GrpcService<tonic::body::Body>,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Creates a client from an existing Tonic service/channel.
    pub fn from_service(service: S) -> Self {
        Self {
            client: tonic::client::Grpc::new(service),
            metadata: Vec::new(),
        }
    }

    /// Sets default metadata (headers) attached to every call.
    ///
    /// Call-level metadata takes precedence over these defaults on key collision.
    pub fn with_metadata(mut self, metadata: Vec<(String, String)>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Liveness check against the service.
    pub async fn ping(
        &mut self,
        request: PingRequest,
        metadata: Vec<(String, String)>,
    ) -> Result<PingResponse, CallError> {
        self.unary(&descriptor::PING, request, metadata).await
    }

    /// Fetches the current list of running actors.
    ///
    /// The returned `items` preserve the order the server sent them in; an empty
    /// registry yields an empty list.
    pub async fn actors_running_get(
        &mut self,
        request: ActorsRunningGetRequest,
        metadata: Vec<(String, String)>,
    ) -> Result<ActorsRunningGetResponse, CallError> {
        self.unary(&descriptor::ACTORS_RUNNING_GET, request, metadata)
            .await
    }

    /// Performs a Unary gRPC call (Single Request -> Single Response).
    ///
    /// # Returns
    /// * `Ok(Res)` - Successful RPC execution, decoded response.
    /// * `Err(CallError::Status)` - RPC executed, but server returned a non-OK status.
    /// * `Err(_)` - Failed to send request or connect.
    pub async fn unary<Req, Res>(
        &mut self,
        method: &MethodDescriptor,
        request: Req,
        metadata: Vec<(String, String)>,
    ) -> Result<Res, CallError>
    where
        Req: prost::Message + 'static,
        Res: prost::Message + Default + 'static,
    {
        self.client
            .ready()
            .await
            .map_err(|e| CallError::ClientNotReady(e.into()))?;

        let codec = ProtoCodec::<Req, Res>::default();
        let path = method.path();
        let request = self.build_request(request, metadata)?;

        tracing::debug!(path = %path, "sending unary request");

        match self.client.unary(request, path, codec).await {
            Ok(response) => Ok(response.into_inner()),
            Err(status) => Err(CallError::Status(status)),
        }
    }

    fn build_request<T>(
        &self,
        payload: T,
        metadata: Vec<(String, String)>,
    ) -> Result<tonic::Request<T>, CallError> {
        let mut request = tonic::Request::new(payload);
        // Defaults first, so call-level entries replace them on key collision.
        for (k, v) in self.metadata.iter().cloned().chain(metadata) {
            let key =
                MetadataKey::from_str(&k).map_err(|source| CallError::InvalidMetadataKey {
                    key: k.clone(),
                    source,
                })?;
            let val = MetadataValue::from_str(&v)
                .map_err(|source| CallError::InvalidMetadataValue { key: k, source })?;
            request.metadata_mut().insert(key, val);
        }
        Ok(request)
    }
}
