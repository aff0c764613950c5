//! # Actor Service (test harness)
//!
//! **INTERNAL USE ONLY**: This crate exists solely to provide a gRPC server
//! implementation of `proto_actor.ActorService` for integration testing the
//! `actorctl` client. It is not intended for production use.
//!
//! The server glue routes on the same request paths and reuses the same message
//! types and [`ProtoCodec`] as the client, so tests exercise the real wire
//! encoding on both sides of the call.
use actorctl_core::codec::ProtoCodec;
use actorctl_core::proto::{
    ActorsRunningGetRequest, ActorsRunningGetResponse, PingRequest, PingResponse,
};
use futures_util::future::BoxFuture;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};
use tonic::body::Body;
use tonic::codegen::Service;
use tonic::server::{Grpc, NamedService, UnaryService};
use tonic::{Request, Response, Status};

/// The two unary operations of `proto_actor.ActorService`.
#[tonic::async_trait]
pub trait ActorService: Send + Sync + 'static {
    async fn ping(
        &self,
        request: Request<PingRequest>,
    ) -> Result<Response<PingResponse>, Status>;

    async fn actors_running_get(
        &self,
        request: Request<ActorsRunningGetRequest>,
    ) -> Result<Response<ActorsRunningGetResponse>, Status>;
}

/// Wraps an [`ActorService`] implementation into a Tonic-compatible HTTP service.
#[derive(Debug)]
pub struct ActorServiceServer<T> {
    inner: Arc<T>,
}

impl<T> ActorServiceServer<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl<T> Clone for ActorServiceServer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ActorService> Service<http::Request<Body>> for ActorServiceServer<T> {
    type Response = http::Response<Body>;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<Body>) -> Self::Future {
        let inner = Arc::clone(&self.inner);
        match req.uri().path() {
            "/proto_actor.ActorService/ping" => Box::pin(async move {
                let codec = ProtoCodec::<PingResponse, PingRequest>::default();
                let mut grpc = Grpc::new(codec);
                Ok(grpc.unary(PingSvc(inner), req).await)
            }),
            "/proto_actor.ActorService/actors_running_get" => Box::pin(async move {
                let codec = ProtoCodec::<ActorsRunningGetResponse, ActorsRunningGetRequest>::default();
                let mut grpc = Grpc::new(codec);
                Ok(grpc.unary(ActorsRunningGetSvc(inner), req).await)
            }),
            _ => Box::pin(async move {
                let response = http::Response::builder()
                    .status(http::StatusCode::OK)
                    .header("grpc-status", (tonic::Code::Unimplemented as i32).to_string())
                    .header(http::header::CONTENT_TYPE, "application/grpc")
                    .body(Body::empty())
                    .expect("valid response");
                Ok(response)
            }),
        }
    }
}

impl<T> NamedService for ActorServiceServer<T> {
    const NAME: &'static str = "proto_actor.ActorService";
}

struct PingSvc<T>(Arc<T>);

impl<T: ActorService> UnaryService<PingRequest> for PingSvc<T> {
    type Response = PingResponse;
    type Future = BoxFuture<'static, Result<Response<Self::Response>, Status>>;

    fn call(&mut self, request: Request<PingRequest>) -> Self::Future {
        let inner = Arc::clone(&self.0);
        Box::pin(async move { inner.ping(request).await })
    }
}

struct ActorsRunningGetSvc<T>(Arc<T>);

impl<T: ActorService> UnaryService<ActorsRunningGetRequest> for ActorsRunningGetSvc<T> {
    type Response = ActorsRunningGetResponse;
    type Future = BoxFuture<'static, Result<Response<Self::Response>, Status>>;

    fn call(&mut self, request: Request<ActorsRunningGetRequest>) -> Self::Future {
        let inner = Arc::clone(&self.0);
        Box::pin(async move { inner.actors_running_get(request).await })
    }
}
