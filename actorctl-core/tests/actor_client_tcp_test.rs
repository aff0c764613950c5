use actor_service::ActorServiceServer;
use actor_service_impl::{StaticActorService, actor};
use actorctl_core::client::ActorClient;
use actorctl_core::proto::{ActorsRunningGetRequest, PingRequest};
use tonic::transport::Server;


async fn spawn_server(service: StaticActorService) -> String {
    let listener = tokio::net::TcpListener::bind("0.0.0.0:0").await.unwrap();

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(ActorServiceServer::new(service))
            .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn ping_over_tcp() {
    let url = spawn_server(StaticActorService { items: vec![] }).await;

    let mut client = ActorClient::connect(&url).await.unwrap();

    let response = client
        .ping(
            PingRequest {
                id: "over-the-wire".to_string(),
            },
            vec![],
        )
        .await
        .unwrap();

    assert_eq!(response.id, "over-the-wire");
}

#[tokio::test]
async fn actors_running_get_over_tcp() {
    let url = spawn_server(StaticActorService {
        items: vec![
            actor("1", "worker", "compute"),
            actor("2", "janitor", "maintenance"),
        ],
    })
    .await;

    let mut client = ActorClient::connect(&url).await.unwrap();

    let response = client
        .actors_running_get(ActorsRunningGetRequest::default(), vec![])
        .await
        .unwrap();

    let names: Vec<_> = response
        .items
        .iter()
        .map(|item| item.actor_name.as_str())
        .collect();

    assert_eq!(names, ["worker", "janitor"]);
}
