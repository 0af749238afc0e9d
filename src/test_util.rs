use std::net::{SocketAddr, TcpListener};

use axum::Router;

/// Serve `router` on an ephemeral local port, returning its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(router.into_make_service());
    tokio::spawn(server);
    format!("http://{addr}")
}

/// An address nothing is listening on.
pub fn unused_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}
