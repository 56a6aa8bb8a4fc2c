use ::axum::Router;
use ::axum::serve;
use ::tokio::net::TcpListener;
use ::tokio::spawn;

use crate::util::ServeHandle;

/// A wrapper around [`axum::serve()`] for tests,
/// which spawns the router in a new task.
///
/// The [`crate::util::ServeHandle`] returned will automatically
/// terminate the server when dropped.
pub fn spawn_serve(tcp_listener: TcpListener, router: Router) -> ServeHandle {
    let server_handle = spawn(async move {
        serve(tcp_listener, router)
            .await
            .expect("Expect server to start serving");
    });

    ServeHandle::new(server_handle)
}
