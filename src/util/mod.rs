mod new_random_tokio_tcp_listener;
pub use self::new_random_tokio_tcp_listener::*;

mod serve_handle;
pub use self::serve_handle::*;

mod spawn_serve;
pub use self::spawn_serve::*;
