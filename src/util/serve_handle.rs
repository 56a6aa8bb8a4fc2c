use ::tokio::task::JoinHandle;

/// Stops the server it was returned with, when dropped.
#[derive(Debug)]
pub struct ServeHandle {
    server_handle: JoinHandle<()>,
}

impl ServeHandle {
    pub(crate) fn new(server_handle: JoinHandle<()>) -> Self {
        Self { server_handle }
    }
}

impl Drop for ServeHandle {
    fn drop(&mut self) {
        self.server_handle.abort()
    }
}
