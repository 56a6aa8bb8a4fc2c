//! This contains helpers used in our tests.

use ::axum::Router;
use ::std::fs;
use ::std::path::Path;
use ::std::path::PathBuf;
use ::tempfile::TempDir;
use ::tempfile::tempdir;
use ::url::Url;

use crate::util::ServeHandle;
use crate::util::new_random_tokio_tcp_listener_with_socket_addr;
use crate::util::spawn_serve;

/// A PNG header followed by bytes that trip up naive text handling,
/// such as CRLF pairs, NUL bytes, and a lone `--`.
pub const SAMPLE_PNG: &[u8] =
    b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR\x00\x00\x00\x01\x00\x00\x00\x01\x08\x06\x00\x00\x00\x1f\x15\xc4\x89\r\n--\r\n\xff\xfe";

/// A file written into its own temporary directory,
/// which is removed when this is dropped.
#[derive(Debug)]
pub struct Fixture {
    directory: TempDir,
    path: PathBuf,
}

impl Fixture {
    pub fn write(file_name: &str, contents: &[u8]) -> Self {
        let directory = tempdir().expect("Should create fixture directory");
        let path = directory.path().join(file_name);
        fs::write(&path, contents).expect("Should write fixture file");

        Self { directory, path }
    }

    /// A directory of its own, with nothing written into it.
    pub fn empty() -> Self {
        let directory = tempdir().expect("Should create fixture directory");
        let path = directory.path().to_path_buf();

        Self { directory, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A path within the fixture's directory which does not exist.
    pub fn missing(&self, file_name: &str) -> PathBuf {
        self.directory.path().join("missing").join(file_name)
    }
}

/// Serves the router on a random local port,
/// returning the base url to reach it on.
pub fn spawn_router(router: Router) -> (ServeHandle, Url) {
    let (tcp_listener, socket_addr) =
        new_random_tokio_tcp_listener_with_socket_addr().expect("Should bind a random port");
    let serve_handle = spawn_serve(tcp_listener, router);
    let url = Url::parse(&format!("http://{socket_addr}")).expect("Should build local url");

    (serve_handle, url)
}

/// Returns a url on a local port which nothing is listening on.
pub fn new_unused_url() -> Url {
    let (tcp_listener, socket_addr) =
        new_random_tokio_tcp_listener_with_socket_addr().expect("Should bind a random port");
    ::std::mem::drop(tcp_listener);

    Url::parse(&format!("http://{socket_addr}/v3.4/documents")).expect("Should build local url")
}
