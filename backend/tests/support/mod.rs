//! Shared helpers for portal integration tests.
//!
//! Integration tests compile as separate crates, so stub collaborators and
//! app wiring live here instead of being copied into each file.
#![allow(dead_code, reason = "each test crate uses a subset of the helpers")]

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use reqwest::Url;

/// A collaborator served on an ephemeral local port.
pub struct StubServer {
    pub base_url: Url,
    handle: ServerHandle,
}

impl StubServer {
    /// Serve the routes registered by `configure` on `127.0.0.1:0`.
    ///
    /// Must be called from inside an actix system, e.g. `#[actix_web::test]`.
    pub fn spawn<F>(configure: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
    {
        let server = HttpServer::new(move || App::new().configure(configure.clone()))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .expect("bind stub server");
        let addr = server.addrs()[0];
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self {
            base_url: Url::parse(&format!("http://{addr}/")).expect("stub url"),
            handle,
        }
    }

    /// URL of `path` on the stub, relative to its root.
    pub fn url(&self, path: &str) -> Url {
        self.base_url.join(path).expect("stub path")
    }

    pub async fn stop(self) {
        self.handle.stop(true).await;
    }
}

/// Cookie session middleware for local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}
