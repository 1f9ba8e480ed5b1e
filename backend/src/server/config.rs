//! HTTP server configuration object.

use std::net::SocketAddr;

use kyc_portal::inbound::http::session_config::SessionSettings;
use kyc_portal::inbound::http::state::HttpStatePorts;

/// Everything `create_server` needs, resolved from settings at startup.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) ports: HttpStatePorts,
}

impl ServerConfig {
    /// Construct a server configuration from validated parts.
    #[must_use]
    pub fn new(session: SessionSettings, bind_addr: SocketAddr, ports: HttpStatePorts) -> Self {
        Self {
            session,
            bind_addr,
            ports,
        }
    }
}
