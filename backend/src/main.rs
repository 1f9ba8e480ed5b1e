//! Portal entry-point: loads settings, wires adapters and serves the API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use kyc_portal::inbound::http::health::HealthState;
use kyc_portal::inbound::http::session_config::{BuildMode, SessionInputs, session_settings};
use kyc_portal::settings::KycPortalSettings;
use ortho_config::OrthoConfig;

use server::{ServerConfig, build_http_ports, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        KycPortalSettings::load().map_err(|error| eyre!("load configuration: {error}"))?;
    let key_file = settings.session_key_file();
    let session = session_settings(
        &SessionInputs {
            key_file: &key_file,
            allow_ephemeral: settings.session_allow_ephemeral,
            cookie_secure: settings.cookie_secure,
            same_site: settings.session_same_site()?,
        },
        BuildMode::from_debug_assertions(),
    )
    .wrap_err("configure sessions")?;
    let bind_addr = settings.bind_addr()?;
    let ports = build_http_ports(&settings)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(session, bind_addr, ports),
    )
    .wrap_err_with(|| format!("bind {bind_addr}"))?;
    info!(%bind_addr, "kyc portal listening");

    server.await.wrap_err("server terminated")?;
    health_state.mark_draining();
    Ok(())
}
