//! Builders choosing port implementations from settings.

use std::sync::Arc;

use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};

use kyc_portal::domain::ports::{
    ChatService, CustomerSource, FixtureLoginService, LoginService, UnconfiguredChatService,
};
use kyc_portal::inbound::http::state::HttpStatePorts;
use kyc_portal::outbound::auth::ConfiguredLoginService;
use kyc_portal::outbound::chat::ChatHttpClient;
use kyc_portal::outbound::customers::CustomerHttpSource;
use kyc_portal::settings::KycPortalSettings;

fn build_login_service(settings: &KycPortalSettings) -> Result<Arc<dyn LoginService>> {
    match settings.login_account()? {
        Some(account) => {
            let service =
                ConfiguredLoginService::new(account.username, &account.password_sha256)
                    .wrap_err("configure login service")?;
            Ok(Arc::new(service))
        }
        None => {
            warn!("no operator account configured; using development login fixture");
            Ok(Arc::new(FixtureLoginService))
        }
    }
}

fn build_customer_source(settings: &KycPortalSettings) -> Result<Arc<dyn CustomerSource>> {
    let base_url = settings.customer_api_url()?;
    let source = CustomerHttpSource::new(&base_url, settings.request_timeout()?)
        .wrap_err("configure customer source")?;
    info!(url = %source.customers_url(), "customer source configured");
    Ok(Arc::new(source))
}

fn build_chat_service(settings: &KycPortalSettings) -> Result<Arc<dyn ChatService>> {
    match settings.chat_endpoint()? {
        Some(endpoint) => {
            info!(url = %endpoint, "chat relay configured");
            let client = ChatHttpClient::new(endpoint, settings.request_timeout()?)
                .wrap_err("configure chat client")?;
            Ok(Arc::new(client))
        }
        None => {
            warn!("no chat endpoint configured; chat requests will report unavailable");
            Ok(Arc::new(UnconfiguredChatService))
        }
    }
}

/// Resolve every port the HTTP handlers depend on.
pub fn build_http_ports(settings: &KycPortalSettings) -> Result<HttpStatePorts> {
    Ok(HttpStatePorts {
        login: build_login_service(settings)?,
        customers: build_customer_source(settings)?,
        chat: build_chat_service(settings)?,
        rejected_login_route: settings.rejected_login_route()?,
    })
}
