//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod chat_service;
mod customer_source;
mod login_service;

#[cfg(test)]
pub use chat_service::{FixtureChatService, MockChatService};
pub use chat_service::{ChatService, ChatServiceError, UnconfiguredChatService};
#[cfg(test)]
pub use customer_source::{FixtureCustomerSource, MockCustomerSource};
pub use customer_source::{CustomerSource, CustomerSourceError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, LoginService, LoginServiceError};
