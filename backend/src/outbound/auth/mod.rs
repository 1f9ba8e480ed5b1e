//! Authentication adapters implementing the `LoginService` port.

mod configured_login;

pub use configured_login::ConfiguredLoginService;
