//! Chatbot outbound adapter implementing the `ChatService` port.

mod http_client;

pub use http_client::ChatHttpClient;
