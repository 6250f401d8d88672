mod client;
mod repository;

pub use client::ApiClient;
pub use repository::CommentRepository;

/// The client shared through the Leptos context, or a fresh one built from
/// the global configuration when nothing was provided.
pub fn use_api() -> ApiClient {
    leptos::use_context::<ApiClient>()
        .unwrap_or_else(|| ApiClient::from_config(crate::config::Config::global()))
}
