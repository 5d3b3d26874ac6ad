pub mod client;
pub mod models;

pub use client::config::ClientConfig;
pub use client::context::SessionContext;
pub use client::error::SubmitError;
pub use client::IdeaSubmissionClient;
pub use models::Idea;
