pub mod client;
pub mod cms;
pub mod types;

pub use client::ApiClient;
pub use cms::CmsClient;
pub use types::*;
