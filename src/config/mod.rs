//! Configuration module

mod site;

pub use site::FallbackContent;
pub use site::SiteConfig;
