//! CLI command implementations

pub mod check;
pub mod export;
pub mod init;
pub mod list;
pub mod new;
pub mod seo;
pub mod show;
