//! Helper functions shared by the CLI, the server and SEO metadata

mod date;
mod html;
mod list;
mod text;
mod url;

pub use date::*;
pub use html::*;
pub use list::*;
pub use text::*;
pub use url::*;
