pub mod content;
pub mod helpers;

pub use content::{is_email, is_likely_password, is_url};
