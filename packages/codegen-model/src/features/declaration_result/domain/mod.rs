mod guaranteed;
mod maybe;

pub use guaranteed::Guaranteed;
pub use maybe::{IntoMaybe, Maybe};
