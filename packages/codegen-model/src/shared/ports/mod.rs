//! Ports - interfaces the host implements

mod host;

pub use host::DeclarationHost;
