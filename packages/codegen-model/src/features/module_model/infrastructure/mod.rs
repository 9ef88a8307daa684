mod method_filter;
mod persistence;

pub use method_filter::MethodFilter;
pub use persistence::PersistenceDetector;
