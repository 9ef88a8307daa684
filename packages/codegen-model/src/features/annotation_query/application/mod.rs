mod query;

pub use query::AnnotationQuery;
