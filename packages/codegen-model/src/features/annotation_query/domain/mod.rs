mod value;

pub use value::FromAnnotationValue;
