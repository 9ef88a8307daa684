//! Conversion from raw annotation values into typed values

use crate::features::declaration_result::Maybe;
use crate::shared::models::{AnnotationValue, TypeRef};

/// Types that can be read out of an annotation argument
pub trait FromAnnotationValue: Sized {
    fn from_annotation_value(value: &AnnotationValue) -> Maybe<Self>;
}

impl FromAnnotationValue for String {
    fn from_annotation_value(value: &AnnotationValue) -> Maybe<Self> {
        match value {
            AnnotationValue::Str(s) => Maybe::some(s.clone()),
            _ => Maybe::none(),
        }
    }
}

impl FromAnnotationValue for bool {
    fn from_annotation_value(value: &AnnotationValue) -> Maybe<Self> {
        match value {
            AnnotationValue::Bool(b) => Maybe::some(*b),
            _ => Maybe::none(),
        }
    }
}

impl FromAnnotationValue for i64 {
    fn from_annotation_value(value: &AnnotationValue) -> Maybe<Self> {
        match value {
            AnnotationValue::Int(n) => Maybe::some(*n),
            _ => Maybe::none(),
        }
    }
}

impl FromAnnotationValue for u32 {
    fn from_annotation_value(value: &AnnotationValue) -> Maybe<Self> {
        i64::from_annotation_value(value).and_then(|n| u32::try_from(n).ok().into())
    }
}

impl FromAnnotationValue for TypeRef {
    fn from_annotation_value(value: &AnnotationValue) -> Maybe<Self> {
        match value {
            AnnotationValue::Type(ty) => Maybe::some(ty.clone()),
            _ => Maybe::none(),
        }
    }
}

/// Arrays convert element-wise; a single scalar is read as a one-element list
impl<T: FromAnnotationValue> FromAnnotationValue for Vec<T> {
    fn from_annotation_value(value: &AnnotationValue) -> Maybe<Self> {
        match value {
            AnnotationValue::Array(items) => items
                .iter()
                .map(|item| T::from_annotation_value(item).into_option())
                .collect::<Option<Vec<T>>>()
                .into(),
            AnnotationValue::Null => Maybe::none(),
            scalar => T::from_annotation_value(scalar).map(|v| vec![v]),
        }
    }
}
