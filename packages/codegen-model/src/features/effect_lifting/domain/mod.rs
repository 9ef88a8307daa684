mod classification;
mod shape;
mod strategy;

pub use classification::{Classification, ProducedType};
pub use shape::{ReturnShape, Synchrony, ValueShape};
pub use strategy::LiftingStrategy;
