mod classifier;
mod shape_analyzer;

pub use classifier::LiftingClassifier;
pub use shape_analyzer::ShapeAnalyzer;
