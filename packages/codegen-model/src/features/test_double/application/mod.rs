mod mirror;

pub use mirror::TestDoubleMirror;
