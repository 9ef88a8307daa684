//! Include/exclude method filtering

/// Method-name filter from a module annotation
///
/// A non-empty include list wins outright; the exclude list is then ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodFilter {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl MethodFilter {
    pub fn new(include: Vec<String>, exclude: Vec<String>) -> Self {
        Self { include, exclude }
    }

    pub fn is_include_only(&self) -> bool {
        !self.include.is_empty()
    }

    pub fn keeps(&self, method_name: &str) -> bool {
        if self.is_include_only() {
            self.include.iter().any(|n| n == method_name)
        } else {
            !self.exclude.iter().any(|n| n == method_name)
        }
    }
}
