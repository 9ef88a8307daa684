//! Custom assertions for model verification

use codegen_model::{ErrorKind, GenerationOutput, RuntimeModel};

/// Assert that the generation cycle recorded no failures
pub fn assert_clean(output: &GenerationOutput) {
    assert!(
        output.is_clean(),
        "Expected no failures, got: {:?}",
        output.failures
    );
}

/// Assert the capability interfaces of a runtime, in order
pub fn assert_interfaces(runtime: &RuntimeModel, expected: &[&str]) {
    assert_eq!(
        runtime.interfaces(),
        expected,
        "Unexpected capability order for {}",
        runtime.declaration
    );
}

/// Assert a recorded failure for `declaration` of the given kind
pub fn assert_failed(output: &GenerationOutput, declaration: &str, kind: ErrorKind) {
    let failure = output
        .failure(declaration)
        .unwrap_or_else(|| panic!("Expected a failure for {declaration}, got: {:?}", output.failures));
    assert_eq!(
        failure.error.kind(),
        kind,
        "Unexpected error kind for {declaration}: {}",
        failure.error
    );
}
