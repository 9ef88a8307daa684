//! Shared constants
//!
//! Default annotation vocabulary and the diagnostic messages raised for
//! violated modeling invariants.

// ═══════════════════════════════════════════════════════════════════════════
// Annotation vocabulary
// ═══════════════════════════════════════════════════════════════════════════

/// Capability-module annotation
pub const MODULE_ANNOTATION: &str = "EffectsModule";

/// Composition-root marker annotation
pub const RUNTIME_ANNOTATION: &str = "Runtime";

/// Module-reference annotation (repeatable)
pub const USES_ANNOTATION: &str = "Uses";

/// Test composition-root annotation
pub const TEST_RUNTIME_ANNOTATION: &str = "TestRuntime";

/// Suffix hosts commonly append to annotation type names
pub const ANNOTATION_TYPE_SUFFIX: &str = "Attribute";

/// Suffix stripped from asynchronous method names when deriving effect names
pub const ASYNC_METHOD_SUFFIX: &str = "Async";

// ═══════════════════════════════════════════════════════════════════════════
// Diagnostic messages
// ═══════════════════════════════════════════════════════════════════════════

pub const MSG_INVALID_TARGET_TYPE: &str =
    "effects module annotation must reference a valid target type";

pub const MSG_UNRESOLVED_WRAPPED_TYPE: &str =
    "asynchronous value-returning methods must declare their wrapped type";

pub const MSG_CIRCULAR_REFERENCE: &str = "circular module reference";

pub const MSG_INVALID_MODULE_REFERENCE: &str =
    "module reference annotation must reference a resolvable declaration";

pub const MSG_INVALID_TEST_RUNTIME: &str =
    "test runtime annotation must reference a resolved production runtime";

pub const MSG_NOT_A_RUNTIME: &str = "declaration is not marked as a composition root";
