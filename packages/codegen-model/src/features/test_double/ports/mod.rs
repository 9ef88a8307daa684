mod runtime_lookup;

pub use runtime_lookup::RuntimeLookup;
