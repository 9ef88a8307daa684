//! Identifier naming helpers
//!
//! Capability identifiers are derived from the target type's simple name:
//! `IEmailService` → property `EmailService`, interface `IHasEmailService`,
//! parameter `emailService`.

/// Strip the interface prefix from an interface-shaped name
///
/// Applies only when the name is longer than the prefix and starts with it.
pub fn strip_interface_prefix(name: &str, is_interface: bool, prefix: char) -> &str {
    if is_interface && name.chars().count() > 1 && name.starts_with(prefix) {
        &name[prefix.len_utf8()..]
    } else {
        name
    }
}

/// `EmailService` → `emailService`, `HTTPClient` → `httpClient`
pub fn camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut lowering = true;

    for (i, c) in chars.iter().enumerate() {
        if lowering && c.is_uppercase() {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if i > 0 && next_is_lower {
                // start of the next word in an acronym run
                lowering = false;
                out.push(*c);
            } else {
                out.extend(c.to_lowercase());
            }
        } else {
            lowering = false;
            out.push(*c);
        }
    }

    out
}

/// `SendAsync` → `Send`; names that are only the suffix are kept
pub fn strip_async_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    match name.strip_suffix(suffix) {
        Some(stem) if !stem.is_empty() => stem,
        _ => name,
    }
}

pub fn capability_interface_name(capability_prefix: &str, property_name: &str) -> String {
    format!("{capability_prefix}{property_name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_strip_interface_prefix() {
        assert_eq!(strip_interface_prefix("IEmailService", true, 'I'), "EmailService");
        assert_eq!(strip_interface_prefix("I", true, 'I'), "I");
        assert_eq!(strip_interface_prefix("Inventory", false, 'I'), "Inventory");
        assert_eq!(strip_interface_prefix("Clock", true, 'I'), "Clock");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("EmailService"), "emailService");
        assert_eq!(camel_case("HTTPClient"), "httpClient");
        assert_eq!(camel_case("IO"), "io");
        assert_eq!(camel_case("clock"), "clock");
        assert_eq!(camel_case(""), "");
    }

    #[test]
    fn test_strip_async_suffix() {
        assert_eq!(strip_async_suffix("SendAsync", "Async"), "Send");
        assert_eq!(strip_async_suffix("Async", "Async"), "Async");
        assert_eq!(strip_async_suffix("Send", "Async"), "Send");
    }

    #[test]
    fn test_capability_interface_name() {
        assert_eq!(
            capability_interface_name("IHas", "EmailService"),
            "IHasEmailService"
        );
    }

    #[quickcheck]
    fn qc_camel_case_is_idempotent(name: String) -> TestResult {
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return TestResult::discard();
        }
        let once = camel_case(&name);
        TestResult::from_bool(camel_case(&once) == once && once.len() == name.len())
    }

    #[quickcheck]
    fn qc_camel_case_never_starts_uppercase(name: String) -> TestResult {
        if !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return TestResult::discard();
        }
        TestResult::from_bool(
            camel_case(&name)
                .chars()
                .next()
                .map_or(true, |c| !c.is_uppercase()),
        )
    }
}
