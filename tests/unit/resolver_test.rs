//! Tests for issue key resolution

use fixversion_gate::GateError;
use fixversion_gate::core::services::IssueKeyResolver;
use test_case::test_case;

#[test_case("feature/[ABC-456]-other-thing", "ABC-456" ; "bracketed key")]
#[test_case("feature/NOJIRA-123", "feature/NOJIRA-123" ; "no match keeps branch")]
#[test_case("[ABC-1][ABC-2]", "ABC-1" ; "first match wins")]
fn test_bracket_pattern(branch: &str, expected: &str) {
    let resolver = IssueKeyResolver::new(Some(r"\[(ABC-\d+)\]")).unwrap();
    assert_eq!(resolver.resolve(branch), expected);
}

#[test]
fn test_prefix_pattern() {
    let resolver = IssueKeyResolver::new(Some(r"^(?:feature|bugfix)/([A-Z]+-\d+)")).unwrap();
    assert_eq!(resolver.resolve("bugfix/PAY-77-rounding"), "PAY-77");
    assert_eq!(resolver.resolve("chore/PAY-77"), "chore/PAY-77");
}

#[test]
fn test_whitespace_pattern_is_no_pattern() {
    let resolver = IssueKeyResolver::new(Some("   ")).unwrap();
    assert!(!resolver.has_pattern());
}

#[test]
fn test_uncompilable_pattern() {
    let err = IssueKeyResolver::new(Some(r"\[(ABC-\d+\]")).unwrap_err();
    assert!(matches!(err, GateError::InvalidPattern(_)));
}
