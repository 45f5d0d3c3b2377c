/// Table-driven decomposition tests
///
/// Loads `tests/data/decompose.json` and compares every component of
/// `reqlink::decompose` with the expectation. Absent keys must be absent.
#[path = "data/loader.rs"]
mod loader;

use loader::{TestCase, load_cases};

#[test]
fn test_decompose_table() {
    let cases = load_cases("tests/data/decompose.json");
    let mut failures = Vec::new();
    let mut ran = 0;

    for (num, case) in cases.iter().enumerate() {
        let TestCase::Case(case) = case else {
            continue;
        };
        ran += 1;

        match reqlink::decompose(&case.input) {
            Ok(parts) if !case.failure => {
                let expected = case.expected();
                if parts != expected {
                    failures.push(format!(
                        "#{num} {:?}: expected {expected:?}, got {parts:?}",
                        case.input
                    ));
                }
            }
            Ok(parts) => failures.push(format!(
                "#{num} {:?}: expected failure, got {parts:?}",
                case.input
            )),
            Err(err) if !case.failure => {
                failures.push(format!("#{num} {:?}: unexpected error {err}", case.input));
            }
            Err(_) => {}
        }
    }

    assert!(ran > 0, "no decomposition cases loaded");
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
