use brphone_core::{MatchSettings, PhoneParser};
use std::time::Duration;

// Kept alone in its own test binary so the first call here is the first use
// of the compiled pattern in the process.
#[test]
fn first_parse_under_tight_budget_matches_later_ones() {
    let parser = PhoneParser::new(MatchSettings {
        timeout: Duration::from_millis(1),
    });
    let (first, first_ok) = parser.try_parse(Some("11987654321"));
    let (second, second_ok) = parser.try_parse(Some("11987654321"));
    assert!(first_ok, "first parse fell back to {:?}", first.as_str());
    assert!(second_ok);
    assert_eq!(first, second);
    assert_eq!(first.as_str(), "(11) 98765-4321");
}
