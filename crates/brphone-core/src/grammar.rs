use crate::domain::NumberClass;
use crate::normalize::{strip_non_digits, strip_trunk_prefix};
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::{Duration, Instant};
use thiserror::Error;

pub const PHONE_PATTERN: &str =
    r"^(\(0?[1-9][0-9]\) ?|0?[1-9][0-9] ?)?(9 ?)?([1-9][0-9]{3})(-| )?([0-9]{4})$";

pub const DEFAULT_MATCH_TIMEOUT: Duration = Duration::from_secs(1);

const DIGIT_COUNTS: [usize; 4] = [8, 9, 10, 11];

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pattern match exceeded {}ms", .budget.as_millis())]
pub struct MatchTimedOut {
    pub budget: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSettings {
    pub timeout: Duration,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_MATCH_TIMEOUT,
        }
    }
}

// Unmatched optional groups are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    pub area: String,
    pub mobile: String,
    pub block1: String,
    pub separator: String,
    pub block2: String,
}

pub trait PatternEngine {
    fn captures(&self, text: &str, budget: Duration) -> Result<Option<Captured>, MatchTimedOut>;
}

impl<E: PatternEngine + ?Sized> PatternEngine for &E {
    fn captures(&self, text: &str, budget: Duration) -> Result<Option<Captured>, MatchTimedOut> {
        (**self).captures(text, budget)
    }
}

// `regex` cannot be interrupted mid-match; the budget is checked afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexEngine;

impl PatternEngine for RegexEngine {
    fn captures(&self, text: &str, budget: Duration) -> Result<Option<Captured>, MatchTimedOut> {
        // compile outside the budget
        let regex = Lazy::force(&PHONE_REGEX);
        let started = Instant::now();
        let found = regex.captures(text).map(|caps| {
            let group = |index: usize| {
                caps.get(index)
                    .map_or_else(String::new, |m| m.as_str().to_string())
            };
            Captured {
                area: group(1),
                mobile: group(2),
                block1: group(3),
                separator: group(4),
                block2: group(5),
            }
        });
        if started.elapsed() > budget {
            return Err(MatchTimedOut { budget });
        }
        Ok(found)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups {
    pub area_code: Option<String>,
    pub mobile: bool,
    pub block1: String,
    pub block2: String,
}

impl Groups {
    fn from_captured(captured: Captured) -> Self {
        let area = strip_non_digits(&captured.area);
        Self {
            area_code: (!area.is_empty()).then_some(area),
            mobile: captured.mobile.trim() == "9",
            block1: captured.block1,
            block2: captured.block2,
        }
    }

    pub fn class(&self) -> NumberClass {
        match (self.area_code.is_some(), self.mobile) {
            (false, false) => NumberClass::Local,
            (false, true) => NumberClass::LocalMobile,
            (true, false) => NumberClass::Landline,
            (true, true) => NumberClass::Mobile,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Matcher<E = RegexEngine> {
    engine: E,
    settings: MatchSettings,
}

impl<E: PatternEngine> Matcher<E> {
    pub fn new(engine: E, settings: MatchSettings) -> Self {
        Self { engine, settings }
    }

    pub fn settings(&self) -> MatchSettings {
        self.settings
    }

    pub fn match_phone(&self, trimmed: &str) -> Result<Option<Groups>, MatchTimedOut> {
        if trimmed.is_empty() {
            return Ok(None);
        }

        let budget = self.settings.timeout;
        if self.engine.captures(trimmed, budget)?.is_none() {
            return Ok(None);
        }

        let digits = strip_non_digits(trimmed);
        let digits = strip_trunk_prefix(&digits);
        if !DIGIT_COUNTS.contains(&digits.len()) {
            return Ok(None);
        }

        Ok(self
            .engine
            .captures(digits, budget)?
            .map(Groups::from_captured))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Captured, Groups, MatchSettings, MatchTimedOut, Matcher, PatternEngine, RegexEngine,
    };
    use crate::domain::NumberClass;
    use std::cell::RefCell;
    use std::time::Duration;

    fn matcher() -> Matcher {
        Matcher::default()
    }

    fn groups(input: &str) -> Groups {
        matcher()
            .match_phone(input)
            .expect("no timeout")
            .unwrap_or_else(|| panic!("expected match for {input:?}"))
    }

    fn rejects(input: &str) -> bool {
        matcher().match_phone(input).expect("no timeout").is_none()
    }

    #[test]
    fn matches_area_and_mobile() {
        let found = groups("11987654321");
        assert_eq!(found.area_code.as_deref(), Some("11"));
        assert!(found.mobile);
        assert_eq!(found.block1, "8765");
        assert_eq!(found.block2, "4321");
        assert_eq!(found.class(), NumberClass::Mobile);
    }

    #[test]
    fn matches_area_without_mobile() {
        let found = groups("(11) 3456-7890");
        assert_eq!(found.area_code.as_deref(), Some("11"));
        assert!(!found.mobile);
        assert_eq!(found.class(), NumberClass::Landline);
    }

    #[test]
    fn matches_local_numbers() {
        assert_eq!(groups("34567890").class(), NumberClass::Local);
        assert_eq!(groups("3456 7890").class(), NumberClass::Local);
        assert_eq!(groups("987654321").class(), NumberClass::LocalMobile);
        assert_eq!(groups("9 8765-4321").class(), NumberClass::LocalMobile);
    }

    #[test]
    fn strips_trunk_prefix() {
        let found = groups("(011) 98765-4321");
        assert_eq!(found.area_code.as_deref(), Some("11"));
        let found = groups("011 3456-7890");
        assert_eq!(found.area_code.as_deref(), Some("11"));
    }

    #[test]
    fn ambiguous_ten_digits_prefer_area_code() {
        let found = groups("1193456789");
        assert_eq!(found.area_code.as_deref(), Some("11"));
        assert!(!found.mobile);
        assert_eq!(found.block1, "9345");
        assert_eq!(found.block2, "6789");
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(rejects(""));
        assert!(rejects("123"));
        assert!(rejects("1234567"));
        assert!(rejects("123456789012"));
        assert!(rejects("04567890"));
        assert!(rejects("(01) 3456-7890"));
        assert!(rejects("(11)  3456-7890"));
        assert!(rejects("3456--7890"));
        assert!(rejects("3456.7890"));
        assert!(rejects("+55 11 98765-4321"));
        assert!(rejects("abcd-efgh"));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert!(rejects("٣٤٥٦-٧٨٩٠"));
    }

    struct Recording<'a> {
        seen: &'a RefCell<Vec<String>>,
    }

    impl PatternEngine for Recording<'_> {
        fn captures(
            &self,
            text: &str,
            budget: Duration,
        ) -> Result<Option<Captured>, MatchTimedOut> {
            self.seen.borrow_mut().push(text.to_string());
            RegexEngine.captures(text, budget)
        }
    }

    #[test]
    fn second_pass_sees_digits_without_trunk_prefix() {
        let seen = RefCell::new(Vec::new());
        let matcher = Matcher::new(Recording { seen: &seen }, MatchSettings::default());
        matcher.match_phone("(011) 3456-7890").expect("no timeout");
        assert_eq!(*seen.borrow(), vec!["(011) 3456-7890", "1134567890"]);
    }

    #[test]
    fn shape_failure_skips_second_pass() {
        let seen = RefCell::new(Vec::new());
        let matcher = Matcher::new(Recording { seen: &seen }, MatchSettings::default());
        assert!(matcher.match_phone("12-34").expect("no timeout").is_none());
        assert_eq!(seen.borrow().len(), 1);
    }

    struct Stalled;

    impl PatternEngine for Stalled {
        fn captures(
            &self,
            _text: &str,
            budget: Duration,
        ) -> Result<Option<Captured>, MatchTimedOut> {
            Err(MatchTimedOut { budget })
        }
    }

    #[test]
    fn timeout_is_reported_with_budget() {
        let settings = MatchSettings {
            timeout: Duration::from_millis(5),
        };
        let err = Matcher::new(Stalled, settings)
            .match_phone("34567890")
            .unwrap_err();
        assert_eq!(err.budget, Duration::from_millis(5));
    }

    #[test]
    fn empty_input_never_reaches_engine() {
        let matcher = Matcher::new(Stalled, MatchSettings::default());
        assert_eq!(matcher.match_phone(""), Ok(None));
    }

    #[test]
    fn regex_engine_fits_tight_budget_on_repeated_use() {
        let budget = Duration::from_millis(1);
        for _ in 0..3 {
            let found = RegexEngine
                .captures("11987654321", budget)
                .expect("within budget")
                .expect("match");
            assert_eq!(found.area, "11");
            assert_eq!(found.mobile, "9");
            assert_eq!(found.block1, "8765");
            assert_eq!(found.block2, "4321");
        }
        assert_eq!(RegexEngine.captures("123", budget), Ok(None));
    }

    #[test]
    fn matcher_with_tight_budget_is_stable() {
        let settings = MatchSettings {
            timeout: Duration::from_millis(1),
        };
        let matcher = Matcher::new(RegexEngine, settings);
        let first = matcher.match_phone("(11) 98765-4321");
        let second = matcher.match_phone("(11) 98765-4321");
        assert_eq!(first, second);
        assert!(matches!(first, Ok(Some(_))));
    }
}
