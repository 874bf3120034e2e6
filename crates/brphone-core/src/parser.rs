use crate::domain::PhoneNumber;
use crate::error::PhoneError;
use crate::format::format_canonical;
use crate::grammar::{MatchSettings, Matcher, PatternEngine, RegexEngine};
use crate::normalize::normalize_input;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct PhoneParser<E = RegexEngine> {
    matcher: Matcher<E>,
}

impl PhoneParser<RegexEngine> {
    pub fn new(settings: MatchSettings) -> Self {
        Self::with_engine(RegexEngine, settings)
    }
}

impl<E: PatternEngine> PhoneParser<E> {
    pub fn with_engine(engine: E, settings: MatchSettings) -> Self {
        Self {
            matcher: Matcher::new(engine, settings),
        }
    }

    pub fn settings(&self) -> MatchSettings {
        self.matcher.settings()
    }

    pub fn parse(&self, input: Option<&str>) -> Result<PhoneNumber, PhoneError> {
        self.resolve(normalize_input(input))
    }

    pub fn try_parse(&self, input: Option<&str>) -> (PhoneNumber, bool) {
        let trimmed = normalize_input(input);
        match self.resolve(trimmed.clone()) {
            Ok(phone) => (phone, true),
            Err(err) => {
                debug!(input = %trimmed, error = %err, "phone number kept as invalid");
                (PhoneNumber::from_invalid(trimmed), false)
            }
        }
    }

    fn resolve(&self, trimmed: String) -> Result<PhoneNumber, PhoneError> {
        if trimmed.is_empty() {
            return Err(PhoneError::NullOrEmptyInput);
        }

        let groups = match self.matcher.match_phone(&trimmed) {
            Ok(Some(groups)) => groups,
            Ok(None) => return Err(PhoneError::MalformedInput(trimmed)),
            Err(timeout) => {
                warn!(
                    input = %trimmed,
                    budget_ms = timeout.budget.as_millis() as u64,
                    "phone number match timed out"
                );
                return Err(timeout.into());
            }
        };

        Ok(PhoneNumber::from_canonical(format_canonical(&groups)))
    }
}
