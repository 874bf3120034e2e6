use crate::error::PhoneError;
use crate::format::{digits_only, RenderMode};
use crate::grammar::RegexEngine;
use crate::parser::PhoneParser;
use serde::{Deserialize, Serialize};
use std::any::{type_name, Any};
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

const TYPE_TAG: &str = "brphone::PhoneNumber";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberClass {
    Local,
    LocalMobile,
    Landline,
    Mobile,
}

impl NumberClass {
    pub fn digit_count(self) -> usize {
        match self {
            NumberClass::Local => 8,
            NumberClass::LocalMobile => 9,
            NumberClass::Landline => 10,
            NumberClass::Mobile => 11,
        }
    }

    fn from_digit_count(count: usize) -> Option<Self> {
        match count {
            8 => Some(NumberClass::Local),
            9 => Some(NumberClass::LocalMobile),
            10 => Some(NumberClass::Landline),
            11 => Some(NumberClass::Mobile),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NumberClass::Local => "local",
            NumberClass::LocalMobile => "local-mobile",
            NumberClass::Landline => "landline",
            NumberClass::Mobile => "mobile",
        }
    }
}

// `value` is the canonical string when valid, the trimmed input otherwise.
// Equality, hashing and ordering only look at `value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PhoneNumber {
    value: String,
    valid: bool,
}

impl PhoneNumber {
    pub(crate) fn from_canonical(value: String) -> Self {
        Self { value, valid: true }
    }

    pub(crate) fn from_invalid(trimmed: String) -> Self {
        Self {
            value: trimmed,
            valid: false,
        }
    }

    pub fn parse(input: &str) -> Result<Self, PhoneError> {
        PhoneParser::<RegexEngine>::default().parse(Some(input))
    }

    pub fn try_parse(input: &str) -> (Self, bool) {
        PhoneParser::<RegexEngine>::default().try_parse(Some(input))
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn class(&self) -> Option<NumberClass> {
        if !self.valid {
            return None;
        }
        NumberClass::from_digit_count(self.digits().len())
    }

    pub fn area_code(&self) -> Option<&str> {
        if !self.valid {
            return None;
        }
        self.value
            .strip_prefix('(')
            .and_then(|rest| rest.split_once(')'))
            .map(|(area, _)| area)
    }

    pub fn is_mobile(&self) -> bool {
        matches!(
            self.class(),
            Some(NumberClass::Mobile | NumberClass::LocalMobile)
        )
    }

    pub fn digits(&self) -> String {
        digits_only(&self.value)
    }

    pub fn render(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::Display => self.value.clone(),
            RenderMode::DigitsOnly => self.digits(),
        }
    }

    pub fn render_str(&self, mode: &str) -> Result<String, PhoneError> {
        Ok(self.render(mode.parse()?))
    }

    pub fn to_display_string(&self) -> String {
        self.render(RenderMode::Display)
    }

    pub fn hash_value(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    pub fn compare(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    pub fn compare_any<T: Any>(&self, other: &T) -> Result<Ordering, PhoneError> {
        let other: &dyn Any = other;
        other
            .downcast_ref::<PhoneNumber>()
            .map(|phone| self.compare(phone))
            .ok_or_else(|| PhoneError::IncompatibleComparison(type_name::<T>()))
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for PhoneNumber {}

impl Hash for PhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        TYPE_TAG.hash(state);
        self.value.hash(state);
    }
}

impl PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<&str> for PhoneNumber {
    fn from(value: &str) -> Self {
        Self::try_parse(value).0
    }
}

impl From<String> for PhoneNumber {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.value
    }
}
