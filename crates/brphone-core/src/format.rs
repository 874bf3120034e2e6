use crate::error::PhoneError;
use crate::grammar::Groups;
use crate::normalize::strip_non_digits;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    #[default]
    Display,
    DigitsOnly,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Display => "display",
            RenderMode::DigitsOnly => "digits-only",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = PhoneError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lower = raw.trim().to_ascii_lowercase();
        match lower.as_str() {
            "display" | "d" => Ok(RenderMode::Display),
            "digitsonly" | "digits-only" | "digits_only" | "digits" | "n" => {
                Ok(RenderMode::DigitsOnly)
            }
            _ => Err(PhoneError::InvalidRenderMode(raw.to_string())),
        }
    }
}

pub fn format_canonical(groups: &Groups) -> String {
    let area = groups
        .area_code
        .as_deref()
        .map(|area| format!("({area}) "))
        .unwrap_or_default();
    let mobile = if groups.mobile { "9" } else { "" };
    format!("{area}{mobile}{}-{}", groups.block1, groups.block2)
}

pub fn digits_only(value: &str) -> String {
    strip_non_digits(value)
}
