use crate::error::PhoneError;

pub const DEFAULT_NULL_INPUT: &str = "it cannot be null or empty";
pub const DEFAULT_MALFORMED_INPUT: &str = "it is not in a valid format";
pub const DEFAULT_INVALID_RENDER_MODE: &str = "the value is not valid";
pub const DEFAULT_INCOMPATIBLE_COMPARISON: &str = "it is not a valid type";
pub const DEFAULT_MATCH_TIMED_OUT: &str = "matching took too long";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub null_input: String,
    pub malformed_input: String,
    pub invalid_render_mode: String,
    pub incompatible_comparison: String,
    pub match_timed_out: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            null_input: DEFAULT_NULL_INPUT.to_string(),
            malformed_input: DEFAULT_MALFORMED_INPUT.to_string(),
            invalid_render_mode: DEFAULT_INVALID_RENDER_MODE.to_string(),
            incompatible_comparison: DEFAULT_INCOMPATIBLE_COMPARISON.to_string(),
            match_timed_out: DEFAULT_MATCH_TIMED_OUT.to_string(),
        }
    }
}

impl Messages {
    pub fn message_for(&self, err: &PhoneError) -> &str {
        match err {
            PhoneError::NullOrEmptyInput => &self.null_input,
            PhoneError::MalformedInput(_) => &self.malformed_input,
            PhoneError::InvalidRenderMode(_) => &self.invalid_render_mode,
            PhoneError::IncompatibleComparison(_) => &self.incompatible_comparison,
            PhoneError::MatchTimedOut { .. } => &self.match_timed_out,
        }
    }

    pub fn describe(&self, err: &PhoneError) -> String {
        let message = self.message_for(err);
        match err {
            PhoneError::NullOrEmptyInput => message.to_string(),
            PhoneError::MalformedInput(input) => format!("{message}: {input}"),
            PhoneError::InvalidRenderMode(mode) => format!("{message}: {mode}"),
            PhoneError::IncompatibleComparison(type_name) => format!("{message}: {type_name}"),
            PhoneError::MatchTimedOut { budget } => {
                format!("{message} ({}ms)", budget.as_millis())
            }
        }
    }
}
