pub mod domain;
pub mod error;
pub mod format;
pub mod grammar;
pub mod messages;
pub mod normalize;
pub mod parser;

pub use domain::*;
pub use error::PhoneError;
pub use format::RenderMode;
pub use grammar::{MatchSettings, MatchTimedOut, PatternEngine, RegexEngine};
pub use messages::Messages;
pub use parser::PhoneParser;
