use anyhow::Result;
use brphone_config::AppConfig;
use brphone_core::{PhoneNumber, PhoneParser, RenderMode};
use serde::Serialize;
use std::io::{self, Write};

pub mod check;
pub mod compare;
pub mod completions;
pub mod parse;
pub mod sort;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub parser: &'a PhoneParser,
}

#[derive(Debug, Serialize)]
pub struct PhoneDto {
    pub input: String,
    pub valid: bool,
    pub display: String,
    pub digits: String,
    pub class: Option<&'static str>,
}

impl PhoneDto {
    pub fn new(input: &str, phone: &PhoneNumber) -> Self {
        Self {
            input: input.to_string(),
            valid: phone.is_valid(),
            display: phone.render(RenderMode::Display),
            digits: phone.render(RenderMode::DigitsOnly),
            class: phone.class().map(|class| class.as_str()),
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
