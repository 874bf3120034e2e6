use crate::commands::{print_json, Context, PhoneDto};
use anyhow::{Context as _, Result};
use brphone_core::PhoneNumber;
use clap::Args;
use std::io::{self, BufRead};
use tracing::debug;

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Drop values equal to the previous one after sorting
    #[arg(long)]
    pub unique: bool,
}

pub fn sort_numbers(ctx: &Context<'_>, args: SortArgs) -> Result<()> {
    let stdin = io::stdin().lock();
    let mut entries: Vec<(String, PhoneNumber)> = Vec::new();
    for line in stdin.lines() {
        let line = line.with_context(|| "read stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let (phone, _) = ctx.parser.try_parse(Some(&line));
        entries.push((line, phone));
    }

    entries.sort_by(|(_, a), (_, b)| a.cmp(b));
    if args.unique {
        let before = entries.len();
        entries.dedup_by(|(_, a), (_, b)| a == b);
        debug!(dropped = before - entries.len(), "duplicates removed");
    }

    if ctx.json {
        let items: Vec<PhoneDto> = entries
            .iter()
            .map(|(input, phone)| PhoneDto::new(input, phone))
            .collect();
        print_json(&items)?;
        return Ok(());
    }

    for (_, phone) in entries {
        println!("{}", phone);
    }
    Ok(())
}
