use crate::commands::{print_json, Context};
use crate::util::{equality_label, ordering_value};
use anyhow::Result;
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct CompareArgs {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Serialize)]
struct CompareDto {
    left: String,
    right: String,
    ordering: i8,
    equal: bool,
}

pub fn compare_numbers(ctx: &Context<'_>, args: CompareArgs) -> Result<()> {
    let (left, _) = ctx.parser.try_parse(Some(&args.left));
    let (right, _) = ctx.parser.try_parse(Some(&args.right));
    let ordering = ordering_value(left.compare(&right));
    let equal = left == right;

    if ctx.json {
        print_json(&CompareDto {
            left: left.to_display_string(),
            right: right.to_display_string(),
            ordering,
            equal,
        })?;
    } else {
        println!("{}\t{}", ordering, equality_label(equal));
    }
    Ok(())
}
