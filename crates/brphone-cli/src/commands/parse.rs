use crate::commands::{print_json, Context, PhoneDto};
use crate::error::phone_error;
use anyhow::Result;
use brphone_core::RenderMode;
use clap::Args;

#[derive(Debug, Args)]
pub struct ParseArgs {
    pub input: String,
    /// display | digits-only (also accepts d / n)
    #[arg(long, default_value = "display")]
    pub mode: String,
}

pub fn parse_number(ctx: &Context<'_>, args: ParseArgs) -> Result<()> {
    let messages = &ctx.config.messages;
    let mode: RenderMode = args
        .mode
        .parse()
        .map_err(|err| phone_error(messages, err))?;
    let phone = ctx
        .parser
        .parse(Some(&args.input))
        .map_err(|err| phone_error(messages, err))?;

    if ctx.json {
        print_json(&PhoneDto::new(&args.input, &phone))?;
    } else {
        println!("{}", phone.render(mode));
    }
    Ok(())
}
