use crate::commands::{print_json, Context, PhoneDto};
use crate::util::validity_label;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(required = true)]
    pub inputs: Vec<String>,
}

pub fn check_numbers(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let items: Vec<PhoneDto> = args
        .inputs
        .iter()
        .map(|input| {
            let (phone, _) = ctx.parser.try_parse(Some(input));
            PhoneDto::new(input, &phone)
        })
        .collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    for item in items {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            item.input,
            validity_label(item.valid),
            item.display,
            item.digits,
            item.class.unwrap_or("-")
        );
    }
    Ok(())
}
