use std::io::Read;

use anyhow::{bail, Context};
use cookscale::{IngredientParser, ScaleFactor};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args();
    let bin = args.next().unwrap_or_else(|| "scale".into());
    let (Some(in_file), Some(original), Some(desired)) = (args.next(), args.next(), args.next())
    else {
        bail!("Usage: {bin} [<input_file>|STDIN] <original_yield> <desired_yield>");
    };

    let original: f64 = original.parse().context("invalid original yield")?;
    let desired: f64 = desired.parse().context("invalid desired yield")?;
    let factor = ScaleFactor::new(original, desired)?;

    let input = match in_file.as_ref() {
        "STDIN" => {
            let mut buf = String::new();
            std::io::stdin().lock().read_to_string(&mut buf)?;
            buf
        }
        path => std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?,
    };

    let parser = IngredientParser::default();
    let result = parser.parse(&input);
    for skipped in result.skipped() {
        eprintln!("skipped ({}): {}", skipped.reason, skipped.segment);
    }

    let ingredients = result.into_result()?;
    for scaled in parser.scale(&ingredients, factor.original(), factor.desired()) {
        println!("{:>16}  {}", scaled.display(parser.units()), scaled.name);
    }
    Ok(())
}
