use anyhow::Result;
use clap::Parser;
use letter_core::{assignments, summary_text, NameList};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Print the round-robin alphabet split for a list of names")]
struct Args {
    /// Names in assignment order.
    #[arg(required = true, value_name = "NAME")]
    names: Vec<String>,
    /// Print the assignments as JSON instead of text lines.
    #[arg(long)]
    json: bool,
}

fn build_list(names: &[String]) -> NameList {
    let mut list = NameList::new();
    for (position, raw) in names.iter().enumerate() {
        if list.add_name(raw).is_none() {
            tracing::warn!(position, "skipping blank argument");
        }
    }
    list
}

fn render(args: &Args) -> Result<String> {
    let list = build_list(&args.names);
    if args.json {
        Ok(serde_json::to_string_pretty(&assignments(&list))?)
    } else {
        Ok(summary_text(&list))
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    println!("{}", render(&args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("letter_cli").chain(argv.iter().copied()))
            .expect("args")
    }

    #[test]
    fn prints_text_summary_in_argument_order() {
        let out = render(&parse(&["Alice", "Bob", "Carol"])).expect("render");
        assert_eq!(
            out,
            "Alice - A D G J M P S V Y\nBob - B E H K N Q T W Z\nCarol - C F I L O R U X"
        );
    }

    #[test]
    fn blank_arguments_are_skipped() {
        let out = render(&parse(&["  ", "Alice"])).expect("render");
        assert_eq!(
            out,
            "Alice - A B C D E F G H I J K L M N O P Q R S T U V W X Y Z"
        );
    }

    #[test]
    fn json_output_lists_letters_per_name() {
        let out = render(&parse(&["--json", "Alice", "Bob"])).expect("render");
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");

        assert_eq!(value[0]["name"], "Alice");
        assert_eq!(value[1]["letters"].as_array().map(Vec::len), Some(13));
    }

    #[test]
    fn requires_at_least_one_name() {
        assert!(Args::try_parse_from(["letter_cli"]).is_err());
    }
}
