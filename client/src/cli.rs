use std::path::PathBuf;

use anyhow::{Context, bail};

pub const USAGE: &str = "\
USAGE: gol [SUBCOMMAND] ...
SUBCOMMANDS:
    dim WIDTH HEIGHT [CONFIG]: empty board of the given size.
    file PATH [CONFIG]: take a grayscale image file as the starting state for the board.
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    Dimensions { width: usize, height: usize },
    Image(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub seed: Seed,
    pub config_path: Option<PathBuf>,
}

/// Parses everything after the program name.
pub fn parse_args<I>(mut args: I) -> anyhow::Result<Args>
where
    I: Iterator<Item = String>,
{
    let seed = match args.next().context("No subcommand")?.as_str() {
        "dim" => {
            let width = parse_dimension(&args.next().context("missing width")?)?;
            let height = parse_dimension(&args.next().context("missing height")?)?;

            Seed::Dimensions { width, height }
        }

        "file" => Seed::Image(args.next().context("missing image path")?.into()),

        other => bail!("Unknown subcommand {other:?}"),
    };

    let config_path = args.next().map(PathBuf::from);

    if let Some(extra) = args.next() {
        bail!("Unexpected argument {extra:?}");
    }

    Ok(Args { seed, config_path })
}

/// Decimal, or hexadecimal with a `0x` prefix.
fn parse_dimension(arg: &str) -> anyhow::Result<usize> {
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => arg.parse::<usize>(),
    };

    parsed.with_context(|| format!("Invalid dimension {arg:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Args> {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn dim_subcommand() {
        assert_eq!(
            parse(&["dim", "20", "0x10"]).unwrap(),
            Args {
                seed: Seed::Dimensions {
                    width: 20,
                    height: 16
                },
                config_path: None,
            }
        );
    }

    #[test]
    fn file_subcommand_with_config() {
        assert_eq!(
            parse(&["file", "board.png", "gol.json"]).unwrap(),
            Args {
                seed: Seed::Image("board.png".into()),
                config_path: Some("gol.json".into()),
            }
        );
    }

    #[test]
    fn bad_invocations() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["dim", "20"]).is_err());
        assert!(parse(&["dim", "twenty", "20"]).is_err());
        assert!(parse(&["file"]).is_err());
        assert!(parse(&["file", "a.png", "b.json", "c"]).is_err());
        assert!(parse(&["resize", "1", "2"]).is_err());
    }
}
