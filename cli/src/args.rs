use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: planner [OPTIONS]

Options:
  --config <path>   JSON settings file (default: planner.json)
  --data <path>     Course file to load with menu option 1
  --buckets <n>     Number of hash buckets
  -h, --help        Print this help

Set RUST_LOG=info or RUST_LOG=debug for load and bucket placement logs.";

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub config_path: PathBuf,
    pub data_file: Option<PathBuf>,
    pub bucket_count: Option<usize>,
    pub help: bool,
}

impl Args {
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut parsed = Args {
            config_path: PathBuf::from("planner.json"),
            data_file: None,
            bucket_count: None,
            help: false,
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--config" => {
                    let value = iter.next().ok_or("--config requires a path")?;
                    parsed.config_path = PathBuf::from(value);
                }
                "--data" => {
                    let value = iter.next().ok_or("--data requires a path")?;
                    parsed.data_file = Some(PathBuf::from(value));
                }
                "--buckets" => {
                    let value = iter.next().ok_or("--buckets requires a number")?;
                    parsed.bucket_count =
                        Some(value.parse().map_err(|_| format!("invalid bucket count: {}", value))?);
                }
                "--help" | "-h" => parsed.help = true,
                other => return Err(format!("unknown argument: {}", other)),
            }
        }

        Ok(parsed)
    }
}
