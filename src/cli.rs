use std::path::PathBuf;

use crate::{GateError, config::DEFAULT_CONFIG_PATH, report::OutputFormat};

pub const DEFAULT_AGGREGATION: &str = "mean";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliAction {
    Run,
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub action: CliAction,
    pub config: PathBuf,
    pub aggregation: String,
    pub format: OutputFormat,
    /// `None` reads benchmark output from stdin.
    pub input: Option<PathBuf>,
}

impl CommandLineConfig {
    /// Parses `args` including the program name. Flags take one or two
    /// leading dashes and `--flag=value` is accepted.
    pub fn from_args(args: &[&str]) -> Result<Self, GateError> {
        let mut config = PathBuf::from(DEFAULT_CONFIG_PATH);
        let mut aggregation = String::from(DEFAULT_AGGREGATION);
        let mut format = OutputFormat::Text;
        let mut positional: Vec<&str> = Vec::new();
        let mut iter = args.iter().skip(1);
        while let Some(&arg) = iter.next() {
            if arg == "-" || !arg.starts_with('-') {
                positional.push(arg);
                continue;
            }
            let flag = arg
                .strip_prefix("--")
                .or_else(|| arg.strip_prefix('-'))
                .unwrap_or(arg);
            let (flag, inline) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (flag, None),
            };
            let mut value = |name: &str| -> Result<String, GateError> {
                match inline {
                    Some(v) => Ok(v.to_string()),
                    None => iter
                        .next()
                        .map(|v| v.to_string())
                        .ok_or_else(|| {
                            GateError::invalid_args(format!("--{name} requires a value"))
                        }),
                }
            };
            match flag {
                "h" | "help" => return Ok(Self::with_action(CliAction::Help)),
                "version" => return Ok(Self::with_action(CliAction::Version)),
                "config" => config = PathBuf::from(value("config")?),
                "agg" => aggregation = value("agg")?,
                "format" => {
                    let raw = value("format")?;
                    format = OutputFormat::parse(&raw)
                        .ok_or_else(|| GateError::invalid_args(format!("unknown format {raw}")))?;
                }
                _ => return Err(GateError::invalid_args(format!("unknown flag {arg}"))),
            }
        }
        if positional.len() > 1 {
            return Err(GateError::invalid_args("wrong number of arguments"));
        }
        let input = positional
            .first()
            .filter(|p| **p != "-")
            .map(|p| PathBuf::from(*p));
        Ok(Self {
            action: CliAction::Run,
            config,
            aggregation,
            format,
            input,
        })
    }

    fn with_action(action: CliAction) -> Self {
        Self {
            action,
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            aggregation: String::from(DEFAULT_AGGREGATION),
            format: OutputFormat::Text,
            input: None,
        }
    }

    pub fn help() -> &'static str {
        "usage: benchgate [options] [FILE]\n\
         Checks that benchmark results are below thresholds.\n\
         \n\
         Options:\n  \
         --config PATH    threshold config file (default .bunder.yml)\n  \
         --agg NAME       aggregation: mean, avg, min, max, pNN (default mean)\n  \
         --format FORMAT  report format: text or json (default text)\n  \
         --version        print version and exit\n  \
         -h, --help       show this help\n\
         \n\
         FILE defaults to standard input.\n"
    }
}
