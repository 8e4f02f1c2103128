use std::{
    env,
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
    process,
};

use benchgate::{
    Aggregation, BenchGate, GateError, GateReport,
    cli::{CliAction, CommandLineConfig},
    load_config,
    report::render,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let args: Vec<String> = env::args().collect();
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{}", CommandLineConfig::help());
            process::exit(1);
        }
    };

    match config.action {
        CliAction::Help => {
            print!("{}", CommandLineConfig::help());
            return;
        }
        CliAction::Version => {
            println!("benchgate {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        CliAction::Run => {}
    }

    let report = match run(&config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let output = match render(config.format, &config.aggregation, &report) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: can't render report - {err}");
            process::exit(1);
        }
    };
    let mut stdout = io::stdout().lock();
    if stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()).is_err() {
        process::exit(1);
    }
    if !report.passed {
        process::exit(1);
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Aggregation(GateError),
    #[error(transparent)]
    ConfigFile(GateError),
    #[error("{path:?}: can't load config - {source}")]
    Config { path: PathBuf, source: GateError },
    #[error(transparent)]
    Input(GateError),
    #[error("{name:?}: can't parse benchmark output - {source}")]
    Scan { name: String, source: GateError },
}

fn run(config: &CommandLineConfig) -> Result<GateReport, RunError> {
    let aggregation = Aggregation::resolve(&config.aggregation).map_err(RunError::Aggregation)?;
    let thresholds = load_config(&config.config).map_err(|source| match source {
        GateError::ConfigRead { .. } => RunError::ConfigFile(source),
        source => RunError::Config {
            path: config.config.clone(),
            source,
        },
    })?;
    let gate = BenchGate::new(aggregation, thresholds);

    let (name, input): (String, Box<dyn Read>) = match &config.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| {
                RunError::Input(GateError::InputOpen {
                    path: path.clone(),
                    source,
                })
            })?;
            (path.display().to_string(), Box::new(file))
        }
        None => ("<stdin>".to_string(), Box::new(io::stdin().lock())),
    };
    gate.check(input)
        .map_err(|source| RunError::Scan { name, source })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
