use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use solid_school::{logging, run_duties, DutyKind, SchoolConfig, Teacher};

/// Hands a teacher their duties and lets them get on with it.
#[derive(Debug, Parser)]
#[command(name = "solid-school", version, about)]
struct Cli {
    /// TOML file with `subject` and `duties`
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run only these duties, in this order (overrides the config)
    #[arg(long = "duty", value_name = "NAME")]
    duties: Vec<DutyKind>,

    /// Log what the teacher is doing to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> solid_school::Result<()> {
    let mut config = match &cli.config {
        Some(path) => SchoolConfig::read(path)?,
        None => SchoolConfig::default(),
    };
    config.override_duties(cli.duties);
    config.validate()?;
    info!(duties = config.duties.len(), "school day starts");

    let mut teacher = Teacher::new();
    run_duties(&mut teacher, &config.duties);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
