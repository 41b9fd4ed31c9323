// A walk through all five SOLID principles, one section each.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use solid_school::duty::{lead_warm_up, Yoga};
use solid_school::principles::dip::{BackupHost, DrumStudent, SchoolEvent};
use solid_school::principles::lsp::{chorus, sky_show, Ostrich, Sparrow};
use solid_school::principles::srp::run_lesson;
use solid_school::{logging, run_duties, Announcer, Console, SchoolConfig, Teacher};

#[derive(Debug, Parser)]
#[command(name = "solid-tour", version, about = "Tour of the SOLID principles")]
struct Cli {
    /// TOML file with `subject` and `duties`
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log what the school is doing to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn section(title: &str) {
    println!("\n{}", title.bold().cyan());
}

fn run(cli: Cli) -> solid_school::Result<()> {
    let config = match &cli.config {
        Some(path) => SchoolConfig::load(path)?,
        None => SchoolConfig::default(),
    };
    let mut console = Console;

    section("S: Single responsibility");
    run_lesson(&mut console, &config.subject);

    section("O: Open/closed");
    let mut teacher = Teacher::new();
    run_duties(&mut teacher, &config.duties);

    section("L: Liskov substitution");
    chorus(&mut console, &[&Sparrow, &Ostrich]);
    sky_show(&mut console, &[&Sparrow]);

    section("I: Interface segregation");
    console.announce("Warm-up needs a physical exercise, nothing wider:");
    lead_warm_up(&mut console, &Yoga);

    section("D: Dependency inversion");
    let mut event = SchoolEvent::default();
    event.run(&mut console);
    console.announce("The choir is sick and the principal is away...");
    event.replace_performer(Box::new(DrumStudent));
    event.replace_host(Box::new(BackupHost));
    event.run(&mut console);

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    println!("{}", "=== SOLID School Tour ===".bold());
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
