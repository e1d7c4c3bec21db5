use clap::Parser;
use tracing_subscriber::EnvFilter;

use princess_castle::render::render_report;
use princess_castle::scenarios;
use princess_castle::solution::{solve, verify_catches_every_walk, PlanReport};

#[derive(Parser)]
#[command(name = "princess")]
#[command(about = "Print a guaranteed inspection plan for a built-in castle")]
struct Cli {
    /// Built-in scenario to solve.
    #[arg(default_value = "reference")]
    scenario: String,

    /// Print the plan as JSON instead of drawing boards.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(scn) = scenarios::by_name(&cli.scenario) else {
        eprintln!(
            "Unknown scenario: {}\n\nAvailable scenarios:\n  - {}",
            cli.scenario,
            scenarios::available_names().join("\n  - ")
        );
        std::process::exit(2);
    };

    let solved = match solve(&scn) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Search failed for {}: {e}", scn.name);
            std::process::exit(1);
        }
    };

    if let Err(e) = verify_catches_every_walk(solved.plan.castle, &solved.plan.moves) {
        eprintln!("Plan for {} failed verification: {e}", scn.name);
        std::process::exit(1);
    }

    if cli.json {
        let report = PlanReport::new(&scn, &solved);
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize plan: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", render_report(&solved.plan));
    }
}
