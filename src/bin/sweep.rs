use clap::Parser;
use tracing_subscriber::EnvFilter;

use princess_castle::scenarios::{self, SWEEP_ROOMS};
use princess_castle::solution::solve;

#[derive(Parser)]
#[command(name = "sweep")]
#[command(about = "Nights needed for every built-in castle size, against the 2(N-2) formula")]
struct Cli {
    /// Print JSON lines instead of a table.
    #[arg(long)]
    json: bool,
}

fn closed_form(rooms: usize) -> Option<usize> {
    (rooms >= 3).then(|| 2 * (rooms - 2))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if !cli.json {
        println!("{:>5}  {:>6}  {:>6}  {:>8}", "rooms", "nights", "2(N-2)", "table");
    }

    for rooms in SWEEP_ROOMS {
        let scn = match scenarios::sized(rooms) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Invalid castle size {rooms}: {e}");
                std::process::exit(2);
            }
        };
        let solved = match solve(&scn) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Search failed for {rooms} room(s): {e}");
                std::process::exit(1);
            }
        };

        let nights = solved.plan.nights();
        let formula = closed_form(rooms);

        if cli.json {
            let line = serde_json::json!({
                "rooms": rooms,
                "nights": nights,
                "closed_form": formula,
                "table": solved.stats.discovered,
            });
            println!("{line}");
        } else {
            let formula_col = formula.map_or_else(|| "-".to_string(), |f| f.to_string());
            let flag = if formula == Some(nights) { "" } else { "  *" };
            println!(
                "{rooms:>5}  {nights:>6}  {formula_col:>6}  {:>8}{flag}",
                solved.stats.discovered
            );
        }
    }
}
