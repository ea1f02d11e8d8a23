use chessboard::scenarios::{self, ScenarioSpec};
use rayon::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let specs: Vec<ScenarioSpec> = match args.len() {
        1 => scenarios::builtin(),
        2 => {
            let arg = &args[1];
            if let Some(spec) = scenarios::by_name(arg) {
                vec![spec]
            } else {
                let text = std::fs::read_to_string(arg).unwrap_or_else(|e| {
                    eprintln!(
                        "{arg} is neither a scenario name nor a readable file: {e}\n\n\
                         Available scenarios:\n  - {}",
                        scenarios::available_names().join("\n  - ")
                    );
                    std::process::exit(2);
                });
                scenarios::from_json(&text).unwrap_or_else(|e| {
                    eprintln!("Failed to parse scenarios from {arg}: {e}");
                    std::process::exit(1);
                })
            }
        }
        _ => {
            eprintln!("Usage: benchmark [<scenario name> | <scenarios.json>]");
            std::process::exit(2);
        }
    };

    // Each worker owns its solver; reports come back in input order.
    let reports: Vec<_> = specs.par_iter().map(|spec| spec.run()).collect();

    let mut failed = false;
    for (spec, report) in specs.iter().zip(reports) {
        match report {
            Ok(r) => match serde_json::to_string(&r) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("Failed to encode report for {}: {e}", spec.name);
                    failed = true;
                }
            },
            Err(e) => {
                eprintln!("Scenario {} is invalid: {e}", spec.name);
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}
