use std::time::Instant;

use chessboard::{PieceCensus, PieceKind, Solver};
use tracing::Level;

fn usage() -> String {
    let kinds: Vec<String> = PieceKind::ALL
        .iter()
        .map(|k| format!("  --{} <N>    Number of {}s to add to the board.", k, k))
        .collect();
    format!(
        "Usage: solve -l <length> -h <height> [--<kind> <N>]... [-s] [-v]\n\n\
         Options:\n      --help        Print this message.\n  -l, --length <N>  Length of the board.\n  -h, --height <N>  Height of the board.\n\
         {}\n  -s, --silent      Do not display result boards, only the final count.\n  \
         -v, --verbose     Print debug statements.",
        kinds.join("\n")
    )
}

enum Command {
    Help,
    Run(Args),
}

struct Args {
    length: usize,
    height: usize,
    pieces: Vec<(String, i64)>,
    silent: bool,
    verbose: bool,
}

fn parse_args(raw: &[String]) -> Result<Command, String> {
    let mut length = None;
    let mut height = None;
    let mut pieces = Vec::new();
    let mut silent = false;
    let mut verbose = false;

    let mut it = raw.iter();
    while let Some(flag) = it.next() {
        let mut value = |name: &str| {
            it.next()
                .ok_or_else(|| format!("missing value for {name}"))
                .cloned()
        };
        match flag.as_str() {
            "-l" | "--length" => {
                let v = value(flag.as_str())?;
                length = Some(v.parse().map_err(|_| format!("invalid length {v:?}"))?);
            }
            "-h" | "--height" => {
                let v = value(flag.as_str())?;
                height = Some(v.parse().map_err(|_| format!("invalid height {v:?}"))?);
            }
            "--help" => return Ok(Command::Help),
            "-s" | "--silent" => silent = true,
            "-v" | "--verbose" => verbose = true,
            other => match other.strip_prefix("--") {
                Some(label) => {
                    let v = value(flag.as_str())?;
                    let n = v.parse().map_err(|_| format!("invalid count {v:?} for {flag}"))?;
                    pieces.push((label.to_string(), n));
                }
                None => return Err(format!("unexpected argument {other:?}")),
            },
        }
    }

    Ok(Command::Run(Args {
        length: length.ok_or("missing --length")?,
        height: height.ok_or("missing --height")?,
        pieces,
        silent,
        verbose,
    }))
}

fn main() {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(Command::Run(a)) => a,
        Ok(Command::Help) => {
            println!("{}", usage());
            return;
        }
        Err(e) => {
            eprintln!("{e}\n\n{}", usage());
            std::process::exit(2);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let census = match PieceCensus::from_labels(args.pieces) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}\n\n{}", usage());
            std::process::exit(2);
        }
    };

    eprintln!("Building up a chessboard...");
    let mut solver = match Solver::new(args.length, args.height, census) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}\n\n{}", usage());
            std::process::exit(2);
        }
    };

    eprintln!("Searching positions...");
    let start = Instant::now();
    for board in solver.solve() {
        if !args.silent {
            println!("{board}");
        }
    }

    println!(
        "{} results found in {:.2} seconds.",
        solver.result_counter(),
        start.elapsed().as_secs_f64()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        let raw: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        parse_args(&raw)
    }

    #[test]
    fn help_flag_wins_over_everything() {
        assert!(matches!(parse(&["--help"]), Ok(Command::Help)));
        assert!(matches!(parse(&["-l", "3", "--help"]), Ok(Command::Help)));
        assert!(usage().contains("--help"));
    }

    #[test]
    fn short_h_is_height() {
        let Ok(Command::Run(args)) = parse(&["-l", "4", "-h", "2", "--rook", "2", "-s"]) else {
            panic!("expected a run");
        };
        assert_eq!((args.length, args.height), (4, 2));
        assert_eq!(args.pieces, vec![("rook".to_string(), 2)]);
        assert!(args.silent && !args.verbose);
    }

    #[test]
    fn piece_flags_need_a_count() {
        assert_eq!(
            parse(&["-l", "3", "-h", "3", "--king"]).err(),
            Some("missing value for --king".to_string())
        );
        assert!(parse(&["-l", "3", "--king", "1"]).is_err());
    }
}
