//! Simplify a term using an external completion prover or a saved
//! substitution log.

use std::time::Duration;
use tweezer::{
    extract, flatten, parser, payload, read_required, resolve, run_prover, unflattened, Report,
    Resolution, RootOutcome, SimplifyConfig, TweezerError,
};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} <rule_file> (-T <term> | -F <term_file>) [options]", program);
    eprintln!("       {} -s <subst_file> [options]", program);
    eprintln!("\nOptions:");
    eprintln!("  -T, --term <str>         The term string to simplify");
    eprintln!("  -F, --term-file <path>   A file containing the term string");
    eprintln!("  -t, --timeout <secs>     Timeout handed to the prover (default: 1)");
    eprintln!("  -s, --subst-file <path>  Resolve a saved substitution log; rule/term args are ignored");
    eprintln!("      --no-flatten         Do not flatten the goal term");
    eprintln!("      --prover <cmd>       Prover command (default: ./twee.sh)");
    eprintln!("      --json               Emit the full report as JSON");
    std::process::exit(1);
}

struct Args {
    rule_file: Option<String>,
    term: Option<String>,
    term_file: Option<String>,
    subst_file: Option<String>,
    json: bool,
    config: SimplifyConfig,
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().collect();
    let mut args = Args {
        rule_file: None,
        term: None,
        term_file: None,
        subst_file: None,
        json: false,
        config: SimplifyConfig::default(),
    };

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "-T" | "--term" => {
                i += 1;
                args.term = Some(argv.get(i).cloned().unwrap_or_else(|| usage(&argv[0])));
            }
            "-F" | "--term-file" => {
                i += 1;
                args.term_file = Some(argv.get(i).cloned().unwrap_or_else(|| usage(&argv[0])));
            }
            "-s" | "--subst-file" => {
                i += 1;
                args.subst_file = Some(argv.get(i).cloned().unwrap_or_else(|| usage(&argv[0])));
            }
            "-t" | "--timeout" => {
                i += 1;
                let secs = argv
                    .get(i)
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or_else(|| usage(&argv[0]));
                args.config.timeout = Duration::from_secs(secs);
            }
            "--prover" => {
                i += 1;
                args.config.prover = argv.get(i).cloned().unwrap_or_else(|| usage(&argv[0]));
            }
            "--no-flatten" => args.config.flatten = false,
            "--json" => args.json = true,
            "-h" | "--help" => usage(&argv[0]),
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {}", other);
                usage(&argv[0]);
            }
            _ => {
                if args.rule_file.is_some() {
                    eprintln!("Unexpected extra argument: {}", argv[i]);
                    usage(&argv[0]);
                }
                args.rule_file = Some(argv[i].clone());
            }
        }
        i += 1;
    }

    if args.subst_file.is_none() {
        if args.rule_file.is_none() {
            eprintln!("Error: argument 'rule_file' is required (or use -s)");
            usage(&argv[0]);
        }
        if args.term.is_none() && args.term_file.is_none() {
            eprintln!("Error: one of -T/--term or -F/--term-file is required (or use -s)");
            usage(&argv[0]);
        }
        if args.term.is_some() && args.term_file.is_some() {
            eprintln!("Error: -T/--term and -F/--term-file are mutually exclusive");
            usage(&argv[0]);
        }
    }

    args
}

fn main() {
    let args = parse_args();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> tweezer::Result<()> {
    if let Some(subst_path) = &args.subst_file {
        if !args.json {
            println!("Loading substitutions from {}...", subst_path);
        }
        let log = read_required(subst_path)?;
        let pairs = extract::from_log(&log);
        let resolution = resolve(&pairs);
        let report = Report {
            equations: Vec::new(),
            pairs,
            resolution,
        };
        print_report(&report, args.json);
        return Ok(());
    }

    let rules = read_required(args.rule_file.as_deref().unwrap_or_default())?;
    let term_text = match (&args.term, &args.term_file) {
        (Some(term), _) => term.clone(),
        (None, Some(path)) => read_required(path)?,
        (None, None) => unreachable!("validated in parse_args"),
    };
    if term_text.trim().is_empty() {
        return Err(TweezerError::MissingInput(
            "no term provided or term file was empty".to_string(),
        ));
    }

    let term = parser::parse(&term_text)?;
    let equations = if args.config.flatten {
        flatten(&term)
    } else {
        unflattened(&term)
    };
    let problem = payload(&rules, &equations);

    if !args.json {
        println!("Generated goals:");
        for equation in &equations {
            println!("  {}", equation.comment_line());
            println!("  {}", equation.axiom_line());
        }
        println!("  {}", tweezer::CONJECTURE_LINE);
        println!(
            "Running {} with timeout={}s...",
            args.config.prover,
            args.config.timeout.as_secs()
        );
    }

    let output = run_prover(&args.config, &problem)?;
    let pairs = extract::from_prover_output(&output.stdout, &output.stderr)?;
    let resolution = resolve(&pairs);
    let report = Report {
        equations,
        pairs,
        resolution,
    };
    print_report(&report, args.json);
    Ok(())
}

/// Print the report in the log shape the `-s` path accepts back as input,
/// or as JSON.
fn print_report(report: &Report, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error: failed to serialize report: {}", e),
        }
        return;
    }

    println!("\nSubstitutions found:");
    for (lhs, rhs) in &report.pairs {
        println!("  {} -> {}", lhs, rhs);
    }
    for (label, term) in &report.resolution.bindings {
        println!("Resolving {} -> {}", label, term);
    }

    println!("\nFinal substitutions:");
    for (label, term) in &report.resolution.bindings {
        println!("  {} -> {}", label, term);
    }

    println!("\nResolved term for goal0:");
    print_root(&report.resolution);
}

fn print_root(resolution: &Resolution) {
    match &resolution.root {
        RootOutcome::Resolved(term) => println!("{}", term),
        RootOutcome::BestEffort(term) => {
            println!("Could not resolve goal0 definitively.");
            println!("Best effort result (non-definitive):");
            println!("{}", term);
        }
        RootOutcome::Absent => {
            println!("Could not resolve goal0.");
            println!("Note: goal0 was absent from the evidence.");
        }
        RootOutcome::Unresolved => {
            println!("Could not resolve goal0.");
            println!("Note: goal0 appeared in the evidence but no binding survived resolution.");
        }
    }
}
