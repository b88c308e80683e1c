use clap::Parser;
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;

use just_expand::config;
use just_expand::{Expander, ExpanderOptions, HomeLookup, SystemHomeLookup};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "just-expand")]
#[command(about = "Brace and tilde expansion for shell words")]
#[command(version)]
struct Cli {
    /// Treat words as assignment values (tilde also expands after `:` or `=`)
    #[arg(short = 'a', long = "assignment")]
    assignment: bool,

    /// Output results as JSON
    #[arg(long = "json")]
    json: bool,

    /// TOML file with limits and a home directory table
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Home directory used for a bare `~`
    #[arg(long = "home")]
    home: Option<String>,

    /// Words to expand (read one per line from stdin if omitted)
    #[arg()]
    words: Vec<String>,
}

/// `--home` overrides the current-user entry; named users still resolve
/// through the configured table or the system.
fn build_expander(cli: &Cli) -> Result<Expander, config::ConfigError> {
    let options = match &cli.config {
        Some(path) => config::load(path)?,
        None => ExpanderOptions::default(),
    };

    let home: Arc<dyn HomeLookup> = match (options.home, cli.home.clone()) {
        (Some(mut table), Some(current)) => {
            table.current = Some(current);
            Arc::new(table)
        }
        (Some(table), None) => Arc::new(table),
        (None, Some(current)) => Arc::new(move |user: Option<&str>| match user {
            None => Some(current.clone()),
            Some(_) => SystemHomeLookup.lookup_home(user),
        }),
        (None, None) => Arc::new(SystemHomeLookup),
    };

    Ok(Expander::with_home(options.limits, home))
}

/// Output of one invocation: stdout lines, stderr lines and the exit status.
#[derive(Debug, Default)]
struct Report {
    stdout: Vec<String>,
    stderr: Vec<String>,
    exit_code: i32,
}

impl Report {
    fn failure(message: String) -> Self {
        Self {
            stderr: vec![message],
            exit_code: 1,
            ..Default::default()
        }
    }
}

/// Read one word per line. Blank lines are skipped; pass `''` as an
/// argument to expand an empty word.
fn read_words<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            words.push(line);
        }
    }
    Ok(words)
}

fn expand_words(expander: &Expander, words: &[String], assignment: bool, json: bool) -> Report {
    let mut report = Report::default();
    let mut json_results = Vec::new();

    for word in words {
        match expander.expand_to_strings(word, assignment) {
            Ok(expanded) => {
                if json {
                    json_results.push(serde_json::json!({
                        "input": word,
                        "words": expanded,
                    }));
                } else {
                    report.stdout.extend(expanded);
                }
            }
            Err(e) => {
                report.stderr.push(format!("just-expand: {}: {}", word, e));
                if json {
                    json_results.push(serde_json::json!({
                        "input": word,
                        "error": e.to_string(),
                    }));
                }
                report.exit_code = 1;
            }
        }
    }

    if json {
        report
            .stdout
            .push(serde_json::Value::Array(json_results).to_string());
    }
    report
}

fn run(cli: &Cli, words: &[String]) -> Report {
    let expander = match build_expander(cli) {
        Ok(expander) => expander,
        Err(e) => return Report::failure(format!("just-expand: {}", e)),
    };

    if words.is_empty() {
        return Report::failure(
            "Error: No words provided. Pass words as arguments or pipe them via stdin."
                .to_string(),
        );
    }

    expand_words(&expander, words, cli.assignment, cli.json)
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("just_expand=warn")))
        .init();

    let cli = Cli::parse();

    let words = if cli.words.is_empty() && !std::io::stdin().is_terminal() {
        match read_words(std::io::stdin().lock()) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("just-expand: cannot read stdin: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        cli.words.clone()
    };

    let report = run(&cli, &words);
    for line in &report.stdout {
        println!("{}", line);
    }
    for line in &report.stderr {
        eprintln!("{}", line);
    }

    std::process::exit(report.exit_code);
}
