//! `asi-probe`: show where the Fujin scanner inserts automatic semicolons.
//!
//! Enable tracing with `RUST_LOG=fujin_asi=trace`.

use std::path::PathBuf;

use fujin_asi::{probe_lines, probe_offsets, LineProbe, ProbeError};

const USAGE: &str = "Usage: asi-probe <file.fj> [--offset <n>]... [--accepted-only]";

/// Parsed command line.
#[derive(Debug, Default, PartialEq)]
struct ProbeOptions {
    path: PathBuf,
    /// Byte offsets to probe; every line end when empty.
    offsets: Vec<u32>,
    accepted_only: bool,
}

impl ProbeOptions {
    fn parse(args: &[String]) -> Result<Self, ProbeError> {
        let mut path = None;
        let mut options = ProbeOptions::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--offset" => {
                    let value = args.get(i + 1).ok_or_else(|| {
                        ProbeError::Usage(format!("--offset needs a value\n{USAGE}"))
                    })?;
                    let offset = value.parse().map_err(|_| {
                        ProbeError::Usage(format!("invalid offset `{value}`\n{USAGE}"))
                    })?;
                    options.offsets.push(offset);
                    i += 2;
                    continue;
                }
                "--accepted-only" => options.accepted_only = true,
                flag if flag.starts_with('-') => {
                    return Err(ProbeError::Usage(format!("unknown option `{flag}`\n{USAGE}")));
                }
                file if path.is_none() => path = Some(PathBuf::from(file)),
                extra => {
                    return Err(ProbeError::Usage(format!(
                        "unexpected argument `{extra}`\n{USAGE}"
                    )));
                }
            }
            i += 1;
        }
        options.path = path.ok_or_else(|| ProbeError::Usage(USAGE.to_string()))?;
        Ok(options)
    }
}

/// Initialize tracing only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(args: &[String]) -> Result<Vec<LineProbe>, ProbeError> {
    let options = ProbeOptions::parse(args)?;
    let source = std::fs::read_to_string(&options.path).map_err(|source| ProbeError::Read {
        path: options.path.clone(),
        source,
    })?;

    let probes = if options.offsets.is_empty() {
        probe_lines(&source)?
    } else {
        probe_offsets(&source, &options.offsets)?
    };
    Ok(probes
        .into_iter()
        .filter(|probe| !options.accepted_only || probe.inserted())
        .collect())
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(probes) => {
            for probe in probes {
                let verdict = if probe.inserted() { "insert" } else { "decline" };
                println!("{}:{} {} {verdict}", probe.line, probe.column, probe.offset);
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_file_and_offsets() {
        let parsed = ProbeOptions::parse(&args(&["main.fj", "--offset", "3", "--offset", "10"]));
        assert_eq!(
            parsed.ok(),
            Some(ProbeOptions {
                path: PathBuf::from("main.fj"),
                offsets: vec![3, 10],
                accepted_only: false,
            })
        );
    }

    #[test]
    fn parses_accepted_only() {
        let parsed = ProbeOptions::parse(&args(&["--accepted-only", "main.fj"]));
        assert!(matches!(parsed, Ok(ProbeOptions { accepted_only: true, .. })));
    }

    #[test]
    fn missing_file_is_usage_error() {
        assert!(matches!(
            ProbeOptions::parse(&args(&[])),
            Err(ProbeError::Usage(_))
        ));
    }

    #[test]
    fn bad_offset_is_usage_error() {
        for bad in [&["a.fj", "--offset"][..], &["a.fj", "--offset", "-1"][..]] {
            assert!(matches!(
                ProbeOptions::parse(&args(bad)),
                Err(ProbeError::Usage(_))
            ));
        }
    }

    #[test]
    fn unknown_flag_and_extra_argument_are_usage_errors() {
        assert!(matches!(
            ProbeOptions::parse(&args(&["a.fj", "--verbose"])),
            Err(ProbeError::Usage(_))
        ));
        assert!(matches!(
            ProbeOptions::parse(&args(&["a.fj", "b.fj"])),
            Err(ProbeError::Usage(_))
        ));
    }

    #[test]
    fn unreadable_file_is_read_error() {
        let result = run(&args(&["/nonexistent/dir/missing.fj"]));
        assert!(matches!(result, Err(ProbeError::Read { .. })));
    }
}
