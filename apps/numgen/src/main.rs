use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use generator::ReplacementRule;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod output;

use config::{load_settings, Overrides};

/// Print the numbers from 1 to UPPER_BOUND, replacing multiples of
/// configured divisors with their labels.
#[derive(Parser, Debug)]
#[command(name = "numgen", version)]
struct Cli {
    /// Last position to print; negative values print nothing.
    #[arg(allow_negative_numbers = true)]
    upper_bound: Option<i64>,
    /// Replacement rule of the form DIVISOR=LABEL, repeatable.
    #[arg(long = "replace", value_name = "DIVISOR=LABEL")]
    rules: Vec<ReplacementRule>,
    /// Replacement mapping as a JSON object, e.g. '{"3":"Fizz","5":"Buzz"}'.
    #[arg(long, value_name = "JSON")]
    replacements_json: Option<String>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(Overrides {
        upper_bound: cli.upper_bound,
        replacements_json: cli.replacements_json,
        rules: cli.rules,
        verbose: cli.verbose,
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .with_writer(io::stderr)
        .init();

    info!(
        upper_bound = settings.upper_bound,
        divisors = settings.replacements.len(),
        "generating"
    );

    let labels = generator::generate(settings.upper_bound, Some(&settings.replacements));
    let written = output::write_labels(io::stdout().lock(), labels)
        .context("failed to write to stdout")?;

    info!(written, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rules_and_negative_bound() {
        let cli = Cli::try_parse_from(["numgen", "--replace", "3=Fizz", "--replace", "5=Buzz", "-7"])
            .expect("args");
        assert_eq!(cli.upper_bound, Some(-7));
        assert_eq!(cli.rules.len(), 2);
        assert_eq!(cli.rules[1].label(), "Buzz");
    }

    #[test]
    fn rejects_zero_divisor_rule() {
        let err = Cli::try_parse_from(["numgen", "--replace", "0=Zero"]).expect_err("zero");
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn bound_is_optional() {
        let cli = Cli::try_parse_from(["numgen"]).expect("args");
        assert_eq!(cli.upper_bound, None);
        assert!(cli.rules.is_empty());
    }

    #[test]
    fn parses_json_mapping_and_verbose_flag() {
        let cli = Cli::try_parse_from([
            "numgen",
            "--replacements-json",
            r#"{"3":"Fizz"}"#,
            "--verbose",
            "15",
        ])
        .expect("args");
        assert_eq!(cli.replacements_json.as_deref(), Some(r#"{"3":"Fizz"}"#));
        assert!(cli.verbose);
        assert_eq!(cli.upper_bound, Some(15));

        let short = Cli::try_parse_from(["numgen", "-v"]).expect("short verbose");
        assert!(short.verbose);
    }

    #[test]
    fn parsed_flags_flow_into_settings() {
        let cli = Cli::try_parse_from([
            "numgen",
            "--replacements-json",
            r#"{"3":"Fizz","5":"Buzz"}"#,
            "--replace",
            "5=Ben",
            "-v",
            "20",
        ])
        .expect("args");
        let settings = config::load_settings_from(
            |_: &str| None,
            Overrides {
                upper_bound: cli.upper_bound,
                replacements_json: cli.replacements_json,
                rules: cli.rules,
                verbose: cli.verbose,
            },
        )
        .expect("settings");

        assert_eq!(settings.upper_bound, 20);
        assert_eq!(settings.replacements.get(3), Some("Fizz"));
        assert_eq!(settings.replacements.get(5), Some("Ben"));
        assert_eq!(settings.log_filter, "debug");
    }
}
