use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use counter_core::{
    load_config, try_sum, ConfigOverrides, Control, CounterBinding, CounterConfig, Operand,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "counter-tools", about = "Command-line helpers for the counter widget")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sum the operands; anything that is not a number makes the result NaN.
    Sum {
        #[arg(allow_hyphen_values = true)]
        operands: Vec<String>,
    },
    /// Click an uncontrolled counter N times and print each rendered value.
    Simulate {
        #[arg(long, default_value_t = 1)]
        clicks: usize,
        #[command(flatten)]
        counter: CounterArgs,
    },
    /// Load and validate the counter configuration, then print it as JSON.
    CheckConfig {
        #[command(flatten)]
        counter: CounterArgs,
    },
}

#[derive(Args, Debug, Default)]
struct CounterArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, allow_negative_numbers = true)]
    initial_value: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    step: Option<f64>,
}

impl CounterArgs {
    fn resolve(&self) -> Result<CounterConfig> {
        let config =
            load_config(self.config.as_deref()).context("failed to load counter config")?;
        Ok(config.with_overrides(ConfigOverrides {
            initial_value: self.initial_value,
            max: self.max,
            step: self.step,
        }))
    }
}

#[derive(Debug, Serialize)]
struct ConfigReport {
    /// `max` serialises as `null` when unbounded.
    config: CounterConfig,
    valid: bool,
    problem: Option<String>,
}

fn sum_operands(raw: &[String]) -> (f64, Option<String>) {
    let operands: Vec<Operand> = raw.iter().map(|arg| Operand::parse(arg)).collect();
    match try_sum(&operands) {
        Ok(total) => (total, None),
        Err(err) => (f64::NAN, Some(err.to_string())),
    }
}

fn simulate(config: CounterConfig, clicks: usize) -> Vec<String> {
    let mut binding = CounterBinding::new(config);
    let mut control = Control::uncontrolled();
    let mut lines = Vec::with_capacity(clicks);

    for click in 1..=clicks {
        binding.activate(&mut control);
        let rendered = binding.render(&control);
        tracing::debug!(click, value = rendered.value, "simulated click");
        lines.push(format!("click {click}: {}", rendered.text));
    }
    lines
}

fn check_config(config: CounterConfig) -> ConfigReport {
    let problem = config.validate().err().map(|err| err.to_string());
    ConfigReport {
        config,
        valid: problem.is_none(),
        problem,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Sum { operands } => {
            let (total, problem) = sum_operands(&operands);
            if let Some(problem) = problem {
                eprintln!("not summable: {problem}");
            }
            println!("{total}");
        }
        Command::Simulate { clicks, counter } => {
            let config = counter.resolve()?;
            if let Err(err) = config.validate() {
                tracing::warn!(%err, "counter config looks inconsistent");
            }
            let start = CounterBinding::new(config).render(&Control::uncontrolled());
            println!("start: {}", start.text);
            for line in simulate(config, clicks) {
                println!("{line}");
            }
        }
        Command::CheckConfig { counter } => {
            let report = check_config(counter.resolve()?);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn sums_numeric_arguments() {
        assert_eq!(sum_operands(&args(&["1", "2", "3", "4"])), (10.0, None));
        assert_eq!(sum_operands(&args(&["-1.5", "2"])), (0.5, None));
    }

    #[test]
    fn non_numeric_arguments_make_the_sum_nan() {
        let (total, problem) = sum_operands(&args(&["hello", "1"]));
        assert!(total.is_nan());
        assert_eq!(problem.as_deref(), Some("operand 0 is text, not a number"));

        let (total, problem) = sum_operands(&[]);
        assert!(total.is_nan());
        assert_eq!(problem.as_deref(), Some("no operands given"));
    }

    #[test]
    fn simulation_steps_and_stops_at_max() {
        let config = CounterConfig {
            initial_value: 0.0,
            max: 5.0,
            step: 2.0,
        };
        assert_eq!(
            simulate(config, 4),
            vec!["click 1: 2", "click 2: 4", "click 3: 5", "click 4: 5"]
        );
    }

    #[test]
    fn config_report_flags_inverted_bounds() {
        let report = check_config(CounterConfig {
            initial_value: 3.0,
            max: 1.0,
            step: 1.0,
        });
        assert!(!report.valid);
        assert_eq!(
            report.problem.as_deref(),
            Some("initial value 3 exceeds max 1")
        );

        let json = serde_json::to_value(check_config(CounterConfig::default())).expect("json");
        assert_eq!(json["valid"], serde_json::Value::Bool(true));
        assert!(json["config"]["max"].is_null());
    }

    #[test]
    fn cli_parses_negative_operands_and_flags() {
        let cli = Cli::try_parse_from(["counter-tools", "sum", "-3", "4"]).expect("parse");
        assert!(matches!(
            cli.command,
            Command::Sum { ref operands } if operands == &["-3", "4"]
        ));

        let cli = Cli::try_parse_from([
            "counter-tools",
            "simulate",
            "--clicks",
            "3",
            "--step",
            "-1",
        ])
        .expect("parse");
        match cli.command {
            Command::Simulate { clicks, counter } => {
                assert_eq!(clicks, 3);
                assert_eq!(counter.step, Some(-1.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
