use clap::Args;
use serde::Serialize;
use tracing::debug;

use worthit_core::scenario::validate_precision;
use worthit_core::{Config, FrequencyUnit, Report, Scenario, TimeUnit, UnitValue, WorkCalendar};

/// Any question left out falls back to `defaults.*` in the config file.
#[derive(Args)]
pub struct EvaluateArgs {
    /// How long the task takes (e.g. "3 minutes")
    #[arg(long, short = 'd', allow_hyphen_values = true)]
    pub task_duration: Option<UnitValue<TimeUnit>>,
    /// How often it recurs (e.g. "5 daily", "2 a week")
    #[arg(long, short = 'f', allow_hyphen_values = true)]
    pub frequency: Option<UnitValue<FrequencyUnit>>,
    /// How long it will keep recurring (e.g. "1 year")
    #[arg(long, short = 'l', allow_hyphen_values = true)]
    pub lifetime: Option<UnitValue<TimeUnit>>,
    /// One-time cost of the optimization (e.g. "1 day")
    #[arg(long, short = 's', allow_hyphen_values = true)]
    pub time_spent: Option<UnitValue<TimeUnit>>,
    /// Time the optimization shaves off each occurrence (e.g. "30 seconds")
    #[arg(long, short = 'x', allow_hyphen_values = true)]
    pub time_shaved: Option<UnitValue<TimeUnit>>,
    /// Relative precision of displayed durations (0 = exact)
    #[arg(long, allow_hyphen_values = true)]
    pub precision: Option<f64>,
    /// Print JSON output
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct EvaluateOutput<'a> {
    scenario: &'a Scenario,
    report: &'a Report,
}

impl EvaluateArgs {
    fn scenario(&self, defaults: Scenario) -> Scenario {
        Scenario {
            task_duration: self.task_duration.unwrap_or(defaults.task_duration),
            task_frequency: self.frequency.unwrap_or(defaults.task_frequency),
            task_lifetime: self.lifetime.unwrap_or(defaults.task_lifetime),
            time_spent: self.time_spent.unwrap_or(defaults.time_spent),
            time_shaved: self.time_shaved.unwrap_or(defaults.time_shaved),
        }
    }
}

fn describe(scenario: &Scenario) -> String {
    format!(
        "A task that takes {}, done {} times {} for {}.\nSpending {} to shave {} off each time.",
        scenario.task_duration,
        scenario.task_frequency.value,
        scenario.task_frequency.unit.label(),
        scenario.task_lifetime,
        scenario.time_spent,
        scenario.time_shaved,
    )
}

pub fn run(args: EvaluateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let scenario = args.scenario(config.defaults);
    let precision = validate_precision(args.precision.unwrap_or(config.display.precision))?;
    debug!(?scenario, precision, "evaluating scenario");

    let report = scenario.report(&WorkCalendar::STANDARD, precision)?;

    if args.json || config.display.json {
        let output = EvaluateOutput {
            scenario: &scenario,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}\n", describe(&scenario));
        println!("{report}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> EvaluateArgs {
        EvaluateArgs {
            task_duration: None,
            frequency: None,
            lifetime: None,
            time_spent: None,
            time_shaved: None,
            precision: None,
            json: false,
        }
    }

    #[test]
    fn missing_answers_fall_back_to_defaults() {
        let mut args = empty_args();
        args.time_spent = Some(UnitValue::new(2.0, TimeUnit::Day));
        let scenario = args.scenario(Scenario::default());
        assert_eq!(scenario.time_spent, UnitValue::new(2.0, TimeUnit::Day));
        assert_eq!(scenario.task_duration, Scenario::default().task_duration);
        assert_eq!(scenario.task_frequency, Scenario::default().task_frequency);
    }

    #[test]
    fn describe_uses_frequency_label() {
        let text = describe(&Scenario::default());
        assert_eq!(
            text,
            "A task that takes 3 minute, done 10 times a day for 1 month.\n\
             Spending 1 hour to shave 2 minute off each time."
        );
    }
}
