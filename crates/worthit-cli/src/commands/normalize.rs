use clap::Subcommand;

use worthit_core::{FrequencyUnit, TimeUnit, UnitValue, WorkCalendar};

#[derive(Subcommand)]
pub enum NormalizeAction {
    /// Print a duration in seconds (e.g. "2 weeks")
    Duration {
        #[arg(allow_hyphen_values = true)]
        value: UnitValue<TimeUnit>,
    },
    /// Print a frequency in occurrences per second (e.g. "5 daily")
    Frequency {
        #[arg(allow_hyphen_values = true)]
        value: UnitValue<FrequencyUnit>,
    },
}

pub fn run(action: NormalizeAction) -> Result<(), Box<dyn std::error::Error>> {
    let calendar = WorkCalendar::STANDARD;
    match action {
        NormalizeAction::Duration { value } => {
            println!("{}", calendar.normalize_duration(value));
        }
        NormalizeAction::Frequency { value } => {
            println!("{}", calendar.normalize_frequency(value));
        }
    }
    Ok(())
}
