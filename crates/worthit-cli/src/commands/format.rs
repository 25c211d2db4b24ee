use clap::Args;

use worthit_core::scenario::validate_precision;
use worthit_core::{Config, WorkCalendar};

#[derive(Args)]
pub struct FormatArgs {
    /// Duration in seconds
    pub seconds: f64,
    /// Relative precision (0 = exact, 1 or more = nothing)
    #[arg(long, allow_hyphen_values = true)]
    pub precision: Option<f64>,
}

pub fn run(args: FormatArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.seconds.is_finite() || args.seconds < 0.0 {
        return Err(format!("seconds must be a finite number >= 0 (got {})", args.seconds).into());
    }
    let precision = match args.precision {
        Some(p) => p,
        None => Config::load_or_default().display.precision,
    };
    let precision = validate_precision(precision)?;
    println!(
        "{}",
        WorkCalendar::STANDARD.format_duration(args.seconds, precision)
    );
    Ok(())
}
