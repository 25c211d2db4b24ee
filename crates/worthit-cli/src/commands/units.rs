use worthit_core::{FrequencyUnit, WorkCalendar};

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let calendar = WorkCalendar::STANDARD;

    println!(
        "Time units ({}-hour days, {}-day weeks, {}-day months):",
        calendar.hours_in_day, calendar.days_in_week, calendar.days_in_month
    );
    for (unit, seconds) in calendar.table() {
        println!("  {unit:<8} {seconds:>10} s");
    }

    println!("\nFrequencies:");
    for unit in FrequencyUnit::ALL {
        println!(
            "  {:<8} {:<8} per {} s",
            unit,
            unit.label(),
            calendar.seconds_per_period(unit)
        );
    }
    Ok(())
}
