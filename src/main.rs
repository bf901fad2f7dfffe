use clap::Parser;
use seasonal_weather::plot::HourlyChart;
use seasonal_weather::{report, Forecast, ForecastError, WeatherForecaster, DEFAULT_REGION};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Estimate the weather for any date from historical daily observations.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// CSV file with the historical daily observations.
    #[arg(env = "SEASONAL_WEATHER_DATA", default_value = "query.csv")]
    data: PathBuf,

    /// Region name used in titles.
    #[arg(long, default_value = DEFAULT_REGION)]
    region: String,

    /// Print the report only, without opening the hourly chart.
    #[arg(long)]
    no_plot: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Set RUST_LOG=info (or debug) to see what the estimator is doing
    env_logger::init();
    let args = Args::parse();

    let forecaster = WeatherForecaster::from_csv(&args.data)
        .region(args.region.clone())
        .call()?;

    println!("{}", report::banner(forecaster.region(), forecaster.year_span()?));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n{}", report::PROMPT);
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            println!("{}", report::farewell(forecaster.region()));
            break;
        }

        match forecaster.forecast(input) {
            Ok(forecast) => {
                println!("{}", report::render(&forecast, forecaster.region()));
                if !args.no_plot {
                    show_chart(&forecast, forecaster.region());
                }
            }
            Err(e @ ForecastError::InvalidDateFormat { .. }) => println!("\n{}", e),
            Err(e) => println!("\nAn error occurred: {}", e),
        }
    }
    Ok(())
}

#[cfg(feature = "plot")]
fn show_chart(forecast: &Forecast, region: &str) {
    if let Err(e) = HourlyChart::from_forecast(forecast, region).show() {
        println!("\nAn error occurred while plotting: {}", e);
    }
}

#[cfg(not(feature = "plot"))]
fn show_chart(forecast: &Forecast, region: &str) {
    let chart = HourlyChart::from_forecast(forecast, region);
    log::debug!(
        "Built without the `plot` feature, skipping chart '{}'",
        chart.decorated_title()
    );
}
