use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seasonal_weather::{synthesize, Condition, Observation, WeatherForecaster};

fn two_years_of_observations() -> Vec<Observation> {
    let start = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();
    (0..730)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let season = (offset % 365) as f64 / 365.0;
            Observation::new(
                date,
                15.0 + 12.0 * season,
                25.0 + 10.0 * season,
                40.0 + 40.0 * season,
                80.0 + 18.0 * season,
                (offset % 9) as f64 * 2.5,
            )
        })
        .collect()
}

fn bench_forecast(c: &mut Criterion) {
    let forecaster = WeatherForecaster::from_observations(two_years_of_observations())
        .call()
        .unwrap();

    c.bench_function("estimate", |b| {
        b.iter(|| forecaster.estimate(black_box(6), black_box(15)))
    });
    c.bench_function("forecast_predicted", |b| {
        b.iter(|| forecaster.forecast(black_box("06-15-2030")))
    });
    c.bench_function("forecast_historical", |b| {
        b.iter(|| forecaster.forecast(black_box("06-15-2018")))
    });
    c.bench_function("classify", |b| {
        b.iter(|| Condition::classify(black_box(3.2), black_box(82.0)))
    });
    c.bench_function("synthesize", |b| b.iter(|| synthesize(black_box(24.0), black_box(33.0))));
}

criterion_group!(benches, bench_forecast);
criterion_main!(benches);
