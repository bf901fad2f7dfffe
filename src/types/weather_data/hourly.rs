/// One point of the synthetic hourly temperature curve.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct HourlySample {
    pub hour: u32,        // 0..=23
    pub temperature: f64, // °C
}
