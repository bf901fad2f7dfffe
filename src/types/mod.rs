pub mod weather_condition;
pub mod weather_data;
