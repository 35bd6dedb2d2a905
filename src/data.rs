pub mod openweather;

pub use openweather::{WeatherClient, WeatherError};
