use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::time::{MissedTickBehavior, interval};

use crate::data::WeatherError;
use crate::domain::weather::{CurrentWeather, ForecastEntry};

pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    TickClock,
    Input(Event),
    CurrentLoaded {
        generation: u64,
        result: Result<CurrentWeather, WeatherError>,
    },
    ForecastLoaded {
        generation: u64,
        result: Result<Vec<ForecastEntry>, WeatherError>,
    },
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

#[must_use]
pub fn frame_period(fps: u8) -> Duration {
    Duration::from_millis(1000_u64 / u64::from(fps.max(15)))
}

pub fn start_frame_task(tx: tokio::sync::mpsc::Sender<AppEvent>, fps: u8) {
    start_ticker(tx, frame_period(fps), || AppEvent::TickFrame);
}

pub fn start_clock_task(tx: tokio::sync::mpsc::Sender<AppEvent>) {
    start_ticker(tx, CLOCK_PERIOD, || AppEvent::TickClock);
}

fn start_ticker(
    tx: tokio::sync::mpsc::Sender<AppEvent>,
    period: Duration,
    event: fn() -> AppEvent,
) {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            if tx.send(event()).await.is_err() {
                break;
            }
        }
    });
}
