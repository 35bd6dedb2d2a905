use anyhow::Result;
use crossterm::event::Event;
use rand::{SeedableRng, rngs::StdRng};
use tokio::sync::mpsc;

use crate::{
    app::events::{AppEvent, start_clock_task, start_frame_task},
    cli::Cli,
    data::WeatherClient,
    domain::{
        clock::WorldClock,
        forecast::five_day_summary,
        weather::{CurrentWeather, DEFAULT_BACKGROUND, ForecastEntry, Rgb},
    },
    ui::{
        effects::{EffectCanvas, EffectSlot, FrameInfo, FrameLoop, FrameScheduler},
        globe::{GlobeCanvas, GlobeRenderer, GlobeTexture},
    },
};

mod fetch;
mod input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Running,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherPanel {
    Idle,
    Loading(String),
    Ready(CurrentWeather),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForecastPanel {
    Empty,
    Ready(Vec<ForecastEntry>),
    Unavailable,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub input: String,
    pub weather: WeatherPanel,
    pub forecast: ForecastPanel,
    pub background: Rgb,
    pub effect: EffectSlot,
    pub effects: FrameLoop<EffectCanvas>,
    pub effect_canvas: EffectCanvas,
    pub globe: FrameLoop<GlobeCanvas>,
    pub globe_canvas: GlobeCanvas,
    pub clock: WorldClock,
    pub generation: u64,
    pub animate: bool,
    pub discard_stale: bool,
    pub icon_base: String,
    client: WeatherClient,
    rng: StdRng,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let animate = !cli.no_animation;
        let mut globe = FrameLoop::new();
        let texture = GlobeTexture::load();
        globe.start(Box::new(if animate {
            GlobeRenderer::new(texture)
        } else {
            GlobeRenderer::frozen(texture)
        }));

        Self {
            mode: AppMode::Running,
            running: true,
            input: cli.initial_city().unwrap_or_default().to_string(),
            weather: WeatherPanel::Idle,
            forecast: ForecastPanel::Empty,
            background: DEFAULT_BACKGROUND,
            effect: EffectSlot::new(),
            effects: FrameLoop::new(),
            effect_canvas: EffectCanvas::default(),
            globe,
            globe_canvas: GlobeCanvas::default(),
            clock: WorldClock::new(cli.zones()),
            generation: 0,
            animate,
            discard_stale: cli.discard_stale,
            icon_base: cli.icon_base.clone(),
            client: WeatherClient::with_base_url(&cli.api_url, cli.api_key()),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replaces the generator used to seed particle systems.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                self.clock.refresh(chrono::Utc::now());
                start_frame_task(tx.clone(), cli.fps);
                start_clock_task(tx.clone());
                if let Some(city) = cli.initial_city() {
                    self.submit(city.to_string(), tx);
                }
            }
            AppEvent::TickFrame => self.advance_frame(FrameInfo::now()),
            AppEvent::TickClock => self.clock.refresh(chrono::Utc::now()),
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::CurrentLoaded { generation, result } => {
                if self.is_stale(generation, "current") {
                    return Ok(());
                }
                self.apply_current(result);
            }
            AppEvent::ForecastLoaded { generation, result } => {
                if self.is_stale(generation, "forecast") {
                    return Ok(());
                }
                self.apply_forecast(result);
            }
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    /// Runs both frame loops once.
    pub fn advance_frame(&mut self, info: FrameInfo) {
        self.globe.tick(&mut self.globe_canvas, info);
        self.effects.tick(&mut self.effect_canvas, info);
    }

    /// Sizes both canvases to the terminal. The active effect keeps running
    /// and picks up the new bounds on its next frame.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.effect_canvas.resize_cells(cols, rows);
        self.globe_canvas.resize_cells(cols, rows);
    }

    fn apply_current(&mut self, result: Result<CurrentWeather, crate::data::WeatherError>) {
        match result {
            Ok(current) => {
                tracing::info!(
                    city = %current.name,
                    condition = %current.condition.main,
                    "current weather loaded"
                );
                self.background = current.background();
                if self.animate {
                    self.effect.set_effect(
                        current.label(),
                        &mut self.effects,
                        &mut self.effect_canvas,
                        &mut self.rng,
                    );
                }
                self.weather = WeatherPanel::Ready(current);
            }
            Err(err) => {
                tracing::warn!(error = %err, "current weather failed");
                self.weather = WeatherPanel::Error(err.to_string());
                self.forecast = ForecastPanel::Empty;
            }
        }
    }

    fn apply_forecast(&mut self, result: Result<Vec<ForecastEntry>, crate::data::WeatherError>) {
        match result {
            Ok(entries) => {
                let days = five_day_summary(&entries);
                tracing::debug!(entries = entries.len(), days = days.len(), "forecast loaded");
                self.forecast = ForecastPanel::Ready(days);
            }
            Err(err) => {
                tracing::warn!(error = %err, "forecast failed");
                self.forecast = ForecastPanel::Unavailable;
            }
        }
    }

    fn is_stale(&self, generation: u64, what: &str) -> bool {
        let stale = self.discard_stale && generation != self.generation;
        if stale {
            tracing::debug!(generation, current = self.generation, what, "dropping stale response");
        }
        stale
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            Event::Key(key) => self.handle_key(key, tx).await?,
            Event::Resize(cols, rows) => self.resize(cols, rows),
            _ => {}
        }
        Ok(())
    }
}
