use chrono::NaiveDateTime;

mod conditions;

pub use conditions::{
    ConditionLabel, DEFAULT_BACKGROUND, EffectKind, Rgb, background_for, effect_for, icon_glyph,
};

pub const DEFAULT_ICON_BASE: &str = "https://openweathermap.org/img/wn";

/// Raw `weather[0]` block as returned by the API. `main` is kept verbatim so
/// labels outside [`ConditionLabel`] can still be shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub main: String,
    pub description: String,
    pub icon: String,
}

impl Condition {
    #[must_use]
    pub fn label(&self) -> Option<ConditionLabel> {
        ConditionLabel::parse(&self.main)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub name: String,
    pub temperature_c: f32,
    pub condition: Condition,
    pub humidity: f32,
    pub wind_speed: f32,
}

impl CurrentWeather {
    #[must_use]
    pub fn label(&self) -> Option<ConditionLabel> {
        self.condition.label()
    }

    #[must_use]
    pub fn background(&self) -> Rgb {
        background_for(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub timestamp: NaiveDateTime,
    pub temperature_c: f32,
    pub condition: Condition,
}

impl ForecastEntry {
    #[must_use]
    pub fn rounded_temp(&self) -> i32 {
        round_temp(self.temperature_c)
    }
}

#[must_use]
pub fn icon_url(icon_base: &str, icon: &str) -> String {
    format!("{}/{icon}@2x.png", icon_base.trim_end_matches('/'))
}

#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_temp(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

#[must_use]
pub fn parse_dt_txt(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok()
}
