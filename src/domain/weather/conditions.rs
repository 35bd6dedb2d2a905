/// Condition labels the API reports in `weather[0].main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionLabel {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Haze,
    Smoke,
    Sand,
    Dust,
    Ash,
    Squall,
    Tornado,
}

/// The animated overlay shown for a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Sun,
    Clouds,
    Rain,
    Snow,
    Fog,
    Dust,
    Wind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const DEFAULT_BACKGROUND: Rgb = Rgb(0xff, 0xff, 0xff);

const LABELS: &[(ConditionLabel, &str)] = &[
    (ConditionLabel::Clear, "Clear"),
    (ConditionLabel::Clouds, "Clouds"),
    (ConditionLabel::Rain, "Rain"),
    (ConditionLabel::Drizzle, "Drizzle"),
    (ConditionLabel::Thunderstorm, "Thunderstorm"),
    (ConditionLabel::Snow, "Snow"),
    (ConditionLabel::Mist, "Mist"),
    (ConditionLabel::Fog, "Fog"),
    (ConditionLabel::Haze, "Haze"),
    (ConditionLabel::Smoke, "Smoke"),
    (ConditionLabel::Sand, "Sand"),
    (ConditionLabel::Dust, "Dust"),
    (ConditionLabel::Ash, "Ash"),
    (ConditionLabel::Squall, "Squall"),
    (ConditionLabel::Tornado, "Tornado"),
];

impl ConditionLabel {
    pub const ALL: [ConditionLabel; 15] = [
        ConditionLabel::Clear,
        ConditionLabel::Clouds,
        ConditionLabel::Rain,
        ConditionLabel::Drizzle,
        ConditionLabel::Thunderstorm,
        ConditionLabel::Snow,
        ConditionLabel::Mist,
        ConditionLabel::Fog,
        ConditionLabel::Haze,
        ConditionLabel::Smoke,
        ConditionLabel::Sand,
        ConditionLabel::Dust,
        ConditionLabel::Ash,
        ConditionLabel::Squall,
        ConditionLabel::Tornado,
    ];

    /// Exact, case-sensitive match against the API spelling.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        LABELS
            .iter()
            .find_map(|(label, name)| (*name == raw).then_some(*label))
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        LABELS
            .iter()
            .find_map(|(label, name)| (*label == self).then_some(*name))
            .unwrap_or("Unknown")
    }
}

#[must_use]
pub fn effect_for(label: ConditionLabel) -> EffectKind {
    match label {
        ConditionLabel::Clear => EffectKind::Sun,
        ConditionLabel::Clouds => EffectKind::Clouds,
        ConditionLabel::Rain | ConditionLabel::Drizzle | ConditionLabel::Thunderstorm => {
            EffectKind::Rain
        }
        ConditionLabel::Snow => EffectKind::Snow,
        ConditionLabel::Mist | ConditionLabel::Fog | ConditionLabel::Haze | ConditionLabel::Smoke => {
            EffectKind::Fog
        }
        ConditionLabel::Sand | ConditionLabel::Dust | ConditionLabel::Ash => EffectKind::Dust,
        ConditionLabel::Squall | ConditionLabel::Tornado => EffectKind::Wind,
    }
}

#[must_use]
pub fn background_for(label: Option<ConditionLabel>) -> Rgb {
    let Some(label) = label else {
        return DEFAULT_BACKGROUND;
    };
    match label {
        ConditionLabel::Clear => Rgb(0x87, 0xce, 0xeb),
        ConditionLabel::Clouds => Rgb(0xb0, 0xc4, 0xde),
        ConditionLabel::Rain => Rgb(0x77, 0x88, 0x99),
        ConditionLabel::Drizzle => Rgb(0xa9, 0xa9, 0xa9),
        ConditionLabel::Thunderstorm => Rgb(0x4f, 0x4f, 0x4f),
        ConditionLabel::Snow => Rgb(0xff, 0xfa, 0xfa),
        ConditionLabel::Mist => Rgb(0xcf, 0xcf, 0xcf),
        ConditionLabel::Smoke => Rgb(0xd3, 0xd3, 0xd3),
        ConditionLabel::Haze => Rgb(0xe0, 0xe0, 0xe0),
        ConditionLabel::Fog => Rgb(0xe5, 0xe5, 0xe5),
        ConditionLabel::Sand => Rgb(0xf4, 0xe2, 0xd8),
        ConditionLabel::Dust => Rgb(0xe0, 0xcd, 0xa9),
        ConditionLabel::Ash => Rgb(0xb2, 0xbe, 0xb5),
        ConditionLabel::Squall => Rgb(0x70, 0x80, 0x90),
        ConditionLabel::Tornado => Rgb(0x80, 0x80, 0x80),
    }
}

/// Terminal stand-in for the PNG icon, keyed on the two-digit icon family.
#[must_use]
pub fn icon_glyph(icon: &str) -> &'static str {
    let night = icon.ends_with('n');
    match icon.get(..2).unwrap_or_default() {
        "01" if night => "☾",
        "01" => "☀",
        "02" => "⛅",
        "03" | "04" => "☁",
        "09" | "10" => "☂",
        "11" => "⚡",
        "13" => "❄",
        "50" => "░",
        _ => "·",
    }
}
