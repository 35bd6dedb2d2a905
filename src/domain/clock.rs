use chrono::{DateTime, Utc};
use chrono_tz::Tz;

pub const PLACEHOLDER_TIME: &str = "--:--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimezoneEntry {
    pub city: String,
    pub zone: Tz,
}

impl TimezoneEntry {
    pub fn new(city: impl Into<String>, zone: Tz) -> Self {
        Self {
            city: city.into(),
            zone,
        }
    }

    /// Parses `City=Area/Location`.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let (city, zone) = raw
            .split_once('=')
            .ok_or_else(|| format!("expected CITY=TIMEZONE, got `{raw}`"))?;
        let city = city.trim();
        if city.is_empty() {
            return Err(format!("missing city name in `{raw}`"));
        }
        let zone = zone
            .trim()
            .parse::<Tz>()
            .map_err(|_| format!("unknown timezone `{}`", zone.trim()))?;
        Ok(Self::new(city, zone))
    }
}

#[must_use]
pub fn default_zones() -> Vec<TimezoneEntry> {
    vec![
        TimezoneEntry::new("Los Angeles", chrono_tz::America::Los_Angeles),
        TimezoneEntry::new("London", chrono_tz::Europe::London),
        TimezoneEntry::new("Toronto", chrono_tz::America::Toronto),
        TimezoneEntry::new("Dubai", chrono_tz::Asia::Dubai),
        TimezoneEntry::new("Tokyo", chrono_tz::Asia::Tokyo),
    ]
}

#[must_use]
pub fn format_local_time(now: DateTime<Utc>, zone: Tz) -> String {
    now.with_timezone(&zone).format("%H:%M").to_string()
}

/// Polling display over a fixed zone list.
#[derive(Debug, Clone)]
pub struct WorldClock {
    entries: Vec<TimezoneEntry>,
    readings: Vec<String>,
}

impl WorldClock {
    #[must_use]
    pub fn new(entries: Vec<TimezoneEntry>) -> Self {
        let readings = vec![PLACEHOLDER_TIME.to_string(); entries.len()];
        Self { entries, readings }
    }

    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.readings = self
            .entries
            .iter()
            .map(|entry| format_local_time(now, entry.zone))
            .collect();
    }

    pub fn readings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .zip(&self.readings)
            .map(|(entry, time)| (entry.city.as_str(), time.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for WorldClock {
    fn default() -> Self {
        Self::new(default_zones())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 0)
            .single()
            .expect("valid instant")
    }

    #[test]
    fn fresh_clock_shows_placeholders() {
        let clock = WorldClock::default();
        assert_eq!(clock.len(), 5);
        assert!(clock.readings().all(|(_, time)| time == PLACEHOLDER_TIME));
    }

    #[test]
    fn refresh_formats_each_zone_in_24_hour_time() {
        let mut clock = WorldClock::default();
        clock.refresh(fixed_now());
        let readings = clock
            .readings()
            .map(|(city, time)| (city.to_string(), time.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(
            readings,
            vec![
                ("Los Angeles".to_string(), "04:30".to_string()),
                ("London".to_string(), "12:30".to_string()),
                ("Toronto".to_string(), "07:30".to_string()),
                ("Dubai".to_string(), "16:30".to_string()),
                ("Tokyo".to_string(), "21:30".to_string()),
            ]
        );
    }

    #[test]
    fn daylight_saving_is_applied() {
        let summer = Utc
            .with_ymd_and_hms(2026, 7, 1, 12, 0, 0)
            .single()
            .expect("valid instant");
        assert_eq!(format_local_time(summer, chrono_tz::Europe::London), "13:00");
    }

    #[test]
    fn parse_accepts_city_and_zone() {
        let entry = TimezoneEntry::parse("Paris = Europe/Paris").expect("valid");
        assert_eq!(entry.city, "Paris");
        assert_eq!(entry.zone, chrono_tz::Europe::Paris);
    }

    #[test]
    fn parse_rejects_malformed_values() {
        assert!(TimezoneEntry::parse("Paris").is_err());
        assert!(TimezoneEntry::parse("=Europe/Paris").is_err());
        assert!(TimezoneEntry::parse("Paris=Mars/Olympus").is_err());
    }
}
