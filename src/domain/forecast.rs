use chrono::{NaiveDate, NaiveTime};

use crate::domain::weather::ForecastEntry;

pub const FORECAST_DAYS: usize = 5;

fn noon() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Reduces 3-hourly entries to one per calendar day, taking the entry stamped
/// exactly 12:00:00. A repeated date keeps its first position but takes the
/// later entry's values. At most `limit` days are returned, in list order.
#[must_use]
pub fn noon_entries(entries: &[ForecastEntry], limit: usize) -> Vec<ForecastEntry> {
    let noon = noon();
    let mut days: Vec<(NaiveDate, &ForecastEntry)> = Vec::new();
    for entry in entries.iter().filter(|entry| entry.timestamp.time() == noon) {
        let date = entry.timestamp.date();
        match days.iter_mut().find(|(seen, _)| *seen == date) {
            Some(slot) => slot.1 = entry,
            None => days.push((date, entry)),
        }
    }
    days.into_iter()
        .take(limit)
        .map(|(_, entry)| entry.clone())
        .collect()
}

#[must_use]
pub fn five_day_summary(entries: &[ForecastEntry]) -> Vec<ForecastEntry> {
    noon_entries(entries, FORECAST_DAYS)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDateTime};

    use super::*;
    use crate::domain::weather::{Condition, parse_dt_txt};

    fn entry(stamp: NaiveDateTime, temp: f32) -> ForecastEntry {
        ForecastEntry {
            timestamp: stamp,
            temperature_c: temp,
            condition: Condition {
                main: "Clouds".to_string(),
                description: "broken clouds".to_string(),
                icon: "04d".to_string(),
            },
        }
    }

    fn three_hourly(days: i64) -> Vec<ForecastEntry> {
        let start = parse_dt_txt("2026-02-12 00:00:00").expect("valid start");
        (0..days * 8)
            .map(|step| {
                #[allow(clippy::cast_precision_loss)]
                let temp = step as f32;
                entry(start + Duration::hours(step * 3), temp)
            })
            .collect()
    }

    #[test]
    fn six_noon_days_are_cut_to_five() {
        let entries = three_hourly(6);
        let noon_count = entries
            .iter()
            .filter(|e| e.timestamp.time() == noon())
            .count();
        assert_eq!(noon_count, 6);

        let days = five_day_summary(&entries);
        assert_eq!(days.len(), 5);
        assert!(days.iter().all(|d| d.timestamp.time() == noon()));
        assert_eq!(days[0].timestamp.to_string(), "2026-02-12 12:00:00");
        assert_eq!(days[4].timestamp.to_string(), "2026-02-16 12:00:00");
    }

    #[test]
    fn fewer_noon_entries_than_limit_returns_all() {
        let entries = three_hourly(2);
        assert_eq!(five_day_summary(&entries).len(), 2);
        assert!(five_day_summary(&[]).is_empty());
    }

    #[test]
    fn near_noon_entries_are_ignored() {
        let base = parse_dt_txt("2026-02-12 12:00:01").expect("valid");
        let entries = vec![
            entry(base, 1.0),
            entry(base - Duration::hours(1), 2.0),
            entry(parse_dt_txt("2026-02-13 12:00:00").expect("valid"), 3.0),
        ];
        let days = five_day_summary(&entries);
        assert_eq!(days.len(), 1);
        assert!((days[0].temperature_c - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn duplicate_date_keeps_position_and_takes_later_values() {
        let first = parse_dt_txt("2026-02-12 12:00:00").expect("valid");
        let second = parse_dt_txt("2026-02-13 12:00:00").expect("valid");
        let entries = vec![entry(first, 1.0), entry(second, 2.0), entry(first, 9.0)];
        let days = noon_entries(&entries, 5);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].timestamp, first);
        assert!((days[0].temperature_c - 9.0).abs() < f32::EPSILON);
        assert_eq!(days[1].timestamp, second);
    }
}
