use chrono::Duration;

use crate::types::{DistanceUnit, SpeedUnit};

pub const MS_TO_KMH: f64 = 3.6;

#[inline]
pub fn speed_to_mps(value: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MetersPerSecond => value,
        SpeedUnit::KilometersPerHour => value / MS_TO_KMH,
    }
}

#[inline]
pub fn distance_to_m(value: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Meters => value,
        DistanceUnit::Kilometers => value * 1000.0,
    }
}

#[inline]
pub fn mps_to_kmh(v: f64) -> f64 {
    v * MS_TO_KMH
}

/// Tempo (min/km) = 60 / (v * 3.6). Null eller ugyldig fart gir 0.
pub fn speed_to_pace(mps: f64) -> f64 {
    if !mps.is_finite() || mps <= 0.0 {
        return 0.0;
    }
    60.0 / (mps * MS_TO_KMH)
}

/// Invers av `speed_to_pace`.
pub fn pace_to_speed(min_per_km: f64) -> f64 {
    if !min_per_km.is_finite() || min_per_km <= 0.0 {
        return 0.0;
    }
    60.0 / (min_per_km * MS_TO_KMH)
}

/// "m:ss". Alt som ikke er et positivt tempo blir "0:00".
pub fn format_pace(min_per_km: f64) -> String {
    if !min_per_km.is_finite() || min_per_km <= 0.0 {
        return "0:00".to_string();
    }
    let total = (min_per_km * 60.0).round() as i64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// "h:mm:ss", avrundet til hele sekunder.
pub fn format_duration(seconds: f64) -> String {
    // `as` metter ved i64::MAX, ingen overflyt for store verdier
    let secs = if seconds.is_finite() && seconds > 0.0 {
        seconds.round() as i64
    } else {
        0
    };
    match Duration::try_seconds(secs) {
        Some(d) => format!(
            "{}:{:02}:{:02}",
            d.num_hours(),
            d.num_minutes() % 60,
            d.num_seconds() % 60
        ),
        // utenfor chronos rekkevidde
        None => format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pace_for_five_minute_kilometer() {
        // 12 km/h = 3.333 m/s => 5:00 min/km
        let pace = speed_to_pace(12.0 / 3.6);
        assert!((pace - 5.0).abs() < 1e-9);
        assert_eq!(format_pace(pace), "5:00");
    }

    #[test]
    fn pace_rounding_carries_into_minutes() {
        // 4:59.7 rundes til 5:00, ikke 4:60
        assert_eq!(format_pace(4.0 + 59.7 / 60.0), "5:00");
    }

    #[test]
    fn zero_speed_has_floor_pace() {
        assert_eq!(speed_to_pace(0.0), 0.0);
        assert_eq!(format_pace(speed_to_pace(0.0)), "0:00");
        assert_eq!(format_pace(f64::NAN), "0:00");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0.0), "0:00:00");
        assert_eq!(format_duration(59.6), "0:01:00");
        assert_eq!(format_duration(3725.0), "1:02:05");
    }

    #[test]
    fn huge_duration_does_not_overflow() {
        assert_eq!(format_duration(1e17), "27777777777777:46:40");
        assert_eq!(format_duration(f64::MAX), "2562047788015215:30:07");
    }

    #[test]
    fn unit_conversions() {
        assert!((speed_to_mps(36.0, SpeedUnit::KilometersPerHour) - 10.0).abs() < 1e-12);
        assert_eq!(speed_to_mps(4.2, SpeedUnit::MetersPerSecond), 4.2);
        assert_eq!(distance_to_m(1.5, DistanceUnit::Kilometers), 1500.0);
    }
}
