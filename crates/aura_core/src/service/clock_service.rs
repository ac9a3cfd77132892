//! Clock and greeting display.

use chrono::{NaiveTime, Timelike};

const CLOCK_FORMAT: &str = "%-I:%M:%S %p";

/// What the clock region shows for one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    pub time_label: String,
    pub greeting: String,
}

/// Builds the clock region text for a local wall-clock time.
pub fn clock_reading(local_time: NaiveTime, name: &str) -> ClockReading {
    ClockReading {
        time_label: local_time.format(CLOCK_FORMAT).to_string(),
        greeting: greeting(local_time.hour(), name),
    }
}

/// Morning before noon, evening from noon on.
pub fn greeting(hour: u32, name: &str) -> String {
    let salutation = if hour < 12 {
        "Good Morning"
    } else {
        "Good Evening"
    };
    let name = name.trim();
    if name.is_empty() {
        format!("{salutation}.")
    } else {
        format!("{salutation}, {name}.")
    }
}

#[cfg(test)]
mod tests {
    use super::{clock_reading, greeting};
    use chrono::NaiveTime;

    #[test]
    fn greeting_switches_at_noon() {
        assert_eq!(greeting(0, "Sam"), "Good Morning, Sam.");
        assert_eq!(greeting(11, "Sam"), "Good Morning, Sam.");
        assert_eq!(greeting(12, "Sam"), "Good Evening, Sam.");
        assert_eq!(greeting(23, ""), "Good Evening.");
    }

    #[test]
    fn clock_reading_formats_twelve_hour_time() {
        let time = NaiveTime::from_hms_opt(14, 5, 9).unwrap();
        let reading = clock_reading(time, " ");
        assert_eq!(reading.time_label, "2:05:09 PM");
        assert_eq!(reading.greeting, "Good Evening.");
    }
}
