//! Taskbar clock snapshot and display formatting.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ClockSnapshot {
    pub year: u32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ClockSnapshot {
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                year: 1970,
                month: 1,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }
}

/// 12-hour wall-clock text, e.g. `3:07 PM`.
pub(super) fn format_clock_time(snapshot: ClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, snapshot.minute, suffix)
}

/// Numeric date text, e.g. `6/3/2026`.
pub(super) fn format_clock_date(snapshot: ClockSnapshot) -> String {
    format!("{}/{}/{}", snapshot.month, snapshot.day, snapshot.year)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            year: 2026,
            month: 8,
            day: 6,
            hour,
            minute,
        }
    }

    #[test]
    fn midnight_and_noon_render_as_twelve() {
        assert_eq!(format_clock_time(at(0, 5)), "12:05 AM");
        assert_eq!(format_clock_time(at(12, 0)), "12:00 PM");
    }

    #[test]
    fn afternoon_hours_wrap_to_twelve_hour_display() {
        assert_eq!(format_clock_time(at(15, 7)), "3:07 PM");
        assert_eq!(format_clock_time(at(9, 30)), "9:30 AM");
    }

    #[test]
    fn date_is_month_day_year() {
        assert_eq!(format_clock_date(at(0, 0)), "8/6/2026");
    }
}
