//! Clock and randomness sources injected into the sensor leaves.
//!
//! Leaves never read ambient global state directly; tests substitute the
//! fixed implementations to make every run deterministic.

use chrono::{Datelike, Local, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the current day of the week.
pub trait Calendar: Send + Sync {
    fn weekday(&self) -> Weekday;
}

/// Reads the local wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemCalendar;

impl Calendar for SystemCalendar {
    fn weekday(&self) -> Weekday {
        Local::now().weekday()
    }
}

/// Always reports the same day.
#[derive(Clone, Copy, Debug)]
pub struct FixedCalendar(pub Weekday);

impl Calendar for FixedCalendar {
    fn weekday(&self) -> Weekday {
        self.0
    }
}

/// Produces uniform draws in `[0, 1)`.
pub trait Chance: Send {
    fn roll(&mut self) -> f64;
}

/// Draws from a standard RNG, optionally seeded for reproducible runs.
pub struct RngChance {
    rng: StdRng,
}

impl RngChance {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Chance for RngChance {
    fn roll(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Returns the same draw every time.
#[derive(Clone, Copy, Debug)]
pub struct FixedChance(pub f64);

impl Chance for FixedChance {
    fn roll(&mut self) -> f64 {
        self.0
    }
}

/// Full English name of a weekday.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Monday through Friday.
pub fn is_workday(day: Weekday) -> bool {
    day.num_days_from_monday() < 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = RngChance::new(Some(7));
        let mut b = RngChance::new(Some(7));
        let draws_a: Vec<f64> = (0..5).map(|_| a.roll()).collect();
        let draws_b: Vec<f64> = (0..5).map(|_| b.roll()).collect();
        assert_eq!(draws_a, draws_b);
        assert!(draws_a.iter().all(|d| (0.0..1.0).contains(d)));
    }

    #[test]
    fn workdays() {
        assert!(is_workday(Weekday::Mon));
        assert!(is_workday(Weekday::Fri));
        assert!(!is_workday(Weekday::Sat));
        assert!(!is_workday(Weekday::Sun));
        assert_eq!(day_name(Weekday::Wed), "Wednesday");
    }
}
