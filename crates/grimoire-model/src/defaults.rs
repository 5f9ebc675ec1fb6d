//! Fallback component values used when a prompt does not name a slot.

pub const DEFAULT_EFFECT: &str = "Creation";
pub const DEFAULT_ELEMENT: &str = "Moon";
pub const DEFAULT_RANGE: &str = "30ft";
pub const DEFAULT_LEVEL: u8 = 1;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

/// Duration used when none is named, keyed by the final effect.
pub fn default_duration(effect: &str) -> &'static str {
    match effect {
        "Creation" => "10_minute",
        "Damage" => "Instant",
        "Shield" => "5_minute",
        "Heal" => "Instant",
        _ => "1_minute",
    }
}

/// Every duration [`default_duration`] can produce.
pub const DEFAULT_DURATIONS: [&str; 3] = ["10_minute", "Instant", "5_minute"];
pub const FALLBACK_DURATION: &str = "1_minute";
