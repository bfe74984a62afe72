
#[cfg(debug_assertions)]
pub fn submission_delay_ms() -> u32 {
    300  // Keep the fake round trip short while developing
}

#[cfg(not(debug_assertions))]
pub fn submission_delay_ms() -> u32 {
    1_200  // Long enough for the spinner to read as a real request
}

// Percent per second. Tab switches can produce huge jumps between samples.
pub const VELOCITY_CEILING: f64 = 100.0;

// Progress changes smaller than this don't flip the scroll direction.
pub const DIRECTION_DEADBAND_PERCENT: f64 = 0.05;

// Above this velocity the ball on the progress bar starts rolling.
pub const ROLLING_VELOCITY_THRESHOLD: f64 = 3.0;

pub const BACK_TO_TOP_THRESHOLD_PERCENT: f64 = 10.0;

pub const MAX_COMPARISON: usize = 3;

pub const TESTIMONIAL_AUTOPLAY_MS: u32 = 6_000;
