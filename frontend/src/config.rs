pub const BRAND: &str = "SoleFresh";

/// Seconds shown on a platform card before the shop redirect fires.
pub const COUNTDOWN_START_SECS: u32 = 5;
pub const TICK_PERIOD_MS: u32 = 1_000;

/// The navbar turns opaque once the page has scrolled past this many pixels.
pub const NAV_SOLID_AFTER_PX: f64 = 50.0;

pub const REVEAL_ROOT_MARGIN: &str = "-100px";

pub const PRICE_INR: u32 = 199;
