/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Years a one-off epic experience is spread over when no horizon is saved
pub const DEFAULT_EPIC_HORIZON_YEARS: u32 = 10;

/// Per-user setting key for the epic amortization horizon
pub const SETTING_EPIC_HORIZON_YEARS: &str = "epic_horizon_years";

/// Breakdown label used when a record has no usable label
pub const UNLABELLED_BREAKDOWN_KEY: &str = "Other";
