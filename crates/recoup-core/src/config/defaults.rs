// Single source of truth for all default values.

// --- Team ---
pub const DEFAULT_NUM_MANAGERS: u32 = 3;
pub const DEFAULT_EXEC_PER_MANAGER: u32 = 5;

// --- Incentive ---
pub const DEFAULT_MONTHLY_TARGET: f64 = 5_000_000.0;
pub const DEFAULT_MIN_INCENTIVE_LIMIT: f64 = 1_000_000.0;
pub const DEFAULT_UNIT_MODE: &str = "native";

// --- Export ---
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_RECOVERY_STYLE: &str = "raw";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_ENV_VAR: &str = "RECOUP_LOG";
