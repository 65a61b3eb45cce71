//! Centralized defaults for runtime settings
//!
//! Single source of truth for the default values used when no file or
//! environment override is present.

/// Output domain discretization
pub mod inference {
    use tunjangan_core::aggregate;

    /// Lower bound of the allowance domain
    pub const LOWER: f64 = aggregate::DEFAULT_LOWER;

    /// Upper bound of the allowance domain
    pub const UPPER: f64 = aggregate::DEFAULT_UPPER;

    /// Samples across the domain; higher is more accurate and slower
    pub const RESOLUTION: usize = aggregate::DEFAULT_RESOLUTION;

    /// Upper limit accepted from files and the environment
    pub const MAX_RESOLUTION: usize = aggregate::MAX_RESOLUTION;
}

/// Logging defaults
pub mod logging {
    /// Default tracing level when RUST_LOG is unset
    pub const DEFAULT_LEVEL: &str = "info";

    pub const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
}

/// Batch evaluation defaults
pub mod batch {
    /// Evaluate records on the rayon pool
    pub const PARALLEL: bool = true;
}

/// Configuration sources
pub mod sources {
    /// Base name of the optional config file in the working directory
    /// (tunjangan.toml, tunjangan.yaml, ...)
    pub const DEFAULT_FILE: &str = "tunjangan";

    /// Environment variable prefix, e.g. TUNJANGAN__INFERENCE__RESOLUTION
    pub const ENV_PREFIX: &str = "TUNJANGAN";

    /// Separator between prefix and nested keys
    pub const ENV_SEPARATOR: &str = "__";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_bounds_ordered() {
        assert!(inference::LOWER < inference::UPPER);
        assert!(inference::RESOLUTION > 0);
        assert!(inference::RESOLUTION <= inference::MAX_RESOLUTION);
    }

    #[test]
    fn test_default_level_known() {
        assert!(logging::LEVELS.contains(&logging::DEFAULT_LEVEL));
    }
}
