//! Defaults shared by the CLI, config loader and pipeline.

// Output artifact written when nothing else is configured
pub const DEFAULT_OUTPUT_FILE: &str = "data.json";

// Optional config file read from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

// Environment override for the output path
pub const OUTPUT_ENV_VAR: &str = "WATER_SCRAPER_OUTPUT";

pub const DEFAULT_TOP_BRANDS: usize = 10;

/// Alt text the listing page puts on its own logo images
pub const PLACEHOLDER_ALT: &str = "Oasis";

/// Name of the literal that `publish` rewrites inside an HTML page
pub const TEMPLATE_DATA_MARKER: &str = "const data = [";

pub const BUILTIN_SEED_SOURCE: &str = "builtin_seed";
