/// Application-wide constants.
///
/// Defaults for the rewrite passes, output formats and the messages
/// printed to the console live here so the binary and the library agree.
/// Output format constants
pub mod output_formats {
    /// Text output format - colored per-file lines and a completion line
    pub const TEXT: &str = "text";
    /// JSON output format - a single run summary for automation
    pub const JSON: &str = "json";
    /// Minimal output format - text output without colors
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Rewrite defaults
pub mod defaults {
    /// Development server URL hard-coded in the sources
    pub const HOST: &str = "http://localhost:3000";
    /// Runtime configuration value that replaces the host
    pub const EXPRESSION: &str = "config.API_URL";
    /// File extension selecting the sources to rewrite
    pub const EXTENSION: &str = "jsx";
    /// Root directory walked when none is given
    pub const ROOT: &str = "frontend/src";
    /// Atomic temp-file-then-rename writes
    pub const ATOMIC_WRITES: bool = true;
}

/// Configuration file lookup
pub mod config_files {
    /// File name searched for in the current and parent directories
    pub const FILE_NAME: &str = ".apifix.toml";
    /// How many parent directories are searched
    pub const MAX_PARENT_LEVELS: usize = 3;
}

/// Console messages
pub mod messages {
    pub const URLS_FIXED: &str = "All files fixed!";
    pub const QUOTES_FIXED: &str = "All mixed quotes fixed!";
    pub const FIXED_QUOTES_IN: &str = "Fixed mixed quotes in:";
    pub const WOULD_FIX: &str = "Would fix:";
}

/// Display constants
pub mod display {
    /// Maximum files listed in debug logs before truncating
    pub const MAX_FILES_TO_LOG: usize = 50;
}
