// src/config/consts.rs

// Anchored strategy
pub const ANCHOR_MARKER: &str = "PPS:";
pub const ANCHOR_OFFSET: usize = 2; // username sits this many lines above the marker
pub const MIN_USERNAME_LEN: usize = 3;

// Token strategy
pub const TOKEN_PATTERN: &str = r"@?([a-zA-Z0-9_.]+)";
pub const MAGNITUDE_PATTERN: &str = r"^[0-9.]+[KMBkmb]?$";
pub const REJECTED_SYMBOLS: [char; 4] = ['/', '%', '$', ','];

/// Known noise words from the outreach UI, compared lower-cased.
pub const DENYLIST: &[&str] = &[
    "health", "male", "female", "previously", "invited", "fast", "growing",
    "pps:", "pps", "womenswear", "underwear", "beauty", "personal", "care",
    "sports", "outdoor", "ugc", "level", "deals", "next", "locked", "mindset",
    "midlifemomgrace", "soberafjoe",
    "chenbo", "unknown", "creator", "video", "views", "follower", "sale", "revenue",
];

pub const NO_TEXT: &str = "No text provided";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
pub const PREFS_FILE: &str = ".store/gui.cfg";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "extracted_usernames";
pub const USERNAME_HEADER: &str = "username";
pub const BATCH_PREFIX: &str = "outreach_part_";
pub const DEFAULT_BATCH_SIZE: usize = 100;
