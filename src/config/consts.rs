// src/config/consts.rs

// Local state (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Config discovery
pub const CONFIG_ENV: &str = "PRESENCE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "presence.toml";

// Merge
pub const DEFAULT_RAW_DIR: &str = "data/raw";
pub const DEFAULT_PROCESSED_DIR: &str = "data/processed";
pub const DEFAULT_TRAFFIC_INPUTS: [&str; 4] = [
    "mz,dlp,ast,xtra,alpha.csv",
    "novis,keep,patient,indep.csv",
    "hms-rpf,dwel,lpm,hiline.csv",
    "aus_med_supplies.csv",
];
pub const DEFAULT_TRAFFIC_FILE: &str = "traffic.csv";
pub const JOIN_KEY: &str = "Date";
pub const VISITS_COLUMN: &str = "Visits";
pub const VISITS_RENAMED_TO: &str = "ausmedsupply.com.au";

// Geocode
pub const DEFAULT_STORE_DUMP: &str = "joint_ils_aid.csv";
pub const DEFAULT_STORE_FILE: &str = "joint_ils_aid_geocoded.csv";
pub const SKIP_ROWS: usize = 2;
pub const SPLIT_LIMIT: usize = 3;
pub const STORE_DUMP_FIELDS: usize = 4;
pub const ADDRESS_FIELD: usize = 1;
pub const REQUEST_PAUSE_MS: u64 = 100; // stay under the provider's QPS cap
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
pub const API_KEY_ENV: &str = "GEOCODING_API_KEY";
pub const USER_AGENT: &str = "presence_dash/0.1";

pub const STORE_HEADERS: [&str; 6] = [
    "Store", "Address", "Phone Number", "Type", "Latitude", "Longitude",
];

// Dashboard
pub const APP_TITLE: &str = "Online Presence Dashboard";
pub const APP_SUBTITLE: &str = "Source Data from SemRush Analytics";
pub const COMPARE_DEFAULT: usize = 3;
pub const MAP_CENTER: (f64, f64) = (-25.0, 133.0); // (lat, lng): Australia
pub const MAP_SPAN_DEG: f64 = 40.0;
