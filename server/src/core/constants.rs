// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "BookManagement";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "book-management";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".book-management";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "book-management.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "BOOKS_CONFIG";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for debug mode
pub const ENV_DEBUG: &str = "BOOKS_DEBUG";

/// Environment variable for server host
pub const ENV_HOST: &str = "BOOKS_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "BOOKS_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "BOOKS_LOG";

/// Environment variable for the SQLite database file
pub const ENV_DATABASE: &str = "BOOKS_DATABASE";

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "BOOKS_DATA_DIR";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8080;

/// Log filter used when neither `BOOKS_LOG` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "info,book_management_server=info";

/// Log filter used in debug mode
pub const DEBUG_LOG_FILTER: &str = "debug,book_management_server=trace";

// =============================================================================
// SQLite Database
// =============================================================================

/// SQLite database filename
pub const SQLITE_DB_FILENAME: &str = "books.db";

/// SQLite connection pool max connections
pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

/// SQLite busy timeout in seconds
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 30;

/// SQLite cache size (negative = KB, so -16000 = 16MB)
pub const SQLITE_CACHE_SIZE: &str = "-16000";

/// SQLite WAL auto-checkpoint threshold (pages, ~4MB at 1000)
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";

/// WAL checkpoint interval in seconds (5 minutes)
pub const SQLITE_CHECKPOINT_INTERVAL_SECS: u64 = 300;

// =============================================================================
// HTTP
// =============================================================================

/// Body limit for API requests (64 KB)
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024;

/// API route prefix
pub const API_PREFIX: &str = "/api/v1";

// =============================================================================
// Shutdown
// =============================================================================

/// Max time to wait for background tasks during shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 30;
