// =============================================================================
// Rideshare Backend Constants
// =============================================================================
// This file contains all constants used throughout the backend to enable
// easy tuning and configuration from a single location.

// =============================================================================
// RIDE REQUEST LIFECYCLE
// =============================================================================

/// Status of a ride request that no driver has picked up yet
pub const STATUS_PENDING: &str = "Pending";

/// Status of a ride request a driver has accepted
pub const STATUS_ACCEPTED: &str = "Accepted";

/// Progress value for a trip that is underway
pub const PROGRESS_ON_PROGRESS: &str = "on progress";

/// Progress value for a trip the rider has marked as finished
pub const PROGRESS_COMPLETED: &str = "completed";

// =============================================================================
// PUSH NOTIFICATIONS
// =============================================================================

/// Expo push gateway endpoint
pub const EXPO_PUSH_ENDPOINT: &str = "https://exp.host/--/api/v2/push/send";

/// Notification body sent to the rider when a driver accepts
pub const RIDE_ACCEPTED_MESSAGE: &str = "Your ride has been accepted!";

/// Sound key the Expo gateway understands
pub const PUSH_SOUND_DEFAULT: &str = "default";

/// Timeout for a single push gateway call in seconds
pub const PUSH_GATEWAY_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// SERVER CONFIGURATION
// =============================================================================

/// Default server port if not specified in environment
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Default maximum database connections in the pool
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
