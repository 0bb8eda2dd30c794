pub mod connection;
pub mod feedback;
pub mod migrations;
pub mod ride_requests;
pub mod rides;
pub mod users;

pub use connection::{get_db_pool, DatabaseConfig};
pub use ride_requests::AcceptOutcome;
