pub mod api;
pub mod cli;
pub mod error;
pub mod geo;
pub mod geocode;
pub mod models;
pub mod payment;
pub mod poll;
pub mod session;

pub use api::ApiClient;
pub use error::{ClientError, Result};
pub use geo::Coordinate;
pub use models::RideStatus;
pub use poll::{PollOutcome, StatusPoller};
pub use session::{Session, SessionManager};
