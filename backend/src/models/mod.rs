pub mod feedback;
pub mod ride_requests;
pub mod rides;
pub mod users;

pub use feedback::{Feedback, NewFeedback};
pub use ride_requests::{NewRideRequest, Progress, RideRequest, RideRequestSummary};
pub use rides::{NewRide, Ride};
pub use users::{ProfileUpdate, UpiUpdate, User};
