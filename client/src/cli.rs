//! Command-line surface of the client. Each subcommand maps onto one screen
//! of the mobile flow: login, ride posting and browsing, requesting a ride,
//! the driver's accept, the rider's status watch, trip completion, payment
//! and feedback.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "rideshare-cli", about = "Command-line client for the rideshare API")]
pub struct Cli {
    /// Base URL of the rideshare server
    #[arg(long, env = "RIDESHARE_SERVER_URL", default_value = "http://localhost:3000")]
    pub server_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with email and password
    Login { email: String, password: String },

    /// Show a user's profile
    Profile { user_id: i32 },

    /// Set a user's UPI id
    SetUpi { user_id: i32, upi_id: String },

    /// Post a ride offer (driver)
    PostRide {
        #[arg(long)]
        driver_name: String,
        #[arg(long)]
        vehicle_info: String,
        #[arg(long)]
        origin: String,
        #[arg(long)]
        destination: String,
        #[arg(long)]
        seats: i32,
        /// Departure date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Departure time, HH:MM:SS
        #[arg(long)]
        time: String,
    },

    /// List available rides
    Rides,

    /// Post a ride request (rider)
    RequestRide {
        #[arg(long)]
        rider_name: String,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        pickup: String,
        #[arg(long)]
        destination: String,
        #[arg(long)]
        contact: String,
        /// Expo push token for the accept notification
        #[arg(long)]
        push_token: String,
    },

    /// List open ride requests (driver)
    Requests,

    /// Accept a ride request (driver)
    Accept { request_id: i32, driver_name: String },

    /// Check a ride request's status once
    Status { request_id: i32 },

    /// Poll a ride request until a driver accepts (Ctrl-C to stop)
    Watch {
        request_id: i32,
        /// Poll interval in seconds
        #[arg(long, default_value_t = 5)]
        interval_secs: u64,
    },

    /// Mark a trip as completed (rider reached the destination)
    Reached { driver_name: String, progress_id: i32 },

    /// Estimate distance, ETA and fare between two places
    Estimate { from: String, to: String },

    /// Print the UPI deep link for a payment QR
    PayLink {
        upi_id: String,
        payee_name: String,
        amount: f64,
    },

    /// Submit feedback
    Feedback {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        text: String,
        #[arg(long)]
        rating: i32,
        #[arg(long)]
        issue: String,
    },
}
