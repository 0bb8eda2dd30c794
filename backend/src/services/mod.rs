pub mod push;

pub use push::{is_expo_push_token, PushService};
