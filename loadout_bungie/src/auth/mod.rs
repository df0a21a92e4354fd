mod service;
mod types;

pub use service::{AuthService, Clock, SystemClock};
pub use types::{Credentials, TokenResponse};
