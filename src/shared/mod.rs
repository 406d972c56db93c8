//! Utilities shared by every runtime in this starter.
//!
//! The HTTP handlers and the `shared-demo` client binary call the same
//! functions, so the behavior pinned down here (timestamp layout, mock-user
//! selection, the permissive email check, the response envelope) is
//! identical on both sides of the wire.

pub mod clock;
pub mod email;
pub mod greeting;
pub mod response;
pub mod timestamp;
pub mod users;

pub use clock::{Clock, SystemClock};
pub use email::is_valid_email;
pub use greeting::generate_greeting;
pub use response::{ApiResponse, Timestamped, create_api_response};
pub use timestamp::format_timestamp;
pub use users::{MockUser, generate_mock_user};
