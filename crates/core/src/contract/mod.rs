//! Contract types shared by every layer
//!
//! - `timestamp`: Microsecond timestamps for `created_on` / `updated_on`

pub mod timestamp;

pub use timestamp::Timestamp;
