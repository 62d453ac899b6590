//! Thin wrappers over host OS facilities: executable lookup, OS/distro
//! identification, and signal-safe retries around blocking calls.

pub mod os;
pub mod path;
pub mod retry;

pub use os::os_info;
pub use path::{find_in_path, is_in_path};
pub use retry::{retry_on_interrupt, retry_while};
