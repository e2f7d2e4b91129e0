pub mod role;
pub mod session;

pub use role::{require_admin, require_host};
pub use session::{session_guard, AuthUser};
