// Elevated handlers: session guard plus a role guard (admin or host) have
// both passed before these run.

pub mod bookings;
pub mod stats;
pub mod users;
