// Protected handlers: the session guard has already bound an AuthUser to the
// request before any of these run.

pub mod bookings;
pub mod payments;
pub mod rooms;
pub mod users;
