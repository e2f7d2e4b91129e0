// Public handlers: reachable without a session credential.
//
// Token issuance and logout manage the session cookie itself; the room
// catalog is the one openly browsable collection; the conditional user save
// runs during first-login bootstrap, before any credential exists.

pub mod rooms;
pub mod session;
pub mod users;
