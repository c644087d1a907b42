pub mod session;

pub use session::{AuthProvider, SessionState, SessionStore, SessionUser};
