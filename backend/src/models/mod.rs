pub mod session;

pub use session::{AuthUserPayload, TokenGrant};
