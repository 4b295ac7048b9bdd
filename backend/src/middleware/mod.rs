pub mod logging;
pub mod request_id;
pub mod session;

pub use logging::*;
pub use request_id::*;
pub use session::*;
