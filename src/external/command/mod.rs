/// Synchronous execution of external commands
pub mod interface;
pub mod mock;
pub mod system;

pub use interface::*;
pub use system::SystemCommandRunner;
