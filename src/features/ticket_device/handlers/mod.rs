pub mod command_handler;
pub mod session;

pub use command_handler::{handle_command, parse_command, DeviceCommand};
pub use session::run_session;
