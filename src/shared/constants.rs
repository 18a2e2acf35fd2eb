/// Ticket price used when `TICKET_PRICE` is not set
pub const DEFAULT_TICKET_PRICE: i64 = 50;

/// Device name used when `DEVICE_NAME` is not set
pub const DEFAULT_DEVICE_NAME: &str = "ticket-device";

// =============================================================================
// CONSOLE COMMANDS
// =============================================================================

pub const HELP_TEXT: &str = "commands: deposit <amount> | issue | refund | status | help | quit";
