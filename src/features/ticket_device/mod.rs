//! Fixed-price ticket vending device.
//!
//! The device accepts cumulative deposits and issues a ticket whenever the
//! balance covers the price. Excess funds stay in the balance; a refund hands
//! back whatever is left.
//!
//! ## Console commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `deposit <n>` | Add `n` to the balance (must be positive) |
//! | `issue` | Issue one ticket if the balance covers the price |
//! | `refund` | Return the balance and reset it to zero |
//! | `status` | Show price, balance, revenue and tickets issued |
//! | `help` | List commands |
//! | `quit` | Refund and end the session |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;

pub use models::TicketDevice;
pub use services::TicketDeviceService;
