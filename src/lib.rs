//! Fixed-price ticket vending device.
//!
//! - [`TicketDevice`]: the in-memory device state machine
//! - [`TicketDeviceService`]: mutex-guarded access for shared callers
//! - [`DeviceError`]: construction and deposit rejections
//!
//! # Example
//!
//! ```
//! use ticket_device::TicketDevice;
//!
//! let mut device = TicketDevice::new(50).unwrap();
//! device.deposit(80).unwrap();
//! assert!(device.issue_ticket());
//! assert_eq!(device.balance(), 30);
//! assert_eq!(device.refund(), 30);
//! ```

pub mod core;
pub mod features;
pub mod shared;

pub use crate::core::error::{AppError, DeviceError};
pub use crate::features::ticket_device::{TicketDevice, TicketDeviceService};
