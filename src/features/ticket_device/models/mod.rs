pub mod device;

pub use device::TicketDevice;
