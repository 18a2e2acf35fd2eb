pub mod ticket_device;
