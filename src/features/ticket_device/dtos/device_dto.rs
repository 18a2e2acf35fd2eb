use serde::{Deserialize, Serialize};

use crate::features::ticket_device::models::TicketDevice;

/// Read-only view of the device counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshotDto {
    pub price: i64,
    pub balance: i64,
    pub total_revenue: i64,
    pub tickets_issued: u64,
}

impl From<&TicketDevice> for DeviceSnapshotDto {
    fn from(device: &TicketDevice) -> Self {
        Self {
            price: device.price(),
            balance: device.balance(),
            total_revenue: device.total_revenue(),
            tickets_issued: device.tickets_issued(),
        }
    }
}

/// Result of an issue request. `issued` is false when funds were short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueOutcomeDto {
    pub issued: bool,
    pub balance: i64,
    pub total_revenue: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundOutcomeDto {
    pub refunded: i64,
}

/// Data payload returned by a console command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutcomeDto {
    Deposited(DeviceSnapshotDto),
    Issue(IssueOutcomeDto),
    Refund(RefundOutcomeDto),
    Status(DeviceSnapshotDto),
    Help { usage: String },
}
