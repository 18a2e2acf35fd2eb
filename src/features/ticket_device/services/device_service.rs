use std::sync::{Mutex, MutexGuard};

use crate::core::error::{AppError, Result};
use crate::features::ticket_device::dtos::{DeviceSnapshotDto, IssueOutcomeDto, RefundOutcomeDto};
use crate::features::ticket_device::models::TicketDevice;

/// Shared access to one ticket device.
///
/// Every call holds the lock for its whole duration, so concurrent callers
/// observe the same invariants as a single owner would.
pub struct TicketDeviceService {
    device: Mutex<TicketDevice>,
}

impl TicketDeviceService {
    pub fn new(price: i64) -> Result<Self> {
        let device = TicketDevice::new(price)?;
        tracing::info!("Ticket device ready: price={}", price);
        Ok(Self::from_device(device))
    }

    pub fn from_device(device: TicketDevice) -> Self {
        Self {
            device: Mutex::new(device),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TicketDevice>> {
        self.device.lock().map_err(|e| {
            tracing::error!("Ticket device lock poisoned: {}", e);
            AppError::Internal("ticket device lock poisoned".to_string())
        })
    }

    pub fn deposit(&self, amount: i64) -> Result<DeviceSnapshotDto> {
        let mut device = self.lock()?;
        device.deposit(amount)?;
        Ok(DeviceSnapshotDto::from(&*device))
    }

    pub fn issue_ticket(&self) -> Result<IssueOutcomeDto> {
        let mut device = self.lock()?;
        let issued = device.issue_ticket();

        Ok(IssueOutcomeDto {
            issued,
            balance: device.balance(),
            total_revenue: device.total_revenue(),
        })
    }

    pub fn refund(&self) -> Result<RefundOutcomeDto> {
        let mut device = self.lock()?;
        Ok(RefundOutcomeDto {
            refunded: device.refund(),
        })
    }

    pub fn snapshot(&self) -> Result<DeviceSnapshotDto> {
        let device = self.lock()?;
        Ok(DeviceSnapshotDto::from(&*device))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::core::error::DeviceError;

    #[test]
    fn test_new_rejects_invalid_price() {
        let err = TicketDeviceService::new(-20).err().unwrap();
        assert!(matches!(
            err,
            AppError::Device(DeviceError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_deposit_returns_snapshot() {
        let service = TicketDeviceService::new(50).unwrap();
        service.deposit(10).unwrap();
        let snapshot = service.deposit(20).unwrap();

        assert_eq!(snapshot.balance, 30);
        assert_eq!(snapshot.total_revenue, 0);
    }

    #[test]
    fn test_rejected_deposit_leaves_state() {
        let service = TicketDeviceService::new(50).unwrap();
        service.deposit(40).unwrap();

        let err = service.deposit(-10).unwrap_err();
        assert!(err.to_string().contains("amount must be positive"));
        assert_eq!(service.snapshot().unwrap().balance, 40);
    }

    #[test]
    fn test_issue_reports_short_funds_without_error() {
        let service = TicketDeviceService::new(50).unwrap();
        service.deposit(45).unwrap();

        let outcome = service.issue_ticket().unwrap();
        assert!(!outcome.issued);
        assert_eq!(outcome.balance, 45);
        assert_eq!(outcome.total_revenue, 0);
    }

    #[test]
    fn test_issue_then_refund_change() {
        let service = TicketDeviceService::new(50).unwrap();
        service.deposit(80).unwrap();

        let outcome = service.issue_ticket().unwrap();
        assert!(outcome.issued);
        assert_eq!(outcome.balance, 30);
        assert_eq!(outcome.total_revenue, 50);

        assert_eq!(service.refund().unwrap().refunded, 30);
        let snapshot = service.snapshot().unwrap();
        assert_eq!(snapshot.balance, 0);
        assert_eq!(snapshot.total_revenue, 50);
        assert_eq!(snapshot.tickets_issued, 1);
    }

    #[test]
    fn test_concurrent_deposits_are_serialized() {
        let service = Arc::new(TicketDeviceService::new(50).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    for _ in 0..100 {
                        service.deposit(5).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(service.snapshot().unwrap().balance, 8 * 100 * 5);
    }

    #[test]
    fn test_concurrent_issues_never_overdraw() {
        let service = Arc::new(TicketDeviceService::new(50).unwrap());
        service.deposit(50 * 10 + 20).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                thread::spawn(move || {
                    (0..10)
                        .filter(|_| service.issue_ticket().unwrap().issued)
                        .count()
                })
            })
            .collect();

        let issued: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        let snapshot = service.snapshot().unwrap();
        assert_eq!(issued, 10);
        assert_eq!(snapshot.balance, 20);
        assert_eq!(snapshot.total_revenue, 500);
    }
}
