use crate::core::error::DeviceError;

/// A single fixed-price ticket vending unit.
///
/// Deposits accumulate into `balance`. Each successful issuance moves exactly
/// `price` from the balance into `total_revenue`; any excess stays in the
/// balance for the next ticket or a refund.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketDevice {
    price: i64,
    balance: i64,
    total_revenue: i64,
    tickets_issued: u64,
}

impl TicketDevice {
    /// Create a device selling tickets at `price`. Fails if `price <= 0`.
    pub fn new(price: i64) -> Result<Self, DeviceError> {
        if price <= 0 {
            return Err(DeviceError::InvalidConfiguration(format!(
                "ticket price must be positive, got {}",
                price
            )));
        }

        Ok(Self {
            price,
            balance: 0,
            total_revenue: 0,
            tickets_issued: 0,
        })
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn total_revenue(&self) -> i64 {
        self.total_revenue
    }

    pub fn tickets_issued(&self) -> u64 {
        self.tickets_issued
    }

    /// Add `amount` to the balance.
    ///
    /// Zero and negative amounts are rejected, as is any amount that would
    /// overflow the balance. The balance is unchanged on error.
    pub fn deposit(&mut self, amount: i64) -> Result<(), DeviceError> {
        if amount <= 0 {
            return Err(DeviceError::InvalidAmount(format!(
                "amount must be positive, got {}",
                amount
            )));
        }

        let balance = self.balance.checked_add(amount).ok_or_else(|| {
            DeviceError::InvalidAmount(format!(
                "amount {} would overflow balance {}",
                amount, self.balance
            ))
        })?;

        self.balance = balance;
        tracing::debug!("Deposit accepted: amount={}, balance={}", amount, balance);

        Ok(())
    }

    /// Issue one ticket if the balance covers the price.
    ///
    /// Returns `false` without touching any counter when funds are short or
    /// when revenue could no longer grow by exactly `price`.
    pub fn issue_ticket(&mut self) -> bool {
        if self.balance < self.price {
            tracing::debug!(
                "Ticket not issued: balance={}, price={}",
                self.balance,
                self.price
            );
            return false;
        }

        let Some(total_revenue) = self.total_revenue.checked_add(self.price) else {
            tracing::warn!(
                "Ticket not issued: revenue {} cannot grow by price {}",
                self.total_revenue,
                self.price
            );
            return false;
        };

        self.balance -= self.price;
        self.total_revenue = total_revenue;
        self.tickets_issued += 1;

        tracing::info!(
            "Ticket issued: price={}, balance={}, total_revenue={}",
            self.price,
            self.balance,
            self.total_revenue
        );

        true
    }

    /// Hand back the whole balance and reset it to zero.
    pub fn refund(&mut self) -> i64 {
        let amount = std::mem::take(&mut self.balance);
        if amount > 0 {
            tracing::info!("Refunded: amount={}", amount);
        }
        amount
    }
}
