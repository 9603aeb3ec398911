use crate::hooks::MintPolicy;
use crate::model::{Balance, Error, Result};

/// Immutable ceiling on total supply.
///
/// Minting up to the cap exactly is allowed; anything beyond is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapPolicy {
    cap: Balance,
}

impl CapPolicy {
    pub fn new(cap: Balance) -> Self {
        Self { cap }
    }

    pub fn cap(&self) -> Balance {
        self.cap
    }
}

impl MintPolicy for CapPolicy {
    fn check_mint(&self, total_supply: Balance, amount: Balance) -> Result<()> {
        // a sum past u128::MAX is past any cap
        let would_have = total_supply.checked_add(amount).ok_or(Error::CapExceeded)?;
        if would_have > self.cap {
            return Err(Error::CapExceeded)
        }
        Ok(())
    }

    fn cap(&self) -> Option<Balance> {
        Some(self.cap)
    }
}
