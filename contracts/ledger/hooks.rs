use crate::model::{AccountId, Balance, Result};

/// Observer of every token movement, including mint and burn.
///
/// Calling conditions:
/// - `from` and `to` both set: `amount` moves from `from` to `to`.
/// - `from` unset: `amount` is minted to `to`.
/// - `to` unset: `amount` is burned from `from`.
///
/// `from` and `to` are never both unset.
pub trait TransferHook: Send {
    /// Runs after the ledger's own checks and before any write.
    /// Returning an error aborts the call with no state change.
    fn before_transfer(
        &mut self,
        _from: Option<AccountId>,
        _to: Option<AccountId>,
        _amount: Balance,
    ) -> Result<()> {
        Ok(())
    }

    /// Runs once the movement is written.
    fn after_transfer(&mut self, _from: Option<AccountId>, _to: Option<AccountId>, _amount: Balance) {}
}

/// Gate consulted before any supply increase.
pub trait MintPolicy: Send {
    fn check_mint(&self, total_supply: Balance, amount: Balance) -> Result<()>;

    /// Ceiling this policy enforces, if it has one.
    fn cap(&self) -> Option<Balance> {
        None
    }
}
