use ink::prelude::string::String;

pub use ink::primitives::AccountId;

/// Token amount. All arithmetic on it is checked.
pub type Balance = u128;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(scale::Encode, scale::Decode, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// Sender, recipient, owner or spender is the null account.
    NullAccount,
    InsufficientBalance,
    /// Spend or burn exceeds the approved allowance.
    AllowanceExceeded,
    /// `decrease_allowance` would take the allowance below zero.
    AllowanceUnderflow,
    CapExceeded,
    Overflow,
    /// A registered transfer hook refused the movement.
    HookRejected,
}

/// Notification describing a completed state change.
///
/// Mint leaves `from` unset, burn leaves `to` unset.
#[derive(scale::Encode, scale::Decode, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum LedgerEvent {
    Transfer {
        from: Option<AccountId>,
        to: Option<AccountId>,
        value: Balance,
    },
    Approval {
        owner: AccountId,
        spender: AccountId,
        value: Balance,
    },
}

/// Immutable token description, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    name: String,
    symbol: String,
    events_enabled: bool,
}

impl Metadata {
    pub fn new(name: String, symbol: String, events_enabled: bool) -> Self {
        Self { name, symbol, events_enabled }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn events_enabled(&self) -> bool {
        self.events_enabled
    }
}

/// The unset identity: all 32 bytes zero.
pub fn null_account() -> AccountId {
    AccountId::from([0u8; 32])
}

pub fn is_null(account: &AccountId) -> bool {
    *account == null_account()
}

/// Rejects the null account as a party to a mutating call.
pub(crate) fn ensure_account(account: &AccountId) -> Result<()> {
    if is_null(account) {
        return Err(Error::NullAccount)
    }
    Ok(())
}
