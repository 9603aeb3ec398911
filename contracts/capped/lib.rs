#![cfg_attr(not(feature = "std"), no_std, no_main)]

#[ink::contract]
mod capped {
    use ink::prelude::string::String;
    use ink::storage::Mapping;
    use token_ledger::{CapPolicy, Ledger, LedgerEvent, LedgerStore};

    pub type Result<T> = core::result::Result<T, Error>;

    #[derive(scale::Encode, scale::Decode, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        Ledger(token_ledger::Error),
        NotOwner,
    }

    impl From<token_ledger::Error> for Error {
        fn from(err: token_ledger::Error) -> Self {
            Error::Ledger(err)
        }
    }

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    #[ink(storage)]
    pub struct Capped {
        // governance
        owner_acc: AccountId,

        // metadata, fixed at construction
        name: String,
        symbol: String,
        events_enabled: bool,
        cap: Balance,

        // token state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
    }

    token_ledger::mapping_store!(Capped);

    impl Capped {
        // -------- constructors --------

        /// Empty token whose supply can never pass `cap`. The deployer may mint.
        #[ink(constructor)]
        pub fn new(name: String, symbol: String, cap: Balance) -> Self {
            Self::with_events(name, symbol, cap, false)
        }

        #[ink(constructor)]
        pub fn with_events(name: String, symbol: String, cap: Balance, generate_events: bool) -> Self {
            let owner_acc = Self::env().caller();
            ink::env::debug_println!("capped: {} deployed with cap {}", symbol, cap);
            Self {
                owner_acc,
                name,
                symbol,
                events_enabled: generate_events,
                cap,
                total_supply: 0,
                balances: Mapping::default(),
                allowances: Mapping::default(),
            }
        }

        // -------- modifiers (helpers) --------

        fn only_owner(&self) -> Result<()> {
            if self.env().caller() != self.owner_acc {
                return Err(Error::NotOwner)
            }
            Ok(())
        }

        // -------- read API --------

        #[ink(message)]
        pub fn name(&self) -> String {
            self.name.clone()
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            self.symbol.clone()
        }

        #[ink(message)]
        pub fn cap(&self) -> Balance {
            self.cap
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner_acc
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, owner_acc: AccountId) -> Balance {
            LedgerStore::balance(self, &owner_acc)
        }

        #[ink(message)]
        pub fn allowance(&self, owner_acc: AccountId, spender_acc: AccountId) -> Balance {
            LedgerStore::allowance(self, &owner_acc, &spender_acc)
        }

        // -------- write API --------

        /// Owner-only: mints `amount_val` to `to_acc` while the cap allows it.
        #[ink(message)]
        pub fn mint(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            self.only_owner()?;
            self.with_ledger(|ledger| ledger.mint(to_acc, amount_val))
        }

        #[ink(message)]
        pub fn transfer(&mut self, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let caller_acc = self.env().caller();
            self.with_ledger(|ledger| ledger.transfer(caller_acc, to_acc, amount_val))
        }

        #[ink(message)]
        pub fn approve(&mut self, spender_acc: AccountId, amount_val: Balance) -> Result<()> {
            let caller_acc = self.env().caller();
            self.with_ledger(|ledger| ledger.approve(caller_acc, spender_acc, amount_val))
        }

        /// Moves `amount_val` from `from_acc` to `to_acc` out of the allowance
        /// `from_acc` granted to the caller.
        #[ink(message)]
        pub fn transfer_from(&mut self, from_acc: AccountId, to_acc: AccountId, amount_val: Balance) -> Result<()> {
            let caller_acc = self.env().caller();
            self.with_ledger(|ledger| ledger.transfer_from(caller_acc, from_acc, to_acc, amount_val))
        }

        #[ink(message)]
        pub fn increase_allowance(&mut self, spender_acc: AccountId, add_val: Balance) -> Result<()> {
            let caller_acc = self.env().caller();
            self.with_ledger(|ledger| ledger.increase_allowance(caller_acc, spender_acc, add_val))
        }

        #[ink(message)]
        pub fn decrease_allowance(&mut self, spender_acc: AccountId, sub_val: Balance) -> Result<()> {
            let caller_acc = self.env().caller();
            self.with_ledger(|ledger| ledger.decrease_allowance(caller_acc, spender_acc, sub_val))
        }

        // ---- internals ----

        fn with_ledger<T>(
            &mut self,
            op: impl FnOnce(&mut Ledger<&mut Self>) -> token_ledger::Result<T>,
        ) -> Result<T> {
            let events_enabled = self.events_enabled;
            let policy = CapPolicy::new(self.cap);
            let (value, events) = Ledger::new(&mut *self, events_enabled)
                .with_mint_policy(policy)
                .apply(op)
                .map_err(|err| {
                    ink::env::debug_println!("capped: rejected: {:?}", err);
                    Error::from(err)
                })?;
            for event in events {
                self.publish(event);
            }
            Ok(value)
        }

        fn publish(&self, event: LedgerEvent) {
            match event {
                LedgerEvent::Transfer { from, to, value } => {
                    self.env().emit_event(Transfer { from, to, value })
                }
                LedgerEvent::Approval { owner, spender, value } => {
                    self.env().emit_event(Approval { owner, spender, value })
                }
            }
        }
    }

}
