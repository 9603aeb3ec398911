#![cfg_attr(not(feature = "std"), no_std, no_main)]

/// Burnable token whose whole supply is minted to one owner at deployment.
#[ink::contract]
mod fixed_supply {
    use ink::prelude::string::String;
    use ink::storage::Mapping;
    use token_ledger::{Error, Ledger, LedgerEvent, LedgerStore};

    pub type Result<T> = core::result::Result<T, Error>;

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
    pub struct FixedSupply {
        // metadata, fixed at construction
        name: String,
        symbol: String,
        events_enabled: bool,

        // token state
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
    }

    token_ledger::mapping_store!(FixedSupply);

    impl FixedSupply {
        // -------- constructors --------

        /// Mints `initial_supply` to `owner_acc`. Events are off.
        #[ink(constructor)]
        pub fn new(name: String, symbol: String, initial_supply: Balance, owner_acc: AccountId) -> Result<Self> {
            Self::with_events(name, symbol, initial_supply, owner_acc, false)
        }

        #[ink(constructor)]
        pub fn with_events(
            name: String,
            symbol: String,
            initial_supply: Balance,
            owner_acc: AccountId,
            generate_events: bool,
        ) -> Result<Self> {
            let mut instance = Self {
                name,
                symbol,
                events_enabled: generate_events,
                total_supply: 0,
                balances: Mapping::default(),
                allowances: Mapping::default(),
            };
            instance.with_ledger(|ledger| ledger.mint(owner_acc, initial_supply))?;
            ink::env::debug_println!("fixed_supply: minted {} {} to {:?}", initial_supply, instance.symbol, owner_acc);
            Ok(instance)
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

        #[ink(message)]
        pub fn burn(&mut self, amount_val: Balance) -> Result<()> {
            let caller_acc = self.env().caller();
            self.with_ledger(|ledger| ledger.burn(caller_acc, amount_val))
        }

        #[ink(message)]
        pub fn burn_from(&mut self, from_acc: AccountId, amount_val: Balance) -> Result<()> {
            let caller_acc = self.env().caller();
            self.with_ledger(|ledger| ledger.burn_from(caller_acc, from_acc, amount_val))
        }

        // ---- internals ----

        /// Runs `op` against contract storage and publishes its events on success.
        fn with_ledger<T>(&mut self, op: impl FnOnce(&mut Ledger<&mut Self>) -> Result<T>) -> Result<T> {
            let events_enabled = self.events_enabled;
            let (value, events) = Ledger::new(&mut *self, events_enabled)
                .apply(op)
                .map_err(|err| {
                    ink::env::debug_println!("fixed_supply: rejected: {:?}", err);
                    err
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
