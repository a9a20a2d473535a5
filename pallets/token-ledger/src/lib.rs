#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated weight constants for MVP (will be replaced by benchmarks)
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;

pub mod migrations;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Reserved account that can never receive value. Transfers targeting
        /// it are rejected with [`Error::InvalidRecipient`].
        type NullAccount: Get<Self::AccountId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "DApp Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "DAPP")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals, display scaling only. Stored amounts are already scaled.
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply, fixed at genesis. No mint or burn exists.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Delegated spending limits: (owner, spender) -> remaining allowance
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved from one account to another. Delegated transfers
        /// emit the same event as direct ones, with `from` being the owner.
        Transfer { from: T::AccountId, to: T::AccountId, value: u128 },
        /// An owner set a spender's allowance to an absolute value
        Approval { owner: T::AccountId, spender: T::AccountId, value: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Transfer targets the null account
        InvalidRecipient,
        /// Sender/owner balance below the requested amount
        InsufficientBalance,
        /// Spender's approved amount below the requested amount
        InsufficientAllowance,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Move `amount` from the caller to `to`.
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(to != T::NullAccount::get(), Error::<T>::InvalidRecipient);
            ensure!(Balances::<T>::get(&sender) >= amount, Error::<T>::InsufficientBalance);

            Balances::<T>::mutate(&sender, |bal| *bal -= amount);
            Balances::<T>::mutate(to.clone(), |bal| *bal += amount);
            Self::deposit_event(Event::Transfer { from: sender, to, value: amount });
            Ok(())
        }

        /// Set `spender`'s allowance over the caller's balance to `amount`.
        ///
        /// The write is absolute, not additive: a second approve overwrites
        /// the first. The amount may exceed the caller's current balance;
        /// spendability is only checked at `transfer_from` time.
        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;

            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, value: amount });
            Ok(())
        }

        /// Move `amount` from `owner` to `to`, spending the caller's
        /// allowance. The allowance is reduced by exactly `amount`.
        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            ensure!(to != T::NullAccount::get(), Error::<T>::InvalidRecipient);
            ensure!(
                Allowances::<T>::get(&owner, &spender) >= amount,
                Error::<T>::InsufficientAllowance
            );
            ensure!(Balances::<T>::get(&owner) >= amount, Error::<T>::InsufficientBalance);

            Balances::<T>::mutate(&owner, |bal| *bal -= amount);
            Balances::<T>::mutate(to.clone(), |bal| *bal += amount);
            Allowances::<T>::mutate(&owner, &spender, |a| *a -= amount);
            Self::deposit_event(Event::Transfer { from: owner, to, value: amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Account credited with the entire supply at genesis
        pub creator: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Total supply, minted entirely to the creator
        pub total_supply: u128,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            // Set token metadata
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            // Mint the whole supply to the creator. Without a creator the
            // ledger starts empty, keeping sum(balances) == TotalSupply.
            if let Some(ref creator) = self.creator {
                Balances::<T>::insert(creator, self.total_supply);
                TotalSupply::<T>::put(self.total_supply);
            }
        }
    }
}
