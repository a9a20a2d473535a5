//! Storage migrations for pallet-token-ledger.
//!
//! Each migration is versioned against `STORAGE_VERSION` in `lib.rs` and runs
//! exactly once: the version check makes re-runs a no-op. To add a migration,
//! bump `STORAGE_VERSION`, add a `vN` module implementing [`OnRuntimeUpgrade`]
//! here, add tests, and wire it into the host runtime's `Executive` migration
//! tuple:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_token_ledger::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```
//!
//! Migrations must be sequential (v1 → v2 → v3), idempotent, and report
//! accurate weights for the storage operations they perform. Use `log::info!`
//! with the `pallet-token-ledger` target so progress shows up during runtime
//! upgrades.

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet};

/// Migration to version 1 (initial release).
///
/// v1 is the first storage layout (metadata, `TotalSupply`, `Balances`,
/// `Allowances`), so there is nothing to transform from v0. The module pins
/// the on-chain version and establishes the pattern for later migrations —
/// e.g. a future v2 reshaping `Allowances` would drain the old map here and
/// re-insert under the new layout.
pub mod v1 {
    use super::*;

    /// Migration struct for upgrading storage to version 1.
    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                log::info!(
                    target: "pallet-token-ledger",
                    "Running migration v0 → v1 (no-op for initial release)"
                );

                StorageVersion::new(1).put::<Pallet<T>>();

                // 1 read (version check) + 1 write (version update)
                T::DbWeight::get().reads_writes(1, 1)
            } else {
                log::info!(
                    target: "pallet-token-ledger",
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );

                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: "pallet-token-ledger",
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );

            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            let post_version = Pallet::<T>::on_chain_storage_version();

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
            }

            Ok(())
        }
    }
}
