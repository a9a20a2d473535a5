use crate as pallet_token_ledger;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        TokenLedger: pallet_token_ledger,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

parameter_types! {
    /// Account 0 stands in for the zero address; it can never receive value.
    pub const NullAccount: u64 = 0;
}

impl pallet_token_ledger::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type NullAccount = NullAccount;
}

/// The account the whole supply is minted to at genesis.
pub const DEPLOYER: u64 = 1;
pub const RECEIVER: u64 = 2;
pub const EXCHANGE: u64 = 3;

/// Scale a whole-token amount by the 18-decimal display factor.
pub fn tokens(n: u128) -> u128 {
    n * 1_000_000_000_000_000_000
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_token_ledger::GenesisConfig::<Test> {
        creator: Some(DEPLOYER),
        token_name: b"DApp Token".to_vec(),
        token_symbol: b"DAPP".to_vec(),
        decimals: 18,
        total_supply: tokens(1_000_000),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    t.into()
}
