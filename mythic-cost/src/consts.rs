use solana_sdk::program_pack::Pack;
use spl_token::state::Account as TokenAccount;

/// Byte size of the last released L1 bridge binary (target/deploy/bridge.so).
pub const BRIDGE_SO_SIZE: usize = 142_448;

/// Byte size of the BridgeConfig PDA.
/// 32 + 32 + 8 + 8 + 1 + 1 + 1 + 8 + 8 + 8 + 8 + 8 = 123
pub const BRIDGE_CONFIG_LEN: usize = 123;

/// Byte size of the SPL token account holding the bridge vault balance.
pub const VAULT_ACCOUNT_LEN: usize = TokenAccount::LEN;

/// Flat fee per deploy transaction: two signatures at 5000 lamports each.
pub const FEE_PER_TX_LAMPORTS: u64 = 10_000;

/// Estimated transaction count for a full deploy: buffer writes plus one
/// init and one vault create. Chunked writes of a binary this size take
/// ~116 transactions at ~1232 bytes each, so this undershoots; it matches
/// the historical estimate and can be overridden per invocation.
pub const DEPLOY_TX_ESTIMATE: u64 = 30;

/// SOL budget the deploy wallet is funded with.
pub const DEPLOY_BUDGET_SOL: f64 = 4.0;
