use std::path::Path;

use solana_sdk::{
    bpf_loader_upgradeable::UpgradeableLoaderState, rent::Rent,
};

use crate::{
    consts::{
        BRIDGE_CONFIG_LEN, BRIDGE_SO_SIZE, DEPLOY_TX_ESTIMATE,
        FEE_PER_TX_LAMPORTS, VAULT_ACCOUNT_LEN,
    },
    errors::{DeployCostError, DeployCostResult},
};

/// Minimum balance needed to keep an account of `data_len` bytes
/// rent-exempt, i.e. `(data_len + 128) * 6960` lamports under the default
/// rent parameters (3480 lamports per byte-year over a two year horizon).
pub fn rent_exempt_lamports(data_len: usize) -> u64 {
    Rent::default().minimum_balance(data_len)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployCostParams {
    pub so_size: usize,
    pub deploy_tx_count: u64,
}

impl Default for DeployCostParams {
    fn default() -> Self {
        Self {
            so_size: BRIDGE_SO_SIZE,
            deploy_tx_count: DEPLOY_TX_ESTIMATE,
        }
    }
}

/// Line items of a deploy, all amounts in lamports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeployCostEstimate {
    pub so_size: usize,
    pub program_data_len: usize,
    pub rent_programdata: u64,
    pub rent_config: u64,
    pub rent_vault: u64,
    pub tx_fees: u64,
}

impl DeployCostEstimate {
    pub fn total_lamports(&self) -> u64 {
        self.rent_programdata + self.rent_config + self.rent_vault
            + self.tx_fees
    }
}

/// Estimates what deploying the bridge program costs on chain.
///
/// The upgradeable loader allocates the programdata account at twice the
/// binary size (leaving room for the upgrade buffer) plus its metadata
/// header. On top of that rent we need the BridgeConfig PDA, the vault ATA
/// and the fees for the deploy transactions themselves.
pub fn estimate_deploy_cost(params: &DeployCostParams) -> DeployCostEstimate {
    let program_data_len = UpgradeableLoaderState::size_of_programdata_metadata()
        + params.so_size * 2;

    DeployCostEstimate {
        so_size: params.so_size,
        program_data_len,
        rent_programdata: rent_exempt_lamports(program_data_len),
        rent_config: rent_exempt_lamports(BRIDGE_CONFIG_LEN),
        rent_vault: rent_exempt_lamports(VAULT_ACCOUNT_LEN),
        tx_fees: FEE_PER_TX_LAMPORTS
            .saturating_mul(params.deploy_tx_count),
    }
}

/// Reads the size of a compiled program binary from disk.
pub fn binary_size(so_path: &Path) -> DeployCostResult<usize> {
    let len = std::fs::metadata(so_path)?.len();
    if len == 0 {
        return Err(DeployCostError::EmptyProgramBinary(
            so_path.to_path_buf(),
        ));
    }
    Ok(len as usize)
}
