use soroban_sdk::{assert_with_error, contracttype, Env};

use crate::types::error::Error;

/// Upper bound of configured assets, two flags per asset in a u128
pub const MAX_ASSETS: u32 = 64;

const DEBT_MASK: u128 = 0x55555555555555555555555555555555;

/// Bitmap of the assets an account holds.
/// Bit `2 * index` flags debt, bit `2 * index + 1` flags collateral.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserConfiguration(u128);

impl UserConfiguration {
    pub fn set_debt(&mut self, env: &Env, asset_index: u32, has_debt: bool) {
        self.set_bit(env, asset_index * 2, has_debt);
    }

    pub fn set_collateral(&mut self, env: &Env, asset_index: u32, has_collateral: bool) {
        self.set_bit(env, asset_index * 2 + 1, has_collateral);
    }

    pub fn has_debt(&self, env: &Env, asset_index: u32) -> bool {
        Self::require_asset_index(env, asset_index);
        (self.0 >> (asset_index * 2)) & 1 != 0
    }

    pub fn has_collateral(&self, env: &Env, asset_index: u32) -> bool {
        Self::require_asset_index(env, asset_index);
        (self.0 >> (asset_index * 2 + 1)) & 1 != 0
    }

    pub fn has_any(&self, env: &Env, asset_index: u32) -> bool {
        Self::require_asset_index(env, asset_index);
        (self.0 >> (asset_index * 2)) & 3 != 0
    }

    pub fn has_any_debt(&self) -> bool {
        self.0 & DEBT_MASK != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    fn set_bit(&mut self, env: &Env, bit: u32, value: bool) {
        Self::require_asset_index(env, bit / 2);
        self.0 = (self.0 & !(1u128 << bit)) | ((value as u128) << bit);
    }

    fn require_asset_index(env: &Env, asset_index: u32) {
        assert_with_error!(env, asset_index < MAX_ASSETS, Error::UserConfigInvalidIndex);
    }
}
