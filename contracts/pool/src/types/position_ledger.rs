use common::{bps_mul, mul_div_floor, FixedI128};
use pool_interface::types::asset_config::AssetConfig;
use pool_interface::types::error::Error;
use pool_interface::types::position::Position;
use pool_interface::types::user_config::UserConfiguration;
use soroban_sdk::{Address, Env, Map};

use crate::storage::{
    has_user_config, read_accounts, read_asset_config, read_assets, read_position,
    read_user_config, write_account_position, write_accounts, write_position, write_user_config,
};

use super::account_data::AccountData;
use super::price_provider::PriceProvider;

/// Sole writer of account balances.
///
/// Mutations are staged in memory, valued with fresh prices and written only
/// once the staged state passes validation. Dropping a ledger with staged
/// changes discards them.
pub struct PositionLedger<'a> {
    env: &'a Env,
    account: Address,
    user_config: UserConfiguration,
    staged: Map<Address, Position>,
}

impl<'a> PositionLedger<'a> {
    pub fn new(env: &'a Env, account: &Address) -> Self {
        Self {
            env,
            account: account.clone(),
            user_config: read_user_config(env, account),
            staged: Map::new(env),
        }
    }

    /// Staged position if any, stored otherwise
    pub fn position(&self, asset: &Address) -> Position {
        self.staged
            .get(asset.clone())
            .unwrap_or_else(|| read_position(self.env, &self.account, asset))
    }

    pub fn stage_deposit(
        &mut self,
        prices: &mut PriceProvider,
        config: &AssetConfig,
        amount: i128,
    ) -> Result<AccountData, Error> {
        let mut position = self.position(&config.asset);
        position.collateral = position
            .collateral
            .checked_add(amount)
            .ok_or(Error::MathOverflowError)?;

        self.stage(config, position);

        self.evaluate(prices)
    }

    /// Stages a withdrawal and validates solvency without writing
    pub fn stage_withdraw(
        &mut self,
        prices: &mut PriceProvider,
        config: &AssetConfig,
        amount: i128,
    ) -> Result<AccountData, Error> {
        let mut position = self.position(&config.asset);

        if position.collateral < amount {
            return Err(Error::NotEnoughCollateral);
        }

        position.collateral -= amount;

        self.stage(config, position);
        let data = self.evaluate(prices)?;
        require_solvent(&data)?;

        Ok(data)
    }

    /// Stages a borrow and validates it without writing
    pub fn stage_borrow(
        &mut self,
        prices: &mut PriceProvider,
        config: &AssetConfig,
        amount: i128,
    ) -> Result<AccountData, Error> {
        let mut position = self.position(&config.asset);
        position.debt = position
            .debt
            .checked_add(amount)
            .ok_or(Error::MathOverflowError)?;

        self.stage(config, position);
        let data = self.evaluate(prices)?;
        require_solvent(&data)?;

        Ok(data)
    }

    /// Applies at most the recorded debt, returns the applied amount.
    /// Lowering debt never lowers the health factor, so the decrement is
    /// written even without usable prices. The summary then waits for `refresh`.
    pub fn record_repay(
        &mut self,
        prices: &mut PriceProvider,
        config: &AssetConfig,
        amount: i128,
    ) -> i128 {
        let mut position = self.position(&config.asset);
        let applied = amount.min(position.debt).max(0);

        position.debt -= applied;

        self.stage(config, position);

        match self.evaluate(prices) {
            Ok(data) => self.commit(&data),
            Err(_) => self.commit_positions(),
        }

        applied
    }

    /// Stages the balance changes of a liquidation. Amounts must not exceed the balances.
    pub fn stage_liquidation(
        &mut self,
        collateral_config: &AssetConfig,
        collateral_seized: i128,
        debt_config: &AssetConfig,
        debt_covered: i128,
    ) -> Result<(), Error> {
        let mut collateral = self.position(&collateral_config.asset);
        collateral.collateral = collateral
            .collateral
            .checked_sub(collateral_seized)
            .filter(|balance| !balance.is_negative())
            .ok_or(Error::NotEnoughCollateral)?;
        self.stage(collateral_config, collateral);

        let mut debt = self.position(&debt_config.asset);
        debt.debt = debt
            .debt
            .checked_sub(debt_covered)
            .filter(|balance| !balance.is_negative())
            .ok_or(Error::NoDebtToLiquidate)?;
        self.stage(debt_config, debt);

        Ok(())
    }

    /// Recomputes the account summary with fresh prices and stores it
    pub fn refresh(&mut self, prices: &mut PriceProvider) -> Result<AccountData, Error> {
        let data = self.evaluate(prices)?;
        write_account_position(
            self.env,
            &self.account,
            &data.to_position(self.env.ledger().timestamp()),
        );

        Ok(data)
    }

    /// Values every asset the account holds, staged positions included
    pub fn evaluate(&self, prices: &mut PriceProvider) -> Result<AccountData, Error> {
        let env = self.env;
        let mut data = AccountData::default();

        for asset in read_assets(env).iter() {
            let config = read_asset_config(env, &asset)?;

            if !self.user_config.has_any(env, config.index) && !self.staged.contains_key(asset.clone()) {
                continue;
            }

            let position = self.position(&asset);

            if position.collateral > 0 {
                let value = prices.to_value(&asset, config.decimals, position.collateral)?;

                data.collateral_value = data
                    .collateral_value
                    .checked_add(value)
                    .ok_or(Error::MathOverflowError)?;
                data.weighted_collateral = bps_mul(value, config.liquidation_threshold)
                    .and_then(|weighted| data.weighted_collateral.checked_add(weighted))
                    .ok_or(Error::MathOverflowError)?;
                data.borrow_capacity = bps_mul(value, config.ltv)
                    .and_then(|capacity| data.borrow_capacity.checked_add(capacity))
                    .ok_or(Error::MathOverflowError)?;
            }

            if position.debt > 0 {
                let value = prices.to_value(&asset, config.decimals, position.debt)?;

                data.debt_value = data
                    .debt_value
                    .checked_add(value)
                    .ok_or(Error::MathOverflowError)?;
            }
        }

        data.health_factor = health_factor(env, data.weighted_collateral, data.debt_value)?;

        Ok(data)
    }

    /// Writes staged positions and the account summary computed from them
    pub fn commit(&mut self, data: &AccountData) {
        self.commit_positions();

        write_account_position(
            self.env,
            &self.account,
            &data.to_position(self.env.ledger().timestamp()),
        );
    }

    /// Writes staged positions, leaving the stored summary untouched
    fn commit_positions(&mut self) {
        let env = self.env;

        if !has_user_config(env, &self.account) {
            let mut accounts = read_accounts(env);
            accounts.push_back(self.account.clone());
            write_accounts(env, &accounts);
        }

        for (asset, position) in self.staged.iter() {
            write_position(env, &self.account, &asset, &position);
        }

        write_user_config(env, &self.account, &self.user_config);

        self.staged = Map::new(env);
    }

    fn stage(&mut self, config: &AssetConfig, position: Position) {
        self.user_config
            .set_collateral(self.env, config.index, position.collateral > 0);
        self.user_config
            .set_debt(self.env, config.index, position.debt > 0);
        self.staged.set(config.asset.clone(), position);
    }
}

/// Σ(collateral value × liquidation threshold) / debt value, `i128::MAX` without debt
pub fn health_factor(env: &Env, weighted_collateral: i128, debt_value: i128) -> Result<i128, Error> {
    if debt_value == 0 {
        return Ok(i128::MAX);
    }

    mul_div_floor(
        env,
        weighted_collateral,
        FixedI128::ONE.into_inner(),
        debt_value,
    )
    .ok_or(Error::MathOverflowError)
}

fn require_solvent(data: &AccountData) -> Result<(), Error> {
    if !data.is_healthy() {
        return Err(Error::HealthFactorTooLow);
    }

    if !data.is_within_capacity() {
        return Err(Error::InsufficientCollateral);
    }

    Ok(())
}
