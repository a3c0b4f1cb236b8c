use pool_interface::types::account_position::AccountPosition;
use pool_interface::types::account_risk::AccountRisk;
use pool_interface::types::action::Action;
use pool_interface::types::action_config::ActionConfig;
use pool_interface::types::asset_config::AssetConfig;
use pool_interface::types::chain_config::ChainConfig;
use pool_interface::types::error::Error;
use pool_interface::types::fallback_price::FallbackPrice;
use pool_interface::types::liquidation_config::LiquidationConfig;
use pool_interface::types::liquidation_request::LiquidationRequest;
use pool_interface::types::permission::Permission;
use pool_interface::types::pool_config::PoolConfig;
use pool_interface::types::position::Position;
use pool_interface::types::price_feed_config::PriceFeedConfig;
use pool_interface::types::protocol_state::ProtocolState;
use pool_interface::types::rate_limit::RateLimit;
use pool_interface::types::user_config::UserConfiguration;
use pool_interface::types::user_permissions::UserPermissions;
use pool_interface::types::user_rate_state::UserRateState;
use soroban_sdk::{contracttype, vec, Address, BytesN, Env, IntoVal, Val, Vec};

pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

pub(crate) const LOW_USER_DATA_BUMP_LEDGERS: u32 = 10 * DAY_IN_LEDGERS; // 10 days
pub(crate) const HIGH_USER_DATA_BUMP_LEDGERS: u32 = 20 * DAY_IN_LEDGERS; // 20 days

pub(crate) const LOW_INSTANCE_BUMP_LEDGERS: u32 = DAY_IN_LEDGERS; // 1 day
pub(crate) const HIGH_INSTANCE_BUMP_LEDGERS: u32 = 7 * DAY_IN_LEDGERS; // 7 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    // instance
    Config,
    ProtocolState,
    Permission(Permission),
    Assets,
    Asset(Address),
    PriceFeed(Address),
    FallbackPrice(Address),
    LiquidationConfig(Address),
    Chain(u64),
    RateLimit(Action),
    ActionConfig(Action),
    Locked,
    LiquidationRequestId,
    EmergencyWindow,
    // persistent
    Accounts,
    Position(Address, Address),
    UserConfig(Address),
    AccountPosition(Address),
    AccountRisk(Address),
    UserPermissions(Address),
    UserRateState(Address, Action),
    ProcessedMessage(BytesN<32>),
    SyntheticDebt(Address, Address, u64),
    Nonce(Address),
    LiquidationRequest(u64),
    RandomnessRequest(u64),
    OpenEmergencyRequest(Address),
}

/// Emergency liquidations queued within the current hour
#[derive(Clone, Default)]
#[contracttype]
pub struct EmergencyWindow {
    pub started_at: u64,
    pub count: u32,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(LOW_INSTANCE_BUMP_LEDGERS, HIGH_INSTANCE_BUMP_LEDGERS);
}

fn read_persistent<V: soroban_sdk::TryFromVal<Env, Val>>(env: &Env, key: &DataKey) -> Option<V> {
    let value = env.storage().persistent().get(key);

    if value.is_some() {
        env.storage().persistent().extend_ttl(
            key,
            LOW_USER_DATA_BUMP_LEDGERS,
            HIGH_USER_DATA_BUMP_LEDGERS,
        );
    }

    value
}

fn write_persistent<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    env.storage().persistent().extend_ttl(
        key,
        LOW_USER_DATA_BUMP_LEDGERS,
        HIGH_USER_DATA_BUMP_LEDGERS,
    );
}

pub fn has_config(env: &Env) -> bool {
    bump_instance(env);

    env.storage().instance().has(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &PoolConfig) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_config(env: &Env) -> Result<PoolConfig, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::Uninitialized)
}

pub fn read_protocol_state(env: &Env) -> ProtocolState {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::ProtocolState)
        .unwrap_or_default()
}

/// Bumps the version of the protocol state on every write
pub fn write_protocol_state(env: &Env, state: &ProtocolState) {
    bump_instance(env);

    let mut state = state.clone();
    state.version += 1;

    env.storage()
        .instance()
        .set(&DataKey::ProtocolState, &state);
}

pub fn read_permission_owners(env: &Env, permission: &Permission) -> Vec<Address> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Permission(permission.clone()))
        .unwrap_or(vec![env])
}

pub fn write_permission_owners(env: &Env, owners: &Vec<Address>, permission: &Permission) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::Permission(permission.clone()), owners);
}

pub fn read_assets(env: &Env) -> Vec<Address> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Assets)
        .unwrap_or(vec![env])
}

pub fn write_assets(env: &Env, assets: &Vec<Address>) {
    bump_instance(env);

    env.storage().instance().set(&DataKey::Assets, assets);
}

pub fn read_asset_config(env: &Env, asset: &Address) -> Result<AssetConfig, Error> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::Asset(asset.clone()))
        .ok_or(Error::AssetNotSupported)
}

pub fn write_asset_config(env: &Env, config: &AssetConfig) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::Asset(config.asset.clone()), config);
}

pub fn read_price_feed(env: &Env, asset: &Address) -> Option<PriceFeedConfig> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::PriceFeed(asset.clone()))
}

pub fn write_price_feed(env: &Env, asset: &Address, config: &PriceFeedConfig) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::PriceFeed(asset.clone()), config);
}

pub fn read_fallback_price(env: &Env, asset: &Address) -> Option<FallbackPrice> {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::FallbackPrice(asset.clone()))
}

pub fn write_fallback_price(env: &Env, asset: &Address, price: &FallbackPrice) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::FallbackPrice(asset.clone()), price);
}

/// Falls back to protocol defaults when the asset has no own config
pub fn read_liquidation_config(env: &Env, asset: &Address) -> LiquidationConfig {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::LiquidationConfig(asset.clone()))
        .unwrap_or_default()
}

pub fn write_liquidation_config(env: &Env, asset: &Address, config: &LiquidationConfig) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::LiquidationConfig(asset.clone()), config);
}

pub fn read_chain(env: &Env, chain_id: u64) -> Option<ChainConfig> {
    bump_instance(env);

    env.storage().instance().get(&DataKey::Chain(chain_id))
}

pub fn write_chain(env: &Env, config: &ChainConfig) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::Chain(config.chain_id), config);
}

pub fn read_rate_limit(env: &Env, action: Action) -> Option<RateLimit> {
    bump_instance(env);

    env.storage().instance().get(&DataKey::RateLimit(action))
}

pub fn write_rate_limit(env: &Env, action: Action, limit: &RateLimit) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::RateLimit(action), limit);
}

pub fn read_action_config(env: &Env, action: Action) -> ActionConfig {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::ActionConfig(action))
        .unwrap_or_default()
}

pub fn write_action_config(env: &Env, action: Action, config: &ActionConfig) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::ActionConfig(action), config);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Locked)
}

pub fn write_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}

pub fn read_emergency_window(env: &Env) -> EmergencyWindow {
    bump_instance(env);

    env.storage()
        .instance()
        .get(&DataKey::EmergencyWindow)
        .unwrap_or_default()
}

pub fn write_emergency_window(env: &Env, window: &EmergencyWindow) {
    bump_instance(env);

    env.storage()
        .instance()
        .set(&DataKey::EmergencyWindow, window);
}

pub fn next_liquidation_request_id(env: &Env) -> u64 {
    bump_instance(env);

    let id = env
        .storage()
        .instance()
        .get(&DataKey::LiquidationRequestId)
        .unwrap_or(0u64)
        + 1;

    env.storage()
        .instance()
        .set(&DataKey::LiquidationRequestId, &id);

    id
}

pub fn read_accounts(env: &Env) -> Vec<Address> {
    read_persistent(env, &DataKey::Accounts).unwrap_or(vec![env])
}

pub fn write_accounts(env: &Env, accounts: &Vec<Address>) {
    write_persistent(env, &DataKey::Accounts, accounts);
}

pub fn read_position(env: &Env, account: &Address, asset: &Address) -> Position {
    read_persistent(env, &DataKey::Position(account.clone(), asset.clone())).unwrap_or_default()
}

pub fn write_position(env: &Env, account: &Address, asset: &Address, position: &Position) {
    write_persistent(
        env,
        &DataKey::Position(account.clone(), asset.clone()),
        position,
    );
}

pub fn has_user_config(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::UserConfig(account.clone()))
}

pub fn read_user_config(env: &Env, account: &Address) -> UserConfiguration {
    read_persistent(env, &DataKey::UserConfig(account.clone())).unwrap_or_default()
}

pub fn write_user_config(env: &Env, account: &Address, config: &UserConfiguration) {
    write_persistent(env, &DataKey::UserConfig(account.clone()), config);
}

pub fn read_account_position(env: &Env, account: &Address) -> Option<AccountPosition> {
    read_persistent(env, &DataKey::AccountPosition(account.clone()))
}

pub fn write_account_position(env: &Env, account: &Address, position: &AccountPosition) {
    write_persistent(env, &DataKey::AccountPosition(account.clone()), position);
}

pub fn read_account_risk(env: &Env, account: &Address) -> AccountRisk {
    read_persistent(env, &DataKey::AccountRisk(account.clone())).unwrap_or_default()
}

pub fn write_account_risk(env: &Env, account: &Address, risk: &AccountRisk) {
    write_persistent(env, &DataKey::AccountRisk(account.clone()), risk);
}

pub fn read_user_permissions(env: &Env, account: &Address) -> UserPermissions {
    read_persistent(env, &DataKey::UserPermissions(account.clone()))
        .unwrap_or(UserPermissions::new(env))
}

pub fn write_user_permissions(env: &Env, account: &Address, permissions: &UserPermissions) {
    write_persistent(env, &DataKey::UserPermissions(account.clone()), permissions);
}

pub fn read_user_rate_state(env: &Env, account: &Address, action: Action) -> UserRateState {
    read_persistent(env, &DataKey::UserRateState(account.clone(), action)).unwrap_or_default()
}

pub fn write_user_rate_state(env: &Env, account: &Address, action: Action, state: &UserRateState) {
    write_persistent(env, &DataKey::UserRateState(account.clone(), action), state);
}

pub fn is_message_processed(env: &Env, message_id: &BytesN<32>) -> bool {
    read_persistent::<bool>(env, &DataKey::ProcessedMessage(message_id.clone())).unwrap_or(false)
}

/// Applied message ids are never removed
pub fn write_message_processed(env: &Env, message_id: &BytesN<32>) {
    write_persistent(env, &DataKey::ProcessedMessage(message_id.clone()), &true);
}

/// Keyed by the chain holding the collateral and the ledger debt
pub fn read_synthetic_debt(env: &Env, account: &Address, asset: &Address, chain_id: u64) -> i128 {
    read_persistent(
        env,
        &DataKey::SyntheticDebt(account.clone(), asset.clone(), chain_id),
    )
    .unwrap_or(0)
}

pub fn write_synthetic_debt(
    env: &Env,
    account: &Address,
    asset: &Address,
    chain_id: u64,
    amount: i128,
) {
    write_persistent(
        env,
        &DataKey::SyntheticDebt(account.clone(), asset.clone(), chain_id),
        &amount,
    );
}

pub fn read_nonce(env: &Env, account: &Address) -> u64 {
    read_persistent(env, &DataKey::Nonce(account.clone())).unwrap_or(0)
}

pub fn write_nonce(env: &Env, account: &Address, nonce: u64) {
    write_persistent(env, &DataKey::Nonce(account.clone()), &nonce);
}

pub fn read_liquidation_request(env: &Env, id: u64) -> Result<LiquidationRequest, Error> {
    read_persistent(env, &DataKey::LiquidationRequest(id)).ok_or(Error::UnknownLiquidationRequest)
}

pub fn write_liquidation_request(env: &Env, request: &LiquidationRequest) {
    write_persistent(env, &DataKey::LiquidationRequest(request.id), request);
}

pub fn read_randomness_request(env: &Env, randomness_id: u64) -> Option<u64> {
    read_persistent(env, &DataKey::RandomnessRequest(randomness_id))
}

pub fn write_randomness_request(env: &Env, randomness_id: u64, request_id: u64) {
    write_persistent(env, &DataKey::RandomnessRequest(randomness_id), &request_id);
}

pub fn remove_randomness_request(env: &Env, randomness_id: u64) {
    env.storage()
        .persistent()
        .remove(&DataKey::RandomnessRequest(randomness_id));
}

pub fn read_open_emergency_request(env: &Env, account: &Address) -> Option<u64> {
    read_persistent(env, &DataKey::OpenEmergencyRequest(account.clone()))
}

pub fn write_open_emergency_request(env: &Env, account: &Address, request_id: Option<u64>) {
    let key = DataKey::OpenEmergencyRequest(account.clone());

    match request_id {
        Some(id) => write_persistent(env, &key, &id),
        None => env.storage().persistent().remove(&key),
    }
}
