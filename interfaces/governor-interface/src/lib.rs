#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, BytesN, Env, Val, Vec};
use types::error::Error;
use types::governor_call::GovernorCall;
use types::governor_config::GovernorConfig;
use types::operation::Operation;
use types::operation_kind::OperationKind;
use types::timelock_delays::TimelockDelays;

pub mod types;

pub struct Spec;

/// Interface for the protocol governor
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "GovernorClient")]
pub trait GovernorTrait {
    fn initialize(
        env: Env,
        signers: Vec<Address>,
        threshold: u32,
        delays: TimelockDelays,
    ) -> Result<(), Error>;

    fn config(env: Env) -> Result<GovernorConfig, Error>;

    fn propose(
        env: Env,
        proposer: Address,
        call: GovernorCall,
        kind: OperationKind,
        custom_delay: Option<u64>,
    ) -> Result<BytesN<32>, Error>;

    fn approve(env: Env, signer: Address, id: BytesN<32>) -> Result<u32, Error>;

    fn cancel(env: Env, signer: Address, id: BytesN<32>) -> Result<(), Error>;

    fn execute(env: Env, executor: Address, id: BytesN<32>) -> Result<Val, Error>;

    fn operation(env: Env, id: BytesN<32>) -> Option<Operation>;
}
