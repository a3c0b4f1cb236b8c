#![deny(warnings)]
#![no_std]

use governor_interface::types::error::Error;
use governor_interface::types::governor_call::GovernorCall;
use governor_interface::types::governor_config::GovernorConfig;
use governor_interface::types::operation::Operation;
use governor_interface::types::operation_kind::OperationKind;
use governor_interface::types::timelock_delays::TimelockDelays;
use governor_interface::GovernorTrait;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contract, contractimpl, vec, Address, BytesN, Env, Val, Vec};

use crate::storage::*;

mod event;
mod storage;

#[contract]
pub struct Governor;

#[contractimpl]
impl GovernorTrait for Governor {
    /// Sets the signer set, the number of approvals an operation needs
    /// and the delay of every timelocked operation kind.
    ///
    /// # Errors
    ///
    /// - AlreadyInitialized
    /// - DuplicateSigner if a signer is listed twice
    /// - InvalidThreshold unless `1 <= threshold <= signers`
    ///
    fn initialize(
        env: Env,
        signers: Vec<Address>,
        threshold: u32,
        delays: TimelockDelays,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        let mut sorted = vec![&env];

        for signer in signers.iter() {
            match sorted.binary_search(&signer) {
                Ok(_) => return Err(Error::DuplicateSigner),
                Err(i) => sorted.insert(i, signer),
            }
        }

        if threshold == 0 || threshold > sorted.len() {
            return Err(Error::InvalidThreshold);
        }

        write_config(
            &env,
            &GovernorConfig {
                signers: sorted.clone(),
                threshold,
                delays,
            },
        );

        event::initialized(&env, threshold, sorted.len());

        Ok(())
    }

    fn config(env: Env) -> Result<GovernorConfig, Error> {
        read_config(&env)
    }

    /// Registers `call` and approves it on behalf of the proposer.
    ///
    /// The operation id is the hash of the call, the proposer and the ledger
    /// time. It becomes executable `custom_delay` seconds from now, or after
    /// the delay of `kind` when no custom delay is given.
    ///
    /// # Errors
    ///
    /// - NotSigner
    /// - OperationExists if the same call was proposed by the proposer in this ledger
    ///
    fn propose(
        env: Env,
        proposer: Address,
        call: GovernorCall,
        kind: OperationKind,
        custom_delay: Option<u64>,
    ) -> Result<BytesN<32>, Error> {
        proposer.require_auth();

        let config = read_config(&env)?;
        require_signer(&config, &proposer)?;

        let now = env.ledger().timestamp();
        let id: BytesN<32> = env
            .crypto()
            .sha256(&(call.clone(), proposer.clone(), now).to_xdr(&env))
            .into();

        if has_operation(&env, &id) {
            return Err(Error::OperationExists);
        }

        let delay = custom_delay.unwrap_or_else(|| config.delays.delay(kind));

        let operation = Operation {
            id: id.clone(),
            call,
            kind,
            proposer: proposer.clone(),
            proposed_at: now,
            execute_after: now.saturating_add(delay),
            approvals: vec![&env, proposer],
            executed: false,
            cancelled: false,
        };

        write_operation(&env, &operation);

        event::proposed(&env, &operation);

        Ok(id)
    }

    /// Adds the signer approval and returns the approval count
    ///
    /// # Errors
    ///
    /// - NotSigner
    /// - UnknownOperation
    /// - OperationCancelled
    /// - AlreadyExecuted
    /// - AlreadyApproved
    ///
    fn approve(env: Env, signer: Address, id: BytesN<32>) -> Result<u32, Error> {
        signer.require_auth();

        let config = read_config(&env)?;
        require_signer(&config, &signer)?;

        let mut operation = read_pending_operation(&env, &id)?;

        if operation.approvals.contains(&signer) {
            return Err(Error::AlreadyApproved);
        }

        operation.approvals.push_back(signer.clone());
        write_operation(&env, &operation);

        let approvals = operation.approvals_count();
        event::approved(&env, &signer, &id, approvals);

        Ok(approvals)
    }

    fn cancel(env: Env, signer: Address, id: BytesN<32>) -> Result<(), Error> {
        signer.require_auth();

        let config = read_config(&env)?;
        require_signer(&config, &signer)?;

        let mut operation = read_pending_operation(&env, &id)?;
        operation.cancelled = true;
        write_operation(&env, &operation);

        event::cancelled(&env, &signer, &id);

        Ok(())
    }

    /// Invokes the operation call with the governor as the caller.
    /// An operation runs at most once.
    ///
    /// # Errors
    ///
    /// - NotSigner
    /// - UnknownOperation
    /// - OperationCancelled
    /// - AlreadyExecuted
    /// - InsufficientApprovals
    /// - TimeLockNotReady before `execute_after`
    ///
    fn execute(env: Env, executor: Address, id: BytesN<32>) -> Result<Val, Error> {
        executor.require_auth();

        let config = read_config(&env)?;
        require_signer(&config, &executor)?;

        let mut operation = read_pending_operation(&env, &id)?;

        if operation.approvals_count() < config.threshold {
            return Err(Error::InsufficientApprovals);
        }

        if env.ledger().timestamp() < operation.execute_after {
            return Err(Error::TimeLockNotReady);
        }

        operation.executed = true;
        write_operation(&env, &operation);

        event::executed(&env, &executor, &id);

        Ok(env.invoke_contract::<Val>(
            &operation.call.target,
            &operation.call.function,
            operation.call.args,
        ))
    }

    fn operation(env: Env, id: BytesN<32>) -> Option<Operation> {
        read_operation(&env, &id)
    }
}

fn require_signer(config: &GovernorConfig, who: &Address) -> Result<(), Error> {
    config
        .signers
        .binary_search(who)
        .map(|_| ())
        .map_err(|_| Error::NotSigner)
}

fn read_pending_operation(env: &Env, id: &BytesN<32>) -> Result<Operation, Error> {
    let operation = read_operation(env, id).ok_or(Error::UnknownOperation)?;

    if operation.cancelled {
        return Err(Error::OperationCancelled);
    }

    if operation.executed {
        return Err(Error::AlreadyExecuted);
    }

    Ok(operation)
}
