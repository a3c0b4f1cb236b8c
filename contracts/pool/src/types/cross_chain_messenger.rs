use pool_interface::types::cross_chain_message::{CrossChainMessage, MessageAction};
use pool_interface::types::error::Error;
use pool_interface::types::pool_config::PoolConfig;
use soroban_sdk::xdr::{FromXdr, ToXdr};
use soroban_sdk::{token, Address, Bytes, BytesN, Env};
use synthetic_token_interface::SyntheticTokenClient;
use transport_interface::TransportClient;

use crate::event;
use crate::storage::{
    is_message_processed, read_asset_config, read_chain, read_config, read_nonce,
    read_synthetic_debt, write_message_processed, write_nonce, write_synthetic_debt,
};

use super::position_ledger::PositionLedger;
use super::price_provider::PriceProvider;

/// Builds, prices and sends outbound messages and applies inbound ones exactly once
pub struct CrossChainMessenger<'a> {
    env: &'a Env,
    config: PoolConfig,
}

impl<'a> CrossChainMessenger<'a> {
    pub fn new(env: &'a Env) -> Result<Self, Error> {
        Ok(Self {
            env,
            config: read_config(env)?,
        })
    }

    pub fn build(
        &self,
        account: &Address,
        action: MessageAction,
        asset: &Address,
        amount: i128,
        destination_chain: u64,
        receiver: &Address,
    ) -> Result<CrossChainMessage, Error> {
        self.require_enabled_chain(destination_chain)?;

        if destination_chain == self.config.chain_id {
            return Err(Error::ChainNotSupported);
        }

        Ok(CrossChainMessage {
            account: account.clone(),
            action,
            asset: asset.clone(),
            amount,
            source_chain: self.config.chain_id,
            destination_chain,
            receiver: receiver.clone(),
            nonce: read_nonce(self.env, account),
        })
    }

    pub fn quote(&self, message: &CrossChainMessage) -> Result<i128, Error> {
        let payload = message.clone().to_xdr(self.env);

        match self
            .transport()
            .try_quote_fee(&message.destination_chain, &payload)
        {
            Ok(Ok(fee)) if fee >= 0 => Ok(fee),
            _ => Err(Error::MessageFailed),
        }
    }

    /// Collects `fee` from `payer` and hands the message to the transport.
    /// Either the transport accepted the message or the call fails with `MessageFailed`.
    pub fn send(
        &self,
        payer: &Address,
        message: &CrossChainMessage,
        fee: i128,
    ) -> Result<BytesN<32>, Error> {
        let env = self.env;

        if fee > 0 {
            let fee_token = token::Client::new(env, &self.config.fee_token);

            if fee_token.balance(payer) < fee {
                return Err(Error::MessageFailed);
            }

            if !matches!(
                fee_token.try_transfer(payer, &self.config.transport, &fee),
                Ok(Ok(_))
            ) {
                return Err(Error::MessageFailed);
            }
        }

        let payload = message.clone().to_xdr(env);
        let message_id = match self.transport().try_send(
            &env.current_contract_address(),
            &message.destination_chain,
            &payload,
        ) {
            Ok(Ok(id)) => id,
            _ => return Err(Error::MessageFailed),
        };

        write_nonce(env, &message.account, message.nonce + 1);

        event::message_sent(env, &message_id, message, fee);

        Ok(message_id)
    }

    /// Applies an inbound message. The id is marked applied before the
    /// action runs; a known id fails without side effects.
    pub fn receive(&self, message_id: &BytesN<32>, payload: &Bytes) -> Result<(), Error> {
        let env = self.env;

        self.config.transport.require_auth();

        if is_message_processed(env, message_id) {
            return Err(Error::MessageAlreadyProcessed);
        }

        let message =
            CrossChainMessage::from_xdr(env, payload).map_err(|_| Error::InvalidMessage)?;

        if message.destination_chain != self.config.chain_id {
            return Err(Error::InvalidMessage);
        }

        self.require_enabled_chain(message.source_chain)?;

        write_message_processed(env, message_id);

        match message.action {
            MessageAction::Borrow => self.apply_borrow(&message)?,
            MessageAction::Repay => self.apply_repay(&message)?,
        }

        event::message_received(env, message_id, &message);

        Ok(())
    }

    /// Burns synthetic debt of `account` held by `who`, clamped to the amount
    /// recorded for `destination_chain`, and sends the matching repay message.
    pub fn repay(
        &self,
        who: &Address,
        account: &Address,
        asset: &Address,
        amount: i128,
        destination_chain: u64,
    ) -> Result<BytesN<32>, Error> {
        let env = self.env;

        let debt = read_synthetic_debt(env, account, asset, destination_chain);
        let applied = amount.min(debt);

        if applied <= 0 {
            return Err(Error::InvalidAmount);
        }

        let message = self.build(
            account,
            MessageAction::Repay,
            asset,
            applied,
            destination_chain,
            who,
        )?;
        let fee = self.quote(&message)?;

        let synthetic = read_asset_config(env, asset)?
            .synthetic
            .ok_or(Error::SyntheticNotConfigured)?;

        SyntheticTokenClient::new(env, &synthetic).burn(who, &applied);
        write_synthetic_debt(env, account, asset, destination_chain, debt - applied);

        event::synthetic_burn(env, who, asset, applied);

        self.send(who, &message, fee)
    }

    fn apply_borrow(&self, message: &CrossChainMessage) -> Result<(), Error> {
        let env = self.env;

        if message.amount <= 0 {
            return Err(Error::InvalidMessage);
        }

        let synthetic = read_asset_config(env, &message.asset)?
            .synthetic
            .ok_or(Error::SyntheticNotConfigured)?;

        let debt = read_synthetic_debt(
            env,
            &message.account,
            &message.asset,
            message.source_chain,
        )
        .checked_add(message.amount)
        .ok_or(Error::MathOverflowError)?;

        SyntheticTokenClient::new(env, &synthetic).mint(&message.receiver, &message.amount);
        write_synthetic_debt(
            env,
            &message.account,
            &message.asset,
            message.source_chain,
            debt,
        );

        event::synthetic_mint(env, &message.receiver, &message.asset, message.amount);

        Ok(())
    }

    /// Excess over the recorded debt is ignored
    fn apply_repay(&self, message: &CrossChainMessage) -> Result<(), Error> {
        let env = self.env;

        if message.amount <= 0 {
            return Err(Error::InvalidMessage);
        }

        let config = read_asset_config(env, &message.asset)?;
        let mut prices = PriceProvider::new(env);
        let mut ledger = PositionLedger::new(env, &message.account);
        let applied = ledger.record_repay(&mut prices, &config, message.amount);

        event::repay(env, &message.account, &message.asset, applied);

        Ok(())
    }

    fn require_enabled_chain(&self, chain_id: u64) -> Result<(), Error> {
        match read_chain(self.env, chain_id) {
            Some(chain) if chain.enabled => Ok(()),
            _ => Err(Error::ChainNotSupported),
        }
    }

    fn transport(&self) -> TransportClient<'a> {
        TransportClient::new(self.env, &self.config.transport)
    }
}
