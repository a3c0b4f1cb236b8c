#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Bytes, BytesN, Env};

pub struct Spec;

/// Outbound side of a cross-chain messaging transport.
///
/// Delivery on the destination chain is an independent call of the receiver's
/// `receive_message(message_id, payload)` made by the transport. The transport
/// guarantees neither ordering nor exactly-once delivery.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "TransportClient")]
pub trait TransportTrait {
    /// Returns the fee charged for delivering `payload` to `destination_chain`
    fn quote_fee(env: Env, destination_chain: u64, payload: Bytes) -> i128;

    /// Accepts `payload` for delivery and returns its globally unique message id
    fn send(env: Env, sender: Address, destination_chain: u64, payload: Bytes) -> BytesN<32>;
}
