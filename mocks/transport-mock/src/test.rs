use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Bytes, Env};

use crate::{SentMessage, TransportMock, TransportMockClient};

#[test]
fn send_records_payload() {
    let env = Env::default();
    env.mock_all_auths();

    let transport = TransportMockClient::new(&env, &env.register_contract(None, TransportMock));
    let sender = Address::generate(&env);
    let payload = Bytes::from_array(&env, &[1, 2, 3]);

    transport.set_fee(&25);

    assert_eq!(transport.quote_fee(&2, &payload), 25);

    let first = transport.send(&sender, &2, &payload);
    let second = transport.send(&sender, &2, &payload);

    assert_ne!(first, second);
    assert_eq!(
        transport.message(&first),
        Some(SentMessage {
            sender,
            destination_chain: 2,
            payload,
        })
    );
}

#[test]
fn failing_transport_rejects() {
    let env = Env::default();
    env.mock_all_auths();

    let transport = TransportMockClient::new(&env, &env.register_contract(None, TransportMock));
    let payload = Bytes::from_array(&env, &[1]);

    transport.set_failing(&true);

    assert!(transport.try_quote_fee(&2, &payload).is_err());
    assert!(transport
        .try_send(&Address::generate(&env), &2, &payload)
        .is_err());
}
