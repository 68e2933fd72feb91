//! Schema values survive the wire and address forms.

use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use xdrkit_codec::{DecodeExt, Encode, EncodeSize, Error, VecM};
use xdrkit_types::{
    Asset, Memo, MuxedAccount, PaymentOp, PublicKey, SignerKey, TimeBounds, Transaction,
    TransactionExt,
};
use xdrkit_utils::Amount;

fn random_key(rng: &mut StdRng) -> [u8; 32] {
    let mut key = [0u8; 32];
    rng.fill_bytes(&mut key);
    key
}

fn random_account(rng: &mut StdRng) -> MuxedAccount {
    let account = MuxedAccount::Ed25519(random_key(rng));
    if rng.gen() {
        account.with_id(rng.gen())
    } else {
        account
    }
}

fn random_asset(rng: &mut StdRng) -> Asset {
    let issuer = PublicKey::PublicKeyTypeEd25519(random_key(rng));
    match rng.gen_range(0..3) {
        0 => Asset::Native,
        1 => Asset::credit("USD", issuer).unwrap(),
        _ => Asset::credit("LONGERCODE", issuer).unwrap(),
    }
}

fn random_payment(rng: &mut StdRng) -> PaymentOp {
    PaymentOp::builder()
        .destination(random_account(rng))
        .asset(random_asset(rng))
        .amount(Amount(rng.gen()))
        .build()
        .unwrap()
}

fn random_memo(rng: &mut StdRng) -> Memo {
    match rng.gen_range(0..5) {
        0 => Memo::None,
        1 => {
            let text: String = (0..rng.gen_range(0..=28))
                .map(|_| rng.gen_range(b'a'..=b'z') as char)
                .collect();
            Memo::text(&text).unwrap()
        }
        2 => Memo::Id(rng.gen()),
        3 => Memo::Hash(random_key(rng)),
        _ => Memo::Return(random_key(rng)),
    }
}

fn random_transaction(rng: &mut StdRng) -> Transaction {
    let operations: Vec<PaymentOp> = (0..rng.gen_range(0..5))
        .map(|_| random_payment(rng))
        .collect();
    Transaction {
        source_account: random_account(rng),
        fee: rng.gen(),
        seq_num: rng.gen(),
        time_bounds: rng.gen::<bool>().then(|| TimeBounds {
            min_time: rng.gen(),
            max_time: rng.gen(),
        }),
        memo: random_memo(rng),
        operations: VecM::try_from(operations).unwrap(),
        ext: TransactionExt::V0,
    }
}

#[test]
fn test_transaction_round_trip() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..500 {
        let tx = random_transaction(&mut rng);
        let encoded = tx.encode();
        assert_eq!(encoded.len(), tx.encode_size());
        assert_eq!(encoded.len() % 4, 0);
        assert_eq!(Transaction::decode(encoded).unwrap(), tx);
    }
}

#[test]
fn test_transaction_truncation() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..20 {
        let encoded = random_transaction(&mut rng).encode();
        for len in 0..encoded.len() {
            assert!(Transaction::decode(&encoded[..len]).is_err());
        }
    }
}

#[test]
fn test_random_input_never_panics() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..10_000 {
        let mut input = vec![0u8; rng.gen_range(0..256)];
        rng.fill_bytes(&mut input);
        if let Ok(tx) = Transaction::decode(&input[..]) {
            assert_eq!(tx.encode(), &input[..]);
        }
    }
}

#[test]
fn test_account_address_round_trip() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let account = random_account(&mut rng);
        let text = account.to_string();
        let prefix = if account.id().is_some() { 'M' } else { 'G' };
        assert!(text.starts_with(prefix));
        assert_eq!(text.parse::<MuxedAccount>().unwrap(), account);
    }
}

#[test]
fn test_signer_address_round_trip() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..500 {
        let signer = match rng.gen_range(0..3) {
            0 => SignerKey::Ed25519(random_key(&mut rng)),
            1 => SignerKey::PreAuthTx(random_key(&mut rng)),
            _ => SignerKey::HashX(random_key(&mut rng)),
        };
        let text = signer.to_strkey().unwrap();
        assert_eq!(text.parse::<SignerKey>().unwrap(), signer);
    }
}

#[test]
fn test_unknown_discriminators() {
    // Every union rejects a discriminant with no arm
    let unknown = 7i32.encode();
    assert!(matches!(
        Asset::decode(unknown.clone()),
        Err(Error::InvalidDiscriminator("Asset", 7))
    ));
    assert!(matches!(
        Memo::decode(unknown.clone()),
        Err(Error::InvalidDiscriminator("Memo", 7))
    ));
    assert!(matches!(
        MuxedAccount::decode(unknown.clone()),
        Err(Error::InvalidDiscriminator("MuxedAccount", 7))
    ));
    assert!(matches!(
        PublicKey::decode(unknown.clone()),
        Err(Error::InvalidDiscriminator("PublicKey", 7))
    ));
    assert!(matches!(
        SignerKey::decode(unknown.clone()),
        Err(Error::InvalidDiscriminator("SignerKey", 7))
    ));
    assert!(matches!(
        TransactionExt::decode(unknown),
        Err(Error::InvalidDiscriminator("TransactionExt", 7))
    ));
}
