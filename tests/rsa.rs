use textbook_rsa::Error;
use textbook_rsa::encoding::{decode_chunks, unpad};
use textbook_rsa::primitives::modpow;
use textbook_rsa::rsa::{KeyParams, ToyKeyPair, decrypt_chunks, encrypt_chunks, run};

const MESSAGE: &[u8] = b"OHAI you can read me!";

#[test]
fn default_key_fields() {
    let keys = ToyKeyPair::derive(&KeyParams::default()).unwrap();

    assert_eq!(keys.modulus(), 3127);
    assert_eq!(keys.phi(), 3016);
    assert_eq!(keys.public_exponent(), 3);
    assert_eq!(keys.private_exponent(), 2011);
    assert!(keys.is_consistent());

    assert_eq!(keys.public_key().modulus, keys.private_key().modulus);
}

#[test]
fn encrypt_and_decrypt_single_chunk() {
    let keys = ToyKeyPair::derive(&KeyParams::default()).unwrap();

    // 79^3 = 493039 = 157 * 3127 + 2100
    let c = encrypt_chunks(&[79], &keys.public_key()).unwrap();
    assert_eq!(c, vec![2100]);

    let m = decrypt_chunks(&c, &keys.private_key()).unwrap();
    assert_eq!(m, vec![79]);
}

#[test]
fn default_message_round_trips() {
    let keys = ToyKeyPair::derive(&KeyParams::default()).unwrap();
    let t = run(MESSAGE, 1, &keys).unwrap();

    assert_eq!(
        t.encrypted,
        vec![
            2100, 1135, 2576, 1269, 1498, 1679, 1132, 589, 1498, 929, 2716, 2025, 1498, 2473,
            1518, 2716, 2487, 1498, 451, 1518, 1540, 0
        ]
    );
    assert!(t.round_trips());
    assert_eq!(t.mismatches(), 0);

    let bytes = decode_chunks(&t.decrypted, 1).unwrap();
    assert_eq!(unpad(&bytes), MESSAGE);
}

#[test]
fn every_residue_round_trips_with_default_keys() {
    let keys = ToyKeyPair::derive(&KeyParams::default()).unwrap();
    let values: Vec<u64> = (0..keys.modulus()).collect();

    let c = encrypt_chunks(&values, &keys.public_key()).unwrap();
    let m = decrypt_chunks(&c, &keys.private_key()).unwrap();

    assert_eq!(m, values);
}

#[test]
fn output_order_matches_chunk_order() {
    let keys = ToyKeyPair::derive(&KeyParams::default()).unwrap();
    let values: Vec<u64> = (0..500).rev().collect();

    let c = encrypt_chunks(&values, &keys.public_key()).unwrap();

    for (v, c) in values.iter().zip(&c) {
        assert_eq!(*c, modpow(*v, 3, 3127).unwrap());
    }
}

#[test]
fn formula_breaks_when_e_does_not_divide_two_phi_plus_one() {
    let keys = ToyKeyPair::derive(&KeyParams {
        p1: 61,
        p2: 53,
        public_exponent: 17,
    })
    .unwrap();

    assert_eq!(keys.modulus(), 3233);
    assert_eq!(keys.phi(), 3120);
    assert_eq!(keys.private_exponent(), 367);
    assert!(!keys.is_consistent());

    // 17 * 367 = 6239 = -1 mod 3120, so decryption yields the inverse of 2
    let c = encrypt_chunks(&[2], &keys.public_key()).unwrap();
    let m = decrypt_chunks(&c, &keys.private_key()).unwrap();
    assert_eq!(m, vec![1617]);

    let t = run(b"hi", 1, &keys).unwrap();
    assert!(!t.round_trips());
    assert!(t.mismatches() > 0);
}

#[test]
fn chunks_wider_than_modulus_do_not_round_trip() {
    let keys = ToyKeyPair::derive(&KeyParams::default()).unwrap();

    // 0x4F48 = 20296 > 3127
    let t = run(b"OH", 2, &keys).unwrap();
    assert_eq!(t.plaintext, vec![0x4F48, 0]);
    assert!(!t.round_trips());
}

#[test]
fn degenerate_params_are_rejected() {
    let bad_prime = KeyParams {
        p1: 1,
        ..KeyParams::default()
    };
    assert!(matches!(ToyKeyPair::derive(&bad_prime), Err(Error::InvalidArgument(_))));

    let zero_e = KeyParams {
        public_exponent: 0,
        ..KeyParams::default()
    };
    assert!(matches!(ToyKeyPair::derive(&zero_e), Err(Error::InvalidArgument(_))));

    let huge = KeyParams {
        p1: u64::MAX,
        p2: 3,
        public_exponent: 3,
    };
    assert!(matches!(ToyKeyPair::derive(&huge), Err(Error::Overflow(_))));
}

#[test]
fn pipeline_propagates_chunk_errors() {
    let keys = ToyKeyPair::derive(&KeyParams::default()).unwrap();
    assert!(matches!(run(MESSAGE, 0, &keys), Err(Error::InvalidArgument(_))));
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_passes_keep_chunk_order() {
    let keys = ToyKeyPair::derive(&KeyParams::default()).unwrap();
    let values: Vec<u64> = (0..keys.modulus()).rev().collect();

    let c = encrypt_chunks(&values, &keys.public_key()).unwrap();
    for (v, c) in values.iter().zip(&c) {
        assert_eq!(*c, modpow(*v, 3, 3127).unwrap());
    }

    let m = decrypt_chunks(&c, &keys.private_key()).unwrap();
    assert_eq!(m, values);
}
