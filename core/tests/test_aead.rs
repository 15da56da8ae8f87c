// AES-256-GCM envelope suite: nonce || ciphertext || tag.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use vac_core::constants::DEFAULT_PASSPHRASE;
    use vac_core::crypto::{
        derive_key, open, seal, seal_with_nonce, CryptoError, ENVELOPE_OVERHEAD, NONCE_LEN_12,
    };

    // AES-256-GCM, key = derive_key("hello mario"), zero nonce, plaintext "RIFF", no AAD.
    const RIFF_CT_TAG: &str = "0840035668b544237957e60d3c1b7cf74f93726e";

    #[test]
    fn test_fixed_vector() {
        let key = derive_key(DEFAULT_PASSPHRASE);
        let env = seal_with_nonce(b"RIFF", &key, &[0u8; NONCE_LEN_12]).unwrap();
        assert_eq!(&env[..NONCE_LEN_12], &[0u8; NONCE_LEN_12]);
        assert_eq!(hex::encode(&env[NONCE_LEN_12..]), RIFF_CT_TAG);
        assert_eq!(open(&env, &key).unwrap(), b"RIFF");
    }

    #[test]
    fn test_empty_plaintext() {
        let key = derive_key(DEFAULT_PASSPHRASE);
        let env = seal(b"", &key).unwrap();
        assert_eq!(env.len(), ENVELOPE_OVERHEAD);
        assert!(open(&env, &key).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_key_fails() {
        let env = seal(b"audio", &derive_key("hello mario")).unwrap();
        let err = open(&env, &derive_key("wrong")).unwrap_err();
        assert!(matches!(err, CryptoError::AuthenticationFailed));
    }

    #[test]
    fn test_short_envelopes_fail_closed() {
        let key = derive_key(DEFAULT_PASSPHRASE);
        for len in 0..ENVELOPE_OVERHEAD {
            let err = open(&vec![0u8; len], &key).unwrap_err();
            assert!(matches!(err, CryptoError::AuthenticationFailed), "len {len}");
        }
    }

    #[test]
    fn test_bad_nonce_len_rejected() {
        let key = derive_key(DEFAULT_PASSPHRASE);
        let err = seal_with_nonce(b"x", &key, &[0u8; 8]).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidNonceLen { expected: 12, actual: 8 }));
    }

    #[test]
    fn test_nonces_are_fresh() {
        let key = derive_key(DEFAULT_PASSPHRASE);
        let a = seal(b"same", &key).unwrap();
        let b = seal(b"same", &key).unwrap();
        assert_ne!(&a[..NONCE_LEN_12], &b[..NONCE_LEN_12]);
        assert_ne!(a, b);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_round_trip(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let key = derive_key(DEFAULT_PASSPHRASE);
            let env = seal(&data, &key).unwrap();
            prop_assert_eq!(env.len(), data.len() + ENVELOPE_OVERHEAD);
            prop_assert_eq!(open(&env, &key).unwrap(), data);
        }

        #[test]
        fn prop_any_bit_flip_is_rejected(
            data in proptest::collection::vec(any::<u8>(), 0..256),
            pos in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let key = derive_key(DEFAULT_PASSPHRASE);
            let mut env = seal(&data, &key).unwrap();
            let i = pos.index(env.len());
            env[i] ^= 1 << bit;
            prop_assert!(matches!(open(&env, &key), Err(CryptoError::AuthenticationFailed)));
        }
    }
}
