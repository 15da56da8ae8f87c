// Container build/parse suite.
//
// Scenarios:
// - "hello mario" build, parse back, wrong passphrase
// - every truncation below the header length, every bit flip past it
// - version dispatch and header-only inspection
// - concurrent builds never share a nonce

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use vac_core::codec::{build, build_with_key, parse_and_decrypt, parse_info, parse_with_key, split_container};
    use vac_core::crypto::{derive_key, ENVELOPE_OVERHEAD, NONCE_LEN_12};
    use vac_core::headers::{HeaderError, TrackMetadata, HEADER_LEN};
    use vac_core::VacError;

    const PASS: &str = "hello mario";

    fn sample_metadata() -> TrackMetadata {
        TrackMetadata::new("Test Song", "Tester", "Demo")
            .with_duration(180.0)
            .with_audio(1411, 44100)
            .with_track(1)
    }

    fn sample_audio() -> Vec<u8> {
        let mut audio = b"RIFF".to_vec();
        audio.extend((0..4096u32).map(|i| (i * 7 % 251) as u8));
        audio
    }

    #[test]
    fn test_hello_mario_round_trip() {
        let audio = sample_audio();
        let container = build(&audio, PASS, &sample_metadata()).unwrap();

        assert_eq!(container.len(), HEADER_LEN + audio.len() + ENVELOPE_OVERHEAD);
        assert_eq!(&container[0..4], b"CSNG");

        let parsed = parse_and_decrypt(&container, PASS).unwrap();
        assert_eq!(parsed.payload, audio);
        assert_eq!(parsed.metadata(), &sample_metadata());
        assert_eq!(parsed.header.version, 1);
    }

    #[test]
    fn test_wrong_passphrase() {
        let container = build(&sample_audio(), PASS, &sample_metadata()).unwrap();
        let err = parse_and_decrypt(&container, "wrong").unwrap_err();
        assert!(matches!(err, VacError::Authentication));
    }

    #[test]
    fn test_empty_payload() {
        let container = build(&[], PASS, &TrackMetadata::default()).unwrap();
        assert_eq!(container.len(), HEADER_LEN + ENVELOPE_OVERHEAD);
        let (meta, payload) = parse_and_decrypt(&container, PASS).unwrap().into_parts();
        assert!(payload.is_empty());
        assert_eq!(meta.title, "Unknown");
        assert_eq!(meta.track_number, 1);
    }

    #[test]
    fn test_header_only_container_fails_auth() {
        let container = build(b"abc", PASS, &sample_metadata()).unwrap();
        for cut in HEADER_LEN..container.len() {
            let err = parse_and_decrypt(&container[..cut], PASS).unwrap_err();
            assert!(matches!(err, VacError::Authentication), "cut at {cut}");
        }
    }

    #[test]
    fn test_every_short_prefix_is_format_error() {
        let container = build(b"abc", PASS, &sample_metadata()).unwrap();
        for cut in 0..HEADER_LEN {
            let err = parse_and_decrypt(&container[..cut], PASS).unwrap_err();
            assert!(
                matches!(err, VacError::Format(HeaderError::BufferTooShort { .. })),
                "cut at {cut}"
            );
        }
    }

    #[test]
    fn test_every_sealed_bit_flip_fails_auth() {
        let container = build(b"short audio", PASS, &sample_metadata()).unwrap();
        for i in HEADER_LEN..container.len() {
            for bit in 0..8 {
                let mut tampered = container.clone();
                tampered[i] ^= 1 << bit;
                let err = parse_and_decrypt(&tampered, PASS).unwrap_err();
                assert!(matches!(err, VacError::Authentication), "byte {i} bit {bit}");
            }
        }
    }

    #[test]
    fn test_bad_magic_is_format_error() {
        let mut container = build(b"abc", PASS, &sample_metadata()).unwrap();
        container[0] = b'X';
        assert!(matches!(
            parse_info(&container),
            Err(VacError::Format(HeaderError::InvalidMagic { .. }))
        ));
    }

    #[test]
    fn test_unsupported_version() {
        let mut container = build(b"abc", PASS, &sample_metadata()).unwrap();
        container[4..8].copy_from_slice(&7u32.to_be_bytes());
        let err = parse_and_decrypt(&container, PASS).unwrap_err();
        assert!(matches!(err, VacError::UnsupportedVersion { have: 7, supported: 1 }));
    }

    #[test]
    fn test_parse_info_needs_no_passphrase() {
        let container = build(&sample_audio(), PASS, &sample_metadata()).unwrap();
        let header = parse_info(&container).unwrap();
        assert_eq!(header.metadata, sample_metadata());

        // Header alone is enough.
        let header = parse_info(&container[..HEADER_LEN]).unwrap();
        assert_eq!(header.metadata.title, "Test Song");
    }

    #[test]
    fn test_byte_cut_title_still_opens() {
        // Title written with a raw 64-byte cut through a three-byte character.
        let audio = sample_audio();
        let mut container = build(&audio, PASS, &sample_metadata()).unwrap();
        let title = "日".repeat(30);
        container[12..76].copy_from_slice(&title.as_bytes()[..64]);

        let header = parse_info(&container).unwrap();
        assert_eq!(header.metadata.title, "日".repeat(21));

        let parsed = parse_and_decrypt(&container, PASS).unwrap();
        assert_eq!(parsed.metadata().title, "日".repeat(21));
        assert_eq!(parsed.payload, audio);
    }

    #[test]
    fn test_split_container() {
        let container = build(b"abc", PASS, &sample_metadata()).unwrap();
        let (_, sealed) = split_container(&container).unwrap();
        assert_eq!(sealed.len(), 3 + ENVELOPE_OVERHEAD);
    }

    #[test]
    fn test_key_variants_match_passphrase_variants() {
        let key = derive_key(PASS);
        let container = build_with_key(b"abc", &key, &sample_metadata()).unwrap();
        assert_eq!(parse_and_decrypt(&container, PASS).unwrap().payload, b"abc");

        let container = build(b"xyz", PASS, &sample_metadata()).unwrap();
        assert_eq!(parse_with_key(&container, &key).unwrap().payload, b"xyz");
    }

    #[test]
    fn test_header_is_not_authenticated() {
        // Metadata edits survive decryption; only the sealed region is covered by the tag.
        let mut container = build(b"abc", PASS, &sample_metadata()).unwrap();
        container[12] = b'B';
        let parsed = parse_and_decrypt(&container, PASS).unwrap();
        assert_eq!(parsed.metadata().title, "Best Song");
        assert_eq!(parsed.payload, b"abc");
    }

    #[test]
    fn test_concurrent_builds_use_distinct_nonces() {
        let audio = sample_audio();
        let meta = sample_metadata();

        let containers: Vec<Vec<u8>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| build(&audio, PASS, &meta).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let nonces: HashSet<Vec<u8>> = containers
            .iter()
            .map(|c| c[HEADER_LEN..HEADER_LEN + NONCE_LEN_12].to_vec())
            .collect();
        assert_eq!(nonces.len(), containers.len());

        for c in &containers {
            assert_eq!(parse_and_decrypt(c, PASS).unwrap().payload, audio);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_round_trip(
            payload in proptest::collection::vec(any::<u8>(), 0..4096),
            pass in "[ -~]{1,32}",
            title in "[a-zA-Z0-9 ]{0,70}",
        ) {
            let meta = TrackMetadata::new(title, "Tester", "Demo");
            let container = build(&payload, &pass, &meta).unwrap();
            let parsed = parse_and_decrypt(&container, &pass).unwrap();
            prop_assert_eq!(parsed.payload, payload);
            prop_assert_eq!(parsed.header.metadata, meta.fitted());
        }
    }
}
