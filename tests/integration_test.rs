use std::sync::Arc;
use std::thread;

use regex::Regex;
use secret_token::{
    TokenConfig, TokenError, TokenFactory, checksum, decode_base62, encode_base62,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn configs() -> Vec<TokenConfig> {
    vec![
        TokenConfig::default(),
        TokenConfig::new(30, 6, "bzt_").unwrap(),
        TokenConfig::new(1, 1, "").unwrap(),
        TokenConfig::new(64, 10, "sk_live_").unwrap(),
        TokenConfig::new(16, 12, "pfx-").unwrap(),
    ]
}

#[test]
fn test_string_roundtrip_for_all_configs() {
    init_logging();
    for config in configs() {
        let factory = TokenFactory::new(config.clone());
        for _ in 0..50 {
            let token = factory.new_token().unwrap();
            assert_eq!(token.len(), config.token_len());

            let parsed = factory.from_string(&token.to_string()).unwrap();
            assert_eq!(parsed.to_string(), token.to_string());
            assert!(factory.validate(&parsed));
        }
    }
}

#[test]
fn test_base62_roundtrip_for_all_configs() {
    init_logging();
    for config in configs() {
        let factory = TokenFactory::new(config);
        for _ in 0..50 {
            let token = factory.new_token().unwrap();
            let parsed = factory.from_base62(&token.base62()).unwrap();
            assert_eq!(parsed.to_string(), token.to_string());
        }
    }
}

#[test]
fn test_prefixed_tokens_match_shape() {
    let factory = TokenFactory::new(TokenConfig::new(30, 6, "bzt_").unwrap());
    let re = Regex::new("^bzt_[A-Za-z0-9]{30}[0-9]{6}$").unwrap();
    for _ in 0..100 {
        let token = factory.new_token().unwrap();
        assert!(re.is_match(&token.to_string()), "{}", token);
    }
}

#[test]
fn test_tampered_checksum_is_detected() {
    init_logging();
    let factory = TokenFactory::new(TokenConfig::new(30, 6, "bzt_").unwrap());
    let token = factory.new_token().unwrap();
    let s = token.to_string();
    let sum_start = s.len() - 6;

    for i in sum_start..s.len() {
        let mut bytes = s.clone().into_bytes();
        bytes[i] = b'0' + (bytes[i] - b'0' + 1) % 10;
        let tampered = String::from_utf8(bytes).unwrap();

        let err = factory.from_string(&tampered).unwrap_err();
        assert!(matches!(err, TokenError::InvalidChecksum), "position {i}");
        assert!(err.to_string().contains("Invalid checksum"));
    }
}

#[test]
fn test_added_or_removed_characters_are_rejected() {
    let factory = TokenFactory::default();
    let s = factory.new_token().unwrap().to_string();

    let longer = format!("{s}A");
    let shorter = &s[1..];
    for input in [longer.as_str(), shorter, ""] {
        let err = factory.from_string(input).unwrap_err();
        assert!(matches!(err, TokenError::InvalidLength { .. }), "{input:?}");
        assert!(err.to_string().contains("Invalid length"));
    }
}

#[test]
fn test_foreign_prefix_is_rejected() {
    let ours = TokenFactory::new(TokenConfig::new(30, 6, "bzt_").unwrap());
    let theirs = TokenFactory::new(TokenConfig::new(30, 6, "abc_").unwrap());

    let token = theirs.new_token().unwrap();
    let err = ours.from_string(&token.to_string()).unwrap_err();
    assert!(matches!(err, TokenError::InvalidPrefix { .. }));

    let err = ours.from_base62(&token.base62()).unwrap_err();
    assert!(matches!(err, TokenError::InvalidPrefix { .. }));
}

#[test]
fn test_checksum_is_deterministic() {
    let payload = b"Zq3vN0pLk8WmX2rT5yB7cD9fG1hJ4s";
    let first = checksum(payload, 6);
    let _ = checksum(b"something else", 6);
    assert_eq!(checksum(payload, 6), first);
    assert_eq!(first, "108278");
}

#[test]
fn test_base62_known_vector() {
    let enc = encode_base62(b"This is 1 test string");
    assert_eq!(enc, "NJaT6B7Ip2oLiysprlOr8RVjFRr1");
    assert_eq!(decode_base62(&enc).unwrap(), b"This is 1 test string");
}

#[test]
fn test_config_from_yaml_drives_factory() {
    let config = TokenConfig::from_yaml("payload_length: 20\nchecksum_length: 4\nprefix: ak_\n")
        .unwrap();
    let factory = TokenFactory::new(config);
    let token = factory.new_token().unwrap();

    let re = Regex::new("^ak_[A-Za-z0-9]{20}[0-9]{4}$").unwrap();
    assert!(re.is_match(&token.to_string()));
    assert_eq!(factory.config().token_len(), 27);
}

#[test]
fn test_shared_factory_across_threads() {
    let factory = Arc::new(TokenFactory::new(TokenConfig::new(30, 6, "bzt_").unwrap()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let factory = Arc::clone(&factory);
            thread::spawn(move || {
                (0..100)
                    .map(|_| {
                        let token = factory.new_token().unwrap();
                        factory.from_string(&token.to_string()).unwrap();
                        token.to_string()
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all: Vec<String> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    let total = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), total);
}
