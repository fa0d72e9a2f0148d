use arcana_core::{
    parse_cipher_method, parse_codec_mode, CipherMethod, CodecError, CodecMode, CodecRequest,
    CodecService,
};

fn run(
    text: &str,
    key: Option<&str>,
    method: CipherMethod,
    mode: CodecMode,
) -> Result<String, CodecError> {
    let mut request = CodecRequest::new(text, method, mode);
    request.key = key.map(str::to_owned);
    CodecService::new().transform(&request)
}

#[test]
fn le_conseil_symbol_only_end_to_end() {
    let method = CipherMethod::SymbolOnly;
    let encoded = run("Le Conseil", None, method, CodecMode::Encode).unwrap();
    assert_eq!(encoded, "ᛚᛖ᛫ᚲᛟᚾᛊᛖᛁᛚ");

    let decoded = run(&encoded, None, method, CodecMode::Decode).unwrap();
    assert_eq!(decoded, "le conseil");
}

#[test]
fn polyalphabetic_dispatch_round_trips() {
    let encoded = run(
        "Hello, World!",
        Some("cle"),
        CipherMethod::Polyalphabetic,
        CodecMode::Encode,
    )
    .unwrap();
    assert_eq!(encoded, "Jppnz, Aqcpf!");

    let decoded = run(
        &encoded,
        Some("cle"),
        CipherMethod::Polyalphabetic,
        CodecMode::Decode,
    )
    .unwrap();
    assert_eq!(decoded, "Hello, World!");
}

#[test]
fn composite_dispatch_lowercases_on_round_trip() {
    let (key, method) = (Some("cle"), CipherMethod::Composite);
    let encoded = run("Hello", key, method, CodecMode::Encode).unwrap();
    let decoded = run(&encoded, key, method, CodecMode::Decode).unwrap();
    assert_eq!(decoded, "hello");
}

#[test]
fn key_driven_methods_reject_unusable_keys() {
    for method in [CipherMethod::Polyalphabetic, CipherMethod::Composite] {
        for mode in [CodecMode::Encode, CodecMode::Decode] {
            for key in [None, Some(""), Some("123"), Some("  ")] {
                let err = run("text", key, method, mode).unwrap_err();
                assert_eq!(err, CodecError::MissingKey, "{method} {mode} {key:?}");
            }
        }
    }
}

#[test]
fn symbol_only_succeeds_without_any_key() {
    for key in [None, Some(""), Some("123")] {
        assert!(run("text", key, CipherMethod::SymbolOnly, CodecMode::Encode).is_ok());
    }
}

#[test]
fn identical_requests_give_identical_output() {
    let method = CipherMethod::Composite;
    let request = CodecRequest::new("Roleplay night!", method, CodecMode::Encode);
    let request = request.with_key("arcana");
    let service = CodecService::new();
    assert_eq!(
        service.transform(&request).unwrap(),
        service.transform(&request).unwrap()
    );
}

#[test]
fn host_strings_parse_into_requests() {
    let method = parse_cipher_method("composite").unwrap();
    let mode = parse_codec_mode("encode").unwrap();
    let request = CodecRequest::new("abc", method, mode).with_key("b");
    assert_eq!(CodecService::new().transform(&request).unwrap(), "ᛒᚲᛞ");
}
