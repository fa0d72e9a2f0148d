use arcana_core::{SymbolTable, SPACE_GLYPH};
use std::collections::HashSet;

#[test]
fn every_alphabet_char_round_trips() {
    let table = SymbolTable::global();
    for &(plain, glyph) in table.pairs() {
        assert_eq!(table.encode_char(plain), glyph);
        assert_eq!(table.decode_char(table.encode_char(plain)), plain);
    }
}

#[test]
fn uppercase_round_trips_to_lowercase() {
    let table = SymbolTable::global();
    for upper in 'A'..='Z' {
        assert_eq!(
            table.decode_char(table.encode_char(upper)),
            upper.to_ascii_lowercase()
        );
    }
}

#[test]
fn each_glyph_has_exactly_one_preimage() {
    let table = SymbolTable::global();
    let mut seen = HashSet::new();
    for &(plain, _) in table.pairs() {
        let glyph = table.encode_char(plain);
        assert!(seen.insert(glyph), "glyph {glyph} produced twice");
        assert!(table.contains_glyph(glyph));
    }
    assert_eq!(seen.len(), table.len());
}

#[test]
fn out_of_alphabet_chars_pass_through() {
    let table = SymbolTable::global();
    for c in ['@', '#', '😀', 'é', '\n', '\t', '(', '/'] {
        assert_eq!(table.encode_char(c), c);
        assert_eq!(table.decode_char(c), c);
    }
}

#[test]
fn plain_letters_are_not_glyphs() {
    let table = SymbolTable::global();
    assert_eq!(table.decode("abc xyz"), "abc xyz");
}

#[test]
fn text_encoding_preserves_length_and_order() {
    let table = SymbolTable::global();
    let text = "Ok? 42 @home";
    let encoded = table.encode(text);
    assert_eq!(encoded.chars().count(), text.chars().count());
    assert_eq!(encoded.chars().nth(3), Some(SPACE_GLYPH));
    assert_eq!(encoded.chars().nth(7), Some('@'));
    assert_eq!(table.decode(&encoded), "ok? 42 @home");
}

#[test]
fn global_table_is_shared() {
    assert!(std::ptr::eq(SymbolTable::global(), SymbolTable::global()));
}
