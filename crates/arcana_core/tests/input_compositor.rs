use arcana_core::{
    CipherMethod, CodecMode, CodecRequest, CodecService, InputCompositor, KeyEvent, SPACE_GLYPH,
};

#[test]
fn snapshot_is_repeatable_without_mutation() {
    let mut compositor = InputCompositor::new();
    compositor.append_glyph('ᛚ');
    compositor.append_glyph('ᛖ');

    let first = compositor.snapshot();
    let second = compositor.snapshot();
    assert_eq!(first, second);
    assert_eq!(first, "ᛚᛖ");
}

#[test]
fn backspace_on_empty_buffer_is_a_no_op() {
    let mut compositor = InputCompositor::new();
    compositor.backspace();
    compositor.backspace();
    assert!(compositor.is_empty());
    assert_eq!(compositor.snapshot(), "");
}

#[test]
fn space_appends_the_space_glyph() {
    let mut compositor = InputCompositor::new();
    compositor.append_space();
    assert_eq!(compositor.snapshot(), SPACE_GLYPH.to_string());
    assert!(!compositor.snapshot().contains(' '));
}

#[test]
fn newline_appends_a_literal_newline() {
    let mut compositor = InputCompositor::new();
    compositor.append_glyph('ᚨ');
    compositor.append_newline();
    compositor.append_glyph('ᛒ');
    assert_eq!(compositor.snapshot(), "ᚨ\nᛒ");
}

#[test]
fn composed_glyphs_decode_through_the_service() {
    let mut compositor = InputCompositor::new();
    for event in [
        KeyEvent::Glyph('ᛚ'),
        KeyEvent::Glyph('ᛖ'),
        KeyEvent::Space,
        KeyEvent::Glyph('ᚲ'),
        KeyEvent::Glyph('ᛟ'),
        KeyEvent::Glyph('ᛪ'),
        KeyEvent::Backspace,
        KeyEvent::Glyph('ᚾ'),
        KeyEvent::Glyph('ᛊ'),
        KeyEvent::Glyph('ᛖ'),
        KeyEvent::Glyph('ᛁ'),
        KeyEvent::Glyph('ᛚ'),
    ] {
        compositor.apply(event);
    }

    let request = CodecRequest::new(
        compositor.snapshot(),
        CipherMethod::SymbolOnly,
        CodecMode::Decode,
    );
    let decoded = CodecService::new().transform(&request).unwrap();
    assert_eq!(decoded, "le conseil");
}

#[test]
fn compositors_are_independent() {
    let mut left = InputCompositor::new();
    let mut right = InputCompositor::new();
    left.append_glyph('ᚨ');
    right.append_newline();
    assert_eq!(left.snapshot(), "ᚨ");
    assert_eq!(right.snapshot(), "\n");
}
