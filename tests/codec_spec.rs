use zengin::zengin::codec::{ebcdic, jis};
use zengin::CharEncoding;

#[test]
fn ebcdic_decodes_mapped_bytes() {
    assert_eq!(ebcdic::decode(&[0x40]), " ");
    assert_eq!(ebcdic::decode(&[0xC1, 0xC2, 0xC3]), "ABC");
    assert_eq!(ebcdic::decode(&[0x95, 0xBE]), "ﾄﾞ");
    assert_eq!(ebcdic::decode(&[0xF0, 0xF9]), "09");
    assert_eq!(ebcdic::decode(&[0x0D, 0x0A]), "\r\n");
}

#[test]
fn ebcdic_encodes_mapped_characters() {
    assert_eq!(ebcdic::encode(" "), vec![0x40]);
    assert_eq!(ebcdic::encode("ABC"), vec![0xC1, 0xC2, 0xC3]);
    assert_eq!(ebcdic::encode("ﾄﾞ"), vec![0x95, 0xBE]);
    assert_eq!(ebcdic::encode("\\"), vec![0x5B]);
}

#[test]
fn ebcdic_runs_assign_consecutive_codes() {
    let expected = "ｱｲｳｴｵｶｷｸｹｺ";
    for (i, c) in expected.chars().enumerate() {
        assert_eq!(ebcdic::lookup(0x81 + i as u8), Some(c), "code 0x{:02X}", 0x81 + i);
    }
    assert_eq!(ebcdic::lookup(0x8B), None);
    assert_eq!(ebcdic::lookup(0x41), None);
}

#[test]
fn ebcdic_unmapped_character_encodes_to_sentinel() {
    assert_eq!(ebcdic::encode("a"), vec![ebcdic::SENTINEL]);
    assert_eq!(ebcdic::encode("Aあ1"), vec![0xC1, 0x6D, 0xF1]);
}

#[test]
fn ebcdic_unmapped_byte_decodes_to_replacement() {
    assert_eq!(ebcdic::decode(&[0x00]), "\u{FFFD}");
    assert_eq!(ebcdic::decode(&[0x6D]), "\u{FFFD}");
    assert_eq!(ebcdic::decode(&[0xC1, 0xFF, 0xC2]), "A\u{FFFD}B");
}

#[test]
fn ebcdic_roundtrips_katakana_name() {
    let name = "ｼﾞﾖﾝ ﾄﾞｳ";
    assert_eq!(ebcdic::decode(&ebcdic::encode(name)), name);
}

#[test]
fn ebcdic_every_mapped_byte_roundtrips() {
    for b in 0u8..=255 {
        if let Some(c) = ebcdic::lookup(b) {
            assert_eq!(ebcdic::encode(&c.to_string()), vec![b], "byte 0x{:02X}", b);
        }
    }
}

#[test]
fn jis_roundtrips_ascii_and_halfwidth_katakana() {
    let text = "0123 ABC-()./ ｱｲｳ ｼﾞﾖﾝ ﾄﾞｳ";
    let encoded = jis::encode(text);
    assert_eq!(encoded.len(), text.chars().count());
    assert_eq!(jis::decode(&encoded), text);
    assert_eq!(jis::encode("ｱｲｳ"), vec![0xB1, 0xB2, 0xB3]);
}

#[test]
fn jis_encodes_double_byte_characters() {
    assert_eq!(jis::encode("あ"), vec![0x82, 0xA0]);
    assert_eq!(jis::decode(&[0x82, 0xA0]), "あ");
}

#[test]
fn jis_unmappable_character_encodes_to_sentinel() {
    assert_eq!(jis::encode("A😀B"), vec![b'A', jis::SENTINEL, b'B']);
}

#[test]
fn jis_truncated_sequence_decodes_to_replacement() {
    assert_eq!(jis::decode(&[b'A', 0x82]), "A\u{FFFD}");
}

#[test]
fn char_encoding_dispatch() {
    assert_eq!(CharEncoding::Jis.encode("1"), vec![0x31]);
    assert_eq!(CharEncoding::Ebcdic.encode("1"), vec![0xF1]);
    assert_eq!(CharEncoding::Jis.space(), 0x20);
    assert_eq!(CharEncoding::Ebcdic.space(), 0x40);
    assert_eq!(CharEncoding::Ebcdic.zero(), 0xF0);
    assert_eq!(CharEncoding::detect(Some(0x31)), Some(CharEncoding::Jis));
    assert_eq!(CharEncoding::detect(Some(0xF9)), Some(CharEncoding::Ebcdic));
    assert_eq!(CharEncoding::detect(Some(0x40)), None);
    assert_eq!(CharEncoding::detect(None), None);
}
