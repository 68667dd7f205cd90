use sunhid_common::keycodes::usage;

use super::*;

#[test]
fn modifiers_convert() {
    assert_eq!(modifiers_to_bit_map("S"), Some(2));
    assert_eq!(modifiers_to_bit_map("C-RA"), Some(0x41));
    assert_eq!(modifiers_to_bit_map(""), Some(0));
    assert_eq!(modifiers_to_bit_map("C-X"), None);

    assert_eq!(modifiers_to_string(0x41), "C-RA");
    assert_eq!(modifiers_to_string(0x88), "M-RM");
    assert_eq!(modifiers_to_string(0), "");
}

#[test]
fn test_key_code() {
    assert_eq!(key_code("a"), Some(usage::A));
    assert_eq!(key_code("A"), Some(usage::A));
    assert_eq!(key_code("-"), Some(usage::MINUS));
    assert_eq!(key_code("Page_Up"), Some(usage::PAGEUP));
    assert_eq!(key_code("sysrq"), Some(usage::SYSRQ));
    assert_eq!(key_code("volume-down"), Some(usage::VOLUMEDOWN));
    assert_eq!(key_code("altgr"), Some(0xe6));
    assert_eq!(key_code("nokey"), None);
}

#[test]
fn test_key_name() {
    assert_eq!(key_name(usage::ENTER), Some("Enter"));
    assert_eq!(key_name(usage::AGAIN), Some("Again"));
    assert_eq!(key_name(0xe7), Some("RightMeta"));
    assert_eq!(key_name(0xa0), None);

    assert_eq!(describe_key(usage::Z), "Z");
    assert_eq!(describe_key(0xa0), "0xa0");
}

#[test]
fn test_list_keycodes() {
    let kp = keycodes_iter().filter(|l| l.name.starts_with("Kp"));
    assert_eq!(kp.count(), 17);

    let k = keycodes_iter().find(|d| d.code == usage::COMPOSE).unwrap();
    assert_eq!(k.name, "Compose");
}
