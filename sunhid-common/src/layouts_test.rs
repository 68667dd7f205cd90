use super::*;

#[test]
fn id_round_trip() {
    for layout in Layout::ALL {
        assert_eq!(Layout::from_id(layout.id()), layout);
    }
}

#[test]
fn unknown_ids() {
    assert_eq!(Layout::from_id(0b00001), Layout::Other(1));
    assert_eq!(Layout::from_id(0x1f).id(), 0x1f);
    assert_eq!(Layout::Other(0x21).name(), "other");
}

#[test]
fn names() {
    assert_eq!(Layout::from_name("germany"), Some(Layout::Germany));
    assert_eq!(Layout::from_name("swiss-french"), Some(Layout::SwissFrench));
    assert_eq!(Layout::from_name("klingon"), None);
    assert_eq!(Layout::from_name("other"), None);
}
