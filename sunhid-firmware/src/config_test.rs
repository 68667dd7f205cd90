use super::*;

#[test]
fn defaults() {
    let config = Config::default();

    assert!(config.use_macros);
    assert!(config.use_mouse);
    assert!(config.startup_greeting);
    assert!(!config.key_click);
    assert_eq!(config.force_layout, None);
}

#[test]
fn layout() {
    let config = Config::default();
    assert_eq!(config.layout(Layout::Italy), Layout::Italy);

    let config = Config {
        force_layout: Some(Layout::UnitedKingdom),
        ..config
    };
    assert_eq!(config.layout(Layout::Italy), Layout::UnitedKingdom);
}
