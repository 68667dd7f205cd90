use tempfile::NamedTempFile;

use super::*;

#[test]
fn parse_capture() {
    let src = r#"
# shift a
k 63 4d
k cd  0xE3   # release
M 87 05 fb

mouse 80
"#;

    assert_eq!(parse(src).unwrap(), vec![
        Delivery {
            source: Source::Keyboard,
            bytes: vec![0x63, 0x4d],
            line: 3
        },
        Delivery {
            source: Source::Keyboard,
            bytes: vec![0xcd, 0xe3],
            line: 4
        },
        Delivery {
            source: Source::Mouse,
            bytes: vec![0x87, 0x05, 0xfb],
            line: 5
        },
        Delivery {
            source: Source::Mouse,
            bytes: vec![0x80],
            line: 7
        },
    ]);
}

#[test]
fn unknown_device() {
    let err = parse("k 01\nx 01\n").unwrap_err();

    assert_eq!(err.line, Some(2));
    assert_eq!(err.message, r#"Unknown device "x""#);
}

#[test]
fn invalid_bytes() {
    for (src, word) in [("k 4g", "4g"), ("m 80 100", "100"), ("k 0x", "0x"), ("k -1", "-1")] {
        let err = parse(src).unwrap_err();
        assert_eq!(err, CaptureError::new(format!("Invalid byte {word:?}"), 1));
    }
}

#[test]
fn missing_bytes() {
    let err = parse("# nothing\n\nk # comment only\n").unwrap_err();

    assert_eq!(err.line, Some(3));
}

#[test]
fn read_file() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    std::io::Write::write_all(&mut file, b"k 4d cd\n")?;

    let deliveries = read(file.path())?;

    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].bytes, vec![0x4d, 0xcd]);

    let err = read(&file.path().join("missing")).unwrap_err();
    assert_eq!(err.line, None);
    Ok(())
}
