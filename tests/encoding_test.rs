use std::io::{self, Read};

use rs_contentfinder::{extract_bytes, extract_bytes_with_options, extract_reader, Error, Options};

#[test]
fn utf8_content_handled_correctly() {
    let html = "<html><head><meta charset=\"utf-8\"></head><body>\
        <p>This is UTF-8 content with special characters: é, ñ, ü, 中文</p>\
        </body></html>"
        .as_bytes();

    let result = extract_bytes(html);

    assert!(result.content_text.contains("UTF-8 content"));
    assert!(result.content_text.contains("é"));
    assert!(result.content_text.contains("中文"));
}

#[test]
fn iso88591_converted_to_utf8() {
    // é = 0xE9, ñ = 0xF1, ü = 0xFC in ISO-8859-1
    let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9 espa\xF1ol in M\xFCnchen</p></body></html>";

    let result = extract_bytes(html);

    assert!(result.content_text.contains("Café español in München"));
}

#[test]
fn http_equiv_declaration_honoured() {
    let html = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"></head>\
        <body><p>\x93Quoted\x94</p></body></html>";

    let result = extract_bytes(html);

    assert!(result.content_text.contains("\u{201c}Quoted\u{201d}"));
}

#[test]
fn invalid_bytes_do_not_fail() {
    let result = extract_bytes(b"<body><p>broken \xFF\xFE bytes</p></body>");

    assert!(result.content_text.contains("broken"));
    assert!(result.content_text.contains('\u{FFFD}'));
}

#[test]
fn bytes_with_options() {
    let html = b"<body><div class=\"sidebar\"><p>Readers come for the story, stay for the details.</p></div></body>";
    let options = Options {
        preserve_unlikely_candidates: true,
        ..Options::default()
    };

    assert!(extract_bytes(html).content_text.is_empty());
    assert!(extract_bytes_with_options(html, &options).content_text.contains("Readers come"));
}

#[test]
fn reader_input() {
    let html: &[u8] = b"<body><p>From a reader</p></body>";
    let result = extract_reader(html, &Options::default()).unwrap();

    assert_eq!(result.content_text, "From a reader");
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }
}

#[test]
fn reader_failure_is_io_error() {
    let err = extract_reader(FailingReader, &Options::default()).unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}
