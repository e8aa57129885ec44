//! Streaming pipeline tests

use std::io::{BufReader, Read};

use super::helpers::table;
use crate::error::YamlsubError;
use crate::subst::rewrite::rewrite_buffer;
use crate::subst::stream::with_rewritten_stream;

#[test]
fn test_stream_delivers_rewritten_lines_in_order() {
    let vars = table(&[("VAL", "chido1")]);
    let input = "id: ${VAL}\nlana: \"no\"\n";
    let (bytes, errors) = with_rewritten_stream(input.as_bytes(), &vars, |mut reader| {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).unwrap();
        buf
    });
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "id: chido1\nlana: \"no\"\n"
    );
    assert!(errors.is_empty());
}

#[test]
fn test_stream_matches_batch_rewrite() {
    let vars = table(&[("VAL", "chido1"), ("OTHER", "com")]);
    let input = "id: ${VAL}.${OTHER}\nmissing: ${NOPE}\ntail: ${VAL}";
    let (batch_output, batch_errors) = rewrite_buffer(input, &vars);

    let (stream_output, stream_errors) =
        with_rewritten_stream(input.as_bytes(), &vars, |mut reader| {
            let mut buf = Vec::new();
            reader.read_to_end(&mut buf).unwrap();
            String::from_utf8(buf).unwrap()
        });

    assert_eq!(stream_output, batch_output);
    assert_eq!(
        stream_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>(),
        batch_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_stream_reports_closed_reader() {
    let input = "a: 1\nb: 2\nc: 3\nd: 4\n";
    let ((), errors) = with_rewritten_stream(input.as_bytes(), &table(&[]), |mut reader| {
        let mut byte = [0u8; 1];
        reader.read(&mut byte).unwrap();
        // Reader dropped here with most of the stream unread.
    });
    assert!(errors.iter().any(|e| matches!(e, YamlsubError::PipeClosed)));
}

#[test]
fn test_stream_records_source_read_errors() {
    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("source failed"))
        }
    }

    let source = BufReader::new(FailingReader);
    let (drained, errors) = with_rewritten_stream(source, &table(&[]), |mut reader| {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).unwrap();
        buf
    });
    assert!(drained.is_empty());
    assert!(errors.iter().any(|e| matches!(e, YamlsubError::Io(_))));
}

#[test]
fn test_stream_empty_input_closes_immediately() {
    let (bytes, errors) = with_rewritten_stream("".as_bytes(), &table(&[]), |mut reader| {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).unwrap();
        buf
    });
    assert!(bytes.is_empty());
    assert!(errors.is_empty());
}
