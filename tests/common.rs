use std::io::Cursor;

use csv::ReaderBuilder;
use lreq::{Digits, Error};

const PATH: &str = "fixtures/vectors.csv";

#[test]
fn decode_vectors() {
    for vector in vectors() {
        vector.validate(lreq::decode(&vector.encoding));
    }
}

#[test]
fn decode_slice_vectors() {
    for vector in vectors() {
        vector.validate(lreq::avec::decode_slice(vector.encoding.as_bytes()));
    }
}

#[cfg(feature = "std")]
#[test]
fn decode_reader_vectors() {
    for vector in vectors() {
        // Lower case is only accepted by the reader.
        if vector.encoding.bytes().any(|b| b.is_ascii_lowercase()) {
            continue;
        }

        let mut line = Cursor::new(format!("{}\n", vector.encoding));
        let result = lreq::avec::decode_reader(&mut line).map_err(|err| match err {
            lreq::avec::reader::Error::Decode(err) => err,
            err => panic!("{err}"),
        });
        vector.validate(result);
    }
}

#[cfg(feature = "std")]
#[test]
fn decode_reader_line_handling() {
    let decode = |s: &str| lreq::avec::decode_reader(&mut Cursor::new(s)).unwrap();

    assert_eq!(decode("llrr=\n"), "210122");
    assert_eq!(decode("LLRR=\r\n"), "210122");
    assert_eq!(decode("LLRR="), "210122");
    assert_eq!(decode("LLRR=\r"), "210122");
    assert_eq!(decode("LRLL\nRRRRRRRRRR\n"), "21210");
    assert_eq!(decode(""), "0");
    assert_eq!(decode("\n"), "0");
}

#[cfg(feature = "std")]
#[test]
fn decode_reader_rejects_trailing_space() {
    let err = lreq::avec::decode_reader(&mut Cursor::new("LLRR= \n")).unwrap_err();

    match err {
        lreq::avec::reader::Error::Decode(err) => {
            assert_eq!(err, Error::InvalidSymbol { position: 5, found: b' ' });
        }
        err => panic!("{err}"),
    }
}

#[test]
fn decode_is_deterministic() {
    for vector in vectors() {
        assert_eq!(lreq::decode(&vector.encoding), lreq::decode(&vector.encoding));
    }
}

#[test]
fn decode_in_parallel() {
    let handles: Vec<_> = vectors()
        .into_iter()
        .map(|vector| {
            std::thread::spawn(move || vector.validate(lreq::decode(&vector.encoding)))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn error_classification() {
    let err = lreq::decode("LRX").unwrap_err();
    assert!(err.is_invalid_symbol());
    assert!(!err.is_malformed());
    assert_eq!(err.position(), 2);
    assert_eq!(err.to_string(), "Invalid symbol 'X' at position 2.");

    let err = lreq::decode("RRRRRRRRRR").unwrap_err();
    assert!(err.is_malformed());
    assert!(!err.is_invalid_symbol());
    assert_eq!(err.position(), 9);
}

#[test]
fn invalid_symbol_reports_raw_byte() {
    let err = lreq::decode("LÉ").unwrap_err();
    assert_eq!(err, Error::InvalidSymbol { position: 1, found: 0xc3 });
    assert_eq!(err.to_string(), "Invalid symbol 0xc3 at position 1.");

    let err = lreq::decode("L\tR").unwrap_err();
    assert_eq!(err.to_string(), "Invalid symbol 0x09 at position 1.");
}

struct Vector {
    encoding: String,
    outcome: String,
    value: String,
}

impl Vector {
    fn validate(&self, result: Result<Digits, Error>) {
        let Self {
            encoding,
            outcome,
            value,
        } = self;

        match (outcome.as_str(), result) {
            ("ok", Ok(digits)) => {
                assert_eq!(digits.to_string(), *value, "{encoding:?}");
                assert_eq!(digits.len(), encoding.len() + 1, "{encoding:?}");
            }
            ("invalid", Err(err @ Error::InvalidSymbol { .. })) => {
                assert_eq!(err.position().to_string(), *value, "{encoding:?}");
            }
            ("malformed", Err(err @ Error::Malformed { .. })) => {
                assert_eq!(err.position().to_string(), *value, "{encoding:?}");
            }
            (outcome, result) => panic!("{encoding:?}: expected {outcome}, got {result:?}"),
        }
    }
}

fn vectors() -> Vec<Vector> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(PATH)
        .unwrap();

    reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            Vector {
                encoding: r[0].to_string(),
                outcome: r[1].to_string(),
                value: r[2].to_string(),
            }
        })
        .collect()
}
