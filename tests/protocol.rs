use checkora::{protocol, service};
use serde::Deserialize;
use serde_with::{serde_as, NoneAsEmptyString};

#[serde_as]
#[derive(Deserialize)]
struct Record {
    request: String,
    #[serde_as(as = "NoneAsEmptyString")]
    response: Option<String>,
}

fn records() -> Vec<Record> {
    let mut reader = csv::Reader::from_path("tests/protocol.csv").expect("reader");
    reader
        .deserialize()
        .map(|record| record.expect("record"))
        .collect()
}

#[test]
fn test_protocol_lines() {
    for (i, record) in records().into_iter().enumerate() {
        assert_eq!(
            protocol::respond(&record.request).map(|response| response.to_string()),
            record.response,
            "line {}: {}",
            i + 2,
            record.request
        );
    }
}

#[test]
fn test_protocol_session() {
    let records = records();

    let mut input = String::new();
    let mut expected = String::new();
    for record in &records {
        input.push_str(&record.request);
        input.push('\n');
        if let Some(ref response) = record.response {
            expected.push_str(response);
            expected.push('\n');
        }
    }

    let mut output = Vec::new();
    let summary = service::serve(input.as_bytes(), &mut output).expect("in-memory io");

    assert_eq!(String::from_utf8(output).expect("utf-8 output"), expected);
    assert_eq!(
        summary.requests,
        records.iter().filter(|r| r.response.is_some()).count() as u64
    );
    assert_eq!(
        summary.errors,
        records
            .iter()
            .filter(|r| r.response.as_deref().is_some_and(|r| r.starts_with("ERROR ")))
            .count() as u64
    );
}
