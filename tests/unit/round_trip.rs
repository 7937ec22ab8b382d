use csv2json::conversion::{ConversionConfig, ConversionEngine};
use csv2json::parser::CsvSource;
use pretty_assertions::assert_eq;
use serde_json::Value;

use super::fixture;

fn rows_from_csv(text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers = reader.headers().unwrap().iter().map(str::to_string).collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

fn rows_from_json(json: &str) -> Vec<Vec<(String, String)>> {
    let value: Value = serde_json::from_str(json).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|record| {
            record
                .as_object()
                .unwrap()
                .iter()
                .map(|(k, v)| (k.clone(), v.as_str().unwrap().to_string()))
                .collect()
        })
        .collect()
}

#[test]
fn test_round_trip_recovers_rows() {
    let path = fixture("unicode_quoted.csv");
    let text = std::fs::read_to_string(&path).unwrap();
    let (headers, rows) = rows_from_csv(&text);

    for indent in [0, 2, 4] {
        let engine =
            ConversionEngine::new(ConversionConfig::default().with_indent_size(indent)).unwrap();
        let json = engine.convert_source(&CsvSource::File(path.clone())).unwrap();
        let records = rows_from_json(&json.content);

        assert_eq!(records.len(), rows.len());
        for (record, row) in records.iter().zip(&rows) {
            let keys: Vec<&String> = record.iter().map(|(k, _)| k).collect();
            let values: Vec<&String> = record.iter().map(|(_, v)| v).collect();
            assert_eq!(keys, headers.iter().collect::<Vec<_>>());
            assert_eq!(values, row.iter().collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_non_ascii_written_literally() {
    let engine = ConversionEngine::new(ConversionConfig::default()).unwrap();
    let json = engine
        .convert_source(&CsvSource::File(fixture("unicode_quoted.csv")))
        .unwrap();

    assert!(json.content.contains("\"city\": \"東京\""));
    assert!(json.content.contains("\"city\": \"Kraków\""));
    assert!(json.content.contains("\"note\": \"line one\\nline two\""));
}

#[test]
fn test_ragged_rows_are_permissive() {
    let engine = ConversionEngine::new(ConversionConfig::default()).unwrap();
    let json = engine
        .convert_source(&CsvSource::File(fixture("ragged.csv")))
        .unwrap();
    let value: Value = serde_json::from_str(&json.content).unwrap();

    let short = value[0].as_object().unwrap();
    assert_eq!(short.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(short["c"], Value::Null);

    let long = value[1].as_object().unwrap();
    assert_eq!(long.keys().collect::<Vec<_>>(), vec!["a", "b", "c", "null"]);
    assert_eq!(long["null"], serde_json::json!(["4", "5"]));
}
