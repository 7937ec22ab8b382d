use csv2json::{convert_csv, convert_csv_str, ConversionConfig};
use pretty_assertions::assert_eq;

#[test]
fn test_reference_example() {
    let output = convert_csv("name,age\nAda,36\nLin,29\n").unwrap();
    assert_eq!(
        output,
        "[\n  {\n    \"name\": \"Ada\",\n    \"age\": \"36\"\n  },\n  {\n    \"name\": \"Lin\",\n    \"age\": \"29\"\n  }\n]"
    );
}

#[test]
fn test_header_only_is_empty_array() {
    assert_eq!(convert_csv("name,age\n").unwrap(), "[]");
    assert_eq!(convert_csv("").unwrap(), "[]");
}

#[test]
fn test_numbers_and_booleans_stay_strings() {
    let output = convert_csv("n,ok\n1.5,true\n").unwrap();
    assert!(output.contains("\"n\": \"1.5\""));
    assert!(output.contains("\"ok\": \"true\""));
}

#[test]
fn test_short_row_gets_null() {
    let output = convert_csv_str("a,b\n1\n", &ConversionConfig::default().with_indent_size(0))
        .unwrap();
    assert_eq!(output, "[\n{\n\"a\": \"1\",\n\"b\": null\n}\n]");
}

#[test]
fn test_long_row_overflow_is_last_key() {
    let output = convert_csv_str("a\n1,2,3\n", &ConversionConfig::default().with_indent_size(0))
        .unwrap();
    assert_eq!(output, "[\n{\n\"a\": \"1\",\n\"null\": [\n\"2\",\n\"3\"\n]\n}\n]");
}

#[test]
fn test_duplicate_header_keeps_last_value() {
    let output = convert_csv_str("k,k\n1,2\n", &ConversionConfig::default().with_indent_size(0))
        .unwrap();
    assert_eq!(output, "[\n{\n\"k\": \"2\"\n}\n]");
}

#[test]
fn test_blank_first_line_gives_empty_header() {
    let output = convert_csv_str(
        "\nname,age\nAda,36\n",
        &ConversionConfig::default().with_indent_size(0),
    )
    .unwrap();
    assert_eq!(
        output,
        "[\n{\n\"null\": [\n\"name\",\n\"age\"\n]\n},\n{\n\"null\": [\n\"Ada\",\n\"36\"\n]\n}\n]"
    );
}
