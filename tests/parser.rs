use taskgrid::csv::{parse, parse_rows};

#[test]
fn round_trip_with_quoting_and_escapes() {
    let text = "task,year,month,progress,status,comment\n\
        \"Launch, phase 1\",2026,1,50,\"On \"\"track\"\"\",\"line one\nline two\"\n\
        Cleanup,2026,2,10,,\n";

    let records = parse(text);
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].get("task"), "Launch, phase 1");
    assert_eq!(records[0].get("status"), "On \"track\"");
    assert_eq!(records[0].get("comment"), "line one\nline two");

    assert_eq!(records[1].get("task"), "Cleanup");
    assert_eq!(records[1].get("status"), "");
}

#[test]
fn crlf_and_lf_parse_identically() {
    let crlf = parse("a,b\r\n1,2\n");
    let lf = parse("a,b\n1,2\n");
    assert_eq!(crlf, lf);
    assert_eq!(crlf.len(), 1);
    assert_eq!(crlf[0].get("a"), "1");
    assert_eq!(crlf[0].get("b"), "2");
}

#[test]
fn trailing_blank_lines_produce_no_records() {
    let records = parse("a,b\n1,2\n\n\n   \n,,\n");
    assert_eq!(records.len(), 1);
}

#[test]
fn comma_only_rows_are_not_records_of_empty_strings() {
    let rows = parse_rows(",,,\n, , ,\n");
    assert!(rows.is_empty());
}

#[test]
fn header_is_required_but_data_is_not() {
    assert!(parse("task,year\n").is_empty());
    assert!(parse("").is_empty());
}

#[test]
fn hostile_inputs_degrade_instead_of_failing() {
    // none of these may panic or error; output shape is all that varies
    let inputs = [
        "",
        "\"",
        "\"\"",
        "\"unterminated",
        "a,b\n\"unterminated,to,end",
        ",,,",
        "\r",
        "\r\n",
        "\n\r\n\n",
        "a,\"b\nc\",d",
        "\"\"\"\"",
        "táşk,ýéar\nβ,2026\n",
    ];
    for input in inputs {
        let _ = parse(input);
        let _ = parse_rows(input);
    }
}

#[test]
fn quotes_inside_unquoted_fields_toggle_silently() {
    // a quote mid-field starts quoted mode; the comma inside is literal
    let rows = parse_rows("ab\"cd,ef\"gh\n");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], vec!["abcd,efgh".to_string()]);
}
