//! Edge case tests for rendering complete ABA files through the library API.

use cemtext_aba::{
    AbaError, AbaRecord, AbaWriter, Cents, DescriptiveFields, DescriptiveRecord, DetailFields,
    DetailLedger, DetailRecord, Indicator, TotalRecord, TransactionCode, LINE_SEPARATOR,
    RECORD_LENGTH,
};
use chrono::NaiveDate;

fn header() -> DescriptiveRecord {
    DescriptiveRecord::new(DescriptiveFields {
        financial_institution: "BQL".to_string(),
        user_preferred_specification: "MYSPEC".to_string(),
        user_identification_number: 123,
        description_of_file: "PAYROLL".to_string(),
        date_to_process: NaiveDate::from_ymd_opt(2014, 3, 20),
        ..Default::default()
    })
    .unwrap()
}

fn fields() -> DetailFields {
    DetailFields {
        bsb: "123-456".to_string(),
        account_number: "000012345".to_string(),
        indicator: Indicator::None,
        transaction_code: TransactionCode::Pay,
        amount: Cents::new(5000),
        title_of_account: "J SMITH".to_string(),
        trace_record_bsb: "987-654".to_string(),
        trace_record_account_number: "0099999".to_string(),
        name_of_remitter: "ACME".to_string(),
        ..Default::default()
    }
}

fn detail(code: TransactionCode, cents: u64) -> DetailRecord {
    DetailRecord::new(DetailFields {
        transaction_code: code,
        amount: Cents::new(cents),
        ..fields()
    })
    .unwrap()
}

fn render(details: Vec<DetailRecord>) -> Vec<String> {
    let mut writer = AbaWriter::new();
    writer.set_header(header());
    for d in details {
        writer.add_detail(d);
    }
    writer
        .render()
        .unwrap()
        .split(LINE_SEPARATOR)
        .map(str::to_string)
        .collect()
}

// ==================== SINGLE PAYMENT FILE ====================

#[test]
fn test_single_pay_record_file() {
    let lines = render(vec![detail(TransactionCode::Pay, 5000)]);
    assert_eq!(lines.len(), 3);

    let expected_header = format!(
        "0{}01BQL{}{:<26}000123{:<12}200314{}",
        " ".repeat(17),
        " ".repeat(7),
        "MYSPEC",
        "PAYROLL",
        " ".repeat(40)
    );
    assert_eq!(lines[0], expected_header);

    assert!(lines[1].starts_with("1123-456000012345"));
    assert!(lines[1].ends_with("00000000"));

    let expected_total = format!(
        "7999-999{}{}{}{}{}000001{}",
        " ".repeat(12),
        "0000005000",
        "0000005000",
        "0000000000",
        " ".repeat(24),
        " ".repeat(40)
    );
    assert_eq!(lines[2], expected_total);
}

#[test]
fn test_all_lines_are_record_length() {
    let lines = render(vec![
        detail(TransactionCode::Pay, 1),
        detail(TransactionCode::ExternalDebit, 9_999_999_999),
        detail(TransactionCode::DebentureInterest, 0),
    ]);

    for line in &lines {
        assert_eq!(line.chars().count(), RECORD_LENGTH, "{:?}", line);
    }
}

#[test]
fn test_balanced_file_has_zero_net() {
    let lines = render(vec![
        detail(TransactionCode::Pay, 5000),
        detail(TransactionCode::ExternalDebit, 5000),
    ]);

    assert_eq!(&lines[3][20..30], "0000000000");
    assert_eq!(&lines[3][30..40], "0000005000");
    assert_eq!(&lines[3][40..50], "0000005000");
}

#[test]
fn test_debit_heavy_file_reports_absolute_net() {
    let lines = render(vec![
        detail(TransactionCode::Pay, 100),
        detail(TransactionCode::ExternalDebit, 900),
    ]);

    assert_eq!(&lines[3][20..30], "0000000800");
}

// ==================== HEADER STATE ====================

#[test]
fn test_render_without_header_fails_even_when_empty() {
    let mut writer = AbaWriter::new();
    assert!(matches!(writer.render(), Err(AbaError::NoHeader)));

    writer.add_detail(detail(TransactionCode::Pay, 1));
    assert!(matches!(writer.render(), Err(AbaError::NoHeader)));
}

#[test]
fn test_header_mutation_after_set_is_rendered() {
    let mut writer = AbaWriter::new();
    writer.set_header(header());
    writer
        .header_mut()
        .unwrap()
        .set_reel_sequence_number(12)
        .unwrap();

    let payload = writer.render().unwrap();
    assert_eq!(&payload[18..20], "12");
}

// ==================== BSB AND ACCOUNT NUMBERS ====================

#[test]
fn test_bsb_forms() {
    for bsb in ["123456", "123-456"] {
        let record = DetailRecord::new(DetailFields {
            bsb: bsb.to_string(),
            ..fields()
        })
        .unwrap();
        assert!(record.encode().unwrap().starts_with("1123-456"));
    }

    for bsb in ["12345", "1234567", "12-3456", "abc-def", ""] {
        let err = DetailRecord::new(DetailFields {
            bsb: bsb.to_string(),
            ..fields()
        })
        .unwrap_err();
        assert!(err.is_validation(), "{:?}", bsb);
    }
}

#[test]
fn test_hyphenated_long_account_number_is_compacted() {
    let record = DetailRecord::new(DetailFields {
        account_number: " 12-345-6789 ".to_string(),
        ..fields()
    })
    .unwrap();

    assert_eq!(&record.encode().unwrap()[8..17], "123456789");
}

#[test]
fn test_trace_account_number_is_trimmed_and_right_justified() {
    let record = DetailRecord::new(DetailFields {
        trace_record_account_number: "  4321 ".to_string(),
        ..fields()
    })
    .unwrap();

    assert_eq!(&record.encode().unwrap()[87..96], "     4321");
}

// ==================== TEXT FIELDS ====================

#[test]
fn test_title_is_not_upper_cased() {
    let record = DetailRecord::new(DetailFields {
        title_of_account: "Jane Citizen".to_string(),
        ..fields()
    })
    .unwrap();

    assert_eq!(&record.encode().unwrap()[30..42], "Jane Citizen");
}

#[test]
fn test_line_breaks_in_text_are_rejected() {
    let err = DetailRecord::new(DetailFields {
        lodgement_reference: "INV\r\n1".to_string(),
        ..fields()
    })
    .unwrap_err();
    assert!(err.is_validation());

    let mut header = header();
    assert!(header.set_description_of_file("PAY\nROLL").is_err());
}

#[test]
fn test_non_ascii_text_is_rejected() {
    let err = DetailRecord::new(DetailFields {
        title_of_account: "Zoë Müller".to_string(),
        ..fields()
    })
    .unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("title_of_account"), "{}", err);

    let mut record = DetailRecord::new(fields()).unwrap();
    assert!(record.set_name_of_remitter("ACMÉ".to_string()).is_err());
    assert!(record.set_lodgement_reference("INV №1".to_string()).is_err());

    let mut header = header();
    assert!(header.set_description_of_file("PAYÉ".to_string()).is_err());
    assert!(header.set_user_preferred_specification("Müller".to_string()).is_err());
}

#[test]
fn test_ascii_text_renders_one_byte_per_column() {
    let mut writer = AbaWriter::new();
    writer.set_header(header());
    writer.add_detail(
        DetailRecord::new(DetailFields {
            title_of_account: "O'BRIEN & CO ~ #1".to_string(),
            ..fields()
        })
        .unwrap(),
    );

    let output = writer.render().unwrap();
    for line in output.split("\r\n") {
        assert_eq!(line.len(), RECORD_LENGTH);
    }
}

// ==================== LEDGER THROUGH THE WRITER ====================

#[test]
fn test_remove_through_writer_updates_total() {
    let mut writer = AbaWriter::new();
    writer
        .set_header(header())
        .add_detail(detail(TransactionCode::Pay, 300))
        .add_detail(detail(TransactionCode::ExternalDebit, 200));

    writer.details_mut().remove(1).unwrap();
    writer.render().unwrap();

    let total = writer.total().unwrap();
    assert_eq!(total.record_count, 1);
    assert_eq!(total.debit_total_amount, Cents::ZERO);
    assert_eq!(total.net_total_amount, Cents::new(300));
}

#[test]
fn test_remove_missing_index() {
    let mut ledger = DetailLedger::new();
    assert!(matches!(
        ledger.remove(0),
        Err(AbaError::NotFound { index: 0, len: 0 })
    ));
}

#[test]
fn test_total_overflow_fails_render() {
    let mut writer = AbaWriter::new();
    writer
        .set_header(header())
        .add_detail(detail(TransactionCode::Pay, 9_999_999_999))
        .add_detail(detail(TransactionCode::Pay, 1));

    let err = writer.render().unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("does not fit in 10 digits"));
}

#[test]
fn test_hand_built_total_encodes() {
    let total = TotalRecord {
        net_total_amount: Cents::new(1),
        credit_total_amount: Cents::new(1),
        debit_total_amount: Cents::ZERO,
        record_count: 1,
    };
    assert_eq!(total.encode().unwrap().len(), RECORD_LENGTH);
}
