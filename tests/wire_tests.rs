use rpassbook::api::PrintResultRequest;
use rpassbook::models::{PrintData, PrintStatus, Transaction};
use serde_json::json;

#[test]
fn test_print_data_deserializes_backend_payload() {
    let payload = json!({
        "passbook": {
            "id": "b3a0…",
            "passbookNumber": "PB-0042",
            "currentPage": 2,
            "lastPrintedLine": 9,
            "linesPerPage": 30,
            "remainingLines": 21,
            "status": "ACTIVE"
        },
        "transactions": [
            {
                "id": "11111111-2222-3333-4444-555555555555",
                "lineNumber": 10,
                "transactionDate": "2024-03-05T10:15:30",
                "sandiCode": "C01",
                "description": "SETORAN TUNAI",
                "debit": null,
                "credit": 150000.0,
                "balance": 1250000.0,
                "tellerName": "SITI"
            }
        ]
    });

    let data: PrintData = serde_json::from_value(payload).unwrap();
    assert_eq!(data.transactions.len(), 1);
    assert_eq!(data.start_line(), 10);

    let tx = &data.transactions[0];
    assert_eq!(tx.line_number, Some(10));
    assert_eq!(tx.transaction_date.to_string(), "2024-03-05");
    assert_eq!(tx.sandi_code.as_deref(), Some("C01"));
    assert_eq!(tx.debit, None);
    assert_eq!(tx.credit, Some(150000.0));
}

#[test]
fn test_transaction_accepts_plain_date() {
    let tx: Transaction = serde_json::from_value(json!({
        "id": "t1",
        "transactionDate": "2024-03-05"
    }))
    .unwrap();
    assert_eq!(tx.transaction_date.to_string(), "2024-03-05");
    assert_eq!(tx.line_number, None);
    assert_eq!(tx.balance, None);
}

#[test]
fn test_print_data_tolerates_nothing_to_print_answer() {
    // The backend answers HTTP 200 with an error body and no transaction
    // array when the passbook is fully printed.
    let data: PrintData =
        serde_json::from_value(json!({"error": "No new transactions to print"})).unwrap();
    assert!(data.transactions.is_empty());
    assert!(data.passbook.is_none());
    assert_eq!(data.error.as_deref(), Some("No new transactions to print"));
    assert_eq!(data.start_line(), 1);
}

#[test]
fn test_print_result_request_wire_shape() {
    let request = PrintResultRequest {
        account_id: "acc-1".to_string(),
        status: PrintStatus::Partial,
        printed_transaction_ids: vec!["t1".to_string(), "t3".to_string()],
        printer_name: "PLQ-20".to_string(),
        printer_port: "/dev/ttyUSB0".to_string(),
        error_message: None,
    };

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "accountId": "acc-1",
            "status": "PARTIAL",
            "printedTransactionIds": ["t1", "t3"],
            "printerName": "PLQ-20",
            "printerPort": "/dev/ttyUSB0"
        })
    );
}
