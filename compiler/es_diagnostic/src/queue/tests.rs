use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

#[test]
fn test_counts() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.is_empty());
    assert!(!queue.has_errors());

    queue.push(Diagnostic::warning(ErrorCode::E0041));
    assert!(!queue.has_errors());
    assert_eq!(queue.warning_count(), 1);

    queue.push(Diagnostic::error(ErrorCode::E0011));
    assert!(queue.has_errors());
    assert_eq!(queue.error_count(), 1);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_keeps_report_order() {
    let mut queue = DiagnosticQueue::new();
    queue.extend([
        Diagnostic::warning(ErrorCode::E0050),
        Diagnostic::error(ErrorCode::E0010),
        Diagnostic::warning(ErrorCode::E0042),
    ]);
    let codes: Vec<ErrorCode> = queue.iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![ErrorCode::E0050, ErrorCode::E0010, ErrorCode::E0042]);

    let warnings: Vec<ErrorCode> = queue.warnings().map(|d| d.code).collect();
    assert_eq!(warnings, vec![ErrorCode::E0050, ErrorCode::E0042]);
    assert_eq!(queue.errors().count(), 1);
}

#[test]
fn test_take_resets() {
    let mut queue = DiagnosticQueue::new();
    queue.push(Diagnostic::error(ErrorCode::E0011));
    let taken = queue.take();
    assert_eq!(taken.len(), 1);
    assert!(queue.is_empty());
    assert!(!queue.has_errors());
}
