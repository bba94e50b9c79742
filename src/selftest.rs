//! Fixed-table self test for the digit replacer.
//!
//! A case pairs a [`ReplaceRequest`] with either the value it must produce
//! or the [`ErrorKind`] it must fail with. [`run_cases`] runs every case and
//! never stops at the first failure.

use crate::digits::{DecimalInt, ErrorKind, ReplaceRequest, Side};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    Value(DecimalInt),
    Error(ErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfTestCase {
    pub name: String,
    pub request: ReplaceRequest,
    pub expected: Expected,
}

impl SelfTestCase {
    pub fn value(
        name: impl Into<String>,
        number: impl Into<DecimalInt>,
        n: i64,
        digit: i64,
        side: Side,
        expected: impl Into<DecimalInt>,
    ) -> Self {
        Self {
            name: name.into(),
            request: ReplaceRequest::new(number, n, digit, side),
            expected: Expected::Value(expected.into()),
        }
    }

    pub fn error(
        name: impl Into<String>,
        number: impl Into<DecimalInt>,
        n: i64,
        digit: i64,
        side: Side,
        kind: ErrorKind,
    ) -> Self {
        Self {
            name: name.into(),
            request: ReplaceRequest::new(number, n, digit, side),
            expected: Expected::Error(kind),
        }
    }

    pub fn run(&self) -> CaseOutcome {
        match (self.request.apply(), &self.expected) {
            (Ok(got), Expected::Value(want)) if got == *want => CaseOutcome::Passed,
            (Ok(got), Expected::Value(_)) => CaseOutcome::Mismatch { got },
            (Ok(got), Expected::Error(_)) => CaseOutcome::UnexpectedSuccess { got },
            (Err(err), Expected::Error(kind)) if err.kind() == *kind => CaseOutcome::Passed,
            (Err(err), Expected::Error(_)) => CaseOutcome::WrongError {
                kind: err.kind(),
                message: err.to_string(),
            },
            (Err(err), Expected::Value(_)) => CaseOutcome::UnexpectedError {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CaseOutcome {
    Passed,
    /// Succeeded with a different value.
    Mismatch { got: DecimalInt },
    /// Failed where a value was expected.
    UnexpectedError { kind: ErrorKind, message: String },
    /// Succeeded where an error was expected.
    UnexpectedSuccess { got: DecimalInt },
    /// Failed with a different error kind.
    WrongError { kind: ErrorKind, message: String },
}

impl CaseOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    #[serde(flatten)]
    pub case: SelfTestCase,
    pub outcome: CaseOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SelfTestReport {
    pub passed: usize,
    pub failed: usize,
    pub cases: Vec<CaseReport>,
}

impl SelfTestReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn total(&self) -> usize {
        self.cases.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseReport> {
        self.cases.iter().filter(|report| !report.outcome.is_pass())
    }
}

/// The built-in table: the classic examples plus the zero and error cases.
pub fn builtin_cases() -> Vec<SelfTestCase> {
    vec![
        SelfTestCase::value("1st from right", 1545, 1, 9, Side::Right, 1549),
        SelfTestCase::value("2nd from right", 1545, 2, 9, Side::Right, 1595),
        SelfTestCase::value("leading zero absorbed", 1545, 4, 0, Side::Right, 545),
        SelfTestCase::value("2nd from left", 12345, 2, 0, Side::Left, 10345),
        SelfTestCase::value("negative keeps sign", -9876, 1, 1, Side::Right, -9871),
        SelfTestCase::value("zero", 0, 1, 5, Side::Right, 5),
        SelfTestCase::error("n past digits", 12, 5, 3, Side::Right, ErrorKind::OutOfRange),
        SelfTestCase::error("digit above 9", 12, 1, 10, Side::Right, ErrorKind::InvalidDigit),
        SelfTestCase::error("n of zero", 12, 0, 3, Side::Right, ErrorKind::InvalidPosition),
    ]
}

pub fn run_cases(cases: &[SelfTestCase]) -> SelfTestReport {
    let mut report = SelfTestReport::default();
    for case in cases {
        let outcome = case.run();
        if outcome.is_pass() {
            report.passed += 1;
        } else {
            tracing::debug!(case = %case.name, request = %case.request, ?outcome, "self-test case failed");
            report.failed += 1;
        }
        report.cases.push(CaseReport {
            case: case.clone(),
            outcome,
        });
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_cases_pass() {
        let report = run_cases(&builtin_cases());
        assert!(report.all_passed(), "failures: {:?}", report.failures().collect::<Vec<_>>());
        assert_eq!(report.passed, report.total());
        assert_eq!(report.total(), 9);
    }

    #[test]
    fn test_mismatch_is_reported_not_fatal() {
        let cases = vec![
            SelfTestCase::value("wrong", 1545, 1, 9, Side::Right, 1540),
            SelfTestCase::value("right", 1545, 1, 9, Side::Right, 1549),
        ];
        let report = run_cases(&cases);
        assert_eq!(report.passed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(
            report.cases[0].outcome,
            CaseOutcome::Mismatch {
                got: DecimalInt::from(1549)
            }
        );
    }

    #[test]
    fn test_error_outcomes() {
        let unexpected_error = SelfTestCase::value("e", 12, 0, 3, Side::Right, 13).run();
        assert!(matches!(
            unexpected_error,
            CaseOutcome::UnexpectedError {
                kind: ErrorKind::InvalidPosition,
                ..
            }
        ));

        let unexpected_success =
            SelfTestCase::error("s", 12, 1, 3, Side::Right, ErrorKind::OutOfRange).run();
        assert!(matches!(unexpected_success, CaseOutcome::UnexpectedSuccess { .. }));

        let wrong_error =
            SelfTestCase::error("w", 12, 1, 10, Side::Right, ErrorKind::OutOfRange).run();
        assert!(matches!(
            wrong_error,
            CaseOutcome::WrongError {
                kind: ErrorKind::InvalidDigit,
                ..
            }
        ));
    }

    #[test]
    fn test_report_serializes() {
        let report = run_cases(&builtin_cases()[..1]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["passed"], 1);
        assert_eq!(json["cases"][0]["name"], "1st from right");
        assert_eq!(json["cases"][0]["expected"]["value"], "1549");
        assert_eq!(json["cases"][0]["outcome"]["status"], "passed");
        assert_eq!(json["cases"][0]["request"]["side"], "right");
    }
}
