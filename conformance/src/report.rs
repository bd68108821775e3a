//! Check results and the report that aggregates them.

use std::fmt;

/// Outcome of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Conforms.
    Pass,
    /// Suspicious but does not block conformance.
    Warning,
    /// Does not conform.
    Failure,
}

impl Severity {
    /// Returns the tag printed in front of a result line.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// One check outcome, attributed to the validator that produced it.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Validator name, e.g. `schema` or `rdf`.
    pub validator: String,
    /// One-line description of what was checked.
    pub message: String,
    /// Outcome.
    pub severity: Severity,
    /// Offending items, one per line. Empty for passes.
    pub details: Vec<String>,
}

impl TestResult {
    fn new(validator: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// A passing check.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass)
    }

    /// A failed check.
    pub fn fail(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Failure)
    }

    /// A failed check listing the offending items.
    pub fn fail_with_details(
        validator: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            details,
            ..Self::fail(validator, message)
        }
    }

    /// A non-blocking warning.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning)
    }

    /// Creates a pass or a failure with details, depending on whether
    /// `problems` is empty.
    pub fn check(
        validator: impl Into<String>,
        passed: impl Into<String>,
        failed: impl Into<String>,
        problems: Vec<String>,
    ) -> Self {
        if problems.is_empty() {
            Self::pass(validator, passed)
        } else {
            Self::fail_with_details(validator, failed, problems)
        }
    }

    /// Returns true for [`Severity::Failure`].
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity.as_str(),
            self.validator,
            self.message
        )?;
        for detail in &self.details {
            write!(f, "\n       - {detail}")?;
        }
        Ok(())
    }
}

/// Results of every validator, in the order they ran.
#[derive(Debug, Default)]
pub struct ConformanceReport {
    /// Results in push order.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Appends every result of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    fn count(&self, severity: Severity) -> usize {
        self.results
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// Returns the count of passed checks.
    pub fn pass_count(&self) -> usize {
        self.count(Severity::Pass)
    }

    /// Returns the count of warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// Number of failures.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// Returns true when nothing failed. Warnings do not count.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Returns the failed results.
    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| r.is_failure())
    }

    /// Returns validator names in the order they first reported.
    pub fn validators(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for result in &self.results {
            if !names.contains(&result.validator.as_str()) {
                names.push(&result.validator);
            }
        }
        names
    }

    /// Returns the results of one validator.
    pub fn results_for<'a>(
        &'a self,
        validator: &'a str,
    ) -> impl Iterator<Item = &'a TestResult> {
        self.results.iter().filter(move |r| r.validator == validator)
    }

    /// Returns the one-line summary printed after the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} warnings, {} failed",
            self.pass_count(),
            self.warning_count(),
            self.failure_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_severity() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("schema", "ok"));
        report.push(TestResult::warn("schema", "hmm"));
        let mut other = ConformanceReport::new();
        other.push(TestResult::fail("rdf", "broken"));
        report.extend(other);
        assert_eq!(report.summary(), "1 passed, 1 warnings, 1 failed");
        assert!(!report.all_passed());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn results_group_by_validator() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("schema", "a"));
        report.push(TestResult::pass("rdf", "b"));
        report.push(TestResult::fail("schema", "c"));
        assert_eq!(report.validators(), vec!["schema", "rdf"]);
        assert_eq!(report.results_for("schema").count(), 2);
    }

    #[test]
    fn check_picks_severity_from_problems() {
        assert!(!TestResult::check("x", "fine", "bad", Vec::new()).is_failure());
        let failed = TestResult::check("x", "fine", "bad", vec!["one".to_string()]);
        assert!(failed.is_failure());
        assert_eq!(failed.to_string(), "[FAIL] x: bad\n       - one");
    }
}
