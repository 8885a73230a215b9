//! Eligibility evaluator: the one place drive criteria are checked.
//!
//! Every surface (student board, company candidates, ad-hoc checks) calls
//! [`evaluate`] instead of re-implementing the rules, so student-facing and
//! recruiter-facing explanations can never drift apart. Pure and
//! deterministic: no I/O, no state, no failure modes. Degraded inputs
//! produce degraded but well-defined verdicts, never an error.

use serde::{Deserialize, Serialize};

use crate::models::drive::DriveCriteria;
use crate::models::student::{LooseNumber, Student, BRANCH_NOT_SPECIFIED};

/// The single reason returned when the completeness gate fails.
pub const INCOMPLETE_PROFILE_REASON: &str = "profile incomplete — CGPA and branch required.";

// ────────────────────────────────────────────────────────────────────────────
// Verdict data model
// ────────────────────────────────────────────────────────────────────────────

/// Which rule a check belongs to. `Profile` is the completeness gate that
/// runs before (and suppresses) the three criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Profile,
    Cgpa,
    Branch,
    Backlogs,
}

/// One criterion's outcome. `passed` is the structured flag presentation
/// should style by; `reason` is the human-readable explanation it prints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionCheck {
    pub criterion: Criterion,
    pub passed: bool,
    pub reason: String,
}

/// The evaluator's output: the overall flag plus one check per criterion
/// evaluated, in a fixed order (CGPA, branch, backlogs).
///
/// Invariant: `is_eligible` is derived from `checks` as the AND of the
/// per-criterion flags; the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityVerdict {
    pub is_eligible: bool,
    pub checks: Vec<CriterionCheck>,
}

// ────────────────────────────────────────────────────────────────────────────
// Evaluation
// ────────────────────────────────────────────────────────────────────────────

/// Evaluates one student against one drive's criteria.
///
/// If the profile is incomplete (CGPA missing, branch missing, or branch
/// still the "Not Specified" placeholder) the verdict is ineligible with a
/// single combined reason and no criterion is evaluated. Otherwise all
/// three checks run in order, each contributing a reason whether it passed
/// or not, and the verdict is the AND of the three.
pub fn evaluate(student: &Student, criteria: &DriveCriteria) -> EligibilityVerdict {
    let branch = match declared_branch(student) {
        Some(branch) if has_value(student.cgpa.as_ref()) => branch,
        _ => {
            return EligibilityVerdict {
                is_eligible: false,
                checks: vec![CriterionCheck {
                    criterion: Criterion::Profile,
                    passed: false,
                    reason: INCOMPLETE_PROFILE_REASON.to_string(),
                }],
            }
        }
    };

    let cgpa = decimal_or_zero(student.cgpa.as_ref());
    let backlogs = count_or_zero(student.backlogs.as_ref());

    let cgpa_passed = cgpa >= criteria.min_cgpa;
    let cgpa_check = CriterionCheck {
        criterion: Criterion::Cgpa,
        passed: cgpa_passed,
        reason: if cgpa_passed {
            format!("Eligible because CGPA {cgpa} >= {}", criteria.min_cgpa)
        } else {
            format!("Not eligible because CGPA {cgpa} < {}", criteria.min_cgpa)
        },
    };

    // Exact, case-sensitive membership. "CSE" and "cse" are different codes.
    let branch_passed = criteria.allowed_branches.iter().any(|b| b == branch);
    let branch_check = CriterionCheck {
        criterion: Criterion::Branch,
        passed: branch_passed,
        reason: if branch_passed {
            format!("Eligible because branch {branch} is allowed")
        } else {
            format!(
                "Not eligible because branch {branch} is not in allowed list ({})",
                criteria.allowed_branches.join(", ")
            )
        },
    };

    let backlogs_passed = backlogs <= criteria.max_backlogs;
    let backlog_check = CriterionCheck {
        criterion: Criterion::Backlogs,
        passed: backlogs_passed,
        reason: if backlogs_passed {
            format!(
                "Eligible because backlogs {backlogs} <= {} allowed",
                criteria.max_backlogs
            )
        } else {
            format!(
                "Not eligible because backlogs {backlogs} > {} allowed",
                criteria.max_backlogs
            )
        },
    };

    let checks = vec![cgpa_check, branch_check, backlog_check];
    // Derived from the checks, never computed separately, so the flag and
    // the explanations cannot disagree.
    let is_eligible = checks.iter().all(|c| c.passed);

    EligibilityVerdict {
        is_eligible,
        checks,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Input boundary: total parsing of loose stored fields
// ────────────────────────────────────────────────────────────────────────────

/// The one defensive-parsing policy for loose numeric fields: standard
/// float parsing over the stored text, 0 when missing or unparseable.
/// Never fails.
fn decimal_or_zero(value: Option<&LooseNumber>) -> f64 {
    match value {
        None => 0.0,
        Some(LooseNumber::Number(n)) => *n,
        Some(LooseNumber::Text(text)) => text.trim().parse().unwrap_or(0.0),
    }
}

/// Integer form of the same policy: truncates toward zero and clamps
/// negatives to 0 (backlog counts are non-negative by definition).
fn count_or_zero(value: Option<&LooseNumber>) -> u32 {
    decimal_or_zero(value).max(0.0) as u32
}

/// A field is present when it holds anything but nothing: an explicit 0 is
/// a value, a blank string is not.
fn has_value(value: Option<&LooseNumber>) -> bool {
    match value {
        None => false,
        Some(LooseNumber::Number(_)) => true,
        Some(LooseNumber::Text(text)) => !text.trim().is_empty(),
    }
}

/// The branch a student has actually declared: `None` when absent, blank,
/// or still the registration placeholder.
fn declared_branch(student: &Student) -> Option<&str> {
    match student.branch.as_deref() {
        Some(b) if !b.trim().is_empty() && b != BRANCH_NOT_SPECIFIED => Some(b),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
