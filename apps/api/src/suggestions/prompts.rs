// Prompt constants and builders for the suggestions feature.

use crate::models::drive::Drive;
use crate::models::student::{LooseNumber, Student, BRANCH_NOT_SPECIFIED};

/// System prompt for placement suggestions.
pub const COUNSELOR_SYSTEM: &str = "You are a placement counselor.";

/// Suggestions prompt template. Placeholders are filled by
/// [`build_suggestions_prompt`].
pub const SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"Analyze this student profile and suggest which of the listed placement drives they should prioritize and why.

Student Profile:
- Name: {name}
- Branch: {branch}
- CGPA: {cgpa}
- Skills: {skills}
- Backlogs: {backlogs}

Upcoming Placement Drives:
{drive_list}

Instructions:
1. Identify 2-3 best matches based on skills and eligibility.
2. Provide a personalized "Career Insight" for this student.
3. Keep the response concise, encouraging, and formatted with bullet points.
4. If the student is not eligible for a highly desired drive, suggest what skills they should improve."#;

/// Fills the template with one student's profile and the current drives.
pub fn build_suggestions_prompt(profile: &Student, drives: &[Drive]) -> String {
    let drive_list = if drives.is_empty() {
        "- (no drives posted yet)".to_string()
    } else {
        drives.iter().map(drive_line).collect::<Vec<_>>().join("\n")
    };

    SUGGESTIONS_PROMPT_TEMPLATE
        .replace("{name}", &profile.name)
        .replace(
            "{branch}",
            profile.branch.as_deref().unwrap_or(BRANCH_NOT_SPECIFIED),
        )
        .replace("{cgpa}", &loose_field(&profile.cgpa))
        .replace("{skills}", &profile.skills.items().join(", "))
        .replace("{backlogs}", &loose_field(&profile.backlogs))
        .replace("{drive_list}", &drive_list)
}

fn drive_line(drive: &Drive) -> String {
    format!(
        "- {} ({}): Requires {} CGPA, Skills: {}",
        drive.name,
        drive.role,
        drive.criteria.min_cgpa,
        drive.criteria.required_skills.join(", ")
    )
}

/// Raw display form of a loosely typed numeric field, empty when absent.
fn loose_field(value: &Option<LooseNumber>) -> String {
    match value {
        None => String::new(),
        Some(LooseNumber::Number(n)) => n.to_string(),
        Some(LooseNumber::Text(text)) => text.clone(),
    }
}
