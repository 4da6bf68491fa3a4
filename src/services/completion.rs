//! Completion score for the report form.

use crate::services::form::ReportFormState;

/// Percentage of sections with content, 0..=100.
///
/// Four core checks always count toward the denominator: current
/// activities, upcoming activities, accomplishments, and action items
/// (follow-ups or next steps). Each optional section that is both enabled
/// and populated adds one to numerator and denominator; a disabled or
/// empty optional section affects nothing. The result is floored.
pub fn score(form: &ReportFormState) -> u8 {
    let mut numerator = 0usize;
    let mut denominator = 4usize;

    if form.current_activities.iter().any(|a| !a.is_blank()) {
        numerator += 1;
    }
    if form.upcoming_activities.iter().any(|a| !a.is_blank()) {
        numerator += 1;
    }
    if form.accomplishments.iter().any(|item| !item.is_blank()) {
        numerator += 1;
    }
    let has_action_items = form.followups.iter().any(|item| !item.is_blank())
        || form.nextsteps.iter().any(|item| !item.is_blank());
    if has_action_items {
        numerator += 1;
    }

    for section in &form.optional_sections {
        if section.enabled && !section.content.trim().is_empty() {
            numerator += 1;
            denominator += 1;
        }
    }

    (100 * numerator / denominator) as u8
}
