//! Static option registries shared by form rendering, validation, and
//! analytics. Pure data, no behavior beyond lookups.

pub const VALID_REPORT_STATUSES: &[&str] = &["draft", "submitted"];

pub const PRIORITY_OPTIONS: &[&str] = &["High", "Medium", "Low"];

pub const ACTIVITY_STATUS_OPTIONS: &[&str] =
    &["Not Started", "In Progress", "Blocked", "Completed"];

pub const BILLABLE_OPTIONS: &[&str] = &["", "Yes", "No"];

pub const DEFAULT_PRIORITY: &str = "Medium";
pub const DEFAULT_ACTIVITY_STATUS: &str = "Not Started";

/// ASDF pipeline phases in funnel order, paired with the chart color used
/// by the dashboard. Scoping records carry the phase name verbatim.
pub const ASDF_PHASES: &[(&str, &str)] = &[
    ("Prospecting", "#8dd3c7"),
    ("Qualification", "#ffffb3"),
    ("Discovery", "#bebada"),
    ("Scoping", "#fb8072"),
    ("Solution Design", "#80b1d3"),
    ("Estimation", "#fdb462"),
    ("Proposal Development", "#b3de69"),
    ("Proposal Review", "#fccde5"),
    ("Negotiation", "#d9d9d9"),
    ("Verbal Commit", "#bc80bd"),
    ("Contracting", "#ccebc5"),
    ("Closed Won", "#2ca02c"),
    ("Closed Lost", "#d62728"),
];

pub const DEFAULT_SCOPING_PHASE: &str = "Prospecting";

/// User-toggleable free-text report sections. The key is the persisted
/// field name; the label is what the UI and exports display.
pub const OPTIONAL_SECTIONS: &[(&str, &str)] = &[
    ("blockers", "Blockers & Issues"),
    ("kudos", "Kudos"),
    ("learnings", "Lessons Learned"),
    ("notes", "Additional Notes"),
];

pub fn is_valid_phase(name: &str) -> bool {
    ASDF_PHASES.iter().any(|(phase, _)| *phase == name)
}

/// Funnel position of a phase, used for ordered listings.
pub fn phase_index(name: &str) -> Option<usize> {
    ASDF_PHASES.iter().position(|(phase, _)| *phase == name)
}

pub fn is_optional_section(key: &str) -> bool {
    OPTIONAL_SECTIONS.iter().any(|(id, _)| *id == key)
}

pub fn optional_section_label(key: &str) -> Option<&'static str> {
    OPTIONAL_SECTIONS
        .iter()
        .find(|(id, _)| *id == key)
        .map(|(_, label)| *label)
}
