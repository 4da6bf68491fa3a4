//! Report exports: Excel workbook bytes, a self-contained HTML document,
//! and an email-ready plaintext body. All three are total over any
//! normalized record — missing or empty sections are simply omitted.

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::options::optional_section_label;
use crate::models::report::{Activity, ReportRecord, UpcomingActivity};
use crate::models::text_item::TextItem;

/// Worksheet names are capped by the xlsx format.
const SHEET_NAME_MAX: usize = 31;
const COLUMN_PADDING: usize = 2;

/// Email exports front-load accomplishments and close with this footer.
const EMAIL_SIGNATURE: &str = "--\nSent with WeekPulse";

pub fn to_workbook(record: &ReportRecord) -> AppResult<Vec<u8>> {
    build_workbook(record).map_err(|err| AppError::export(err.to_string()))
}

fn build_workbook(record: &ReportRecord) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name("Report"))?;
        let rows = vec![
            vec!["Name".to_string(), record.name.clone()],
            vec!["Reporting Week".to_string(), record.reporting_week.clone()],
            vec!["Status".to_string(), record.status.clone()],
            vec!["Submitted".to_string(), record.timestamp.clone()],
            vec![
                "Last Updated".to_string(),
                record.last_updated.clone().unwrap_or_default(),
            ],
        ];
        write_rows(sheet, &[], &rows, &header_format)?;
    }

    let current: Vec<&Activity> = record
        .current_activities
        .iter()
        .filter(|activity| !activity.is_blank())
        .collect();
    if !current.is_empty() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name("Current Activities"))?;
        let headers = [
            "Project",
            "Milestone",
            "Priority",
            "Status",
            "Customer",
            "Billable",
            "Deadline",
            "Progress",
            "Description",
        ];
        let rows: Vec<Vec<String>> = current
            .iter()
            .map(|activity| {
                vec![
                    activity.project.clone(),
                    activity.milestone.clone(),
                    activity.priority.clone(),
                    activity.status.clone(),
                    activity.customer.clone(),
                    activity.billable.clone(),
                    activity.deadline.clone(),
                    format!("{}%", activity.progress),
                    activity.description.clone(),
                ]
            })
            .collect();
        write_rows(sheet, &headers, &rows, &header_format)?;
    }

    let upcoming: Vec<&UpcomingActivity> = record
        .upcoming_activities
        .iter()
        .filter(|activity| !activity.is_blank())
        .collect();
    if !upcoming.is_empty() {
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name("Upcoming Activities"))?;
        let headers = [
            "Project",
            "Milestone",
            "Priority",
            "Expected Start",
            "Description",
        ];
        let rows: Vec<Vec<String>> = upcoming
            .iter()
            .map(|activity| {
                vec![
                    activity.project.clone(),
                    activity.milestone.clone(),
                    activity.priority.clone(),
                    activity.expected_start.clone(),
                    activity.description.clone(),
                ]
            })
            .collect();
        write_rows(sheet, &headers, &rows, &header_format)?;
    }

    let text_sections = [
        ("Accomplishments", &record.accomplishments),
        ("Follow-ups", &record.followups),
        ("Next Steps", &record.nextsteps),
    ];
    for (title, items) in text_sections {
        let populated: Vec<&TextItem> = items.iter().filter(|item| !item.is_blank()).collect();
        if populated.is_empty() {
            continue;
        }
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name(title))?;
        let headers = ["Item", "Project", "Milestone"];
        let rows: Vec<Vec<String>> = populated
            .iter()
            .map(|item| {
                vec![
                    item.text().to_string(),
                    item.project().to_string(),
                    item.milestone().to_string(),
                ]
            })
            .collect();
        write_rows(sheet, &headers, &rows, &header_format)?;
    }

    for (key, content) in &record.optional_sections {
        if content.trim().is_empty() {
            continue;
        }
        let label = optional_section_label(key).unwrap_or(key.as_str());
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name(label))?;
        let rows = vec![vec![content.clone()]];
        write_rows(sheet, &[label], &rows, &header_format)?;
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(target: "app::export", report_id = %record.id, bytes = bytes.len(), "workbook generated");
    Ok(bytes)
}

fn write_rows(
    sheet: &mut Worksheet,
    headers: &[&str],
    rows: &[Vec<String>],
    header_format: &Format,
) -> Result<(), XlsxError> {
    let mut row_index: u32 = 0;
    if !headers.is_empty() {
        for (col, header) in headers.iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *header, header_format)?;
        }
        row_index = 1;
    }
    for row in rows {
        for (col, value) in row.iter().enumerate() {
            sheet.write_string(row_index, col as u16, value)?;
        }
        row_index += 1;
    }

    // Size each column to its longest value plus fixed padding.
    let column_count = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);
    for col in 0..column_count {
        let mut widest = headers.get(col).map(|header| header.len()).unwrap_or(0);
        for row in rows {
            if let Some(value) = row.get(col) {
                widest = widest.max(value.chars().count());
            }
        }
        sheet.set_column_width(col as u16, (widest + COLUMN_PADDING) as f64)?;
    }
    Ok(())
}

/// Hard cut at the xlsx limit; labels come from a fixed registry whose
/// names stay distinct within it.
fn sheet_name(title: &str) -> String {
    title.chars().take(SHEET_NAME_MAX).collect()
}

pub fn to_html(record: &ReportRecord) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!(
        "<title>Weekly Report - {}</title>\n",
        escape_html(&record.name)
    ));
    html.push_str(
        "<style>\n\
         body { font-family: Arial, sans-serif; margin: 24px; color: #222; }\n\
         h1 { border-bottom: 2px solid #444; padding-bottom: 6px; }\n\
         h2 { margin-top: 28px; color: #333; }\n\
         table { border-collapse: collapse; width: 100%; }\n\
         th, td { border: 1px solid #ccc; padding: 6px 10px; text-align: left; }\n\
         th { background: #f0f0f0; }\n\
         ul { margin: 8px 0; }\n\
         .meta { color: #666; font-size: 0.9em; }\n\
         .priority-high { color: #c0392b; font-weight: bold; }\n\
         .priority-medium { color: #d35400; }\n\
         .priority-low { color: #27ae60; }\n\
         .status-not-started { color: #7f8c8d; }\n\
         .status-in-progress { color: #2980b9; }\n\
         .status-blocked { color: #c0392b; font-weight: bold; }\n\
         .status-completed { color: #27ae60; }\n\
         </style>\n</head>\n<body>\n",
    );

    html.push_str(&format!(
        "<h1>Weekly Report - {}</h1>\n",
        escape_html(&record.name)
    ));
    html.push_str(&format!(
        "<p class=\"meta\">Week: {} | Status: {}</p>\n",
        escape_html(&record.reporting_week),
        escape_html(&record.status)
    ));

    let current: Vec<&Activity> = record
        .current_activities
        .iter()
        .filter(|activity| !activity.is_blank())
        .collect();
    if !current.is_empty() {
        html.push_str("<h2>Current Activities</h2>\n<table>\n<tr><th>Project</th><th>Milestone</th><th>Priority</th><th>Status</th><th>Customer</th><th>Deadline</th><th>Progress</th><th>Description</th></tr>\n");
        for activity in current {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td{}>{}</td><td{}>{}</td><td>{}</td><td>{}</td><td>{}%</td><td>{}</td></tr>\n",
                escape_html(&activity.project),
                escape_html(&activity.milestone),
                class_attr(priority_class(&activity.priority)),
                escape_html(&activity.priority),
                class_attr(status_class(&activity.status)),
                escape_html(&activity.status),
                escape_html(&activity.customer),
                escape_html(&activity.deadline),
                activity.progress,
                escape_html(&activity.description),
            ));
        }
        html.push_str("</table>\n");
    }

    let upcoming: Vec<&UpcomingActivity> = record
        .upcoming_activities
        .iter()
        .filter(|activity| !activity.is_blank())
        .collect();
    if !upcoming.is_empty() {
        html.push_str("<h2>Upcoming Activities</h2>\n<table>\n<tr><th>Project</th><th>Milestone</th><th>Priority</th><th>Expected Start</th><th>Description</th></tr>\n");
        for activity in upcoming {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td{}>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&activity.project),
                escape_html(&activity.milestone),
                class_attr(priority_class(&activity.priority)),
                escape_html(&activity.priority),
                escape_html(&activity.expected_start),
                escape_html(&activity.description),
            ));
        }
        html.push_str("</table>\n");
    }

    push_html_list(&mut html, "Accomplishments", &record.accomplishments);
    push_html_list(&mut html, "Follow-ups", &record.followups);
    push_html_list(&mut html, "Next Steps", &record.nextsteps);

    for (key, content) in &record.optional_sections {
        if content.trim().is_empty() {
            continue;
        }
        let label = optional_section_label(key).unwrap_or(key.as_str());
        html.push_str(&format!(
            "<h2>{}</h2>\n<p>{}</p>\n",
            escape_html(label),
            escape_html(content).replace('\n', "<br>")
        ));
    }

    html.push_str("</body>\n</html>\n");
    debug!(target: "app::export", report_id = %record.id, "html generated");
    html
}

fn push_html_list(html: &mut String, title: &str, items: &[TextItem]) {
    let populated: Vec<&TextItem> = items.iter().filter(|item| !item.is_blank()).collect();
    if populated.is_empty() {
        return;
    }
    html.push_str(&format!("<h2>{}</h2>\n<ul>\n", escape_html(title)));
    for item in populated {
        let mut line = escape_html(item.text());
        if !item.project().is_empty() || !item.milestone().is_empty() {
            line.push_str(&format!(
                " <span class=\"meta\">({})</span>",
                escape_html(&item_context(item))
            ));
        }
        html.push_str(&format!("<li>{line}</li>\n"));
    }
    html.push_str("</ul>\n");
}

/// Plaintext body in inbox-skimming order: accomplishments first, then
/// current and upcoming work, action items, optional sections, signature.
pub fn to_email_text(record: &ReportRecord) -> String {
    let mut body = String::new();
    body.push_str(&format!(
        "Weekly Status Report - {}\nWeek: {}\n\n",
        record.name, record.reporting_week
    ));

    push_email_list(&mut body, "Accomplishments", &record.accomplishments);

    let current: Vec<&Activity> = record
        .current_activities
        .iter()
        .filter(|activity| !activity.is_blank())
        .collect();
    if !current.is_empty() {
        body.push_str("Current Activities:\n");
        for activity in current {
            body.push_str(&format!(
                "- {} ({}, {}, {}% complete)",
                label_or(&activity.project, "Unnamed activity"),
                activity.priority,
                activity.status,
                activity.progress
            ));
            if !activity.description.trim().is_empty() {
                body.push_str(&format!(": {}", activity.description.trim()));
            }
            body.push('\n');
        }
        body.push('\n');
    }

    let upcoming: Vec<&UpcomingActivity> = record
        .upcoming_activities
        .iter()
        .filter(|activity| !activity.is_blank())
        .collect();
    if !upcoming.is_empty() {
        body.push_str("Upcoming Activities:\n");
        for activity in upcoming {
            body.push_str(&format!(
                "- {} ({}, starts {})",
                label_or(&activity.project, "Unnamed activity"),
                activity.priority,
                label_or(&activity.expected_start, "TBD")
            ));
            if !activity.description.trim().is_empty() {
                body.push_str(&format!(": {}", activity.description.trim()));
            }
            body.push('\n');
        }
        body.push('\n');
    }

    push_email_list(&mut body, "Follow-ups", &record.followups);
    push_email_list(&mut body, "Next Steps", &record.nextsteps);

    for (key, content) in &record.optional_sections {
        if content.trim().is_empty() {
            continue;
        }
        let label = optional_section_label(key).unwrap_or(key.as_str());
        body.push_str(&format!("{label}:\n{}\n\n", content.trim()));
    }

    body.push_str(EMAIL_SIGNATURE);
    body.push('\n');
    debug!(target: "app::export", report_id = %record.id, "email body generated");
    body
}

fn push_email_list(body: &mut String, title: &str, items: &[TextItem]) {
    let populated: Vec<&TextItem> = items.iter().filter(|item| !item.is_blank()).collect();
    if populated.is_empty() {
        return;
    }
    body.push_str(&format!("{title}:\n"));
    for item in populated {
        if item.project().is_empty() && item.milestone().is_empty() {
            body.push_str(&format!("- {}\n", item.text()));
        } else {
            body.push_str(&format!("- {} ({})\n", item.text(), item_context(item)));
        }
    }
    body.push('\n');
}

fn item_context(item: &TextItem) -> String {
    match (item.project().is_empty(), item.milestone().is_empty()) {
        (false, false) => format!("{} / {}", item.project(), item.milestone()),
        (false, true) => item.project().to_string(),
        (true, false) => item.milestone().to_string(),
        (true, true) => String::new(),
    }
}

fn label_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

fn priority_class(priority: &str) -> Option<&'static str> {
    match priority {
        "High" => Some("priority-high"),
        "Medium" => Some("priority-medium"),
        "Low" => Some("priority-low"),
        _ => None,
    }
}

fn status_class(status: &str) -> Option<&'static str> {
    match status {
        "Not Started" => Some("status-not-started"),
        "In Progress" => Some("status-in-progress"),
        "Blocked" => Some("status-blocked"),
        "Completed" => Some("status-completed"),
        _ => None,
    }
}

fn class_attr(class: Option<&'static str>) -> String {
    match class {
        Some(class) => format!(" class=\"{class}\""),
        None => String::new(),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
