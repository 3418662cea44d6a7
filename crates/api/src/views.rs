//! Server-Rendered HTML Views

use risk_engine::RiskAssessment;
use std::fmt::Write;
use storage::{HistoryRecord, HISTORY_COLUMNS};

const STYLE: &str = r#"
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
    label { display: block; margin-top: 0.75rem; }
    input { padding: 0.25rem; }
    .error { color: #b00020; border: 1px solid #b00020; padding: 0.5rem; }
    .high { color: #b00020; font-weight: bold; }
    .low { color: #1b5e20; font-weight: bold; }
    table { border-collapse: collapse; }
    th, td { border: 1px solid #999; padding: 0.3rem 0.6rem; }
"#;

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n\
         <style>{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        STYLE,
        body
    )
}

/// Minimal entity escaping for text interpolated into markup
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// The submission form, optionally with an error banner above it
pub fn render_form(error: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Health Risk Screening</h1>\n");
    if let Some(message) = error {
        let _ = writeln!(body, "<p class=\"error\">{}</p>", escape(message));
    }
    body.push_str(
        "<form method=\"post\" action=\"/\">\n\
         <label>Name <input type=\"text\" name=\"name\"></label>\n\
         <label>Age <input type=\"text\" name=\"age\"></label>\n\
         <label>BMI <input type=\"text\" name=\"bmi\"></label>\n\
         <label>Glucose (mg/dL) <input type=\"text\" name=\"glucose\"></label>\n\
         <label>Blood Pressure <input type=\"text\" name=\"bp\"></label>\n\
         <label>Insulin <input type=\"text\" name=\"insulin\"></label>\n\
         <p><button type=\"submit\">Assess</button></p>\n\
         </form>\n\
         <p><a href=\"/history\">View history</a></p>",
    );
    page("Health Risk Screening", &body)
}

/// The result view: who was assessed, the flag, and the message
pub fn render_result(name: &str, assessment: &RiskAssessment) -> String {
    let class = if assessment.level.flag() == 1 {
        "high"
    } else {
        "low"
    };
    let body = format!(
        "<h1>Assessment for {}</h1>\n\
         <p class=\"{}\">{}</p>\n\
         <p>{}</p>\n\
         <p><a href=\"/\">New assessment</a> | <a href=\"/history\">View history</a></p>",
        escape(name),
        class,
        assessment.level.as_str(),
        escape(assessment.message),
    );
    page("Assessment Result", &body)
}

/// The history table, one row per record with a header from the schema
pub fn render_history(records: &[HistoryRecord]) -> String {
    let mut body = String::new();
    body.push_str("<h1>Submission History</h1>\n");

    if records.is_empty() {
        body.push_str("<p>No submissions recorded yet.</p>\n");
    } else {
        body.push_str("<table>\n<tr>");
        for column in HISTORY_COLUMNS {
            let _ = write!(body, "<th>{}</th>", column);
        }
        body.push_str("</tr>\n");
        for record in records {
            let _ = writeln!(
                body,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
                 <td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                record.id,
                escape(&record.name),
                record.age,
                record.bmi,
                record.glucose,
                record.bp,
                record.insulin,
                escape(&record.risk_level),
                escape(&record.risk_message),
            );
        }
        body.push_str("</table>\n");
    }

    body.push_str("<p><a href=\"/\">Back to form</a></p>");
    page("Submission History", &body)
}
