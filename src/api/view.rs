//! HTML page for the instructor summary.

use crate::domain::summary::InstructorSummary;

pub const PAGE_TITLE: &str = "University Manager";
pub const PAGE_HEADER: &str = "Stevens Repository";
pub const TABLE_TITLE: &str = "Courses and student counts";

pub fn render_instructor_page(rows: &[InstructorSummary]) -> String {
    let mut html = Vec::new();
    html.push("<!DOCTYPE html>".to_string());
    html.push("<html lang=\"en\">".to_string());
    html.push("<head>".to_string());
    html.push("  <meta charset=\"utf-8\">".to_string());
    html.push(format!("  <title>{}</title>", escape(PAGE_TITLE)));
    html.push("</head>".to_string());
    html.push("<body>".to_string());
    html.push(format!("  <h1>{}</h1>", escape(PAGE_HEADER)));
    html.push(format!("  <h2>{}</h2>", escape(TABLE_TITLE)));
    html.push("  <table>".to_string());

    let header: Vec<String> = InstructorSummary::HEADER
        .iter()
        .map(|h| format!("<th>{}</th>", escape(h)))
        .collect();
    html.push(format!("    <tr>{}</tr>", header.join("")));

    for row in rows {
        let cells: Vec<String> = row
            .cells()
            .iter()
            .map(|c| format!("<td>{}</td>", escape(c)))
            .collect();
        html.push(format!("    <tr>{}</tr>", cells.join("")));
    }

    html.push("  </table>".to_string());
    html.push("</body>".to_string());
    html.push("</html>".to_string());
    html.join("\n")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
