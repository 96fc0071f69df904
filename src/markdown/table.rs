//! Pipe-table detection and conversion.
//!
//! A single forward scan with an in-table flag. A maximal contiguous run of
//! lines that both start and end with `|` forms one table; the alignment row
//! (`|---|:--:|`) is dropped during collection, the first surviving row
//! renders as the header, and every later row as body. Cell content is
//! trimmed and gets the reduced bold/italic inline pass only.

use super::inline::format_cell;

/// True for separator rows like `|---|---|` or `|:--:|---:|`.
fn is_separator_row(line: &str) -> bool {
    line.starts_with('|')
        && line.ends_with('|')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Convert every pipe-table run in the document.
pub fn convert(text: &str) -> String {
    let mut result: Vec<String> = Vec::new();
    let mut rows: Vec<String> = Vec::new();
    let mut in_table = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('|') && trimmed.ends_with('|') {
            if !in_table {
                in_table = true;
                rows.clear();
            }
            if !is_separator_row(trimmed) {
                rows.push(trimmed.to_string());
            }
        } else {
            if in_table {
                if let Some(table) = render_table(&rows) {
                    result.push(table);
                }
                in_table = false;
                rows.clear();
            }
            result.push(line.to_string());
        }
    }

    if in_table {
        if let Some(table) = render_table(&rows) {
            result.push(table);
        }
    }

    result.join("\n")
}

/// Render collected rows. The first row is the header; a run whose every row
/// was a separator yields nothing.
fn render_table(rows: &[String]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let mut html = String::from("<div class=\"table-wrapper\">\n<table>\n");
    for (index, row) in rows.iter().enumerate() {
        let tag = if index == 0 { "th" } else { "td" };
        html.push_str("<tr>");
        // Split on pipes, dropping the empty leading/trailing segments the
        // boundary delimiters produce.
        let cells = row.split('|');
        let count = row.matches('|').count();
        for (cell_index, cell) in cells.enumerate() {
            if cell_index == 0 || cell_index == count {
                continue;
            }
            html.push_str(&format!("<{tag}>{}</{tag}>", format_cell(cell.trim())));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n</div>");
    Some(html)
}
