//! Table emission
//!
//! Rows are buffered by the scanner and rendered once the table closes. A table needs at
//! least two rows; anything shorter renders as nothing. Row 1 is a header separator when
//! every one of its cells is made of hyphens only or contains `---`; then row 0 is the
//! header and rows from index 2 on are the body. Otherwise every row is a body row.
//!
//! Cell text is emitted as is, without inline formatting.

/// Render buffered rows to HTML.
pub fn render_table(rows: &[Vec<String>]) -> String {
    if rows.len() < 2 {
        return String::new();
    }

    let mut html = String::from("<div class=\"table-container\"><table>\n");

    if is_separator_row(&rows[1]) {
        html.push_str("<thead><tr>\n");
        for cell in &rows[0] {
            html.push_str(&format!("<th>{cell}</th>\n"));
        }
        html.push_str("</tr></thead>\n<tbody>\n");
        for row in &rows[2..] {
            push_body_row(&mut html, row);
        }
    } else {
        html.push_str("<tbody>\n");
        for row in rows {
            push_body_row(&mut html, row);
        }
    }

    html.push_str("</tbody>\n</table></div>\n");
    html
}

fn is_separator_row(row: &[String]) -> bool {
    row.iter()
        .all(|cell| cell.chars().all(|c| c == '-') || cell.contains("---"))
}

fn push_body_row(html: &mut String, row: &[String]) {
    html.push_str("<tr>\n");
    for cell in row {
        html.push_str(&format!("<td>{cell}</td>\n"));
    }
    html.push_str("</tr>\n");
}
