//! GitHub-flavoured markdown rendering.

use super::Section;

/// Render grids as markdown tables, each titled grid under a `###` heading.
#[must_use]
pub fn render_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| {
            let body = if section.headers.is_empty() {
                String::from("_No rows._")
            } else {
                render_table(&section.headers, &section.rows)
            };
            match &section.title {
                Some(title) => format!("### {}\n\n{body}", heading(title)),
                None => body,
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(row_line(headers.iter().map(String::as_str)));
    lines.push(row_line(headers.iter().map(|_| "---")));
    for row in rows {
        lines.push(row_line(
            (0..headers.len()).map(|column| row.get(column).map_or("-", String::as_str)),
        ));
    }
    lines.join("\n")
}

fn row_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells = cells.map(escape).collect::<Vec<_>>().join(" | ");
    format!("| {cells} |")
}

// Union types carry `|`, which would otherwise split the cell.
fn escape(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}

fn heading(title: &str) -> String {
    let mut chars = title.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect::<String>().replace('_', " ")
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::render_sections;
    use crate::output::Section;

    #[test]
    fn metrics_then_titled_comparisons() {
        let out = render_sections(&[
            Section {
                title: None,
                headers: vec!["key".into(), "value".into()],
                rows: vec![vec!["metrics.accuracy".into(), "1.0000".into()]],
            },
            Section {
                title: Some("comparisons".into()),
                headers: vec!["identifier".into(), "expected".into()],
                rows: vec![vec!["parse".into(), "string | number".into()]],
            },
        ]);
        assert_eq!(
            out,
            "| key | value |\n\
             | --- | --- |\n\
             | metrics.accuracy | 1.0000 |\n\
             \n\
             ### Comparisons\n\
             \n\
             | identifier | expected |\n\
             | --- | --- |\n\
             | parse | string \\| number |"
        );
    }

    #[test]
    fn empty_grid_says_so() {
        let out = render_sections(&[Section {
            title: Some("files".into()),
            headers: vec![],
            rows: vec![],
        }]);
        assert_eq!(out, "### Files\n\n_No rows._");
    }
}
