use crate::model::{Field, Record};

const RANK_HEADER: &str = "rank";

/// Renders records as a padded text table. `None` for an empty list, so the
/// caller prints nothing at all.
pub fn render_table(records: &[Record]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut headers = vec![RANK_HEADER];
    headers.extend(Field::ALL.iter().map(|f| f.name()));

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            let mut cells = vec![r.rank.to_string()];
            cells.extend(Field::ALL.iter().map(|&f| r.get(f).to_string()));
            cells
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_line(headers.iter().copied(), &widths));
    lines.push("-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    for row in &rows {
        lines.push(format_line(row.iter().map(String::as_str), &widths));
    }

    Some(lines.join("\n"))
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &w))| {
            // rank is numeric, right-align it
            if i == 0 {
                format!("{cell:>w$}")
            } else {
                format!("{cell:<w$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

pub fn print_table(records: &[Record]) {
    if let Some(table) = render_table(records) {
        println!("{table}");
    }
}
