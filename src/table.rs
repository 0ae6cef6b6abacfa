use std::fmt::Write as _;

/// Renders an aligned plain-text table. Numeric-looking cells are right
/// aligned; everything else is left aligned.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count().max(3)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(clean_cell(cell).chars().count());
        }
    }

    let mut output = String::new();
    let _ = writeln!(output, "{}", join_cells(headers.iter().map(|h| h.as_str()), &widths, |_| false));
    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();
    let _ = writeln!(output, "{}", join_cells(rule.iter().map(|s| s.as_str()), &widths, |_| false));
    for row in rows {
        let cells = row.iter().map(|c| clean_cell(c)).collect::<Vec<_>>();
        let line = join_cells(cells.iter().map(|s| s.as_str()), &widths, |cell| {
            cell.parse::<f64>().is_ok()
        });
        let _ = writeln!(output, "{line}");
    }
    output
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

fn join_cells<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    right_align: impl Fn(&str) -> bool,
) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            if right_align(cell) {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

fn clean_cell(value: &str) -> String {
    value.replace(['\n', '\r', '\t'], " ")
}
