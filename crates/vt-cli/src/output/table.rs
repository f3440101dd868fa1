//! Plain-text aligned tables.

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    /// Total width to fit into; `None` leaves columns at natural width.
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 5;
const GAP: &str = "  ";

/// Render `rows` under `headers`, one line per row plus a header rule.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    if let Some(max_width) = options.max_width {
        shrink_to_fit(&mut widths, max_width);
    }

    let header = join_line(headers.iter().map(|h| (*h).to_string()), &widths, options, false);
    let rule = "=".repeat(header.chars().count());
    let mut lines = vec![header, rule];
    lines.extend(
        rows.iter()
            .map(|row| join_line(row.iter().cloned(), &widths, options, true)),
    );
    lines.join("\n")
}

/// Narrow the widest column one character at a time until the table fits
/// or every column is at its minimum.
fn shrink_to_fit(widths: &mut [usize], max_width: usize) {
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|w| **w > MIN_COLUMN)
            .max_by_key(|w| **w)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn join_line(
    cells: impl Iterator<Item = String>,
    widths: &[usize],
    options: TableOptions,
    body: bool,
) -> String {
    let mut cells = cells;
    let line = widths
        .iter()
        .map(|&width| {
            let text = clip(&cells.next().unwrap_or_else(|| "-".into()), width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            let numeric = body && is_numeric(&text);
            let shown = if body && options.color {
                paint(&text)
            } else {
                text
            };
            if numeric {
                format!("{pad}{shown}")
            } else {
                format!("{shown}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join(GAP);
    line.trim_end().to_string()
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn is_numeric(text: &str) -> bool {
    let text = text.trim_end_matches('%');
    !text.is_empty()
        && text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-')
        && text.parse::<f64>().is_ok()
}

/// Color label-like cells: green for support, red for refutation or failure.
fn paint(text: &str) -> String {
    let code = match text {
        "agree" | "ok" | "yes" => "32",
        "contradict" | "failed" | "no" => "31",
        "neutral" | "missing key" => "33",
        _ => return text.to_string(),
    };
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
