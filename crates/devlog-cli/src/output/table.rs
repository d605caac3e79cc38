#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_WIDTH: usize = 6;

/// Render an aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(strip_ansi(&header_line).chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let cell = if options.color {
                    colorize(&truncated)
                } else {
                    truncated
                };
                pad(&cell, *width, numeric, options.color)
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = vec![header_line, divider];
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns one character at a time until the row fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.'))
}

fn pad(value: &str, width: usize, numeric: bool, has_ansi: bool) -> String {
    let plain_len = if has_ansi {
        strip_ansi(value).chars().count()
    } else {
        value.chars().count()
    };
    let padding = " ".repeat(width.saturating_sub(plain_len));
    if numeric {
        format!("{padding}{value}")
    } else {
        format!("{value}{padding}")
    }
}

/// Review state and mood cells get a color; everything else is left alone.
fn colorize(value: &str) -> String {
    let code = match value {
        "true" | "GREAT" | "GOOD" => Some("32"),
        "false" | "NEUTRAL" => Some("33"),
        "NOT_GREAT" | "BAD" => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.by_ref().find(|next| *next == 'm');
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rows() -> Vec<Vec<String>> {
        vec![
            vec!["log-1".into(), "GOOD".into(), "2.5".into()],
            vec!["log-200".into(), "NOT_GREAT".into(), "10".into()],
        ]
    }

    #[test]
    fn columns_align_across_mixed_widths() {
        let table = render_entity_table(
            &["id", "mood", "hours"],
            &rows(),
            TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let widths: Vec<usize> = lines.iter().map(|line| line.chars().count()).collect();
        assert!(widths.iter().all(|width| *width == widths[0]));
        assert!(lines[2].ends_with("   2.5"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let long = vec![vec!["a".repeat(40), "GOOD".into()]];
        let table = render_entity_table(
            &["tasks", "mood"],
            &long,
            TableOptions {
                max_width: Some(20),
                color: false,
            },
        );
        let first_row = table.lines().nth(2).expect("row line");
        assert!(first_row.contains('…'));
        assert!(first_row.chars().count() <= 20);
    }

    #[test]
    fn colored_cells_keep_alignment() {
        let table = render_entity_table(
            &["id", "mood", "hours"],
            &rows(),
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        let lines: Vec<String> = table.lines().map(strip_ansi).collect();
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
        assert!(table.contains("\u{1b}[31mNOT_GREAT"));
    }

    #[test]
    fn strip_ansi_removes_escape_sequences() {
        assert_eq!(strip_ansi("\u{1b}[32mtrue\u{1b}[0m"), "true");
    }
}
