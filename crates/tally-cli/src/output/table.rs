#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    render(headers, rows, None, options)
}

/// Render an aligned table with a totals line under a second divider.
#[must_use]
pub fn render_table_with_footer(
    headers: &[&str],
    rows: &[Vec<String>],
    footer: &[String],
    options: TableOptions,
) -> String {
    render(headers, rows, Some(footer), options)
}

fn render(
    headers: &[&str],
    rows: &[Vec<String>],
    footer: Option<&[String]>,
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .map(Vec::as_slice)
                .chain(footer)
                .filter_map(|row| row.get(index))
                .map(|cell| display_len(cell))
                .max()
                .unwrap_or(0)
                .max(display_len(header))
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| {
            let text = truncate_text(header, *width);
            let styled = if options.color {
                paint("1", &text)
            } else {
                text
            };
            format_cell(&styled, *width, false)
        })
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_len(&strip_ansi(&header_line)));

    let mut lines = Vec::with_capacity(4 + rows.len());
    lines.push(header_line);
    lines.push(divider.clone());
    lines.extend(rows.iter().map(|row| render_row(row, &widths, None, options)));
    if let Some(footer) = footer {
        lines.push(divider);
        lines.push(render_row(footer, &widths, Some("1"), options));
    }
    lines.join("\n")
}

fn render_row(row: &[String], widths: &[usize], style: Option<&str>, options: TableOptions) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(index, width)| {
            let value = row.get(index).map_or("-", String::as_str);
            let truncated = truncate_text(value, *width);
            let numeric = looks_numeric(&truncated);
            let styled = match style {
                Some(code) if options.color => paint(code, &truncated),
                _ => truncated,
            };
            format_cell(&styled, *width, numeric)
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = display_len(headers[idx]).max(MIN_COLUMN_WIDTH);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn display_len(value: &str) -> usize {
    value.chars().count()
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_len(value) <= width {
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
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(display_len(&strip_ansi(value)));
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

fn paint(code: &str, value: &str) -> String {
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

fn strip_ansi(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}
