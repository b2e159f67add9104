//! Aligned plain-text tables.

const MIN_COLUMN_WIDTH: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Rows of string cells under a header line.
///
/// Cells equal to the highlight text (the unassigned placeholder) are drawn
/// in yellow when color is on.
#[derive(Clone, Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    highlight: Option<String>,
    footer: Option<String>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn highlight(mut self, text: impl Into<String>) -> Self {
        self.highlight = Some(text.into());
        self
    }

    /// A line printed under the rows.
    #[must_use]
    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    pub fn push_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        if self.rows.is_empty() {
            return self.footer.as_ref().map_or_else(
                || String::from("(no rows)"),
                |footer| format!("(no rows)\n\n{footer}"),
            );
        }

        let mut widths = self.natural_widths();
        shrink_to_fit(&mut widths, options.max_width);

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        let header = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(text, width)| pad(&truncate(text, *width), *width, false))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
            .trim_end()
            .to_string();
        let divider = "-".repeat(header.chars().count());
        lines.push(header);
        lines.push(divider);

        for row in &self.rows {
            let line = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let raw = row.get(index).map_or("-", String::as_str);
                    let text = pad(&truncate(raw, *width), *width, is_numeric(raw));
                    if options.color && self.highlight.as_deref() == Some(raw) {
                        format!("\u{1b}[33m{text}\u{1b}[0m")
                    } else {
                        text
                    }
                })
                .collect::<Vec<_>>()
                .join(SEPARATOR);
            lines.push(line.trim_end().to_string());
        }

        if let Some(footer) = &self.footer {
            lines.push(String::new());
            lines.push(footer.clone());
        }

        lines.join("\n")
    }

    fn natural_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
                    .max(MIN_COLUMN_WIDTH)
            })
            .collect()
    }
}

/// Narrow the widest column one character at a time until the table fits.
fn shrink_to_fit(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();

    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN_WIDTH)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}
