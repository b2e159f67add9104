use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

pub use table::Table;

/// Render `value` in the requested format. `table` is only built for
/// [`OutputFormat::Table`].
pub fn render<T, F>(value: &T, format: OutputFormat, table: F) -> anyhow::Result<String>
where
    T: Serialize,
    F: FnOnce() -> Table,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let prefs = ui::prefs();
            Ok(table().render(table::TableOptions {
                max_width: prefs.term_width,
                color: prefs.table_color,
            }))
        }
    }
}

/// Print `value` in the requested format.
pub fn output<T, F>(value: &T, format: OutputFormat, table: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce() -> Table,
{
    let rendered = render(value, format, table)?;
    println!("{rendered}");
    Ok(())
}
