//! LaTeX document rendering for [`TexTable`].
//!
//! The dialect is fixed: a `table` float around a booktabs `tabular` whose
//! columns all use the siunitx `S` type. Header cells are braced so siunitx
//! treats them as text.

use crate::table::TexTable;

const INDENT: &str = "\t";
const CELL_SEPARATOR: &str = " & ";
const ROW_TERMINATOR: &str = " \\\\";
const ALIGNMENT: &str = "S";

/// Append one row: cells separated by `&`, the last one closing the row.
fn push_row<'a, I>(out: &mut String, cells: I)
where
    I: IntoIterator<Item = &'a str>,
{
    out.push_str(INDENT);
    out.push_str(INDENT);
    let mut cells = cells.into_iter().peekable();
    while let Some(cell) = cells.next() {
        out.push_str(cell);
        if cells.peek().is_some() {
            out.push_str(CELL_SEPARATOR);
        } else {
            out.push_str(ROW_TERMINATOR);
        }
    }
    out.push('\n');
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}

/// Render the complete table document.
///
/// ```rust
/// use sitablib::{render_document, Measurement, TableOptions, TexTable};
///
/// let options = TableOptions::new("Values", "tab:values")
///     .column(vec![Measurement::exact(5.0).unwrap()], 0)
///     .column_names(["N"]);
/// let doc = render_document(&TexTable::build(&options).unwrap());
///
/// assert!(doc.starts_with("\\begin{table}\n"));
/// assert!(doc.contains("\t\t{N} \\\\\n"));
/// assert!(doc.contains("\t\t\\num{5} \\\\\n"));
/// assert!(doc.ends_with("\\end{table}\n"));
/// ```
pub fn render_document(table: &TexTable) -> String {
    let mut out = String::new();

    push_line(
        &mut out,
        0,
        &format!("\\begin{{table}}{}", table.placement.qualifier()),
    );
    push_line(&mut out, 1, "\\centering");
    push_line(&mut out, 1, &format!("\\caption{{{}}}", table.caption));
    push_line(&mut out, 1, &format!("\\label{{{}}}", table.label));
    push_line(
        &mut out,
        1,
        &format!("\\sisetup{{table-format={}}}", table.table_format),
    );

    let spec = vec![ALIGNMENT; table.columns.len()].join(" ");
    push_line(&mut out, 1, &format!("\\begin{{tabular}}{{{}}}", spec));
    push_line(&mut out, 2, "\\toprule");

    let headers: Vec<String> = table.headers.iter().map(|h| format!("{{{}}}", h)).collect();
    push_row(&mut out, headers.iter().map(String::as_str));
    push_line(&mut out, 2, "\\midrule");

    for row in table.rows() {
        push_row(&mut out, row);
    }

    push_line(&mut out, 2, "\\bottomrule");
    push_line(&mut out, 1, "\\end{tabular}");
    push_line(&mut out, 0, "\\end{table}");

    out
}
