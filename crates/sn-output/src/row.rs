//! Tab-delimited row assembly shared by every section.
//!
//! A row of width `w` always carries exactly `w - 1` tabs, so short rows
//! are padded with empty trailing cells.  The consuming software counts
//! cells, not just values.

/// Width of the section title rows and of the separator row.
pub(crate) const TITLE_WIDTH: usize = 9;

/// Append one row of exactly `width` cells, padding with empty cells.
pub(crate) fn push_row<I, S>(out: &mut String, width: usize, cells: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut n = 0;
    for cell in cells {
        if n > 0 {
            out.push('\t');
        }
        out.push_str(cell.as_ref());
        n += 1;
    }
    debug_assert!(n <= width, "row has {n} cells, width is {width}");
    for _ in n.max(1)..width {
        out.push('\t');
    }
    out.push('\n');
}

/// `[Name]` followed by its descriptive sub-header, both title width.
pub(crate) fn push_title(out: &mut String, section: &str, caption: &str) {
    push_row(out, TITLE_WIDTH, [section]);
    push_row(out, TITLE_WIDTH, [caption]);
}

/// The all-empty row closing every section.
pub(crate) fn push_separator(out: &mut String) {
    push_row(out, TITLE_WIDTH, std::iter::empty::<&str>());
}
