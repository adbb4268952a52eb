use std::io::{self, Write};

use crate::SECTION_MARKER;

/// Sort `values` ascending by code point and drop repeats
///
/// Repeats are only ever adjacent once the values are sorted, so collapsing neighbours is a
/// full de-duplication. Comparison is exact; `A` and `a` are different values.
pub fn sorted_unique(mut values: Vec<String>) -> Vec<String> {
    values.sort();
    values.dedup();
    values
}

/// Write one labeled section: a blank line, the `-------> label` header, then every distinct
/// value in sorted order, one per line
pub fn present<W: Write>(writer: &mut W, label: &str, values: Vec<String>) -> io::Result<()> {
    log::trace!("enter: present({}, Vec<String>[{} values...])", label, values.len());

    writeln!(writer)?;
    writeln!(writer, "{}{}", SECTION_MARKER, label)?;

    let unique = sorted_unique(values);

    for value in &unique {
        writeln!(writer, "{}", value)?;
    }

    log::trace!("exit: present -> {} lines", unique.len());
    Ok(())
}
