//! Solution-set persistence.
//!
//! Writes an archive as the conventional pair of plain-text tables: one
//! row per solution, values joined by a separator, with identical row
//! ordering across the variables table ("VAR") and the objectives table
//! ("FUN"). Downstream indicator tooling consumes these files directly.

use crate::archive::NonDominatedArchive;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes variable and objective tables to the given writers.
///
/// Row `i` of `var` and row `i` of `fun` describe the same solution.
pub fn write_solution_set<V: Write, F: Write>(
    archive: &NonDominatedArchive,
    var: &mut V,
    fun: &mut F,
    separator: &str,
) -> io::Result<()> {
    for solution in archive {
        write_row(var, solution.variables(), separator)?;
        write_row(fun, solution.objectives(), separator)?;
    }
    Ok(())
}

/// Writes VAR and FUN files at the given paths, tab-separated.
pub fn write_files<P: AsRef<Path>>(
    archive: &NonDominatedArchive,
    var_path: P,
    fun_path: P,
) -> io::Result<()> {
    let mut var = BufWriter::new(File::create(var_path)?);
    let mut fun = BufWriter::new(File::create(fun_path)?);
    write_solution_set(archive, &mut var, &mut fun, "\t")?;
    var.flush()?;
    fun.flush()
}

fn write_row<W: Write>(writer: &mut W, values: &[f64], separator: &str) -> io::Result<()> {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            writer.write_all(separator.as_bytes())?;
        }
        write!(writer, "{value}")?;
    }
    writeln!(writer)
}
