use std::fmt;

use crate::entry::{CronEntry, Field};

/// Width of the label column, command row included.
const LABEL_WIDTH: usize = 14;

impl fmt::Display for CronEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in Field::ALL {
            write!(f, "{:<LABEL_WIDTH$}", field.label())?;
            write_values(f, self.values(field))?;
            writeln!(f)?;
        }
        writeln!(f, "{:<LABEL_WIDTH$}{}", "command", self.command)
    }
}

fn write_values(f: &mut fmt::Formatter<'_>, values: &[u8]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{value}")?;
    }
    Ok(())
}
