use std::fmt;

use crate::utils::numbers::significant;

/// Significant digits printed for every share
const REPORT_DIGITS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldStats {
    pub read_pct: f64,
    pub write_pct: f64,
}

/// Share of each operation kind in the total operation count, in percent
#[derive(Clone, Debug, PartialEq)]
pub struct RecordStats {
    pub fields: Vec<FieldStats>,
    pub string_pct: f64,
}

impl RecordStats {
    /// Sum of every share, 100% once anything has run
    pub fn total_pct(&self) -> f64 {
        self.fields
            .iter()
            .map(|f| f.read_pct + f.write_pct)
            .sum::<f64>()
            + self.string_pct
    }
}

impl fmt::Display for RecordStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Field stats (Read%, Write%):")?;
        for (i, field) in self.fields.iter().enumerate() {
            writeln!(
                f,
                "Field {}: {}% / {}%",
                i,
                significant(field.read_pct, REPORT_DIGITS),
                significant(field.write_pct, REPORT_DIGITS)
            )?;
        }
        writeln!(
            f,
            "String requests: {}%",
            significant(self.string_pct, REPORT_DIGITS)
        )
    }
}
