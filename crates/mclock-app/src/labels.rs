//! Default countdown labels.
//!
//! The formatter takes its labels through a lookup function so deployments
//! can localize; this is the English fallback used by console output.

use mclock_core::CountdownUnit;

/// English short labels with singular/plural selection.
pub fn english_short_label(unit: CountdownUnit, count: u64) -> String {
    let label = match unit {
        CountdownUnit::Days => {
            if count == 1 {
                "day"
            } else {
                "days"
            }
        }
        CountdownUnit::Hours => {
            if count == 1 {
                "hr"
            } else {
                "hrs"
            }
        }
        CountdownUnit::Minutes => "min",
        CountdownUnit::Seconds => "sec",
    };
    label.to_string()
}
