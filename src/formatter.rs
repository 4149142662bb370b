extern crate ndarray;

use ndarray::*;
use crate::params::*;
use crate::rationalize::*;
use crate::basis_result::*;

///Turns the entries of a computed basis into display strings.
///
///Implementors only choose how one (already noise-snapped) entry is rendered;
///snapping and the row/column layout are shared through [`Formatter::format_matrix`].
pub trait Formatter {
    ///Magnitude below which an entry is displayed as exact zero.
    fn zero_snap_thresh(&self) -> f64;

    ///How far a simplified display form may deviate from the entry.
    fn tolerance(&self) -> f64;

    fn format_entry(&self, value : f64) -> String;

    fn snap(&self, value : f64) -> f64 {
        if (value.abs() < self.zero_snap_thresh()) {
            0.0
        } else {
            value
        }
    }

    fn format_matrix(&self, basis : &Array2<f64>) -> DisplayMatrix {
        basis.outer_iter()
             .map(|row| row.iter()
                           .map(|value| self.format_entry(self.snap(*value)))
                           .collect::<Vec<String>>())
             .collect()
    }
}

///Default display strategy: recognizes short rationals and quadratic surds
///(`"1/2"`, `"-sqrt(6)/3"`) and otherwise prints the value to 15 significant digits.
#[derive(Clone, Copy, Debug)]
pub struct SymbolicFormatter {
    pub zero_snap_thresh : f64,
    pub tolerance : f64
}

impl Default for SymbolicFormatter {
    fn default() -> Self {
        SymbolicFormatter {
            zero_snap_thresh : ZERO_SNAP_THRESH,
            tolerance : RATIONALIZE_TOLERANCE
        }
    }
}

impl Formatter for SymbolicFormatter {
    fn zero_snap_thresh(&self) -> f64 {
        self.zero_snap_thresh
    }
    fn tolerance(&self) -> f64 {
        self.tolerance
    }
    fn format_entry(&self, value : f64) -> String {
        simplify(value, self.tolerance).to_string()
    }
}

///Plain fixed-point rendering with trailing zeros trimmed.
#[derive(Clone, Copy, Debug)]
pub struct DecimalFormatter {
    pub digits : usize
}

impl Default for DecimalFormatter {
    fn default() -> Self {
        DecimalFormatter {
            digits : DEFAULT_DECIMAL_DIGITS
        }
    }
}

impl Formatter for DecimalFormatter {
    fn zero_snap_thresh(&self) -> f64 {
        ZERO_SNAP_THRESH
    }
    fn tolerance(&self) -> f64 {
        0.5 * 10.0f64.powi(-(self.digits as i32))
    }
    fn format_entry(&self, value : f64) -> String {
        let fixed = format!("{:.*}", self.digits, value);
        let trimmed = if (fixed.contains('.')) {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };
        //Rounding can leave a bare "-0"
        if (trimmed == "-0") {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    }
}
