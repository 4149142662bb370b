//Entries whose magnitude falls below this are treated as floating-point
//noise from the orthogonalization and displayed as exact zero
pub const ZERO_SNAP_THRESH : f64 = 1e-12;

//How far a simplified display form may stray from the computed value
pub const RATIONALIZE_TOLERANCE : f64 = 1e-5;

//Largest denominator tried when looking for a plain rational p/q
pub const MAX_RATIONAL_DENOMINATOR : i64 = 100;

//Largest denominator tried for x^2 when looking for a quadratic surd
pub const MAX_SURD_DENOMINATOR : i64 = 1000;

//Largest square-free radicand m accepted in k*sqrt(m)/q
pub const MAX_RADICAND : i64 = 1000;

//A closed form this close to the value is taken as exact, whatever its size
pub const EXACT_MATCH_THRESH : f64 = 1e-13;

//Largest denominator (of x or of x^2) tried when looking for an exact form
pub const MAX_EXACT_DENOMINATOR : i64 = 100000;

//Number of continued-fraction terms expanded before giving up
pub const MAX_CONTINUED_FRACTION_TERMS : usize = 32;

//Significant digits used when no simplified form is found
pub const FALLBACK_SIGNIFICANT_DIGITS : usize = 15;

pub const DEFAULT_DECIMAL_DIGITS : usize = 6;

pub const DEFAULT_TEST_THRESH : f64 = 1e-9;
