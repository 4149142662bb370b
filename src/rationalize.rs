use std::fmt;
use crate::params::*;

///A display form for a single real number: either an exact-looking
///closed form recognized within a tolerance, or the raw value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimplifiedValue {
    ///`numerator / denominator`, with `denominator > 0` and the fraction in lowest terms
    Rational { numerator : i64, denominator : i64 },
    ///`coefficient * sqrt(radicand) / denominator`, with a square-free `radicand > 1`
    Surd { coefficient : i64, radicand : i64, denominator : i64 },
    Literal(f64)
}

impl SimplifiedValue {
    pub fn value(&self) -> f64 {
        match self {
            SimplifiedValue::Rational { numerator, denominator } => {
                (*numerator as f64) / (*denominator as f64)
            },
            SimplifiedValue::Surd { coefficient, radicand, denominator } => {
                (*coefficient as f64) * (*radicand as f64).sqrt() / (*denominator as f64)
            },
            SimplifiedValue::Literal(x) => *x
        }
    }

    pub fn is_literal(&self) -> bool {
        match self {
            SimplifiedValue::Literal(_) => true,
            _ => false
        }
    }
}

impl fmt::Display for SimplifiedValue {
    fn fmt(&self, f : &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimplifiedValue::Rational { numerator, denominator } => {
                if (*denominator == 1) {
                    write!(f, "{}", numerator)
                } else {
                    write!(f, "{}/{}", numerator, denominator)
                }
            },
            SimplifiedValue::Surd { coefficient, radicand, denominator } => {
                if (*coefficient < 0) {
                    write!(f, "-")?;
                }
                let magnitude = coefficient.abs();
                if (magnitude == 1) {
                    write!(f, "sqrt({})", radicand)?;
                } else {
                    write!(f, "{}*sqrt({})", magnitude, radicand)?;
                }
                if (*denominator != 1) {
                    write!(f, "/{}", denominator)?;
                }
                Ok(())
            },
            SimplifiedValue::Literal(x) => write!(f, "{}", render_literal(*x))
        }
    }
}

///Renders a raw value to a fixed number of significant digits, switching to
///scientific notation for very small magnitudes.
pub fn render_literal(x : f64) -> String {
    if (x == 0.0) {
        return "0".to_string();
    }
    if (!x.is_finite()) {
        return format!("{}", x);
    }
    let magnitude = x.abs().log10().floor() as i32;
    let last_digit = FALLBACK_SIGNIFICANT_DIGITS as i32 - 1;
    if (magnitude < -4) {
        format!("{:.*e}", last_digit as usize, x)
    } else {
        let decimals = (last_digit - magnitude).max(0) as usize;
        format!("{:.*}", decimals, x)
    }
}

///Attempts to recognize `x` as a rational or a quadratic surd.
///
///A form matching `x` to within [`EXACT_MATCH_THRESH`] is taken first, searching
///denominators up to [`MAX_EXACT_DENOMINATOR`]. Failing that, every short rational
///and small surd within `tolerance` is a candidate and the closest one wins. When
///there is none, `x` is kept as a literal.
pub fn simplify(x : f64, tolerance : f64) -> SimplifiedValue {
    if (x == 0.0) {
        return SimplifiedValue::Rational { numerator : 0, denominator : 1 };
    }
    //Too big for the integer arithmetic below to mean anything
    if (!x.is_finite() || x.abs() > 1e9) {
        return SimplifiedValue::Literal(x);
    }

    let sign = if (x < 0.0) { -1 } else { 1 };
    let magnitude = x.abs();

    if let Some(exact) = find_exact(magnitude) {
        return apply_sign(exact, sign);
    }

    let mut best = SimplifiedValue::Literal(x);
    let mut best_error = std::f64::INFINITY;
    let mut consider = |candidate : SimplifiedValue| {
        let error = (candidate.value() - magnitude).abs();
        if (error <= tolerance && error < best_error) {
            best = apply_sign(candidate, sign);
            best_error = error;
        }
    };
    for (p, q) in convergents(magnitude, MAX_RATIONAL_DENOMINATOR) {
        consider(SimplifiedValue::Rational { numerator : p, denominator : q });
    }
    for (p, q) in convergents(magnitude * magnitude, MAX_SURD_DENOMINATOR) {
        match surd_from_square(p, q) {
            Some(SimplifiedValue::Surd { radicand, .. }) if radicand > MAX_RADICAND => continue,
            Some(candidate) => consider(candidate),
            None => continue
        }
    }
    best
}

//First rational, then first surd, whose value agrees with magnitude to within EXACT_MATCH_THRESH
fn find_exact(magnitude : f64) -> Option<SimplifiedValue> {
    for (p, q) in convergents(magnitude, MAX_EXACT_DENOMINATOR) {
        if (((p as f64) / (q as f64) - magnitude).abs() <= EXACT_MATCH_THRESH) {
            return Some(SimplifiedValue::Rational { numerator : p, denominator : q });
        }
    }
    for (p, q) in convergents(magnitude * magnitude, MAX_EXACT_DENOMINATOR) {
        if let Some(candidate) = surd_from_square(p, q) {
            if ((candidate.value() - magnitude).abs() <= EXACT_MATCH_THRESH) {
                return Some(candidate);
            }
        }
    }
    None
}

fn apply_sign(value : SimplifiedValue, sign : i64) -> SimplifiedValue {
    match value {
        SimplifiedValue::Rational { numerator, denominator } => {
            SimplifiedValue::Rational { numerator : sign * numerator, denominator }
        },
        SimplifiedValue::Surd { coefficient, radicand, denominator } => {
            SimplifiedValue::Surd { coefficient : sign * coefficient, radicand, denominator }
        },
        literal => literal
    }
}

//Rewrites sqrt(p/q) as k * sqrt(m) / q' with m square-free. A radicand
//that collapses to 1 is really a rational, and is returned as one.
fn surd_from_square(p : i64, q : i64) -> Option<SimplifiedValue> {
    if (p <= 0) {
        return None;
    }
    let product = p.checked_mul(q)?;
    //Keeps the trial division in split_square_free short
    if (product > MAX_EXACT_DENOMINATOR * MAX_EXACT_DENOMINATOR) {
        return None;
    }
    let (root, radicand) = split_square_free(product);
    let divisor = gcd(root, q);
    let coefficient = root / divisor;
    let denominator = q / divisor;
    if (radicand == 1) {
        Some(SimplifiedValue::Rational { numerator : coefficient, denominator })
    } else {
        Some(SimplifiedValue::Surd { coefficient, radicand, denominator })
    }
}

///Continued-fraction convergents `p/q` of a non-negative `x`, in order of
///increasing denominator, stopping before the denominator exceeds `max_denominator`.
pub fn convergents(x : f64, max_denominator : i64) -> Vec<(i64, i64)> {
    let mut result = Vec::new();
    let (mut h_prev, mut h_prev_prev) = (1i64, 0i64);
    let (mut k_prev, mut k_prev_prev) = (0i64, 1i64);
    let mut remainder = x;

    for _ in 0..MAX_CONTINUED_FRACTION_TERMS {
        let a = remainder.floor();
        let a_int = a as i64;
        let h = match a_int.checked_mul(h_prev).and_then(|v| v.checked_add(h_prev_prev)) {
            Some(h) => h,
            None => break
        };
        let k = match a_int.checked_mul(k_prev).and_then(|v| v.checked_add(k_prev_prev)) {
            Some(k) => k,
            None => break
        };
        if (k > max_denominator) {
            break;
        }
        result.push((h, k));

        h_prev_prev = h_prev;
        h_prev = h;
        k_prev_prev = k_prev;
        k_prev = k;

        let frac = remainder - a;
        if (frac <= 1e-12) {
            break;
        }
        remainder = 1.0 / frac;
        if (remainder > 1e12) {
            break;
        }
    }
    result
}

//Splits n into (k, m) with n = k^2 * m and m square-free
fn split_square_free(n : i64) -> (i64, i64) {
    let mut root = 1;
    let mut rest = n;
    let mut factor = 2;
    while (factor * factor <= rest) {
        while (rest % (factor * factor) == 0) {
            rest /= factor * factor;
            root *= factor;
        }
        factor += 1;
    }
    (root, rest)
}

fn gcd(a : i64, b : i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while (b != 0) {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(x : f64) -> String {
        simplify(x, RATIONALIZE_TOLERANCE).to_string()
    }

    #[test]
    fn integers_and_halves() {
        assert_eq!(render(1.0), "1");
        assert_eq!(render(-1.0), "-1");
        assert_eq!(render(0.5), "1/2");
        assert_eq!(render(0.3), "3/10");
        assert_eq!(render(0.0), "0");
    }

    #[test]
    fn values_near_integers_are_recognized() {
        assert_eq!(render(0.9999999), "1");
        assert_eq!(render(3e-6), "0");
    }

    #[test]
    fn common_surds() {
        assert_eq!(render(1.0 / 2.0f64.sqrt()), "sqrt(2)/2");
        assert_eq!(render(-2.0 / 5.0f64.sqrt()), "-2*sqrt(5)/5");
        assert_eq!(render(1.0 / 3.0f64.sqrt()), "sqrt(3)/3");
        assert_eq!(render(3.0f64.sqrt()), "sqrt(3)");
        assert_eq!(render(1.0 / 6.0f64.sqrt()), "sqrt(6)/6");
        assert_eq!(render(2.0 / 6.0f64.sqrt()), "sqrt(6)/3");
        assert_eq!(render(12.0 / 189.0f64.sqrt()), "4*sqrt(21)/21");
    }

    #[test]
    fn unrecognized_values_stay_literal() {
        let value = simplify(std::f64::consts::PI / 10.0, RATIONALIZE_TOLERANCE);
        assert!(value.is_literal());
        assert_eq!(value.to_string(), "0.314159265358979");
        assert_eq!(render(std::f64::consts::PI), "3.14159265358979");
        assert!(simplify(std::f64::consts::E / 10.0, RATIONALIZE_TOLERANCE).is_literal());
    }

    #[test]
    fn surds_with_large_radicands_are_exact() {
        assert_eq!(render(-19.0 * 6.0f64.sqrt() / 54.0), "-19*sqrt(6)/54");
        assert_eq!(render(-16.0 * 273.0f64.sqrt() / 273.0), "-16*sqrt(273)/273");
        assert_eq!(render(-26.0 * 861.0f64.sqrt() / 861.0), "-26*sqrt(861)/861");
        assert_eq!(render(-29.0 * 966.0f64.sqrt() / 966.0), "-29*sqrt(966)/966");
    }

    #[test]
    fn closest_candidate_wins_within_tolerance() {
        assert_eq!(render(0.618034), "12*sqrt(377)/377");
        assert_eq!(render(0.123456789), "10/81");
        assert_eq!(render(0.6), "3/5");
        assert_eq!(render(0.8), "4/5");
    }

    #[test]
    fn simplified_value_is_within_tolerance() {
        for &x in &[0.5, 0.7071067811865475, -0.8944271909999159, 0.123456789, 0.3] {
            let value = simplify(x, RATIONALIZE_TOLERANCE);
            assert!((value.value() - x).abs() <= RATIONALIZE_TOLERANCE);
        }
    }

    #[test]
    fn tiny_literals_use_scientific_notation() {
        assert_eq!(render_literal(1e-11), "1.00000000000000e-11");
        assert_eq!(render_literal(-0.0), "0");
    }

    #[test]
    fn convergents_of_rational_terminate() {
        assert_eq!(convergents(0.75, 100), vec![(0, 1), (1, 1), (3, 4)]);
    }

    #[test]
    fn square_free_split() {
        assert_eq!(split_square_free(20), (2, 5));
        assert_eq!(split_square_free(189 * 144), (36, 21));
        assert_eq!(split_square_free(7), (1, 7));
        assert_eq!(gcd(12, 18), 6);
    }
}
