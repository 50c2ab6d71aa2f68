//! Curve specification grammar and parsing.
//!
//! A curve is supplied per (material, phase, property) as a string in
//! one of two forms, chosen once per database:
//!
//! - table: `"b0,v0;b1,v1;...;bn,vn"` — breakpoint/value pairs,
//!   breakpoints ascending by convention;
//! - polynomial: `"c0,c1,...,cn"` — ascending-order coefficients.
//!
//! Whitespace is stripped before parsing. Specs exceeding the fixed
//! capacities are configuration errors.

use sinter_core::{ConfigError, MaterialId};

/// Maximum number of breakpoint/value pairs in a table curve.
pub const TABLE_CAPACITY: usize = 16;

/// Maximum polynomial degree; a curve may carry up to
/// `POLYNOMIAL_ORDER + 1` coefficients.
pub const POLYNOMIAL_ORDER: usize = 4;

/// Which curve form a database uses for all of its materials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveFormat {
    /// Piecewise-linear breakpoint tables.
    Table,
    /// Fixed-degree polynomials.
    Polynomial,
}

/// A parsed, not-yet-normalized curve.
///
/// Entries are in specification order; padding to fixed capacity
/// happens when the curve is packed into a bank.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedCurve {
    /// Breakpoint/value pairs.
    Table(Vec<(f64, f64)>),
    /// Ascending-order coefficients.
    Polynomial(Vec<f64>),
}

fn parse_number(material: MaterialId, token: &str) -> Result<f64, ConfigError> {
    token.parse::<f64>().map_err(|_| ConfigError::InvalidNumber {
        material,
        token: token.to_string(),
    })
}

/// Parse one curve spec string in the given format.
///
/// Strips all whitespace first, so `"0, 10; 100, 20"` and
/// `"0,10;100,20"` are equivalent.
pub fn parse_curve(
    material: MaterialId,
    format: CurveFormat,
    spec: &str,
) -> Result<ParsedCurve, ConfigError> {
    let stripped: String = spec.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        return Err(ConfigError::EmptyCurve { material });
    }

    match format {
        CurveFormat::Table => {
            let entries: Vec<&str> = stripped.split(';').collect();
            if entries.len() > TABLE_CAPACITY {
                return Err(ConfigError::TableTooLong {
                    material,
                    entries: entries.len(),
                    capacity: TABLE_CAPACITY,
                });
            }
            let mut pairs = Vec::with_capacity(entries.len());
            for entry in entries {
                let mut fields = entry.split(',');
                let (Some(b), Some(v), None) = (fields.next(), fields.next(), fields.next())
                else {
                    return Err(ConfigError::MalformedPair {
                        material,
                        entry: entry.to_string(),
                    });
                };
                pairs.push((parse_number(material, b)?, parse_number(material, v)?));
            }
            Ok(ParsedCurve::Table(pairs))
        }
        CurveFormat::Polynomial => {
            let tokens: Vec<&str> = stripped.split(',').collect();
            if tokens.len() > POLYNOMIAL_ORDER + 1 {
                return Err(ConfigError::PolynomialTooLong {
                    material,
                    entries: tokens.len(),
                    capacity: POLYNOMIAL_ORDER + 1,
                });
            }
            let mut coeffs = Vec::with_capacity(tokens.len());
            for token in tokens {
                coeffs.push(parse_number(material, token)?);
            }
            Ok(ParsedCurve::Polynomial(coeffs))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: MaterialId = MaterialId(0);

    #[test]
    fn table_parses_pairs_in_order() {
        let curve = parse_curve(M, CurveFormat::Table, "0,10;100,20;200,20").unwrap();
        assert_eq!(
            curve,
            ParsedCurve::Table(vec![(0.0, 10.0), (100.0, 20.0), (200.0, 20.0)])
        );
    }

    #[test]
    fn whitespace_is_stripped() {
        let spaced = parse_curve(M, CurveFormat::Table, " 0 , 10 ;\t100 ,20\n").unwrap();
        let tight = parse_curve(M, CurveFormat::Table, "0,10;100,20").unwrap();
        assert_eq!(spaced, tight);
    }

    #[test]
    fn polynomial_parses_coefficients() {
        let curve = parse_curve(M, CurveFormat::Polynomial, "1.5,0,2e-3").unwrap();
        assert_eq!(curve, ParsedCurve::Polynomial(vec![1.5, 0.0, 2e-3]));
    }

    #[test]
    fn table_over_capacity_is_fatal() {
        let spec: Vec<String> = (0..TABLE_CAPACITY + 1)
            .map(|i| format!("{i},{i}"))
            .collect();
        let err = parse_curve(M, CurveFormat::Table, &spec.join(";")).unwrap_err();
        assert!(matches!(err, ConfigError::TableTooLong { entries: 17, .. }));
    }

    #[test]
    fn polynomial_over_capacity_is_fatal() {
        let spec = vec!["1"; POLYNOMIAL_ORDER + 2].join(",");
        let err = parse_curve(M, CurveFormat::Polynomial, &spec).unwrap_err();
        assert!(matches!(err, ConfigError::PolynomialTooLong { entries: 6, .. }));
    }

    #[test]
    fn malformed_pair_is_fatal() {
        let err = parse_curve(M, CurveFormat::Table, "0,10;100").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedPair { .. }));
        let err = parse_curve(M, CurveFormat::Table, "0,10,20").unwrap_err();
        assert!(matches!(err, ConfigError::MalformedPair { .. }));
    }

    #[test]
    fn non_numeric_token_is_fatal() {
        let err = parse_curve(M, CurveFormat::Polynomial, "1,abc").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }

    #[test]
    fn empty_spec_is_fatal() {
        let err = parse_curve(M, CurveFormat::Table, "  \t ").unwrap_err();
        assert_eq!(err, ConfigError::EmptyCurve { material: M });
    }
}
