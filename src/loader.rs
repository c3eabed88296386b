//! Plain-text city data: one city per line, whitespace-separated numbers,
//! no header. Blank lines are ignored.

use crate::distance::{DistanceMatrix, DistanceProvider, Point};
use crate::error::{TspError, TspResult};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub fn load_coordinates<P: AsRef<Path>>(path: P) -> TspResult<Vec<Point>> {
    let path = path.as_ref();
    debug!("Loading coordinates from: {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| TspError::io(path, e))?;
    let points = parse_coordinates(&content)?;
    info!("📍 Loaded {} cities from {}", points.len(), path.display());
    Ok(points)
}

pub fn load_matrix<P: AsRef<Path>>(path: P) -> TspResult<DistanceMatrix> {
    let path = path.as_ref();
    debug!("Loading distance matrix from: {}", path.display());
    let content = fs::read_to_string(path).map_err(|e| TspError::io(path, e))?;
    let matrix = parse_matrix(&content)?;
    info!(
        symmetric = matrix.is_symmetric(),
        "📐 Loaded {}x{} distance matrix from {}",
        matrix.size(),
        matrix.size(),
        path.display()
    );
    Ok(matrix)
}

/// Each non-blank line must hold exactly two numbers: `x y`.
pub fn parse_coordinates(content: &str) -> TspResult<Vec<Point>> {
    let mut points = Vec::new();

    for (line_no, tokens) in numbered_rows(content) {
        if tokens.len() != 2 {
            return Err(TspError::Parse {
                line: line_no,
                message: format!("expected 2 coordinates, found {}", tokens.len()),
            });
        }
        let x = parse_number(tokens[0], line_no)?;
        let y = parse_number(tokens[1], line_no)?;
        points.push(Point::new(x, y));
    }

    if points.is_empty() {
        return Err(TspError::Validation("coordinate file has no cities".to_string()));
    }
    Ok(points)
}

/// Every row must have exactly as many values as there are rows.
pub fn parse_matrix(content: &str) -> TspResult<DistanceMatrix> {
    let mut rows: Vec<(usize, Vec<f64>)> = Vec::new();

    for (line_no, tokens) in numbered_rows(content) {
        let mut row = Vec::with_capacity(tokens.len());
        for token in tokens {
            let value = parse_number(token, line_no)?;
            if value < 0.0 {
                return Err(TspError::Validation(format!(
                    "negative distance {} on line {}",
                    value, line_no
                )));
            }
            row.push(value);
        }
        rows.push((line_no, row));
    }

    if rows.is_empty() {
        return Err(TspError::Validation("distance matrix has no rows".to_string()));
    }

    let size = rows.len();
    for (line_no, row) in &rows {
        if row.len() != size {
            return Err(TspError::Parse {
                line: *line_no,
                message: format!(
                    "expected {} values for a {}x{} matrix, found {}",
                    size,
                    size,
                    size,
                    row.len()
                ),
            });
        }
    }

    DistanceMatrix::from_rows(rows.into_iter().map(|(_, row)| row).collect())
}

/// Yields `(1-based line number, tokens)` for every non-blank line.
fn numbered_rows(content: &str) -> impl Iterator<Item = (usize, Vec<&str>)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.split_whitespace().collect::<Vec<_>>()))
        .filter(|(_, tokens)| !tokens.is_empty())
}

fn parse_number(token: &str, line: usize) -> TspResult<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TspError::Parse {
            line,
            message: format!("'{}' is not a finite number", token),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates_mixed_whitespace() {
        let points = parse_coordinates("0 0\n  10\t0\n\n10   10\n").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0)
            ]
        );
    }

    #[test]
    fn test_parse_coordinates_reports_line() {
        match parse_coordinates("1 2\n3 abc\n") {
            Err(TspError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_matrix_square() {
        let m = parse_matrix("0 1 2\n1 0 1\n2 1 0\n").unwrap();
        assert_eq!(m.city_count(), 3);
        assert_eq!(m.distance(0, 2), 2.0);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_parse_matrix_rejects_non_square() {
        match parse_matrix("0 1 2\n1 0 1\n") {
            Err(TspError::Parse { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_matrix_rejects_nan() {
        assert!(parse_matrix("0 NaN\n1 0\n").is_err());
    }
}
