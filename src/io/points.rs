//! Tab-separated point and route files.
//!
//! One point per line, `x<TAB>y`. Reading accepts any whitespace between
//! the two fields, integer or real coordinates, and skips blank lines.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::PointsError;
use crate::models::Point;

/// Parses points from a reader, preserving line order.
///
/// The first point read becomes the route origin.
///
/// # Errors
///
/// Fails on the first row without exactly two fields or with a token that
/// is not a finite number; no partial point set is returned.
///
/// # Examples
///
/// ```
/// use u_autoroute::io::read_points;
/// use u_autoroute::models::Point;
///
/// let points = read_points("500\t0\n12\t-7\n".as_bytes()).unwrap();
/// assert_eq!(points, vec![Point::new(500.0, 0.0), Point::new(12.0, -7.0)]);
/// ```
pub fn read_points(reader: impl BufRead) -> Result<Vec<Point>, PointsError> {
    let mut points = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let number = i + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [] => continue,
            [x, y] => points.push(Point::new(
                parse_coordinate(x, number)?,
                parse_coordinate(y, number)?,
            )),
            _ => {
                return Err(PointsError::MalformedRow {
                    line: number,
                    fields: fields.len(),
                    content: line.clone(),
                })
            }
        }
    }
    Ok(points)
}

fn parse_coordinate(token: &str, line: usize) -> Result<f64, PointsError> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(PointsError::InvalidNumber {
            line,
            token: token.to_string(),
        }),
    }
}

/// Reads a point file.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>, PointsError> {
    let file = File::open(path)?;
    read_points(BufReader::new(file))
}

/// Writes points one per line as `x<TAB>y`, without a trailing newline.
///
/// Integral coordinates are written without a fractional part, so a route
/// over integer input reads back as the same text.
///
/// # Examples
///
/// ```
/// use u_autoroute::io::write_route;
/// use u_autoroute::models::Point;
///
/// let mut out = Vec::new();
/// write_route(&mut out, &[Point::new(500.0, 0.0), Point::new(1.5, 2.0)]).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "500\t0\n1.5\t2");
/// ```
pub fn write_route(mut writer: impl Write, route: &[Point]) -> std::io::Result<()> {
    for (i, p) in route.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\n")?;
        }
        write!(writer, "{}\t{}", p.x(), p.y())?;
    }
    writer.flush()
}

/// Writes a route file, replacing any existing file.
pub fn save_route(path: impl AsRef<Path>, route: &[Point]) -> std::io::Result<()> {
    let file = File::create(path)?;
    write_route(BufWriter::new(file), route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_tab_separated() {
        let pts = read_points("0\t0\n3\t4\n6\t8".as_bytes()).expect("valid");
        assert_eq!(
            pts,
            vec![
                Point::new(0.0, 0.0),
                Point::new(3.0, 4.0),
                Point::new(6.0, 8.0)
            ]
        );
    }

    #[test]
    fn test_read_skips_blank_lines_and_crlf() {
        let pts = read_points("1 2\r\n\r\n  \n-3.5\t4e2\n".as_bytes()).expect("valid");
        assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(-3.5, 400.0)]);
    }

    #[test]
    fn test_read_empty() {
        assert!(read_points("".as_bytes()).expect("valid").is_empty());
    }

    #[test]
    fn test_read_wrong_field_count() {
        let err = read_points("1\t2\n3\t4\t5\n".as_bytes());
        assert!(matches!(
            err,
            Err(PointsError::MalformedRow {
                line: 2,
                fields: 3,
                ..
            })
        ));
        let err = read_points("7\n".as_bytes());
        assert!(matches!(
            err,
            Err(PointsError::MalformedRow {
                line: 1,
                fields: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_read_non_numeric() {
        let err = read_points("1\t2\n3\tx\n".as_bytes());
        match err {
            Err(PointsError::InvalidNumber { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_read_non_finite() {
        assert!(matches!(
            read_points("NaN\t1\n".as_bytes()),
            Err(PointsError::InvalidNumber { line: 1, .. })
        ));
        assert!(matches!(
            read_points("1\tinf\n".as_bytes()),
            Err(PointsError::InvalidNumber { line: 1, .. })
        ));
    }

    #[test]
    fn test_write_route_format() {
        let mut out = Vec::new();
        write_route(
            &mut out,
            &[Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(0.0, 0.0)],
        )
        .expect("write to vec");
        assert_eq!(String::from_utf8(out).expect("utf8"), "0\t0\n3\t4\n0\t0");
    }

    #[test]
    fn test_write_empty_route() {
        let mut out = Vec::new();
        write_route(&mut out, &[]).expect("write to vec");
        assert!(out.is_empty());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("u-autoroute-io-{}.txt", std::process::id()));
        let route = vec![Point::new(500.0, 0.0), Point::new(-12.0, 33.25)];
        save_route(&path, &route).expect("save");
        let loaded = load_points(&path).expect("load");
        std::fs::remove_file(&path).expect("cleanup");
        assert_eq!(loaded, route);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_points("/nonexistent/points.txt"),
            Err(PointsError::Io(_))
        ));
    }
}
