//! Parser for comma-separated star data.
//!
//! The expected layout is a fixed header line followed by one row per star:
//!
//! ```text
//! StarID,ProperName,X,Y,Z
//! 0,Sol,0,0,0
//! 1,,282.43485,0.00449,5.36884
//! ```
//!
//! Names are taken verbatim and may be empty. There is no quoting, so a name
//! containing a comma makes its row malformed. Parsing is all-or-nothing: the
//! first bad line rejects the whole source.

use crate::error::LoadError;
use crate::star::Star;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The exact first line every star data source must start with.
pub const HEADER: &str = "StarID,ProperName,X,Y,Z";

const FIELD_COUNT: usize = 5;

/// Reads and parses a star data file.
///
/// # Errors
/// Returns [`LoadError::SourceUnavailable`] if the file cannot be opened or
/// read, and the other [`LoadError`] variants for content problems.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Star>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lines(BufReader::new(file), path)
}

/// Parses star data from any buffered reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<Star>, LoadError> {
    parse_lines(reader, Path::new("<reader>"))
}

/// Parses star data held in memory.
pub fn parse_str(text: &str) -> Result<Vec<Star>, LoadError> {
    parse_lines(text.as_bytes(), Path::new("<string>"))
}

fn parse_lines<R: BufRead>(reader: R, source: &Path) -> Result<Vec<Star>, LoadError> {
    let unavailable = |err: std::io::Error| LoadError::SourceUnavailable {
        path: source.to_path_buf(),
        source: err,
    };

    let mut lines = reader.lines();

    let header = lines.next().transpose().map_err(unavailable)?;
    match header {
        Some(line) if line == HEADER => {}
        other => {
            return Err(LoadError::InvalidHeader {
                found: other.unwrap_or_default(),
                expected: HEADER,
            })
        }
    }

    let mut stars = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line.map_err(unavailable)?;
        // header is line 1
        stars.push(parse_row(&line, index + 2)?);
    }

    Ok(stars)
}

fn parse_row(line: &str, line_no: usize) -> Result<Star, LoadError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(LoadError::MalformedRow {
            line: line_no,
            fields: fields.len(),
        });
    }

    let id: i64 = fields[0]
        .parse()
        .map_err(|_| malformed_field(line_no, "StarID", fields[0]))?;
    let x = parse_coordinate(fields[2], "X", line_no)?;
    let y = parse_coordinate(fields[3], "Y", line_no)?;
    let z = parse_coordinate(fields[4], "Z", line_no)?;

    Ok(Star::new(id, fields[1], x, y, z))
}

fn parse_coordinate(raw: &str, field: &'static str, line_no: usize) -> Result<f64, LoadError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(malformed_field(line_no, field, raw)),
    }
}

fn malformed_field(line: usize, field: &'static str, value: &str) -> LoadError {
    LoadError::MalformedField {
        line,
        field,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_valid_rows_in_order() {
        let stars = parse_str(
            "StarID,ProperName,X,Y,Z\n\
             0,Sol,0,0,0\n\
             1,,282.43485,0.00449,5.36884\n\
             2,,43.04329,0.00285,-15.24144\n",
        )
        .unwrap();

        assert_eq!(stars.len(), 3);
        assert_eq!(stars[0], Star::new(0, "Sol", 0.0, 0.0, 0.0));
        assert_eq!(stars[1].id(), 1);
        assert_eq!(stars[1].name(), "");
        assert_eq!(stars[1].x(), 282.43485);
        assert_eq!(stars[2].z(), -15.24144);
    }

    #[test]
    fn test_parse_reader_matches_parse_str() {
        let text = "StarID,ProperName,X,Y,Z\n0,Sol,0,0,0\n1,A,3,4,0\n";
        let from_reader = parse_reader(std::io::Cursor::new(text)).unwrap();
        assert_eq!(from_reader, parse_str(text).unwrap());

        let bad = "StarID,ProperName,X,Y,Z\n0,Sol,0,0,0\n1,A,x,4,0\n";
        let err = parse_reader(std::io::Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, LoadError::MalformedField { .. }));
        assert_eq!(err.line(), parse_str(bad).unwrap_err().line());
    }

    #[test]
    fn test_header_only_is_empty_catalog() {
        let stars = parse_str("StarID,ProperName,X,Y,Z\n").unwrap();
        assert!(stars.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let stars = parse_str("StarID,ProperName,X,Y,Z\r\n3,Vega,1.5,2,3\r\n").unwrap();
        assert_eq!(stars, vec![Star::new(3, "Vega", 1.5, 2.0, 3.0)]);
    }

    #[test]
    fn test_name_kept_verbatim() {
        let stars = parse_str("StarID,ProperName,X,Y,Z\n5, Barnard's Star ,1,1,1\n").unwrap();
        assert_eq!(stars[0].name(), " Barnard's Star ");
    }

    #[test]
    fn test_wrong_header() {
        let err = parse_str("ID,Name,X,Y,Z\n0,Sol,0,0,0\n").unwrap_err();
        match err {
            LoadError::InvalidHeader { found, .. } => assert_eq!(found, "ID,Name,X,Y,Z"),
            other => panic!("expected InvalidHeader, got {:?}", other),
        }
    }

    #[test]
    fn test_header_is_case_sensitive() {
        let err = parse_str("starid,propername,x,y,z\n").unwrap_err();
        assert!(matches!(err, LoadError::InvalidHeader { .. }));
    }

    #[test]
    fn test_empty_source_has_no_header() {
        let err = parse_str("").unwrap_err();
        match err {
            LoadError::InvalidHeader { found, .. } => assert!(found.is_empty()),
            other => panic!("expected InvalidHeader, got {:?}", other),
        }
    }

    #[test]
    fn test_extra_comma_is_malformed_row() {
        let err = parse_str("StarID,ProperName,X,Y,Z\n0,Sol,0,0,0\n1,Alpha, Centauri,1,2,3\n")
            .unwrap_err();
        match err {
            LoadError::MalformedRow { line, fields } => {
                assert_eq!(line, 3);
                assert_eq!(fields, 6);
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_is_malformed_row() {
        let err = parse_str("StarID,ProperName,X,Y,Z\n0,Sol,0,0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedRow { line: 2, fields: 4 }
        ));
    }

    #[test]
    fn test_blank_line_is_malformed_row() {
        let err = parse_str("StarID,ProperName,X,Y,Z\n0,Sol,0,0,0\n\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedRow { line: 3, fields: 1 }
        ));
    }

    #[test]
    fn test_non_integer_id() {
        let err = parse_str("StarID,ProperName,X,Y,Z\n1.5,Sol,0,0,0\n").unwrap_err();
        match err {
            LoadError::MalformedField { line, field, value } => {
                assert_eq!(line, 2);
                assert_eq!(field, "StarID");
                assert_eq!(value, "1.5");
            }
            other => panic!("expected MalformedField, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_coordinate() {
        let err = parse_str("StarID,ProperName,X,Y,Z\n0,Sol,0,north,0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedField { field: "Y", .. }
        ));
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let err = parse_str("StarID,ProperName,X,Y,Z\n0,Sol,0,0,NaN\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedField { field: "Z", .. }
        ));
        let err = parse_str("StarID,ProperName,X,Y,Z\n0,Sol,inf,0,0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::MalformedField { field: "X", .. }
        ));
    }

    #[test]
    fn test_bad_row_after_good_rows_rejects_everything() {
        let result = parse_str(
            "StarID,ProperName,X,Y,Z\n\
             0,Sol,0,0,0\n\
             1,A,1,1,1\n\
             2,B,oops,1,1\n",
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let file = write_temp("StarID,ProperName,X,Y,Z\n0,Sol,0,0,0\n1,A,3,4,0\n");
        let stars = load(file.path()).unwrap();
        assert_eq!(stars.len(), 2);
        assert_eq!(stars[1].position().x, 3.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thisCSVisfake.lol");
        let err = load(&path).unwrap_err();
        match err {
            LoadError::SourceUnavailable { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected SourceUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8_is_unavailable() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"StarID,ProperName,X,Y,Z\n0,\xff\xfe,0,0,0\n")
            .unwrap();
        file.flush().unwrap();
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::SourceUnavailable { .. }));
    }
}
