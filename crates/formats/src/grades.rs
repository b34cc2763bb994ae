use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum GradesParseError {
    InvalidNumber { line: usize, token: String },
    InvalidJson(String),
}

impl std::fmt::Display for GradesParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradesParseError::InvalidNumber { line, token } => {
                write!(f, "invalid grade on line {line}: {token:?}")
            }
            GradesParseError::InvalidJson(reason) => write!(f, "invalid grade list: {reason}"),
        }
    }
}

impl std::error::Error for GradesParseError {}

/// Parses a grade list.
///
/// Plain text takes numbers separated by commas, whitespace or newlines, with
/// `#` comments to end of line. Text starting with `[` is read as a JSON array
/// of numbers. No numbers at all is an empty list, not an error.
pub fn parse_grades(text: &str) -> Result<Vec<f64>, GradesParseError> {
    if text.trim_start().starts_with('[') {
        return parse_json_grades(text);
    }

    let mut grades = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let content = match raw.find('#') {
            Some(at) => &raw[..at],
            None => raw,
        };
        for token in content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = parse_grade(token).ok_or_else(|| GradesParseError::InvalidNumber {
                line: index + 1,
                token: token.to_string(),
            })?;
            grades.push(value);
        }
    }
    Ok(grades)
}

/// Parses grades given as separate arguments, e.g. from a command line.
pub fn parse_grade_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<f64>, GradesParseError> {
    let mut grades = Vec::with_capacity(args.len());
    for arg in args {
        grades.extend(parse_grades(arg.as_ref())?);
    }
    Ok(grades)
}

fn parse_grade(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_json_grades(text: &str) -> Result<Vec<f64>, GradesParseError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| GradesParseError::InvalidJson(e.to_string()))?;
    let items = value
        .as_array()
        .ok_or_else(|| GradesParseError::InvalidJson("expected an array".to_string()))?;

    let mut grades = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let v = item
            .as_f64()
            .ok_or_else(|| GradesParseError::InvalidJson(format!("element {i} is not a number")))?;
        grades.push(v);
    }
    Ok(grades)
}

#[cfg(test)]
mod tests {
    use super::{GradesParseError, parse_grade_args, parse_grades};
    use pretty_assertions::assert_eq;

    #[test]
    fn mixed_separators() {
        let g = parse_grades("85, 90 78\n92,88\n").unwrap();
        assert_eq!(g, vec![85.0, 90.0, 78.0, 92.0, 88.0]);
    }

    #[test]
    fn comments_and_blank_lines() {
        let text = "# midterm\n\n70   # alice\n90.5\n";
        assert_eq!(parse_grades(text).unwrap(), vec![70.0, 90.5]);
    }

    #[test]
    fn no_numbers_is_empty() {
        assert_eq!(parse_grades("").unwrap(), Vec::<f64>::new());
        assert_eq!(parse_grades("# nothing yet\n").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn bad_token_reports_line() {
        let err = parse_grades("80\n90, A+\n").unwrap_err();
        assert_eq!(
            err,
            GradesParseError::InvalidNumber {
                line: 2,
                token: "A+".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid grade on line 2: \"A+\"");
    }

    #[test]
    fn rejects_non_finite() {
        assert!(parse_grades("NaN").is_err());
        assert!(parse_grades("inf").is_err());
    }

    #[test]
    fn json_array() {
        assert_eq!(parse_grades(" [0, 50, 100.5]").unwrap(), vec![0.0, 50.0, 100.5]);
        assert_eq!(parse_grades("[]").unwrap(), Vec::<f64>::new());
        assert!(matches!(
            parse_grades("[1, \"two\"]"),
            Err(GradesParseError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_grades("[1, 2"),
            Err(GradesParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn argument_list() {
        assert_eq!(
            parse_grade_args(&["85", "90,78"]).unwrap(),
            vec![85.0, 90.0, 78.0]
        );
        assert!(parse_grade_args(&["85", "x"]).is_err());
    }
}
