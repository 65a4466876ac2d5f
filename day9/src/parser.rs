use nom::{character::complete::satisfy, combinator::map, multi::many0, IResult};

use crate::error::Error;

fn digit(input: &str) -> IResult<&str, u8> {
    map(satisfy(|c: char| c.is_ascii_digit()), |c: char| c as u8 - b'0')(input)
}

fn digits(input: &str) -> IResult<&str, Vec<u8>> {
    many0(digit)(input)
}

/// Parses one heightmap row into its elevations.
///
/// `row` is only used to locate the offending character in the error.
pub fn parse_row(row: usize, text: &str) -> Result<Vec<u8>, Error> {
    let (remainder, heights) = match digits(text) {
        Ok(parsed) => parsed,
        Err(_) => (text, Vec::new()),
    };

    match remainder.chars().next() {
        Some(found) => Err(Error::InvalidDigit {
            row,
            col: text.len() - remainder.len(),
            found,
        }),
        None => Ok(heights),
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;

    use super::parse_row;

    #[test]
    fn test_parse_row() {
        assert_eq!(
            parse_row(0, "2199943210").unwrap(),
            vec![2, 1, 9, 9, 9, 4, 3, 2, 1, 0]
        );
        assert_eq!(parse_row(3, "").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_row_rejects_non_digits() {
        assert_eq!(
            parse_row(2, "98x67").unwrap_err(),
            Error::InvalidDigit {
                row: 2,
                col: 2,
                found: 'x',
            }
        );
        assert_eq!(
            parse_row(0, " 123").unwrap_err(),
            Error::InvalidDigit {
                row: 0,
                col: 0,
                found: ' ',
            }
        );
        assert_eq!(
            parse_row(1, "12-").unwrap_err(),
            Error::InvalidDigit {
                row: 1,
                col: 2,
                found: '-',
            }
        );
    }
}
