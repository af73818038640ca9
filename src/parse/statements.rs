use std::iter::FusedIterator;

pub const TERMINATOR: char = ';';

/// Iterator over the `;`-separated statements of one input line.
///
/// Runs of terminators are skipped, so `";;a;;b;"` yields `"a"` and `"b"`.
/// Only the terminators themselves are consumed: surrounding whitespace stays
/// with the statement.
#[derive(Debug, Clone)]
pub struct Statements<'a> {
    rest: &'a str,
}

impl<'a> Statements<'a> {
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Statements<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.trim_start_matches(TERMINATOR);
        if start.is_empty() {
            self.rest = start;
            return None;
        }

        match start.find(TERMINATOR) {
            Some(end) => {
                self.rest = &start[end + TERMINATOR.len_utf8()..];
                Some(&start[..end])
            }
            None => {
                self.rest = "";
                Some(start)
            }
        }
    }
}

impl FusedIterator for Statements<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &str) -> Vec<&str> {
        Statements::new(line).collect()
    }

    #[test]
    fn test_split_keeps_order_and_leading_space() {
        assert_eq!(split("pwd; cd /tmp; pwd"), vec!["pwd", " cd /tmp", " pwd"]);
    }

    #[test]
    fn test_split_skips_terminator_runs() {
        assert_eq!(split(";;ls;;;pwd;"), vec!["ls", "pwd"]);
        assert!(split(";;;").is_empty());
        assert!(split("").is_empty());
    }

    #[test]
    fn test_whitespace_statement_is_kept() {
        assert_eq!(split("ls; ;pwd"), vec!["ls", " ", "pwd"]);
    }

    #[test]
    fn test_single_statement() {
        assert_eq!(split("ls -la\n"), vec!["ls -la\n"]);
    }

    #[test]
    fn test_restartable_by_construction() {
        let line = "a;b";
        let mut first = Statements::new(line);
        assert_eq!(first.next(), Some("a"));

        let second: Vec<_> = Statements::new(line).collect();
        assert_eq!(second, vec!["a", "b"]);

        assert_eq!(first.next(), Some("b"));
        assert_eq!(first.next(), None);
        assert_eq!(first.next(), None);
    }
}
