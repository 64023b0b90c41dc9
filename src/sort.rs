//! Natural (numeric-aware) sort ordering for sample names.

use std::cmp::Ordering;

/// One segment of a natural sort key: a run of digits compared by value,
/// or a run of non-digits compared lexicographically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NaturalSegment {
    Number(u64),
    Text(String),
}

impl Ord for NaturalSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        use NaturalSegment::*;
        match (self, other) {
            (Number(a), Number(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            // digits sort before letters, as in ASCII
            (Number(_), Text(_)) => Ordering::Less,
            (Text(_), Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for NaturalSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Key function for natural sorting of strings.
///
/// Natural sorting treats multi-digit integers as a single value to be
/// ordered numerically. This results in orderings like
/// `["s1", "s2", "s10"]` instead of the strictly ASCIIbetical
/// `["s1", "s10", "s2"]`.
///
/// A digit run too long for `u64` falls back to a text segment rather
/// than overflowing.
pub fn natural_sort_key(input: &str) -> Vec<NaturalSegment> {
    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut in_digits = false;

    let flush = |buffer: &mut String, in_digits: bool, segments: &mut Vec<NaturalSegment>| {
        if buffer.is_empty() {
            return;
        }
        let segment = if in_digits {
            match buffer.parse::<u64>() {
                Ok(value) => NaturalSegment::Number(value),
                Err(_) => NaturalSegment::Text(buffer.clone()),
            }
        } else {
            NaturalSegment::Text(buffer.clone())
        };
        segments.push(segment);
        buffer.clear();
    };

    for c in input.chars() {
        if c.is_ascii_digit() != in_digits {
            flush(&mut buffer, in_digits, &mut segments);
            in_digits = c.is_ascii_digit();
        }
        buffer.push(c);
    }
    flush(&mut buffer, in_digits, &mut segments);
    segments
}

#[cfg(test)]
mod tests {
    use super::natural_sort_key;
    use super::NaturalSegment::*;

    #[test]
    fn test_key_segments() {
        assert_eq!(
            natural_sort_key("s10b"),
            vec![Text("s".to_string()), Number(10), Text("b".to_string())]
        );
        assert_eq!(natural_sort_key("42"), vec![Number(42)]);
        assert_eq!(natural_sort_key(""), Vec::new());
    }

    #[test]
    fn test_natural_ordering() {
        let mut names = vec!["s10", "s2", "s1"];
        names.sort_by_key(|name| natural_sort_key(name));
        assert_eq!(names, vec!["s1", "s2", "s10"]);
    }

    #[test]
    fn test_mixed_prefixes() {
        let mut names = vec!["b1", "a10", "a2", "a", "10"];
        names.sort_by_key(|name| natural_sort_key(name));
        assert_eq!(names, vec!["10", "a", "a2", "a10", "b1"]);
    }

    #[test]
    fn test_leading_zeros_compare_by_value() {
        let mut names = vec!["s010", "s2"];
        names.sort_by_key(|name| natural_sort_key(name));
        assert_eq!(names, vec!["s2", "s010"]);
    }
}
