//! Placeholder scanner.
//!
//! Splits a source string into literal ranges and `{{name}}` placeholders in a
//! single left-to-right pass. A `}}` with no matching open marker is literal text.

use super::types::{MalformedReason, Segment, TemplateError, TemplateResult};

pub(crate) const OPEN_MARKER: &str = "{{";
pub(crate) const CLOSE_MARKER: &str = "}}";

pub(crate) fn parse(source: &str) -> TemplateResult<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some(found) = source[cursor..].find(OPEN_MARKER) {
        let open = cursor + found;
        if open > cursor {
            segments.push(Segment::Literal(cursor..open));
        }

        let inner_start = open + OPEN_MARKER.len();
        let Some(close) = source[inner_start..].find(CLOSE_MARKER) else {
            return Err(TemplateError::Malformed {
                offset: open,
                reason: MalformedReason::Unterminated,
            });
        };
        let inner_end = inner_start + close;

        let name = parse_name(&source[inner_start..inner_end], open)?;
        segments.push(Segment::Placeholder(name.to_string()));
        cursor = inner_end + CLOSE_MARKER.len();
    }

    if cursor < source.len() {
        segments.push(Segment::Literal(cursor..source.len()));
    }

    Ok(segments)
}

fn parse_name(inner: &str, offset: usize) -> TemplateResult<&str> {
    let name = inner.trim();

    if name.is_empty() {
        return Err(TemplateError::Malformed {
            offset,
            reason: MalformedReason::EmptyName,
        });
    }

    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(TemplateError::Malformed {
            offset,
            reason: MalformedReason::InvalidName(name.to_string()),
        });
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(name: &str) -> Segment {
        Segment::Placeholder(name.to_string())
    }

    #[test]
    fn test_parse_literal_only() {
        assert_eq!(parse("plain text").unwrap(), vec![Segment::Literal(0..10)]);
    }

    #[test]
    fn test_parse_empty_source() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_mixed() {
        let segments = parse("route for {{a}}!").unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::Literal(0..10),
                placeholder("a"),
                Segment::Literal(15..16),
            ]
        );
    }

    #[test]
    fn test_parse_adjacent_placeholders() {
        let segments = parse("{{a}}{{b_2}}").unwrap();
        assert_eq!(segments, vec![placeholder("a"), placeholder("b_2")]);
    }

    #[test]
    fn test_parse_trims_padding() {
        assert_eq!(parse("{{ a }}").unwrap(), vec![placeholder("a")]);
    }

    #[test]
    fn test_parse_stray_close_is_literal() {
        assert_eq!(parse("a }} b").unwrap(), vec![Segment::Literal(0..6)]);
    }

    #[test]
    fn test_parse_unterminated() {
        let err = parse("ok {{unterminated").unwrap_err();
        assert_eq!(
            err,
            TemplateError::Malformed {
                offset: 3,
                reason: MalformedReason::Unterminated,
            }
        );
    }

    #[test]
    fn test_parse_empty_name() {
        let err = parse("{{  }}").unwrap_err();
        assert_eq!(
            err,
            TemplateError::Malformed {
                offset: 0,
                reason: MalformedReason::EmptyName,
            }
        );
    }

    #[test]
    fn test_parse_rejects_expressions() {
        let err = parse("x {{ a + 1 }}").unwrap_err();
        assert_eq!(
            err,
            TemplateError::Malformed {
                offset: 2,
                reason: MalformedReason::InvalidName("a + 1".to_string()),
            }
        );
    }

    #[test]
    fn test_parse_rejects_nested_markers() {
        let err = parse("{{ {{a}} }}").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::Malformed {
                offset: 0,
                reason: MalformedReason::InvalidName(_),
            }
        ));
    }
}
