//! Row template interpolation
//!
//! Table rows are produced from small text templates with `${name}`
//! placeholders. Substitution values come from an explicit name→value map;
//! the template text is never evaluated as code. A placeholder with no
//! matching value renders as the literal `undefined`, which is what the
//! dashboard shows when fewer switches exist than the template expects.

use std::collections::HashMap;

/// Rendered text for a placeholder that has no substitution value.
pub const UNDEFINED: &str = "undefined";

/// Substitute `${name}` placeholders in `template` from `values`.
///
/// Anything that is not a well-formed placeholder passes through
/// unchanged, including a lone `$` and an unterminated `${`.
pub fn interpolate(template: &str, values: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                out.push_str(values.get(name).copied().unwrap_or(UNDEFINED));
                rest = &after[end + 1..];
            }
            None => {
                // Unterminated placeholder: emit the tail verbatim.
                out.push_str(&rest[start..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<'a>(pairs: &[(&'a str, &'a str)]) -> HashMap<&'a str, &'a str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_basic_substitution() {
        let vals = values(&[("switch_name", "nz-kiwi-t2-sw3")]);
        assert_eq!(
            interpolate("| ${switch_name} | access |", &vals),
            "| nz-kiwi-t2-sw3 | access |"
        );
    }

    #[test]
    fn test_two_placeholders() {
        let vals = values(&[("switch_left", "t1-a"), ("switch_right", "t1-b")]);
        assert_eq!(
            interpolate("${switch_left} / ${switch_right}", &vals),
            "t1-a / t1-b"
        );
    }

    #[test]
    fn test_missing_value_renders_undefined() {
        let vals = values(&[("switch_left", "t1-a")]);
        assert_eq!(
            interpolate("${switch_left} / ${switch_right}", &vals),
            "t1-a / undefined"
        );
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(interpolate("plain row", &HashMap::new()), "plain row");
    }

    #[test]
    fn test_lone_dollar_passes_through() {
        let vals = values(&[("a", "x")]);
        assert_eq!(interpolate("cost $5 and ${a}", &vals), "cost $5 and x");
    }

    #[test]
    fn test_unterminated_placeholder_is_literal() {
        assert_eq!(interpolate("broken ${tail", &HashMap::new()), "broken ${tail");
    }

    #[test]
    fn test_value_containing_placeholder_is_not_reexpanded() {
        let vals = values(&[("a", "${b}"), ("b", "nope")]);
        assert_eq!(interpolate("${a}", &vals), "${b}");
    }

    #[test]
    fn test_empty_name() {
        // "${}" has an empty name, which never has a value.
        assert_eq!(interpolate("${}", &HashMap::new()), "undefined");
    }
}
