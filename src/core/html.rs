// src/core/html.rs

/// Remove HTML tags, keeping the text between them.
/// Two-state automaton: `<` enters a tag (stop copying), `>` leaves it.
/// Entities are left alone; callers decide what to do with them.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_keeps_text_between() {
        assert_eq!(strip_tags("a<b>c</b>d"), "acd");
        assert_eq!(strip_tags("<sup><font size=\"-1\">-1</font></sup>x"), "-1x");
    }

    #[test]
    fn unbalanced_open_tag_drops_rest() {
        assert_eq!(strip_tags("abc<never closed"), "abc");
    }

    #[test]
    fn stray_close_bracket_is_dropped() {
        // '>' outside a tag flips back to copying but is not itself copied
        assert_eq!(strip_tags("a>b"), "ab");
    }

    #[test]
    fn entities_survive() {
        assert_eq!(strip_tags("a&nbsp;<i>b</i>"), "a&nbsp;b");
    }
}
