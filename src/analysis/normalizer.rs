/// Canonicalizes free text for skill comparison: lowercase, whitespace
/// collapsed, everything outside `{a-z, 0-9, +, #, ., space}` stripped.
/// The retained punctuation keeps tokens like "c++" and "c#" intact.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for ch in lowered.chars() {
        match ch {
            'a'..='z' | '0'..='9' | '+' | '#' | '.' => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(ch);
            }
            // Newlines, whitespace, and disallowed punctuation all become a
            // single separating space once the next kept character arrives.
            _ => pending_space = true,
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses() {
        assert_eq!(
            normalize("Senior  Rust\nEngineer"),
            "senior rust engineer"
        );
    }

    #[test]
    fn test_keeps_skill_punctuation() {
        assert_eq!(normalize("C++ & C# (v2.0)!"), "c++ c# v2.0");
    }

    #[test]
    fn test_strips_leading_and_trailing() {
        assert_eq!(normalize("  python  "), "python");
        assert_eq!(normalize("\n\tpython\r\n"), "python");
    }

    #[test]
    fn test_empty_and_all_junk() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("@!$%^&*"), "");
        assert_eq!(normalize(" \n \t "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "Python, React & Docker",
            "C++ / C# developer\nwith 5+ years",
            "  already normalized text  ",
            "ümlaut Ünïcode — dash",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_character_set_closure() {
        let samples = [
            "Machine Learning (NLP) — 3 yrs!",
            "c++17, C#, .NET\r\nKubernetes",
            "tabs\tand\u{a0}odd\u{2028}spaces",
        ];
        for s in samples {
            let n = normalize(s);
            assert!(
                n.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '+' | '#' | '.' | ' ')),
                "stray character in {:?}",
                n
            );
            assert!(!n.contains("  "), "double space in {:?}", n);
            assert_eq!(n.trim(), n, "untrimmed output {:?}", n);
        }
    }
}
