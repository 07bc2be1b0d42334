//! Host-to-container path translation.
//!
//! A command mapping carries a set of prefix rules:
//!
//! ```yaml
//! paths:
//!   /workspaces: /app
//!   /workspaces/project: /project
//! ```
//!
//! A path is rewritten by the rule with the **longest** source prefix that
//! matches it. Matching is a plain string prefix test, not path-segment aware:
//! `/workspaces2` is rewritten by a `/workspaces` rule.
//!
//! Two distinct prefixes of equal length can never both match the same input,
//! so ties between rules cannot occur. Empty source prefixes never match.

use std::collections::HashMap;

/// Mapping from host path prefix to container path prefix.
pub type PathRules = HashMap<String, String>;

/// Outcome of translating a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The rewritten path, or the input unchanged when nothing matched.
    pub path: String,
    /// Whether a rule matched. Identity rules still report `true`.
    pub matched: bool,
}

impl Translation {
    fn unchanged(path: &str) -> Self {
        Self {
            path: path.to_string(),
            matched: false,
        }
    }
}

/// Translate `path` using the longest matching prefix in `rules`.
pub fn translate_path(rules: &PathRules, path: &str) -> Translation {
    let best = rules
        .iter()
        .filter(|(source, _)| !source.is_empty() && path.starts_with(source.as_str()))
        .max_by_key(|(source, _)| source.len());

    match best {
        Some((source, target)) => Translation {
            path: format!("{target}{}", &path[source.len()..]),
            matched: true,
        },
        None => Translation::unchanged(path),
    }
}

/// Translate every argument independently, producing a new vector.
///
/// Arguments that match no rule are copied through untouched.
pub fn translate_args(rules: &PathRules, args: &[String]) -> Vec<String> {
    if rules.is_empty() {
        return args.to_vec();
    }
    args.iter()
        .map(|arg| translate_path(rules, arg).path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(pairs: &[(&str, &str)]) -> PathRules {
        pairs
            .iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn test_longest_prefix_wins() {
        let rules = rules(&[("/workspaces", "/app"), ("/workspaces/project", "/project")]);

        let t = translate_path(&rules, "/workspaces/project/src");
        assert_eq!(t.path, "/project/src");
        assert!(t.matched);

        let t = translate_path(&rules, "/workspaces/other/src");
        assert_eq!(t.path, "/app/other/src");
        assert!(t.matched);
    }

    #[test]
    fn test_identity_rule_reports_match() {
        let rules = rules(&[("/workspace", "/workspace")]);
        let t = translate_path(&rules, "/workspace/subpkg");
        assert_eq!(t.path, "/workspace/subpkg");
        assert!(t.matched);
    }

    #[test]
    fn test_no_match_returns_input() {
        let rules = rules(&[("/workspaces", "/app")]);
        let t = translate_path(&rules, "/home/user/file.txt");
        assert_eq!(t.path, "/home/user/file.txt");
        assert!(!t.matched);
    }

    #[test]
    fn test_empty_rules_never_match() {
        let t = translate_path(&PathRules::new(), "/workspaces/project");
        assert_eq!(t, Translation::unchanged("/workspaces/project"));
    }

    #[test]
    fn test_prefix_is_not_segment_aware() {
        let rules = rules(&[("/workspaces", "/app")]);
        let t = translate_path(&rules, "/workspaces2/foo");
        assert_eq!(t.path, "/app2/foo");
        assert!(t.matched);
    }

    #[test]
    fn test_exact_prefix_match() {
        let rules = rules(&[("/workspaces/project", "/var/www/html")]);
        let t = translate_path(&rules, "/workspaces/project");
        assert_eq!(t.path, "/var/www/html");
        assert!(t.matched);
    }

    #[test]
    fn test_empty_source_prefix_ignored() {
        let rules = rules(&[("", "/app")]);
        let t = translate_path(&rules, "/anything");
        assert!(!t.matched);
        assert_eq!(t.path, "/anything");
    }

    #[test]
    fn test_translate_args_mixed() {
        let rules = rules(&[("/workspaces/project", "/var/www/html")]);
        let args = vec![
            "install".to_string(),
            "--working-dir=/tmp".to_string(),
            "/workspaces/project/composer.json".to_string(),
        ];

        let out = translate_args(&rules, &args);
        assert_eq!(
            out,
            vec![
                "install".to_string(),
                "--working-dir=/tmp".to_string(),
                "/var/www/html/composer.json".to_string(),
            ]
        );
        // Input is left intact.
        assert_eq!(args[2], "/workspaces/project/composer.json");
    }

    #[test]
    fn test_translate_args_without_rules() {
        let args = vec!["test".to_string(), "/workspaces/x".to_string()];
        assert_eq!(translate_args(&PathRules::new(), &args), args);
    }
}
