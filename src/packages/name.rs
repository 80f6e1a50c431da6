// src/packages/name.rs

//! Package filename grammar
//!
//! A package file is named `<name>-<version>-<release>-<arch>.pkg.tar.<comp>`,
//! for example `pacman-3.5.3-1-i686.pkg.tar.xz`. The version may not contain
//! `-`, so the name is the longest prefix that leaves a valid suffix.

use crate::error::Result;
use regex::Regex;

/// Compiled package filename grammar
#[derive(Debug, Clone)]
pub struct PackageGrammar {
    /// Matches a bare file name or a path, capturing the package name
    package: Regex,
    /// Matches a bare file name only, anchored at its start
    file_name: Regex,
}

impl PackageGrammar {
    /// A package name: alphabetic start, then alphanumerics, `-` and `_`
    pub const NAME: &'static str = "[a-zA-Z][a-zA-Z0-9_-]*";

    /// Everything after the package name
    pub const SUFFIX: &'static str =
        r"-[0-9][^-/]*-[0-9]+(?:\.[0-9]+)?-(?:any|i686|x86_64)\.pkg\.tar\.(?:gz|bz2|xz)$";

    /// Compile the grammar
    ///
    /// Only fails if the grammar constants themselves are malformed.
    pub fn new() -> Result<Self> {
        let package = Regex::new(&format!("^(?:.*/)?({}){}", Self::NAME, Self::SUFFIX))?;
        let file_name = Regex::new(&format!("^{}{}", Self::NAME, Self::SUFFIX))?;
        Ok(Self { package, file_name })
    }

    /// Extract the package name from a file name or path
    ///
    /// Returns `None` for files that are not package files; that is the
    /// normal outcome for unrelated files and not an error.
    pub fn extract_name(&self, filename: &str) -> Option<String> {
        self.package
            .captures(filename)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Whether a bare file name (no directory) is a package file
    pub fn is_package_file(&self, file_name: &str) -> bool {
        self.file_name.is_match(file_name)
    }

    /// Regex matching any package file name
    pub fn file_name_regex(&self) -> &Regex {
        &self.file_name
    }

    /// Build a regex matching the package files of any of the given names
    ///
    /// Names are matched literally.
    pub fn for_names<S: AsRef<str>>(names: &[S]) -> Result<Regex> {
        let alternation = names
            .iter()
            .map(|name| regex::escape(name.as_ref()))
            .collect::<Vec<_>>()
            .join("|");

        Ok(Regex::new(&format!("^(?:{}){}", alternation, Self::SUFFIX))?)
    }

    /// Build a regex matching the package files of one name
    pub fn for_name(name: &str) -> Result<Regex> {
        Self::for_names(&[name])
    }
}

/// Extract the package name from a file name or path
///
/// `Ok(Some(name))` on a match, `Ok(None)` if the file is not a package
/// file, `Err` only if the grammar could not be compiled.
pub fn extract_name(filename: &str) -> Result<Option<String>> {
    Ok(PackageGrammar::new()?.extract_name(filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grammar() -> PackageGrammar {
        PackageGrammar::new().unwrap()
    }

    #[test]
    fn test_extract_simple_name() {
        let g = grammar();
        assert_eq!(g.extract_name("foo-1.0-1-x86_64.pkg.tar.xz"), Some("foo".to_string()));
        assert_eq!(g.extract_name("pacman-3.5.3-1-i686.pkg.tar.gz"), Some("pacman".to_string()));
        assert_eq!(g.extract_name("bar-2.0-3-any.pkg.tar.bz2"), Some("bar".to_string()));
    }

    #[test]
    fn test_extract_name_with_hyphens_and_digits() {
        let g = grammar();
        assert_eq!(
            g.extract_name("lib32-foo-bar-1.2.3-1-x86_64.pkg.tar.xz"),
            Some("lib32-foo-bar".to_string())
        );
        assert_eq!(
            g.extract_name("python_thing-2fa-0.9-2-any.pkg.tar.xz"),
            Some("python_thing-2fa".to_string())
        );
    }

    #[test]
    fn test_extract_name_from_path() {
        let g = grammar();
        assert_eq!(
            g.extract_name("/srv/repo/foo-1.0-1-x86_64.pkg.tar.xz"),
            Some("foo".to_string())
        );
        assert_eq!(g.extract_name("./foo-1.0-1-any.pkg.tar.gz"), Some("foo".to_string()));
    }

    #[test]
    fn test_extract_name_epoch_and_point_release() {
        let g = grammar();
        assert_eq!(g.extract_name("foo-1:2.0-1.1-any.pkg.tar.xz"), Some("foo".to_string()));
    }

    #[test]
    fn test_no_match_for_non_packages() {
        let g = grammar();
        assert_eq!(g.extract_name("custom.db.tar.gz"), None);
        assert_eq!(g.extract_name("foo-1.0-1-x86_64.pkg.tar.zst"), None);
        assert_eq!(g.extract_name("foo-1.0-1-armv7h.pkg.tar.xz"), None);
        assert_eq!(g.extract_name("foo-1.0-x86_64.pkg.tar.xz"), None);
        assert_eq!(g.extract_name("foo-1.0-1-x86_64.pkg.tar.xz.sig"), None);
        assert_eq!(g.extract_name("1foo-1.0-1-any.pkg.tar.xz"), None);
        assert_eq!(g.extract_name("README"), None);
    }

    #[test]
    fn test_is_package_file_requires_bare_name() {
        let g = grammar();
        assert!(g.is_package_file("foo-1.0-1-x86_64.pkg.tar.xz"));
        assert!(!g.is_package_file("dir/foo-1.0-1-x86_64.pkg.tar.xz"));
        assert!(!g.is_package_file("foo.db.tar.gz"));
    }

    #[test]
    fn test_for_name_does_not_match_longer_names() {
        let re = PackageGrammar::for_name("foo").unwrap();
        assert!(re.is_match("foo-1.0-1-x86_64.pkg.tar.xz"));
        assert!(!re.is_match("foo-bar-1.0-1-x86_64.pkg.tar.xz"));
        assert!(!re.is_match("foo-2fa-1.0-1-x86_64.pkg.tar.xz"));
        assert!(!re.is_match("libfoo-1.0-1-x86_64.pkg.tar.xz"));
    }

    #[test]
    fn test_for_names_alternation() {
        let re = PackageGrammar::for_names(&["foo", "bar"]).unwrap();
        assert!(re.is_match("foo-1.0-1-any.pkg.tar.xz"));
        assert!(re.is_match("bar-0.1-2-i686.pkg.tar.gz"));
        assert!(!re.is_match("baz-0.1-2-i686.pkg.tar.gz"));
    }

    #[test]
    fn test_for_names_escapes_metacharacters() {
        let re = PackageGrammar::for_name("f.o").unwrap();
        assert!(!re.is_match("foo-1.0-1-any.pkg.tar.xz"));
    }

    #[test]
    fn test_extract_name_function() {
        assert_eq!(
            extract_name("foo-1.0-1-any.pkg.tar.xz").unwrap(),
            Some("foo".to_string())
        );
        assert_eq!(extract_name("foo.txt").unwrap(), None);
    }
}
