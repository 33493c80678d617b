//! Collected run parameters and the values derived from them

use convert_case::{Case, Casing};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Copyright holder offered when the operator just hits enter
pub const DEFAULT_COPYRIGHT_HOLDER: &str = "woda - Software Development GmbH";

/// Template tree selected by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModuleType {
    /// WordPress integration module (default)
    #[default]
    Wordpress,
    /// Framework-agnostic core module
    Core,
}

impl ModuleType {
    /// Folder under `templates/` holding this type's files
    #[must_use]
    pub const fn folder(self) -> &'static str {
        match self {
            Self::Wordpress => "wordpress",
            Self::Core => "core",
        }
    }

    /// Prefix prepended to the module name to form the package name
    #[must_use]
    pub const fn package_prefix(self) -> &'static str {
        match self {
            Self::Wordpress => "wp-",
            Self::Core => "",
        }
    }

    /// Namespace prefix shown in the namespace prompt
    #[must_use]
    pub const fn namespace_prefix(self) -> &'static str {
        match self {
            Self::Wordpress => "Kaiseki\\WordPress\\",
            Self::Core => "Kaiseki\\",
        }
    }
}

/// Validated answers for one bootstrap run
///
/// Built once by the collector, read-only afterwards. The pipeline receives
/// this by reference instead of sharing mutable state across steps.
#[derive(Debug, Clone)]
pub struct Answers {
    /// Selected template tree
    pub module_type: ModuleType,
    /// Package-name token without the type prefix
    pub module_name: String,
    /// Top-level key the module's configuration nests under
    pub config_base_key: String,
    /// PascalCase namespace segment
    pub namespace: String,
    /// Repository the module will live in
    pub repo_url: String,
    /// Name placed in the license header
    pub copyright_holder: String,
}

impl Answers {
    /// Full package name, type prefix included
    #[must_use]
    pub fn package_name(&self) -> String {
        format!("{}{}", self.module_type.package_prefix(), self.module_name)
    }

    /// Placeholder tokens and their replacement values, in application order
    ///
    /// The order is part of the contract: replacements are applied first to
    /// last, so a value containing a later token is still resolved by the
    /// later pass.
    #[must_use]
    pub fn placeholder_mapping(&self) -> Vec<(String, String)> {
        vec![
            (token("package_name_dash"), self.package_name()),
            (token("config_base_key"), self.config_base_key.clone()),
            (token("namespace"), self.namespace.clone()),
            (
                token("namespace_escaped"),
                self.namespace.replace('\\', "\\\\"),
            ),
            (token("repo_url"), self.repo_url.clone()),
            (token("copyright_holder"), self.copyright_holder.clone()),
        ]
    }
}

fn token(key: &str) -> String {
    format!("%{key}%")
}

static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9](([_.]?|-{0,2})[a-z0-9]+)*$").expect("package name pattern is valid")
});

static NAMESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("namespace pattern is valid"));

/// Validate a package-name token: lowercase alphanumeric segments joined by
/// single separators (`_`, `.`, `-` or `--`)
#[must_use]
pub fn is_valid_package_name(name: &str) -> bool {
    PACKAGE_NAME.is_match(name)
}

/// Validate a namespace: a single PascalCase identifier
#[must_use]
pub fn is_valid_namespace(name: &str) -> bool {
    NAMESPACE.is_match(name)
}

/// Validate a repository URL: must parse as a well-formed URL
#[must_use]
pub fn is_valid_repo_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

/// Default config base key: the module name with separators as underscores
#[must_use]
pub fn default_config_base_key(module_name: &str) -> String {
    module_name.to_case(Case::Snake)
}

/// Default namespace: the module name in PascalCase
#[must_use]
pub fn default_namespace(module_name: &str) -> String {
    module_name.to_case(Case::Pascal)
}

/// Default repository URL for a package under the kaisekidev organisation
#[must_use]
pub fn default_repo_url(package_name: &str) -> String {
    format!("https://github.com/kaisekidev/kaiseki-{package_name}")
}

/// Guess the module name from the working root's directory name, with the
/// conventional checkout prefixes stripped
#[must_use]
pub fn guess_module_name(root: &Path) -> String {
    let basename = root.file_name().and_then(|name| name.to_str()).unwrap_or("");
    let guessed = basename.replace("kaiseki-", "").replace("wp-", "");

    if guessed.is_empty() {
        "module".to_string()
    } else {
        guessed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn answers() -> Answers {
        Answers {
            module_type: ModuleType::Wordpress,
            module_name: "media-library".to_string(),
            config_base_key: "media_library".to_string(),
            namespace: "MediaLibrary".to_string(),
            repo_url: "https://github.com/kaisekidev/kaiseki-wp-media-library".to_string(),
            copyright_holder: DEFAULT_COPYRIGHT_HOLDER.to_string(),
        }
    }

    #[test]
    fn test_valid_package_names() {
        assert!(is_valid_package_name("media-library"));
        assert!(is_valid_package_name("media--library"));
        assert!(is_valid_package_name("media_library"));
        assert!(is_valid_package_name("media.library"));
        assert!(is_valid_package_name("module2"));
        assert!(is_valid_package_name("a"));
    }

    #[test]
    fn test_invalid_package_names() {
        assert!(!is_valid_package_name(""));
        assert!(!is_valid_package_name("MediaLibrary")); // uppercase
        assert!(!is_valid_package_name("-media")); // leading separator
        assert!(!is_valid_package_name("media-")); // trailing separator
        assert!(!is_valid_package_name("media---library")); // triple dash
        assert!(!is_valid_package_name("media__library")); // doubled underscore
        assert!(!is_valid_package_name("media library")); // space
    }

    #[test]
    fn test_valid_namespaces() {
        assert!(is_valid_namespace("MediaLibrary"));
        assert!(is_valid_namespace("Billing"));
        assert!(is_valid_namespace("Feature2"));
    }

    #[test]
    fn test_invalid_namespaces() {
        assert!(!is_valid_namespace(""));
        assert!(!is_valid_namespace("mediaLibrary")); // lowercase start
        assert!(!is_valid_namespace("Media Library")); // space
        assert!(!is_valid_namespace("Media\\Library")); // separator
    }

    #[test]
    fn test_repo_url_validation() {
        assert!(is_valid_repo_url("https://github.com/kaisekidev/kaiseki-wp-media"));
        assert!(is_valid_repo_url("ssh://git@github.com/kaisekidev/repo.git"));
        assert!(!is_valid_repo_url("not a url"));
        assert!(!is_valid_repo_url(""));
    }

    #[test]
    fn test_package_name_uses_type_prefix() {
        let mut a = answers();
        assert_eq!(a.package_name(), "wp-media-library");

        a.module_type = ModuleType::Core;
        assert_eq!(a.package_name(), "media-library");
    }

    #[test]
    fn test_placeholder_mapping_order() {
        let mapping = answers().placeholder_mapping();
        let tokens: Vec<&str> = mapping.iter().map(|(t, _)| t.as_str()).collect();

        assert_eq!(
            tokens,
            vec![
                "%package_name_dash%",
                "%config_base_key%",
                "%namespace%",
                "%namespace_escaped%",
                "%repo_url%",
                "%copyright_holder%",
            ]
        );
    }

    #[test]
    fn test_namespace_escaped_doubles_backslashes() {
        let mut a = answers();
        a.namespace = "WordPress\\Media".to_string();

        let mapping = a.placeholder_mapping();
        let escaped = mapping
            .iter()
            .find(|(t, _)| t == "%namespace_escaped%")
            .map(|(_, v)| v.as_str());

        assert_eq!(escaped, Some("WordPress\\\\Media"));
    }

    #[test]
    fn test_default_config_base_key() {
        assert_eq!(default_config_base_key("media-library"), "media_library");
        assert_eq!(default_config_base_key("feature"), "feature");
    }

    #[test]
    fn test_default_namespace() {
        assert_eq!(default_namespace("media-library"), "MediaLibrary");
        assert_eq!(default_namespace("feature"), "Feature");
    }

    #[test]
    fn test_default_repo_url() {
        assert_eq!(
            default_repo_url("wp-media-library"),
            "https://github.com/kaisekidev/kaiseki-wp-media-library"
        );
    }

    #[test]
    fn test_guess_module_name_strips_prefixes() {
        assert_eq!(
            guess_module_name(&PathBuf::from("/work/kaiseki-wp-media-library")),
            "media-library"
        );
        assert_eq!(
            guess_module_name(&PathBuf::from("/work/kaiseki-billing")),
            "billing"
        );
        assert_eq!(guess_module_name(&PathBuf::from("/work/standalone")), "standalone");
    }

    #[test]
    fn test_guess_module_name_empty_falls_back() {
        assert_eq!(guess_module_name(&PathBuf::from("/")), "module");
    }
}
