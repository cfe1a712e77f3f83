//! Name resolution helpers for code generation
//!
//! Every generated file is parameterized by the canonical forms of a single
//! user-supplied name. This module turns free-form input (`OrderItem`,
//! `order-item`, `order_item`, `order item`) into those forms.

use convert_case::{split, Boundary};
use inflector::Inflector;
use serde::Serialize;

use crate::error::{Result, ScaffoldError};

/// Module names that would make the generated Python invalid
///
/// Python keywords, plus `none`, `true` and `false` whose class names
/// collide with the keyword constants.
pub const RESERVED_NAMES: &[&str] = &[
    "and", "as", "assert", "async", "await", "break", "class", "continue", "def", "del", "elif",
    "else", "except", "false", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "none", "nonlocal", "not", "or", "pass", "raise", "return", "true", "try", "while",
    "with", "yield",
];

/// Resolved identity of a module to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSpec {
    /// Exactly what the user typed
    pub raw_input: String,
    /// Canonical `snake_case` identifier, used as directory name
    pub module_name: String,
    /// Canonical `PascalCase` identifier, used as generated type name
    pub class_name: String,
    /// Plural of `module_name`, used for table names and route prefixes
    pub route_segment: String,
}

impl ModuleSpec {
    /// Resolve a raw name into its canonical forms
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastman_cli_lib::scaffold::ModuleSpec;
    /// let spec = ModuleSpec::resolve("order-item").unwrap();
    /// assert_eq!(spec.module_name, "order_item");
    /// assert_eq!(spec.class_name, "OrderItem");
    /// assert_eq!(spec.route_segment, "order_items");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] if the input has no ASCII letter,
    /// starts with a number, or resolves to one of [`RESERVED_NAMES`].
    pub fn resolve(raw_input: &str) -> Result<Self> {
        let words = TemplateHelpers::split_words(raw_input);

        if !words.iter().any(|w| w.chars().any(|c| c.is_ascii_alphabetic())) {
            return Err(ScaffoldError::invalid_name(
                raw_input,
                "name must contain at least one letter",
            ));
        }

        if words[0].starts_with(|c: char| c.is_ascii_digit()) {
            return Err(ScaffoldError::invalid_name(
                raw_input,
                "name must not start with a number",
            ));
        }

        let module_name = TemplateHelpers::join_snake(&words);
        if RESERVED_NAMES.contains(&module_name.as_str()) {
            return Err(ScaffoldError::invalid_name(
                raw_input,
                "name is a reserved Python keyword",
            ));
        }

        let class_name = TemplateHelpers::join_pascal(&words);
        let route_segment = TemplateHelpers::pluralize(&module_name);

        Ok(Self {
            raw_input: raw_input.to_string(),
            module_name,
            class_name,
            route_segment,
        })
    }
}

/// Naming helpers shared by the resolver and the templates
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Split an identifier into words
    ///
    /// Any non-ASCII-alphanumeric character separates words. Within a run,
    /// `convert_case`'s default boundaries apply: lower→upper, letter↔digit
    /// and acronym tails (`HTTPClient` → `HTTP`, `Client`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastman_cli_lib::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::split_words("OrderItem"), vec!["Order", "Item"]);
    /// assert_eq!(TemplateHelpers::split_words("--order__item "), vec!["order", "item"]);
    /// assert_eq!(TemplateHelpers::split_words("HTTPClient2"), vec!["HTTP", "Client", "2"]);
    /// ```
    #[must_use]
    pub fn split_words(input: &str) -> Vec<String> {
        let cleaned: String = input
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        split(&cleaned, &Boundary::defaults())
            .into_iter()
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Convert string to `snake_case`
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastman_cli_lib::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_snake_case("UserProfile"), "user_profile");
    /// assert_eq!(TemplateHelpers::to_snake_case("HTTPRequest"), "http_request");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        Self::join_snake(&Self::split_words(input))
    }

    /// Convert string to `PascalCase`, keeping acronyms as typed
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastman_cli_lib::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_pascal_case("user_profile"), "UserProfile");
    /// assert_eq!(TemplateHelpers::to_pascal_case("HTTPRequest"), "HTTPRequest");
    /// assert_eq!(TemplateHelpers::to_pascal_case("http_request"), "HttpRequest");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        Self::join_pascal(&Self::split_words(input))
    }

    /// Pluralize a `snake_case` name
    ///
    /// # Examples
    ///
    /// ```
    /// # use fastman_cli_lib::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::pluralize("order"), "orders");
    /// assert_eq!(TemplateHelpers::pluralize("category"), "categories");
    /// assert_eq!(TemplateHelpers::pluralize("order_item"), "order_items");
    /// ```
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        input.to_plural()
    }

    fn join_snake(words: &[String]) -> String {
        words
            .iter()
            .map(|w| w.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("_")
    }

    fn join_pascal(words: &[String]) -> String {
        words.iter().map(|w| Self::capitalize(w)).collect()
    }

    fn capitalize(word: &str) -> String {
        if Self::is_acronym(word) {
            return word.to_string();
        }

        let mut chars = word.chars();
        chars.next().map_or_else(String::new, |first| {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        })
    }

    fn is_acronym(word: &str) -> bool {
        word.len() >= 2 && word.chars().all(|c| c.is_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: &str) -> ModuleSpec {
        ModuleSpec::resolve(input).unwrap()
    }

    #[test]
    fn test_single_word_equivalence() {
        assert_eq!(resolve("Order").module_name, "order");
        assert_eq!(resolve("order").module_name, "order");
        assert_eq!(resolve("Order").class_name, "Order");
        assert_eq!(resolve("order").class_name, "Order");
    }

    #[test]
    fn test_compound_name_equivalence() {
        for input in ["OrderItem", "order-item", "order_item", "order item", "orderItem"] {
            let spec = resolve(input);
            assert_eq!(spec.module_name, "order_item", "input: {input}");
            assert_eq!(spec.class_name, "OrderItem", "input: {input}");
            assert_eq!(spec.raw_input, input);
        }
    }

    #[test]
    fn test_separators_collapse_and_strip() {
        let spec = resolve("__order--item  ");
        assert_eq!(spec.module_name, "order_item");
        assert_eq!(spec.class_name, "OrderItem");
    }

    #[test]
    fn test_digit_boundaries() {
        let spec = resolve("Order2Item");
        assert_eq!(spec.module_name, "order_2_item");
        assert_eq!(spec.class_name, "Order2Item");

        let spec = resolve("item42");
        assert_eq!(spec.module_name, "item_42");
        assert_eq!(spec.class_name, "Item42");
    }

    #[test]
    fn test_acronyms_are_preserved_in_class_name() {
        let spec = resolve("HTTPClient");
        assert_eq!(spec.module_name, "http_client");
        assert_eq!(spec.class_name, "HTTPClient");

        // Once lowered into the module name the acronym is gone
        assert_eq!(resolve(&spec.module_name).class_name, "HttpClient");
    }

    #[test]
    fn test_mixed_case_word_is_collapsed() {
        assert_eq!(resolve("ORDER").module_name, "order");
        assert_eq!(resolve("productITEM").module_name, "product_item");
        assert_eq!(resolve("productITEM").class_name, "ProductITEM");
    }

    #[test]
    fn test_route_segment_is_plural() {
        assert_eq!(resolve("Order").route_segment, "orders");
        assert_eq!(resolve("Category").route_segment, "categories");
        assert_eq!(resolve("OrderItem").route_segment, "order_items");
    }

    #[test]
    fn test_invalid_names() {
        for input in ["", "123", "---", "   ", "_-_ 42"] {
            let err = ModuleSpec::resolve(input).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidName { input: ref echoed, .. } if echoed == input),
                "input should be rejected: {input:?}"
            );
        }
    }

    #[test]
    fn test_leading_number_rejected() {
        let err = ModuleSpec::resolve("3dPrinter").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName { .. }));
    }

    #[test]
    fn test_python_keywords_rejected() {
        for input in ["Return", "import", "GLOBAL", "class", "None", "true", "async"] {
            let err = ModuleSpec::resolve(input).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidName { reason, .. } if reason.contains("keyword")),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_keyword_inside_compound_name_is_allowed() {
        assert_eq!(resolve("ReturnItem").module_name, "return_item");
        assert_eq!(resolve("ClassRoom").class_name, "ClassRoom");
    }

    #[test]
    fn test_split_words_matches_boundaries() {
        assert_eq!(TemplateHelpers::split_words("Order2Item"), vec!["Order", "2", "Item"]);
        assert_eq!(TemplateHelpers::split_words("order\titem"), vec!["order", "item"]);
        assert_eq!(TemplateHelpers::split_words("productITEM"), vec!["product", "ITEM"]);
        assert!(TemplateHelpers::split_words("-_ .").is_empty());
    }

    #[test]
    fn test_non_ascii_is_a_separator() {
        let spec = resolve("order→item");
        assert_eq!(spec.module_name, "order_item");
    }
}
