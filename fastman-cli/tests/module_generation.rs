//! Integration tests for module generation

use std::collections::BTreeSet;
use std::fs;

use fastman_cli_lib::commands::ListAppsCommand;
use fastman_cli_lib::scaffold::{
    ModuleRegistry, ModuleSpec, ModuleWriter, TemplateHelpers, RESERVED_NAMES,
};
use fastman_cli_lib::templates::{self, EXPECTED_FILE_COUNT};
use fastman_cli_lib::ScaffoldError;
use proptest::prelude::*;
use tempfile::TempDir;

/// Generate a module into a fresh `app/` directory and return its root
fn generate(name: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let base = temp_dir.path().join("app");
    let spec = ModuleSpec::resolve(name).unwrap();
    let result = ModuleWriter::new(&base).write(&spec).unwrap();
    (temp_dir, result.target_directory)
}

/// Check that (), [] and {} are balanced, ignoring string contents
fn brackets_balanced(source: &str) -> bool {
    let mut stack = Vec::new();
    for c in source.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' => {
                if stack.pop() != Some('(') {
                    return false;
                }
            }
            ']' => {
                if stack.pop() != Some('[') {
                    return false;
                }
            }
            '}' => {
                if stack.pop() != Some('{') {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
    "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if",
    "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try",
    "while", "with", "yield",
];

fn leading_identifier(line: &str) -> &str {
    let end = line
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(line.len());
    &line[..end]
}

/// Names bound by assignments, annotations, `def` and `class` lines
fn bound_names(source: &str) -> Vec<&str> {
    let mut names = Vec::new();

    for line in source.lines().map(str::trim) {
        let ident = leading_identifier(line);
        let rest = &line[ident.len()..];
        if !ident.is_empty() && (rest.starts_with(" = ") || rest.starts_with(": ")) {
            names.push(ident);
            continue;
        }
        for prefix in ["async def ", "def ", "class "] {
            if let Some(rest) = line.strip_prefix(prefix) {
                names.push(leading_identifier(rest));
                break;
            }
        }
    }

    names
}

/// Bound names that Python would reject
fn invalid_bindings(source: &str) -> Vec<&str> {
    bound_names(source)
        .into_iter()
        .filter(|name| {
            name.is_empty()
                || name.starts_with(|c: char| c.is_ascii_digit())
                || PYTHON_KEYWORDS.contains(name)
        })
        .collect()
}

/// `(file, name)` pairs from the `from .<file> import ...` lines of a package manifest
fn imported_names(init: &str) -> Vec<(String, String)> {
    let mut imports = Vec::new();
    let mut current: Option<String> = None;

    for line in init.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("from .") {
            let (file, names) = rest.split_once(" import ").unwrap();
            let names = names.trim_start_matches('(').trim_end_matches(')');
            for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                imports.push((file.to_string(), name.to_string()));
            }
            current = line.ends_with('(').then(|| file.to_string());
        } else if let Some(file) = &current {
            if line == ")" {
                current = None;
                continue;
            }
            for name in line.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                imports.push((file.clone(), name.to_string()));
            }
        }
    }

    imports
}

#[test]
fn test_startapp_then_listapps() {
    let (temp_dir, module_dir) = generate("Order");
    let base = temp_dir.path().join("app");

    assert_eq!(module_dir, base.join("order"));
    let written: BTreeSet<_> = fs::read_dir(&module_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    let expected: BTreeSet<_> = templates::file_names().map(str::to_string).collect();
    assert_eq!(written, expected);
    assert_eq!(written.len(), EXPECTED_FILE_COUNT);

    let modules = ListAppsCommand::new(base).run();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].module_name, "order");
    assert_eq!(modules[0].file_count, EXPECTED_FILE_COUNT);
    assert!(modules[0].is_complete);
    assert!(modules[0].missing_files.is_empty());
}

#[test]
fn test_equivalent_names_collide() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ModuleWriter::new(temp_dir.path());

    writer
        .write(&ModuleSpec::resolve("OrderItem").unwrap())
        .unwrap();
    for alias in ["order-item", "order_item", "order item", "orderItem"] {
        let err = writer
            .write(&ModuleSpec::resolve(alias).unwrap())
            .unwrap_err();
        assert!(
            matches!(err, ScaffoldError::ModuleAlreadyExists { ref module_name, .. } if module_name == "order_item"),
            "{alias} should collide with order_item"
        );
    }

    assert_eq!(ModuleRegistry::new(temp_dir.path()).scan().len(), 1);
}

#[test]
fn test_generated_python_is_well_formed() {
    for entity in ["OrderItem", "Category", "ReturnItem", "HTTPClient", "item42"] {
        let (_temp_dir, module_dir) = generate(entity);

        for name in templates::file_names().filter(|n| n.ends_with(".py")) {
            let source = fs::read_to_string(module_dir.join(name)).unwrap();
            assert!(!source.contains("{{"), "{entity}/{name} has an unrendered placeholder");
            assert!(brackets_balanced(&source), "{entity}/{name} has unbalanced brackets");
            assert!(!source.contains('\t'), "{entity}/{name} should indent with spaces");
            assert_eq!(
                invalid_bindings(&source),
                Vec::<&str>::new(),
                "{entity}/{name} binds an invalid identifier"
            );
        }
    }
}

#[test]
fn test_keyword_module_names_would_break_the_services_layer() {
    for keyword in ["return", "import", "global", "class"] {
        let class_name = TemplateHelpers::to_pascal_case(keyword);
        let services = templates::render_services(keyword, &class_name);
        assert!(
            invalid_bindings(&services).contains(&keyword),
            "rendering {keyword} directly should bind the keyword"
        );

        let err = ModuleSpec::resolve(&class_name).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidName { .. }));
    }
}

#[test]
fn test_every_reserved_name_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let writer = ModuleWriter::new(temp_dir.path());

    for name in RESERVED_NAMES {
        assert!(ModuleSpec::resolve(name).is_err(), "{name} should be rejected");
    }
    assert!(writer.write(&ModuleSpec::resolve("Refund").unwrap()).is_ok());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_package_manifest_names_exist() {
    let (_temp_dir, module_dir) = generate("Category");
    let init = fs::read_to_string(module_dir.join("__init__.py")).unwrap();

    let imports = imported_names(&init);
    assert!(!imports.is_empty());

    for (file, entry) in &imports {
        let (name, exported) = entry.split_once(" as ").unwrap_or((entry.as_str(), entry.as_str()));
        let source = fs::read_to_string(module_dir.join(format!("{file}.py"))).unwrap();
        let defined = source.contains(&format!("class {name}("))
            || source.contains(&format!("class {name}:"))
            || source.contains(&format!("{name} = "));
        assert!(defined, "{name} imported from {file}.py but not defined there");
        assert!(
            init.contains(&format!("\"{exported}\"")),
            "{exported} missing from __all__"
        );
    }
}

#[test]
fn test_routes_use_plural_prefix() {
    let (_temp_dir, module_dir) = generate("category");
    let routes = fs::read_to_string(module_dir.join("routes.py")).unwrap();
    let models = fs::read_to_string(module_dir.join("models.py")).unwrap();

    assert!(routes.contains("prefix=\"/categories\""));
    assert!(routes.contains("{category_id}"));
    assert!(models.contains("__tablename__ = \"categories\""));
    assert!(models.contains("class Category("));
}

proptest! {
    #[test]
    fn prop_separators_are_equivalent(
        words in prop::collection::vec("[a-z]{1,8}", 1..4),
        sep in prop::sample::select(vec!["_", "-", " "]),
    ) {
        prop_assume!(!RESERVED_NAMES.contains(&words.join("_").as_str()));
        let spec = ModuleSpec::resolve(&words.join(sep)).unwrap();

        let class_name: String = words
            .iter()
            .map(|w| {
                let mut chars = w.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_ascii_uppercase().to_string() + chars.as_str()
                })
            })
            .collect();

        prop_assert_eq!(spec.module_name, words.join("_"));
        prop_assert_eq!(spec.class_name, class_name);
    }

    #[test]
    fn prop_module_name_is_a_fixed_point(input in "[A-Za-z][A-Za-z0-9_ -]{0,20}") {
        prop_assume!(!RESERVED_NAMES.contains(&TemplateHelpers::to_snake_case(&input).as_str()));
        let spec = ModuleSpec::resolve(&input).unwrap();
        let again = ModuleSpec::resolve(&spec.module_name).unwrap();

        prop_assert_eq!(&again.module_name, &spec.module_name);
        prop_assert!(spec.module_name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        prop_assert!(!spec.module_name.starts_with('_') && !spec.module_name.ends_with('_'));
        prop_assert!(!spec.module_name.contains("__"));
    }

    #[test]
    fn prop_rendering_is_deterministic(input in "[A-Za-z][A-Za-z0-9]{0,12}") {
        prop_assume!(!RESERVED_NAMES.contains(&TemplateHelpers::to_snake_case(&input).as_str()));
        let spec = ModuleSpec::resolve(&input).unwrap();
        let first = templates::generate(&spec);
        let second = templates::generate(&spec);

        prop_assert_eq!(first.len(), EXPECTED_FILE_COUNT);
        for (a, b) in first.iter().zip(&second) {
            prop_assert_eq!(&a.content, &b.content);
        }
    }
}
