//! Structural checks on each embedded Fluent bundle that the loader itself
//! never reports: a second definition of an id silently wins, and a
//! translation that drops or renames a `{ $variable }` renders a Fluent error
//! placeholder instead of the value.

use std::collections::{BTreeMap, BTreeSet};

const FALLBACK: &str = include_str!("../i18n/en-US/folio_ui.ftl");

/// Register new locales here as well as under `i18n/`.
const TRANSLATIONS: &[(&str, &str)] = &[("es-ES", include_str!("../i18n/es-ES/folio_ui.ftl"))];

/// Message id to the variables its value references, per definition line.
fn definitions(ftl: &str) -> Vec<(String, BTreeSet<String>)> {
    ftl.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, value)| (id.trim().to_string(), variables(value)))
        .filter(|(id, _)| !id.is_empty() && !id.contains(char::is_whitespace))
        .collect()
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .filter_map(|rest| {
            let name: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

fn duplicates(ftl: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    definitions(ftl)
        .into_iter()
        .filter_map(|(id, _)| (!seen.insert(id.clone())).then_some(id))
        .collect()
}

#[test]
fn variable_scan_reads_placeables() {
    let vars = variables(" Page { $path } not found, try { $other-path }");
    assert_eq!(
        vars.into_iter().collect::<Vec<_>>(),
        vec!["other-path".to_string(), "path".to_string()]
    );
}

#[test]
fn no_bundle_defines_an_id_twice() {
    for (locale, ftl) in std::iter::once(&("en-US", FALLBACK)).chain(TRANSLATIONS) {
        let dups = duplicates(ftl);
        assert!(dups.is_empty(), "{locale} defines more than once: {dups:?}");
    }
}

#[test]
fn translations_keep_the_fallback_variables() {
    let fallback: BTreeMap<String, BTreeSet<String>> = definitions(FALLBACK).into_iter().collect();
    for (locale, ftl) in TRANSLATIONS {
        for (id, vars) in definitions(ftl) {
            if let Some(expected) = fallback.get(&id) {
                assert_eq!(&vars, expected, "{locale}: `{id}` uses different variables");
            }
        }
    }
}

#[test]
fn parameterised_messages_exist() {
    let fallback: BTreeMap<String, BTreeSet<String>> = definitions(FALLBACK).into_iter().collect();
    for (id, var) in [
        ("not-found-body", "path"),
        ("contact-via", "channel"),
        ("contact-mail-subject", "name"),
    ] {
        let vars = fallback.get(id).unwrap_or_else(|| panic!("missing `{id}`"));
        assert!(vars.contains(var), "`{id}` should reference ${var}");
    }
}
