use std::collections::HashMap;

use crate::core::ini::IniDocument;
use crate::core::language::Language;
use crate::i18n;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (key, text) in i18n::zh::ENTRIES {
            catalog.insert(Language::Chinese, key, text);
        }
        for (key, text) in i18n::en::ENTRIES {
            catalog.insert(Language::English, key, text);
        }
        catalog
    }

    /// Builds a catalog from every section named after a supported language.
    /// Other sections are ignored.
    pub fn from_document(doc: &IniDocument) -> Self {
        let mut catalog = Self::new();
        for section in doc.sections() {
            if let Some(lang) = Language::from_code(section.name()) {
                for (key, text) in section.entries() {
                    catalog.insert(lang, key, text);
                }
            }
        }
        catalog
    }

    pub fn insert(&mut self, lang: Language, key: &str, text: &str) {
        self.tables
            .entry(lang)
            .or_default()
            .insert(key.to_lowercase(), text.to_string());
    }

    pub fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        self.tables
            .get(&lang)
            .and_then(|table| table.get(&key.to_lowercase()))
            .map(String::as_str)
    }

    /// Display text for `key`, or `key` itself when the language or the key
    /// has no entry.
    pub fn resolve<'a>(&'a self, lang: Language, key: &'a str) -> &'a str {
        match self.lookup(lang, key) {
            Some(text) => text,
            None => key,
        }
    }

    pub fn entries(&self, lang: Language) -> impl Iterator<Item = (&str, &str)> {
        self.tables
            .get(&lang)
            .into_iter()
            .flat_map(|table| table.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn missing_keys<'k>(&self, lang: Language, keys: &[&'k str]) -> Vec<&'k str> {
        keys.iter()
            .copied()
            .filter(|key| self.lookup(lang, key).is_none())
            .collect()
    }
}
