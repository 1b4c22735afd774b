use std::fmt::Write as _;

pub const DEFAULT_SECTION: &str = "DEFAULT";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let key = normalize_key(key);
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        let key = normalize_key(key);
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key, value.to_string())),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flat `[section]` / `key = value` document.
///
/// Keys are matched case-insensitively, section names are not. Sections keep
/// the order in which they were first seen so a rewrite stays close to what
/// the user edited by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct IniDocument {
    sections: Vec<Section>,
}

impl Default for IniDocument {
    fn default() -> Self {
        Self {
            sections: vec![Section::new(DEFAULT_SECTION)],
        }
    }
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the text leniently: lines that are neither a header nor a
    /// key/value pair are skipped.
    pub fn parse(contents: &str) -> Self {
        let mut doc = Self::default();
        let mut current = DEFAULT_SECTION.to_string();

        for line in contents.lines() {
            let trimmed = line.trim().trim_start_matches('\u{feff}');
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            // Anything after the closing bracket is ignored.
            if let Some(rest) = trimmed.strip_prefix('[') {
                if let Some(end) = rest.find(']') {
                    let name = rest[..end].trim();
                    if !name.is_empty() {
                        current = name.to_string();
                        doc.section_mut_or_insert(&current);
                    }
                }
                continue;
            }

            if let Some((key, value)) = split_pair(trimmed) {
                let key = key.trim();
                if !key.is_empty() {
                    doc.set(&current, key, value.trim());
                }
            }
        }

        doc
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    pub fn default_value(&self, key: &str) -> Option<&str> {
        self.get(DEFAULT_SECTION, key)
    }

    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.section_mut_or_insert(section).set(key, value);
    }

    pub fn set_default(&mut self, key: &str, value: &str) {
        self.set(DEFAULT_SECTION, key, value);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let default = self.section(DEFAULT_SECTION);
        let ordered = default
            .into_iter()
            .chain(self.sections.iter().filter(|s| s.name != DEFAULT_SECTION));

        for (i, section) in ordered.enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "[{}]", section.name);
            for (key, value) in section.entries() {
                let _ = writeln!(out, "{} = {}", key, value);
            }
        }
        out
    }

    fn section_mut_or_insert(&mut self, name: &str) -> &mut Section {
        let pos = match self.sections.iter().position(|s| s.name == name) {
            Some(pos) => pos,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[pos]
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

// `=` and `:` are both delimiters; whichever comes first wins.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let idx = line.find(&['=', ':'][..])?;
    Some((&line[..idx], &line[idx + 1..]))
}
