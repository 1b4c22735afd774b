use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use crate::config::config::{DEFAULT_LANGUAGE, LANGUAGE_KEY};
use crate::core::catalog::Catalog;
use crate::core::ini::IniDocument;
use crate::core::language::Language;
use crate::i18n::keys::OPENER_KEYS;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    document: IniDocument,
    catalog: Catalog,
    current: Language,
}

impl ConfigStore {
    /// Reads `path` if it exists. Unreadable or malformed content falls back
    /// to defaults; a missing file only gets its directory created.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let document = if path.exists() {
            match fs::read_to_string(&path) {
                Ok(contents) => IniDocument::parse(&contents),
                Err(e) => {
                    warn!("Failed to read {}, using defaults: {}", path.display(), e);
                    IniDocument::new()
                }
            }
        } else {
            if let Some(dir) = path.parent() {
                if let Err(e) = fs::create_dir_all(dir) {
                    warn!("Failed to create config directory {}: {}", dir.display(), e);
                }
            }
            IniDocument::new()
        };

        let current = document
            .default_value(LANGUAGE_KEY)
            .and_then(Language::from_code)
            .unwrap_or(DEFAULT_LANGUAGE);
        let catalog = Catalog::from_document(&document);

        for lang in Language::ALL {
            let missing = catalog.missing_keys(lang, OPENER_KEYS);
            if !missing.is_empty() {
                debug!("[{}] has no text for: {}", lang, missing.join(", "));
            }
        }
        info!("Loaded language config from {} ({})", path.display(), current);

        Self {
            path,
            document,
            catalog,
            current,
        }
    }

    /// Loads `path` and fills in whatever the built-in tables have that the
    /// file lacks, writing the file only when something was added. A failed
    /// write is logged; the merged labels are still used in memory.
    pub fn open_or_bootstrap(path: impl Into<PathBuf>) -> Self {
        let mut store = Self::load(path);
        if store.merge_builtin() {
            info!("Adding missing labels to {}", store.path().display());
            if let Err(e) = store.save() {
                warn!("Could not write default labels: {}", e);
            }
        }
        store
    }

    pub fn bootstrap_defaults(&mut self) -> Result<(), StoreError> {
        self.merge_builtin();
        self.save()
    }

    // Existing entries always win over the built-in text.
    fn merge_builtin(&mut self) -> bool {
        let builtin = Catalog::builtin();
        let mut added = false;
        for lang in Language::ALL {
            for (key, text) in builtin.entries(lang) {
                if self.document.get(lang.code(), key).is_none() {
                    self.document.set(lang.code(), key, text);
                    added = true;
                }
            }
        }
        if added {
            self.catalog = Catalog::from_document(&self.document);
        }
        added
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn current_language(&self) -> Language {
        self.current
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog.resolve(self.current, key)
    }

    pub fn save(&mut self) -> Result<(), StoreError> {
        self.document.set_default(LANGUAGE_KEY, self.current.code());
        fs::write(&self.path, self.document.render()).map_err(|e| StoreError::io(&self.path, e))?;
        debug!("Saved language config to {}", self.path.display());
        Ok(())
    }

    pub fn set_language(&mut self, lang: Language) -> Result<(), StoreError> {
        self.current = lang;
        self.save()
    }

    /// Switches to the other language and persists it. The in-memory
    /// language changes even when the write fails.
    pub fn toggle(&mut self) -> Result<Language, StoreError> {
        let next = self.current.toggled();
        info!("Switching language {} -> {}", self.current, next);
        self.set_language(next)?;
        Ok(next)
    }
}
