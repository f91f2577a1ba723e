//! Theme registry: theme name to token set

use crate::error::ThemeError;
use crate::name::ThemeName;
use crate::themes::builtin_tokens;
use crate::tokens::TokenSet;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

static BUILTIN: OnceLock<ThemeRegistry> = OnceLock::new();

/// Registry shipped with the crate, built once on first use
pub fn builtin_registry() -> &'static ThemeRegistry {
    BUILTIN.get_or_init(ThemeRegistry::builtin)
}

/// Mapping from every [`ThemeName`] to exactly one [`TokenSet`]
#[derive(Clone, Debug, Default)]
pub struct ThemeRegistry {
    themes: FxHashMap<ThemeName, TokenSet>,
}

impl ThemeRegistry {
    /// Empty registry; fill with [`insert`](Self::insert)
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry containing the built-in token set for every theme
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for &name in ThemeName::all() {
            registry.insert(name, builtin_tokens(name));
        }
        registry
    }

    /// Load a registry from TOML, one table per theme id.
    ///
    /// Each table must be a complete token set and every theme must be
    /// present.
    ///
    /// ```toml
    /// [matrix]
    /// mode = "dark"
    ///
    /// [matrix.palette.primary]
    /// main = "#00ff41"
    /// # ...
    /// ```
    pub fn from_toml(src: &str) -> Result<Self, ThemeError> {
        let table: toml::Table = toml::from_str(src).map_err(|e: toml::de::Error| {
            ThemeError::Configuration {
                theme: "<registry>".to_string(),
                reason: e.message().to_string(),
            }
        })?;

        let mut registry = Self::new();
        for (id, value) in table {
            let name: ThemeName = id.parse().map_err(|_| ThemeError::Configuration {
                theme: id.clone(),
                reason: "not a known theme id".to_string(),
            })?;
            let tokens: TokenSet = value.try_into().map_err(|e: toml::de::Error| {
                ThemeError::Configuration {
                    theme: id.clone(),
                    reason: e.message().to_string(),
                }
            })?;
            registry.insert(name, tokens);
        }

        registry.validate()?;
        tracing::debug!("Loaded {} themes from TOML", registry.len());
        Ok(registry)
    }

    /// Register or replace the token set for a theme
    pub fn insert(&mut self, name: ThemeName, tokens: TokenSet) -> Option<TokenSet> {
        self.themes.insert(name, tokens)
    }

    /// Resolve the token set for a theme.
    ///
    /// A missing entry is a [`ThemeError::Configuration`]; another theme's
    /// tokens are never substituted.
    pub fn resolve(&self, name: ThemeName) -> Result<&TokenSet, ThemeError> {
        self.themes
            .get(&name)
            .ok_or_else(|| ThemeError::Configuration {
                theme: name.id().to_string(),
                reason: "no token set registered".to_string(),
            })
    }

    /// Resolve by raw id, rejecting ids outside the enumerated set
    pub fn resolve_id(&self, id: &str) -> Result<&TokenSet, ThemeError> {
        self.resolve(id.parse()?)
    }

    /// Check that every theme has a token set
    pub fn validate(&self) -> Result<(), ThemeError> {
        for &name in ThemeName::all() {
            self.resolve(name)?;
        }
        Ok(())
    }

    pub fn contains(&self, name: ThemeName) -> bool {
        self.themes.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Registered themes in menu order
    pub fn names(&self) -> Vec<ThemeName> {
        ThemeName::all()
            .iter()
            .copied()
            .filter(|name| self.contains(*name))
            .collect()
    }

    /// Serialize to the TOML layout accepted by [`from_toml`](Self::from_toml)
    pub fn to_toml(&self) -> Result<String, ThemeError> {
        let mut table = toml::Table::new();
        for name in self.names() {
            let tokens = self.resolve(name)?;
            let value = toml::Value::try_from(tokens).map_err(|e| ThemeError::Configuration {
                theme: name.id().to_string(),
                reason: e.to_string(),
            })?;
            table.insert(name.id().to_string(), value);
        }
        toml::to_string(&table).map_err(|e| ThemeError::Configuration {
            theme: "<registry>".to_string(),
            reason: e.to_string(),
        })
    }
}
