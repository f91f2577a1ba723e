//! Theme store: the single owner of the active theme
//!
//! The store resolves the active theme, persists it, projects its tokens onto
//! the document root and notifies subscribers. One store can be installed
//! process-wide with [`ThemeStore::install`].

use crate::error::ThemeError;
use crate::name::ThemeName;
use crate::projector::project;
use crate::registry::ThemeRegistry;
use crate::storage::ThemeStorage;
use crate::tokens::{Mode, TokenSet};
use folio_core::{DocumentRoot, SubscriberList, SubscriptionId};
use std::sync::{Arc, Mutex, OnceLock, RwLock};

/// Attribute on the document root naming the active theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Storage key the active theme id is persisted under
pub const DEFAULT_STORAGE_KEY: &str = "theme";

/// Global store instance
static THEME_STORE: OnceLock<ThemeStore> = OnceLock::new();

type SharedDocument = Box<dyn DocumentRoot + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StoreState {
    Uninitialized,
    Initialized(ThemeName),
}

/// Holds the active theme and applies it to the document root
pub struct ThemeStore {
    registry: Arc<ThemeRegistry>,
    storage: Box<dyn ThemeStorage>,
    storage_key: String,
    fallback: ThemeName,

    state: RwLock<StoreState>,
    document: RwLock<SharedDocument>,
    subscribers: Mutex<SubscriberList<ThemeName>>,
}

impl ThemeStore {
    /// Create a store over the built-in registry
    pub fn new(
        storage: impl ThemeStorage + 'static,
        document: impl DocumentRoot + Send + Sync + 'static,
    ) -> Self {
        Self {
            registry: Arc::new(ThemeRegistry::builtin()),
            storage: Box::new(storage),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            fallback: ThemeName::FALLBACK,
            state: RwLock::new(StoreState::Uninitialized),
            document: RwLock::new(Box::new(document)),
            subscribers: Mutex::new(SubscriberList::new()),
        }
    }

    /// Use a custom registry (e.g. loaded from TOML)
    pub fn with_registry(mut self, registry: Arc<ThemeRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Theme used when nothing valid is persisted
    pub fn with_fallback(mut self, fallback: ThemeName) -> Self {
        self.fallback = fallback;
        self
    }

    // ========== Global Instance ==========

    /// Install this store as the process-wide instance.
    ///
    /// Only the first install takes effect; later calls return the existing
    /// store.
    pub fn install(self) -> &'static ThemeStore {
        if THEME_STORE.set(self).is_err() {
            tracing::warn!("ThemeStore already installed; keeping the existing instance");
        }
        Self::global()
    }

    /// Get the global store instance
    pub fn global() -> &'static ThemeStore {
        THEME_STORE
            .get()
            .expect("ThemeStore not installed. Call ThemeStore::install() at startup.")
    }

    /// Try to get the global store (returns None if not installed)
    pub fn try_global() -> Option<&'static ThemeStore> {
        THEME_STORE.get()
    }

    // ========== Active Theme ==========

    /// The active theme, initializing from storage on first use
    pub fn current(&self) -> ThemeName {
        if let StoreState::Initialized(name) = *self.state.read().unwrap() {
            return name;
        }
        self.mount()
    }

    /// Perform the one-time initialization: read storage, fall back when the
    /// persisted value is missing, invalid or unreadable, then project.
    ///
    /// Later calls return the active theme without touching storage.
    pub fn mount(&self) -> ThemeName {
        let mut state = self.state.write().unwrap();
        if let StoreState::Initialized(name) = *state {
            return name;
        }

        let name = self.persisted().unwrap_or(self.fallback);
        match self.registry.resolve(name) {
            Ok(tokens) => self.apply(name, tokens),
            Err(e) => tracing::error!("Cannot project initial theme: {}", e),
        }

        *state = StoreState::Initialized(name);
        tracing::debug!("ThemeStore initialized with theme '{}'", name);
        name
    }

    pub fn is_initialized(&self) -> bool {
        matches!(*self.state.read().unwrap(), StoreState::Initialized(_))
    }

    /// Switch to a theme.
    ///
    /// Tokens are resolved before anything changes; a storage failure is
    /// logged and does not abort the switch. Subscribers run after the
    /// document is updated.
    ///
    /// The state lock is held through the storage write and the projection,
    /// so concurrent switches apply one at a time and state, storage and
    /// document always agree once `set` returns.
    pub fn set(&self, name: ThemeName) -> Result<(), ThemeError> {
        let tokens = self.registry.resolve(name)?;

        {
            let mut state = self.state.write().unwrap();
            let previous = std::mem::replace(&mut *state, StoreState::Initialized(name));

            if let Err(e) = self.storage.set(&self.storage_key, name.id()) {
                tracing::warn!("Failed to persist theme '{}': {}", name, e);
            }

            self.apply(name, tokens);
            tracing::debug!("Theme changed: {:?} -> {}", previous, name);
        }

        self.notify(name);
        Ok(())
    }

    /// Switch by raw id; unknown ids are rejected without any change
    pub fn set_by_id(&self, id: &str) -> Result<(), ThemeError> {
        let name: ThemeName = id.parse()?;
        self.set(name)
    }

    /// Flip between the light and dark defaults.
    ///
    /// Any dark theme toggles to the light default.
    pub fn toggle_mode(&self) -> Result<ThemeName, ThemeError> {
        let next = match self.tokens()?.mode {
            Mode::Dark => ThemeName::Default,
            Mode::Light => ThemeName::DefaultDark,
        };
        self.set(next)?;
        Ok(next)
    }

    /// Token set of the active theme
    pub fn tokens(&self) -> Result<TokenSet, ThemeError> {
        self.registry.resolve(self.current()).cloned()
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    // ========== Subscribers ==========

    /// Register a callback run after every successful switch
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ThemeName) + Send + Sync + 'static,
    {
        self.subscribers.lock().unwrap().subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.lock().unwrap().unsubscribe(id)
    }

    // ========== Document ==========

    /// Read access to the document root
    pub fn with_document<R>(&self, f: impl FnOnce(&dyn DocumentRoot) -> R) -> R {
        let document = self.document.read().unwrap();
        f(&**document)
    }

    // ========== Internal ==========

    fn persisted(&self) -> Option<ThemeName> {
        match self.storage.get(&self.storage_key) {
            Ok(Some(id)) => match id.parse() {
                Ok(name) => Some(name),
                Err(e) => {
                    tracing::warn!("Ignoring persisted theme: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Theme storage unreadable, using fallback: {}", e);
                None
            }
        }
    }

    fn apply(&self, name: ThemeName, tokens: &TokenSet) {
        let mut document = self.document.write().unwrap();
        project(tokens, &mut **document);
        document.set_attribute(THEME_ATTRIBUTE, name.id());
    }

    fn notify(&self, name: ThemeName) {
        // Snapshot so callbacks can re-enter the store
        let callbacks = self.subscribers.lock().unwrap().snapshot();
        for callback in callbacks {
            callback(&name);
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("storage_key", &self.storage_key)
            .field("fallback", &self.fallback)
            .field("state", &*self.state.read().unwrap())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use folio_core::MemoryDocument;

    fn store() -> ThemeStore {
        ThemeStore::new(MemoryStorage::new(), MemoryDocument::new())
    }

    #[test]
    fn test_lazy_init_projects_fallback() {
        let store = store();
        assert!(!store.is_initialized());
        assert_eq!(store.current(), ThemeName::DefaultDark);
        assert!(store.is_initialized());
        store.with_document(|doc| {
            assert_eq!(doc.attribute(THEME_ATTRIBUTE), Some("defaultDark"));
            assert_eq!(doc.property("--color-background-primary"), Some("#0f172a"));
        });
    }

    #[test]
    fn test_configured_fallback() {
        let store = store().with_fallback(ThemeName::Default);
        assert_eq!(store.mount(), ThemeName::Default);
    }

    #[test]
    fn test_invalid_persisted_value_falls_back() {
        let storage = MemoryStorage::with_entry(DEFAULT_STORAGE_KEY, "vaporwave");
        let store = ThemeStore::new(storage, MemoryDocument::new());
        assert_eq!(store.current(), ThemeName::DefaultDark);
    }

    #[test]
    fn test_custom_storage_key() {
        let storage = MemoryStorage::with_entry("site-theme", "ninjaTurtles");
        let store = ThemeStore::new(storage.clone(), MemoryDocument::new())
            .with_storage_key("site-theme");
        assert_eq!(store.current(), ThemeName::NinjaTurtles);

        store.set(ThemeName::Matrix).unwrap();
        assert_eq!(storage.get("site-theme").unwrap(), Some("matrix".to_string()));
        assert_eq!(storage.get(DEFAULT_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_toggle_mode() {
        let store = store();
        assert_eq!(store.toggle_mode().unwrap(), ThemeName::Default);
        assert_eq!(store.toggle_mode().unwrap(), ThemeName::DefaultDark);

        store.set(ThemeName::Matrix).unwrap();
        assert_eq!(store.toggle_mode().unwrap(), ThemeName::Default);
    }

    #[test]
    fn test_set_on_incomplete_registry_does_not_mutate() {
        let mut registry = ThemeRegistry::new();
        registry.insert(ThemeName::DefaultDark, crate::themes::default_dark_theme());
        let store = store().with_registry(Arc::new(registry));
        store.mount();

        let err = store.set(ThemeName::Matrix).unwrap_err();
        assert!(matches!(err, ThemeError::Configuration { .. }));
        assert_eq!(store.current(), ThemeName::DefaultDark);
        store.with_document(|doc| {
            assert_eq!(doc.attribute(THEME_ATTRIBUTE), Some("defaultDark"));
        });
    }
}
