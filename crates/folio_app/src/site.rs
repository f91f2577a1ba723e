//! The mounted site: theme store plus hero rotator
//!
//! Theme switches arrive through a store subscription, which only raises a
//! flag. The rotator is restarted with the new heading font on the next
//! [`Site::advance`], so subscriber callbacks never touch the scheduler.

use crate::config::SiteConfig;
use folio_animation::{AnimationScheduler, FontSpec, RotatingText, RotatorView};
use folio_core::{DocumentRoot, SubscriptionId};
use folio_data::LocalJsonSource;
use folio_theme::{
    hero_background, FontSizeToken, HeroBackground, JsonFileStorage, MemoryStorage, ThemeError,
    ThemeName, ThemeStorage, ThemeStore, TokenSet,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Hero heading font for a theme
pub fn hero_font(tokens: &TokenSet) -> FontSpec {
    FontSpec::new(
        tokens.typography.font_family_heading.clone(),
        tokens.typography.px(FontSizeToken::Xl4),
    )
}

pub struct Site {
    config: SiteConfig,
    store: ThemeStore,
    scheduler: AnimationScheduler,
    rotator: RotatingText,
    data: LocalJsonSource,

    theme_changed: Arc<AtomicBool>,
    subscription: Option<SubscriptionId>,
}

impl Site {
    pub fn new(
        config: SiteConfig,
        storage: impl ThemeStorage + 'static,
        document: impl DocumentRoot + Send + Sync + 'static,
    ) -> Self {
        let store = ThemeStore::new(storage, document)
            .with_storage_key(config.theme.storage_key.clone())
            .with_fallback(config.theme.default);

        let data = LocalJsonSource::new(&config.data.dir);
        let titles = if config.rotator.titles.is_empty() {
            data.fetch_profile()
                .data
                .map(|profile| profile.titles)
                .unwrap_or_default()
        } else {
            config.rotator.titles.clone()
        };
        let rotator = RotatingText::new(titles, config.rotator.to_rotator_config());

        Self {
            config,
            store,
            scheduler: AnimationScheduler::new(),
            rotator,
            data,
            theme_changed: Arc::new(AtomicBool::new(false)),
            subscription: None,
        }
    }

    /// Build from configuration alone, persisting to `storage_path` when set
    pub fn from_config(config: SiteConfig, document: impl DocumentRoot + Send + Sync + 'static) -> Self {
        match config.theme.storage_path.clone() {
            Some(path) => Self::new(config, JsonFileStorage::new(path), document),
            None => Self::new(config, MemoryStorage::new(), document),
        }
    }

    // ========== Lifecycle ==========

    /// Initialize the theme and start the hero rotator
    pub fn mount(&mut self) -> ThemeName {
        let theme = self.store.mount();

        if self.subscription.is_none() {
            let flag = Arc::clone(&self.theme_changed);
            self.subscription = Some(self.store.subscribe(move |_| {
                flag.store(true, Ordering::Release);
            }));
        }

        let font = self.current_font();
        self.rotator.start(&mut self.scheduler, font);

        tracing::debug!("Site mounted with theme '{}'", theme);
        theme
    }

    /// Stop the rotator and drop the theme subscription
    pub fn unmount(&mut self) {
        self.rotator.stop(&mut self.scheduler);
        if let Some(id) = self.subscription.take() {
            self.store.unsubscribe(id);
        }
        self.theme_changed.store(false, Ordering::Release);
        tracing::debug!("Site unmounted");
    }

    /// Advance the clock, applying any pending theme change first
    pub fn advance(&mut self, dt_ms: f64) {
        if self.theme_changed.swap(false, Ordering::AcqRel) && self.rotator.is_mounted() {
            let font = self.current_font();
            self.rotator.set_font(&mut self.scheduler, font);
        }

        let rotator = &mut self.rotator;
        self.scheduler.advance(dt_ms, |scheduler, event| {
            rotator.handle_event(scheduler, event);
        });
    }

    /// Viewport changed
    pub fn resize(&mut self) {
        self.rotator.on_resize();
    }

    // ========== Theme ==========

    pub fn set_theme(&self, id: &str) -> Result<(), ThemeError> {
        self.store.set_by_id(id)
    }

    pub fn toggle_mode(&self) -> Result<ThemeName, ThemeError> {
        self.store.toggle_mode()
    }

    pub fn theme(&self) -> ThemeName {
        self.store.current()
    }

    pub fn hero_background(&self) -> HeroBackground {
        hero_background(self.store.current())
    }

    // ========== Accessors ==========

    pub fn hero_view(&self) -> Option<RotatorView> {
        self.rotator.view(&self.scheduler)
    }

    pub fn rotator(&self) -> &RotatingText {
        &self.rotator
    }

    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    pub fn data(&self) -> &LocalJsonSource {
        &self.data
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    fn current_font(&self) -> FontSpec {
        match self.store.tokens() {
            Ok(tokens) => hero_font(&tokens),
            Err(e) => {
                tracing::warn!("No tokens for hero font, using default: {}", e);
                FontSpec::default()
            }
        }
    }
}

impl Drop for Site {
    fn drop(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.store.unsubscribe(id);
        }
    }
}
