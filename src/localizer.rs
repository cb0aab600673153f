//! The localization facade.
//!
//! A [`Localizer`] owns a catalog, the active language and a [`Binding`].
//! It is either Ready (constructed with a catalog) or Uninitialized
//! (constructed without one, in which case refreshing does nothing). The
//! state is fixed at construction.
//!
//! Every refresh re-resolves the whole catalog and re-applies it; there are
//! no incremental updates.
//!
//! ```
//! use i18nbind::{binding::Recorder, catalog::Catalog, localizer::Localizer};
//!
//! let catalog = Catalog::from_json_str(r#"{"demo": {"signin": {"en": "Sign In", "ko": "로그인"}}}"#)?;
//! let mut localizer = Localizer::new(catalog, Recorder::default(), None)?;
//! assert_eq!(localizer.language(), "en");
//!
//! localizer.set_language(Some("ko"))?;
//! assert_eq!(localizer.binding().writes().last().map(|w| w.text.as_str()), Some("로그인"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Result;

use crate::{
    binding::{self, Binding},
    catalog::Catalog,
    resolve::{FALLBACK_LANGUAGE, Resolution, resolve},
};

/// Language used when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug)]
pub struct Localizer<B> {
    catalog: Option<Catalog>,
    language: String,
    fallback: String,
    binding: B,
}

impl<B: Binding> Localizer<B> {
    /// Create a Ready localizer and run the first pass.
    ///
    /// `default_language` falls back to `en` when `None` or empty.
    pub fn new(catalog: Catalog, binding: B, default_language: Option<&str>) -> Result<Self> {
        Self::with_fallback(catalog, binding, default_language, FALLBACK_LANGUAGE)
    }

    /// Like [`Localizer::new`], with an explicit fallback language.
    pub fn with_fallback(
        catalog: Catalog,
        binding: B,
        default_language: Option<&str>,
        fallback: &str,
    ) -> Result<Self> {
        let mut localizer = Self {
            catalog: Some(catalog),
            language: initial_language(default_language),
            fallback: fallback.to_string(),
            binding,
        };
        localizer.refresh()?;
        Ok(localizer)
    }

    /// Create a localizer without a catalog. Refreshing it is a no-op.
    pub fn uninitialized(binding: B, default_language: Option<&str>) -> Self {
        Self {
            catalog: None,
            language: initial_language(default_language),
            fallback: FALLBACK_LANGUAGE.to_string(),
            binding,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn fallback_language(&self) -> &str {
        &self.fallback
    }

    pub fn has_catalog(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn binding_mut(&mut self) -> &mut B {
        &mut self.binding
    }

    pub fn into_binding(self) -> B {
        self.binding
    }

    /// Switch language and refresh.
    ///
    /// A non-empty `language` replaces the active one; `None` or `""` keeps
    /// it and only forces a refresh. Returns the active language.
    pub fn set_language(&mut self, language: Option<&str>) -> Result<&str> {
        if let Some(language) = language.filter(|l| !l.is_empty())
            && language != self.language
        {
            tracing::info!(from = %self.language, to = language, "changing language");
            self.language = language.to_string();
        }
        self.refresh()?;
        Ok(self.language.as_str())
    }

    /// Resolve the catalog and apply it to the binding.
    ///
    /// Returns `Ok(None)` without a catalog. Resolution completes before any
    /// write, so an error leaves the binding untouched.
    pub fn refresh(&mut self) -> Result<Option<Resolution>> {
        let Some(catalog) = &self.catalog else {
            tracing::debug!("no catalog loaded, skipping refresh");
            return Ok(None);
        };

        let resolution = resolve(catalog, &self.language, &self.fallback)?;
        binding::apply(&mut self.binding, &resolution);
        Ok(Some(resolution))
    }
}

fn initial_language(default_language: Option<&str>) -> String {
    default_language
        .filter(|language| !language.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string()
}
