//! Local JSON content source

use crate::error::DataError;
use crate::model::{About, Contact, Experience, Profile, Project, Skill};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Result of fetching one content section.
///
/// Exactly one of `data` and `error` is set once loading has finished.
#[derive(Clone, Debug, PartialEq)]
pub struct Fetched<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub loading: bool,
}

impl<T> Fetched<T> {
    /// A fetch that has not completed yet
    pub fn pending() -> Self {
        Self {
            data: None,
            error: None,
            loading: true,
        }
    }

    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            loading: false,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(error.into()),
            loading: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.data.is_some()
    }
}

impl<T> From<Result<T, DataError>> for Fetched<T> {
    fn from(result: Result<T, DataError>) -> Self {
        match result {
            Ok(data) => Self::ready(data),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// Reads content sections from `<dir>/<section>.json`
#[derive(Clone, Debug)]
pub struct LocalJsonSource {
    dir: PathBuf,
}

impl LocalJsonSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load and deserialize one section file
    pub fn load<T: DeserializeOwned>(&self, section: &str) -> Result<T, DataError> {
        let path = self.dir.join(format!("{section}.json"));
        let content = std::fs::read_to_string(&path).map_err(|source| DataError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| DataError::Parse { path, source })
    }

    /// Load a section, reporting failure through [`Fetched::error`]
    pub fn fetch<T: DeserializeOwned>(&self, section: &str) -> Fetched<T> {
        let result = self.load(section);
        if let Err(e) = &result {
            tracing::warn!("Content section '{}' unavailable: {}", section, e);
        }
        result.into()
    }

    pub fn fetch_profile(&self) -> Fetched<Profile> {
        self.fetch("profile")
    }

    pub fn fetch_projects(&self) -> Fetched<Vec<Project>> {
        self.fetch("projects")
    }

    pub fn fetch_experience(&self) -> Fetched<Vec<Experience>> {
        self.fetch("experience")
    }

    pub fn fetch_skills(&self) -> Fetched<Vec<Skill>> {
        self.fetch("skills")
    }

    pub fn fetch_about(&self) -> Fetched<About> {
        self.fetch("about")
    }

    pub fn fetch_contact(&self) -> Fetched<Contact> {
        self.fetch("contact")
    }
}
