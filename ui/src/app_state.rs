use std::ops::Deref;
use std::sync::Arc;

use crate::prefs::app_prefs::AppPrefs;

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: AppPrefs,
}

/// Immutable, cheaply cloned application state provided as a Dioxus context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: AppPrefs) -> Self {
        Self(Arc::new(AppStateData { prefs }))
    }
}
