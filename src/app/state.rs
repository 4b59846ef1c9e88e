use std::collections::{HashMap, HashSet};

use crate::catalog::Catalog;
use crate::trend::TrendRecord;

use super::{TrendEntry, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(catalog: Catalog, trend_lookups_enabled: bool) -> Self {
        Self {
            catalog,
            selected: None,
            expanded_layer: None,
            search: String::new(),
            liked: HashSet::new(),
            show_favorites: false,
            trend: HashMap::new(),
            trend_lookups_enabled,
        }
    }

    pub(in crate::app) fn select_technology(&mut self, name: &'static str) {
        if self.selected == Some(name) {
            self.selected = None;
        } else {
            self.selected = Some(name);
        }
    }

    pub(in crate::app) fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub(in crate::app) fn toggle_like(&mut self, name: &'static str) {
        if !self.liked.insert(name) {
            self.liked.remove(name);
        }
    }

    pub(in crate::app) fn set_search_query(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub(in crate::app) fn toggle_favorites_panel(&mut self) {
        self.show_favorites = !self.show_favorites;
    }

    /// Toggles layer expansion. Returns the technology names whose trend
    /// fetch should start now (empty when collapsing or when every entry
    /// is already cached or pending).
    pub(in crate::app) fn expand_layer(&mut self, layer_id: &'static str) -> Vec<&'static str> {
        if self.expanded_layer == Some(layer_id) {
            self.expanded_layer = None;
            return Vec::new();
        }

        self.open_layer(layer_id)
    }

    pub(in crate::app) fn select_search_result(&mut self, name: &'static str) -> Vec<&'static str> {
        self.selected = Some(name);
        self.search.clear();
        self.open_owning_layer(name)
    }

    pub(in crate::app) fn select_favorite(&mut self, name: &'static str) -> Vec<&'static str> {
        self.selected = Some(name);
        self.open_owning_layer(name)
    }

    pub(in crate::app) fn record_trend_outcome(
        &mut self,
        name: &'static str,
        outcome: Option<TrendRecord>,
    ) {
        let entry = match outcome {
            Some(record) => TrendEntry::Ready(record),
            None => TrendEntry::Unavailable,
        };
        self.trend.insert(name, entry);
    }

    fn open_owning_layer(&mut self, name: &str) -> Vec<&'static str> {
        let Some((layer, _)) = self.catalog.technology(name) else {
            return Vec::new();
        };

        self.open_layer(layer.id)
    }

    fn open_layer(&mut self, layer_id: &'static str) -> Vec<&'static str> {
        self.expanded_layer = Some(layer_id);
        self.begin_layer_fetches(layer_id)
    }

    // Marks every tech of the layer that has no cache entry as pending.
    // Pending entries double as in-flight markers, so a second expansion
    // of the same layer requests nothing.
    fn begin_layer_fetches(&mut self, layer_id: &str) -> Vec<&'static str> {
        if !self.trend_lookups_enabled {
            return Vec::new();
        }

        let Some(layer) = self.catalog.layer(layer_id) else {
            return Vec::new();
        };

        let mut to_fetch = Vec::new();
        for tech in layer.techs {
            if !self.trend.contains_key(tech.name) {
                self.trend.insert(tech.name, TrendEntry::Pending);
                to_fetch.push(tech.name);
            }
        }

        to_fetch
    }

    pub(in crate::app) fn is_selected(&self, name: &str) -> bool {
        self.selected.is_some_and(|selected| selected == name)
    }

    pub(in crate::app) fn is_liked(&self, name: &str) -> bool {
        self.liked.contains(name)
    }

    pub(in crate::app) fn liked_count(&self) -> usize {
        self.liked.len()
    }

    pub(in crate::app) fn is_expanded(&self, layer_id: &str) -> bool {
        self.expanded_layer.is_some_and(|id| id == layer_id)
    }

    pub(in crate::app) fn trend_entry(&self, name: &str) -> Option<&TrendEntry> {
        self.trend.get(name)
    }
}
