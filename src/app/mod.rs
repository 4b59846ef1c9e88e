use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use eframe::egui::Context;

use crate::catalog::{Catalog, Layer, Technology};
use crate::trend::{TrendClient, TrendRecord};

mod render_utils;
mod state;
mod ui;
mod views;

pub struct TechLayerMapApp {
    model: ViewModel,
    trend_client: Option<Arc<TrendClient>>,
    completion_tx: Sender<FetchCompletion>,
    completion_rx: Receiver<FetchCompletion>,
}

// One message per finished trend fetch; `None` means the lookup soft-failed.
struct FetchCompletion {
    tech_name: &'static str,
    outcome: Option<TrendRecord>,
}

struct ViewModel {
    catalog: Catalog,
    selected: Option<&'static str>,
    expanded_layer: Option<&'static str>,
    search: String,
    liked: HashSet<&'static str>,
    show_favorites: bool,
    trend: HashMap<&'static str, TrendEntry>,
    trend_lookups_enabled: bool,
}

enum TrendEntry {
    Pending,
    Ready(TrendRecord),
    Unavailable,
}

// A technology annotated with its owning layer, as handed to rendering.
#[derive(Clone, Copy)]
struct TechView {
    tech: &'static Technology,
    layer: &'static Layer,
}

impl TechLayerMapApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, offline: bool) -> Self {
        let trend_client = if offline {
            tracing::info!("offline mode: trend lookups disabled");
            None
        } else {
            match TrendClient::new() {
                Ok(client) => Some(Arc::new(client)),
                Err(error) => {
                    tracing::warn!("trend lookups disabled: {error:#}");
                    None
                }
            }
        };

        let catalog = Catalog::new();
        tracing::info!(
            "catalog ready: {} layers, {} technologies",
            catalog.layer_count(),
            catalog.technology_count()
        );

        let (completion_tx, completion_rx) = mpsc::channel();

        Self {
            model: ViewModel::new(catalog, trend_client.is_some()),
            trend_client,
            completion_tx,
            completion_rx,
        }
    }

    fn spawn_trend_fetches(&self, ctx: &Context, tech_names: Vec<&'static str>) {
        let Some(client) = &self.trend_client else {
            return;
        };

        for tech_name in tech_names {
            let client = Arc::clone(client);
            let tx = self.completion_tx.clone();
            let ctx = ctx.clone();

            thread::spawn(move || {
                let outcome = client.resolve_trend(tech_name);
                let _ = tx.send(FetchCompletion { tech_name, outcome });
                ctx.request_repaint();
            });
        }
    }
}

impl eframe::App for TechLayerMapApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.model
                .record_trend_outcome(completion.tech_name, completion.outcome);
        }

        let mut fetch_requests = Vec::new();
        self.model.show(ctx, &mut fetch_requests);
        self.spawn_trend_fetches(ctx, fetch_requests);
    }
}
