use eframe::egui::{self, Align, Layout, RichText, Ui};

use crate::catalog::Layer;
use crate::util::format_count;

use super::super::render_utils::{
    LIKE_ACCENT, SEARCH_HIT_ACCENT, accent_color, accent_with_alpha, badge_color,
};
use super::super::{TrendEntry, ViewModel};

const COLLAPSED_CHIP_COUNT: usize = 3;

impl ViewModel {
    pub(in crate::app) fn draw_layer_stack(
        &mut self,
        ui: &mut Ui,
        fetch_requests: &mut Vec<&'static str>,
    ) {
        let mut toggled_layer: Option<&'static str> = None;
        let mut clicked_tech: Option<&'static str> = None;
        let mut toggled_like: Option<&'static str> = None;

        // Catalog order is bottom-up, so the topmost layer renders first.
        for (position, layer) in self.catalog.layers().iter().enumerate().rev() {
            let expanded = self.is_expanded(layer.id);
            let has_search_match = !self.search.trim().is_empty()
                && layer.techs.iter().any(|tech| self.is_search_hit(tech.name));

            let row_fill = if expanded {
                accent_with_alpha(layer.accent, 21)
            } else {
                ui.visuals().extreme_bg_color
            };
            let row_stroke = if expanded {
                accent_with_alpha(layer.accent, 96)
            } else if has_search_match {
                accent_with_alpha(layer.accent, 64)
            } else {
                ui.visuals().widgets.noninteractive.bg_stroke.color
            };

            let row = egui::Frame::new()
                .fill(row_fill)
                .stroke(egui::Stroke::new(1.0, row_stroke))
                .inner_margin(egui::Margin::symmetric(14, 10))
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("L{}", position + 1))
                                .small()
                                .color(accent_color(layer.accent)),
                        );
                        ui.vertical(|ui| {
                            ui.set_width(150.0);
                            let name_ko = RichText::new(layer.name_ko).strong();
                            let name_ko = if expanded {
                                name_ko.color(accent_color(layer.accent))
                            } else {
                                name_ko
                            };
                            ui.label(name_ko);
                            ui.label(RichText::new(layer.name).small().weak());
                        });
                        ui.vertical(|ui| {
                            ui.label(RichText::new(layer.description).small());
                            ui.label(RichText::new(layer.subdesc).small().weak());
                        });
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(RichText::new(if expanded { "▲" } else { "▼" }).weak());
                            if !expanded {
                                if layer.techs.len() > COLLAPSED_CHIP_COUNT {
                                    let overflow = layer.techs.len() - COLLAPSED_CHIP_COUNT;
                                    ui.label(RichText::new(format!("+{overflow}")).small().weak());
                                }
                                // Laid out right to left, reversed to keep catalog order.
                                for tech in layer.techs.iter().take(COLLAPSED_CHIP_COUNT).rev() {
                                    let chip = if self.is_liked(tech.name) {
                                        RichText::new(format!("{} ♥", tech.name))
                                            .small()
                                            .color(accent_color(LIKE_ACCENT))
                                    } else {
                                        RichText::new(tech.name).small().weak()
                                    };
                                    ui.label(chip);
                                }
                            }
                        });
                    });
                })
                .response
                .interact(egui::Sense::click());
            if row.clicked() {
                toggled_layer = Some(layer.id);
            }

            if expanded {
                self.draw_tech_grid(ui, layer, &mut clicked_tech, &mut toggled_like);
            }
            ui.add_space(3.0);
        }

        // A like click also hits the card under it, so it wins.
        if let Some(name) = toggled_like {
            self.toggle_like(name);
        } else if let Some(name) = clicked_tech {
            self.select_technology(name);
        }
        if let Some(layer_id) = toggled_layer {
            fetch_requests.extend(self.expand_layer(layer_id));
        }
    }

    fn draw_tech_grid(
        &self,
        ui: &mut Ui,
        layer: &'static Layer,
        clicked_tech: &mut Option<&'static str>,
        toggled_like: &mut Option<&'static str>,
    ) {
        egui::Frame::new()
            .fill(accent_color(0x080d18))
            .stroke(egui::Stroke::new(1.0, accent_with_alpha(layer.accent, 48)))
            .inner_margin(egui::Margin::same(12))
            .corner_radius(4.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                ui.horizontal_wrapped(|ui| {
                    for tech in layer.techs {
                        let selected = self.is_selected(tech.name);
                        let related = self.is_related(tech.name);
                        let search_hit = self.is_search_hit(tech.name);

                        let (card_fill, card_stroke) = if selected {
                            (accent_with_alpha(layer.accent, 32), accent_color(layer.accent))
                        } else if related {
                            (
                                accent_with_alpha(layer.accent, 13),
                                accent_with_alpha(layer.accent, 96),
                            )
                        } else if search_hit {
                            (
                                accent_color(0x0a1828),
                                accent_with_alpha(SEARCH_HIT_ACCENT, 96),
                            )
                        } else {
                            (
                                ui.visuals().faint_bg_color,
                                ui.visuals().widgets.noninteractive.bg_stroke.color,
                            )
                        };

                        let card = egui::Frame::new()
                            .fill(card_fill)
                            .stroke(egui::Stroke::new(1.0, card_stroke))
                            .inner_margin(egui::Margin::symmetric(10, 8))
                            .corner_radius(4.0)
                            .show(ui, |ui| {
                                ui.set_width(170.0);
                                ui.horizontal(|ui| {
                                    let name = RichText::new(tech.name).strong();
                                    let name = if selected || related {
                                        name.color(accent_color(layer.accent))
                                    } else {
                                        name
                                    };
                                    ui.label(name);
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                        let like = if self.is_liked(tech.name) {
                                            RichText::new("♥").color(accent_color(LIKE_ACCENT))
                                        } else {
                                            RichText::new("♡").weak()
                                        };
                                        if ui.small_button(like).clicked() {
                                            *toggled_like = Some(tech.name);
                                        }
                                    });
                                });
                                ui.label(RichText::new(tech.desc).small().weak());

                                match self.trend_entry(tech.name) {
                                    Some(TrendEntry::Pending) => {
                                        ui.horizontal(|ui| {
                                            ui.spinner();
                                            ui.label(RichText::new("로딩 중...").small().weak());
                                        });
                                    }
                                    Some(TrendEntry::Ready(record)) => {
                                        ui.horizontal(|ui| {
                                            ui.label(
                                                RichText::new(record.badge.label())
                                                    .small()
                                                    .strong()
                                                    .color(badge_color(record.badge)),
                                            );
                                            ui.label(
                                                RichText::new(format!(
                                                    "★ {}",
                                                    format_count(record.stars)
                                                ))
                                                .small()
                                                .weak(),
                                            );
                                        });
                                    }
                                    _ => {}
                                }

                                if related {
                                    ui.label(
                                        RichText::new("↔ 연관 기술")
                                            .small()
                                            .color(accent_color(layer.accent)),
                                    );
                                }
                                if search_hit {
                                    ui.label(
                                        RichText::new("🔍 검색 결과")
                                            .small()
                                            .color(accent_color(SEARCH_HIT_ACCENT)),
                                    );
                                }
                            })
                            .response
                            .interact(egui::Sense::click());
                        if card.clicked() {
                            *clicked_tech = Some(tech.name);
                        }
                    }
                });
            });
    }
}
