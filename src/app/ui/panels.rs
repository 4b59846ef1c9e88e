use eframe::egui::{self, Align, Context, Layout, RichText, Ui};

use super::super::ViewModel;
use super::super::render_utils::{LIKE_ACCENT, accent_color, accent_with_alpha};

impl ViewModel {
    pub(in crate::app) fn show(&mut self, ctx: &Context, fetch_requests: &mut Vec<&'static str>) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| self.draw_top_bar(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(
                                "기술 스택의 레이어 구조를 한눈에 · 기술을 클릭하면 연관 기술이 표시돼요",
                            )
                            .weak(),
                        );
                    });
                    ui.add_space(10.0);

                    self.draw_search_dropdown(ui, fetch_requests);
                    if self.show_favorites {
                        self.draw_favorites_panel(ui, fetch_requests);
                    }

                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("DATA FLOWS ↓ BOTTOM TO TOP").small().weak());
                    });
                    ui.add_space(8.0);

                    self.draw_layer_stack(ui, fetch_requests);

                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("TECH LAYER MAP · MVP v0.2").small().weak());
                    });
                });
        });
    }

    fn draw_top_bar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("Tech Layer Map");
            ui.label(
                RichText::new("DATA & SOFTWARE ENGINEERING")
                    .small()
                    .color(accent_color(0x4f46e5)),
            );
            ui.separator();
            ui.label(format!("layers: {}", self.catalog.layer_count()));
            ui.label(format!("technologies: {}", self.catalog.technology_count()));
            ui.separator();

            ui.add(
                egui::TextEdit::singleline(&mut self.search)
                    .desired_width(260.0)
                    .hint_text("기술 검색... (예: Kafka, PyTorch)"),
            );
            if !self.search.is_empty() && ui.small_button("✕").clicked() {
                self.search.clear();
            }

            let favorites_text = if self.liked_count() > 0 {
                format!("♥ ({})", self.liked_count())
            } else {
                "♡ 좋아요".to_owned()
            };
            if ui
                .selectable_label(self.show_favorites, favorites_text)
                .clicked()
            {
                self.toggle_favorites_panel();
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if !self.trend_lookups_enabled {
                    ui.label(RichText::new("trend lookups off").weak());
                }
            });
        });
    }

    fn draw_search_dropdown(&mut self, ui: &mut Ui, fetch_requests: &mut Vec<&'static str>) {
        if self.search.trim().is_empty() {
            return;
        }

        let results = self.search_results();
        let mut chosen: Option<&'static str> = None;

        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .stroke(egui::Stroke::new(
                1.0,
                ui.visuals().widgets.noninteractive.bg_stroke.color,
            ))
            .inner_margin(egui::Margin::same(8))
            .corner_radius(4.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                if results.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("검색 결과가 없어요").weak());
                    });
                    return;
                }

                for view in &results {
                    let row = egui::Frame::new()
                        .inner_margin(egui::Margin::symmetric(8, 6))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(view.layer.name_ko)
                                        .small()
                                        .color(accent_color(view.layer.accent)),
                                );
                                ui.label(RichText::new(view.tech.name).strong());
                                ui.label(RichText::new(view.tech.desc).small().weak());
                            });
                        })
                        .response
                        .interact(egui::Sense::click());
                    if row.clicked() {
                        chosen = Some(view.tech.name);
                    }
                }
            });
        ui.add_space(8.0);

        if let Some(name) = chosen {
            fetch_requests.extend(self.select_search_result(name));
        }
    }

    fn draw_favorites_panel(&mut self, ui: &mut Ui, fetch_requests: &mut Vec<&'static str>) {
        let liked = self.liked_technologies();
        let mut chosen: Option<&'static str> = None;
        let mut unliked: Option<&'static str> = None;

        egui::Frame::new()
            .fill(ui.visuals().extreme_bg_color)
            .stroke(egui::Stroke::new(1.0, accent_with_alpha(LIKE_ACCENT, 96)))
            .inner_margin(egui::Margin::same(12))
            .corner_radius(4.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new("♥ 좋아요한 기술")
                        .small()
                        .color(accent_color(LIKE_ACCENT)),
                );
                ui.add_space(6.0);

                if liked.is_empty() {
                    ui.label(RichText::new("아직 없어요. 기술 카드의 ♡ 버튼을 눌러보세요!").weak());
                    return;
                }

                ui.horizontal_wrapped(|ui| {
                    for view in &liked {
                        let chip = egui::Frame::new()
                            .fill(ui.visuals().faint_bg_color)
                            .stroke(egui::Stroke::new(
                                1.0,
                                accent_with_alpha(view.layer.accent, 80),
                            ))
                            .inner_margin(egui::Margin::symmetric(8, 5))
                            .corner_radius(4.0)
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.label(
                                        RichText::new(view.layer.name_ko)
                                            .small()
                                            .color(accent_color(view.layer.accent)),
                                    );
                                    ui.label(RichText::new(view.tech.name).strong());
                                    let remove = RichText::new("♥").color(accent_color(LIKE_ACCENT));
                                    if ui.small_button(remove).clicked() {
                                        unliked = Some(view.tech.name);
                                    }
                                });
                            })
                            .response
                            .interact(egui::Sense::click());
                        if chip.clicked() {
                            chosen = Some(view.tech.name);
                        }
                    }
                });
            });
        ui.add_space(8.0);

        // A click on the remove heart also hits the chip, so it wins.
        if let Some(name) = unliked {
            self.toggle_like(name);
        } else if let Some(name) = chosen {
            fetch_requests.extend(self.select_favorite(name));
        }
    }
}
