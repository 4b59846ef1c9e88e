use eframe::egui::{self, RichText, Ui};

use crate::util::format_count;

use super::super::render_utils::{LIKE_ACCENT, accent_color, accent_with_alpha, badge_color};
use super::super::{TrendEntry, ViewModel};

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("상세 정보");
        ui.add_space(6.0);

        let Some(view) = self.selected_view() else {
            ui.label(RichText::new("기술 카드를 클릭하면 상세 정보가 표시돼요").weak());
            return;
        };

        ui.label(
            RichText::new(view.layer.name_ko)
                .small()
                .color(accent_color(view.layer.accent)),
        );
        ui.label(RichText::new(view.tech.name).strong().size(18.0));
        ui.add_space(4.0);
        ui.label(view.tech.desc);
        ui.add_space(8.0);

        match self.trend_entry(view.tech.name) {
            Some(TrendEntry::Ready(record)) => {
                egui::Frame::new()
                    .fill(ui.visuals().extreme_bg_color)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .corner_radius(4.0)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(record.badge.label())
                                    .strong()
                                    .color(badge_color(record.badge)),
                            );
                            ui.label(
                                RichText::new(format!("★ {} stars", format_count(record.stars)))
                                    .small()
                                    .weak(),
                            );
                        });
                        ui.hyperlink_to(
                            RichText::new(format!("{} →", record.repo_name)).small(),
                            &record.url,
                        );
                    });
                ui.add_space(8.0);
            }
            Some(TrendEntry::Pending) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("트렌드 로딩 중...").small().weak());
                });
                ui.add_space(8.0);
            }
            _ => {}
        }

        if !view.tech.related.is_empty() {
            ui.label(
                RichText::new("연관 기술 · 레이어를 열면 하이라이트돼요")
                    .small()
                    .weak(),
            );
            ui.add_space(4.0);
            ui.horizontal_wrapped(|ui| {
                for related in view.tech.related {
                    let accent = self.catalog.accent_of(related);
                    let text = match accent {
                        Some(token) => RichText::new(*related).small().color(accent_color(token)),
                        None => RichText::new(*related).small().weak(),
                    };
                    let stroke = match accent {
                        Some(token) => accent_with_alpha(token, 96),
                        None => ui.visuals().widgets.noninteractive.bg_stroke.color,
                    };
                    egui::Frame::new()
                        .fill(ui.visuals().faint_bg_color)
                        .stroke(egui::Stroke::new(1.0, stroke))
                        .inner_margin(egui::Margin::symmetric(8, 4))
                        .corner_radius(3.0)
                        .show(ui, |ui| {
                            ui.label(text);
                        });
                }
            });
            ui.add_space(8.0);
        }

        ui.separator();
        ui.add_space(4.0);

        let mut like_toggled = false;
        let mut close = false;
        ui.horizontal(|ui| {
            let like = if self.is_liked(view.tech.name) {
                RichText::new("♥").color(accent_color(LIKE_ACCENT))
            } else {
                RichText::new("♡")
            };
            if ui.button(like).clicked() {
                like_toggled = true;
            }
            if ui.button("닫기").clicked() {
                close = true;
            }
        });

        if like_toggled {
            self.toggle_like(view.tech.name);
        }
        if close {
            self.clear_selection();
        }
    }
}
