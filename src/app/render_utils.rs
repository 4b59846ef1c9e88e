use eframe::egui::Color32;

use crate::trend::TrendBadge;

pub(super) const LIKE_ACCENT: u32 = 0xa855f7;
pub(super) const SEARCH_HIT_ACCENT: u32 = 0x0ea5e9;

pub(super) fn accent_color(token: u32) -> Color32 {
    Color32::from_rgb((token >> 16) as u8, (token >> 8) as u8, token as u8)
}

pub(super) fn accent_with_alpha(token: u32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied((token >> 16) as u8, (token >> 8) as u8, token as u8, alpha)
}

pub(super) fn badge_color(badge: TrendBadge) -> Color32 {
    match badge {
        TrendBadge::Hot => accent_color(0xef4444),
        TrendBadge::Rising => accent_color(0xf59e0b),
        TrendBadge::Stable => accent_color(0x475569),
    }
}
