// Color tokens
// Theme-reactive signals; oklch keeps the light/dark pairs perceptually matched

use super::theme::{theme, Theme};
use zoon::*;

// Neutral scale

pub fn neutral_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(99% 0.025 255)",
        Theme::Dark => "oklch(12% 0.025 255)",
    })
}

pub fn neutral_4() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(90% 0.025 255)",
        Theme::Dark => "oklch(22% 0.025 255)",
    })
}

pub fn neutral_11() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(15% 0.025 255)",
        Theme::Dark => "oklch(95% 0.025 255)",
    })
}

// Primary scale

pub fn primary_6() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(65% 0.13 250)",
        Theme::Dark => "oklch(55% 0.13 250)",
    })
}

pub fn primary_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(55% 0.16 250)",
        Theme::Dark => "oklch(65% 0.16 250)",
    })
}
