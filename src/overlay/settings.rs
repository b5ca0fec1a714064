// SPDX-License-Identifier: MPL-2.0
//! Validated timings and labels the overlay runs with.

use super::dialog::DefaultLabels;
use crate::config::{self, Config};
use crate::domain::ui::{Breakpoint, ToastTimeout, TransitionDuration};
use crate::i18n::I18n;

/// Runtime settings, clamped into their newtypes.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlaySettings {
    pub toast_timeout: ToastTimeout,
    pub menu_duration: TransitionDuration,
    pub dialog_duration: TransitionDuration,
    pub backdrop_fade: TransitionDuration,
    pub backdrop_click_duration: TransitionDuration,
    pub aside_duration: TransitionDuration,
    pub breakpoint: Breakpoint,
    pub dialog_labels: DefaultLabels,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            toast_timeout: ToastTimeout::default(),
            menu_duration: TransitionDuration::from_secs(config::DEFAULT_MENU_DURATION_SECS),
            dialog_duration: TransitionDuration::from_secs(config::DEFAULT_DIALOG_DURATION_SECS),
            backdrop_fade: TransitionDuration::from_millis(config::DEFAULT_BACKDROP_FADE_MS),
            backdrop_click_duration: TransitionDuration::from_secs(
                config::DEFAULT_BACKDROP_CLICK_DURATION_SECS,
            ),
            aside_duration: TransitionDuration::from_millis(config::DEFAULT_ASIDE_DURATION_MS),
            breakpoint: Breakpoint::default(),
            dialog_labels: DefaultLabels::default(),
        }
    }
}

impl OverlaySettings {
    /// Builds settings from a loaded config, clamping out-of-range values.
    #[must_use]
    pub fn from_config(config: &Config, i18n: &I18n) -> Self {
        let defaults = Self::default();
        Self {
            toast_timeout: config
                .toast
                .timeout_secs
                .map_or(defaults.toast_timeout, ToastTimeout::from_secs),
            menu_duration: config
                .menu
                .duration_secs
                .map_or(defaults.menu_duration, TransitionDuration::from_secs),
            dialog_duration: config
                .dialog
                .duration_secs
                .map_or(defaults.dialog_duration, TransitionDuration::from_secs),
            backdrop_fade: config
                .backdrop
                .fade_ms
                .map_or(defaults.backdrop_fade, TransitionDuration::from_millis),
            backdrop_click_duration: config
                .backdrop
                .click_duration_secs
                .map_or(defaults.backdrop_click_duration, TransitionDuration::from_secs),
            aside_duration: config
                .aside
                .duration_ms
                .map_or(defaults.aside_duration, TransitionDuration::from_millis),
            breakpoint: config
                .layout
                .breakpoint_px
                .map_or(defaults.breakpoint, Breakpoint::new),
            dialog_labels: DefaultLabels {
                confirm: i18n.tr("dialog-confirm"),
                cancel: i18n.tr("dialog-cancel"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::newtypes::{breakpoint_bounds, toast_bounds, transition_bounds};

    #[test]
    fn default_config_matches_default_settings() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let settings = OverlaySettings::from_config(&Config::default(), &i18n);
        assert_eq!(settings, OverlaySettings::default());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.toast.timeout_secs = Some(-3.0);
        config.menu.duration_secs = Some(99.0);
        config.layout.breakpoint_px = Some(10);

        let settings = OverlaySettings::from_config(&config, &I18n::default());
        assert_eq!(settings.toast_timeout.secs(), toast_bounds::MIN_SECS);
        assert_eq!(settings.menu_duration.secs(), transition_bounds::MAX_SECS);
        assert_eq!(settings.breakpoint.px(), breakpoint_bounds::MIN_PX);
    }

    #[test]
    fn dialog_labels_follow_locale() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        let settings = OverlaySettings::from_config(&Config::default(), &i18n);
        assert_eq!(settings.dialog_labels.cancel, "Annuler");
    }

    #[test]
    fn empty_sections_fall_back_to_defaults() {
        let mut config = Config::default();
        config.aside.duration_ms = None;
        config.backdrop.fade_ms = None;

        let settings = OverlaySettings::from_config(&config, &I18n::default());
        assert_eq!(settings.aside_duration, TransitionDuration::from_millis(300));
        assert_eq!(settings.backdrop_fade, TransitionDuration::from_millis(300));
    }
}
