// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use taxboard::ui::design_tokens::{palette, sizing, spacing};
    use taxboard::ui::notifications::{bell, Descriptor, Engine, Kind, Toast};
    use taxboard::ui::styles::{button, container};
    use taxboard::ui::theming::ThemeMode;

    #[test]
    fn all_button_styles_are_callable() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                let _ = button::primary(&theme, status);
                let _ = button::ghost(&theme, status);
                let _ = button::selected(&theme, status);
                let _ = button::disabled()(&theme, status);
                let _ = button::link(palette::INFO_500)(&theme, status);
            }
        }
    }

    #[test]
    fn container_styles_are_callable() {
        let theme = Theme::Dark;
        let _ = container::panel(&theme);
        let _ = container::navbar(&theme);
        let _ = container::dropdown(&theme);
        let badge = container::badge(&theme);
        assert!(badge.background.is_some());
    }

    #[test]
    fn kinds_have_distinct_accent_colors() {
        let colors = [Kind::Success, Kind::Error, Kind::Warning, Kind::Info].map(Kind::color);
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn navbar_fits_bell_icon() {
        assert!(sizing::TOAST_WIDTH > 0.0);
        assert!(sizing::NAVBAR_HEIGHT > sizing::ICON_MD + spacing::SM);
    }

    #[test]
    fn notification_surfaces_render_for_every_kind() {
        let mut engine: Engine<()> = Engine::default();
        engine.enqueue(Descriptor::success("Export Complete", "Ready")).unwrap();
        engine.enqueue(Descriptor::error("Sync failed", "Timeout")).unwrap();
        engine.enqueue(Descriptor::warning("Anomaly", "Large transfer")).unwrap();
        engine
            .enqueue(Descriptor::info("Classified", "Airdrop").with_action("Undo", ()))
            .unwrap();

        let _ = Toast::view_overlay(&engine);
        let _ = bell::view_button(&engine, true);
        let _ = bell::view_dropdown(&engine);
    }

    #[test]
    fn explicit_theme_modes_are_stable() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
