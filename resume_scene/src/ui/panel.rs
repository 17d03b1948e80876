//! Scrollable CV panel drawn over the backdrop with egui.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::scene::{BackdropSet, PointerCapture, RevealClicked};
use crate::ui::content::{ContentTable, Entry, Language, ResumeContent, Section};

const INK: egui::Color32 = egui::Color32::from_rgb(30, 40, 52);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 119, 187);
const MUTED: egui::Color32 = egui::Color32::from_rgb(110, 125, 140);

/// Whether the CV panel is shown. Owned here, flipped by the reveal cube.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelVisibility(pub bool);

impl Default for PanelVisibility {
    fn default() -> Self {
        Self(true)
    }
}

#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveLanguage(pub Language);

pub fn panel_plugin(app: &mut App) {
    let table = match ContentTable::embedded() {
        Ok(table) => table,
        Err(err) => {
            warn!("résumé panel disabled: {err}");
            return;
        }
    };

    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
    app.add_event::<RevealClicked>()
        .insert_resource(table)
        .init_resource::<PanelVisibility>()
        .init_resource::<ActiveLanguage>()
        .add_systems(
            Update,
            (
                panel_ui_system.in_set(BackdropSet::Ui),
                toggle_panel_on_reveal.in_set(BackdropSet::Animate),
            ),
        );
}

pub fn toggle_panel_on_reveal(
    mut clicks: EventReader<RevealClicked>,
    mut visibility: ResMut<PanelVisibility>,
) {
    let toggles = clicks.read().count();
    if toggles % 2 == 1 {
        visibility.0 = !visibility.0;
        info!(
            "résumé panel {}",
            if visibility.0 { "shown" } else { "hidden" }
        );
    }
}

fn panel_ui_system(
    mut contexts: EguiContexts,
    table: Res<ContentTable>,
    visibility: Res<PanelVisibility>,
    mut language: ResMut<ActiveLanguage>,
    mut capture: ResMut<PointerCapture>,
) {
    let ctx = contexts.ctx_mut();

    if visibility.0 {
        let mut selected = language.0;
        let max_height = (ctx.screen_rect().height() - 48.0).max(120.0);
        egui::Window::new("resume")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::RIGHT_TOP, [-24.0, 24.0])
            .default_width(540.0)
            .max_height(max_height)
            .frame(panel_frame())
            .show(ctx, |ui| {
                ui.visuals_mut().override_text_color = Some(INK);
                draw_resume(ui, table.get(selected), &mut selected);
            });

        if selected != language.0 {
            language.0 = selected;
            info!("résumé language switched to {selected}");
        }
    }

    capture.over_ui = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
}

fn panel_frame() -> egui::Frame {
    egui::Frame::default()
        .fill(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 205))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(178, 204, 214)))
        .inner_margin(egui::Margin::same(22))
        .corner_radius(egui::CornerRadius::same(24))
}

fn draw_resume(ui: &mut egui::Ui, content: &ResumeContent, language: &mut Language) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(&content.name).size(28.0).strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::ComboBox::from_id_salt("language")
                .selected_text(language.label())
                .show_ui(ui, |ui| {
                    for option in Language::ALL {
                        ui.selectable_value(language, option, option.label());
                    }
                });
        });
    });
    ui.add_space(4.0);

    for line in &content.contact {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&line.label).strong());
            match &line.url {
                Some(url) => ui.hyperlink_to(line.value.as_str(), url),
                None => ui.label(line.value.as_str()),
            };
        });
    }
    ui.separator();

    ui.label(
        egui::RichText::new(&content.headline)
            .size(17.0)
            .strong()
            .color(ACCENT),
    );
    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for section in &content.sections {
                draw_section(ui, section);
            }
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(&content.reveal_hint)
                    .size(11.0)
                    .italics()
                    .color(MUTED),
            );
        });
}

fn draw_section(ui: &mut egui::Ui, section: &Section) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(&section.title).size(18.0).strong());
    ui.separator();
    if let Some(intro) = &section.intro {
        ui.label(intro.as_str());
    }
    for entry in &section.entries {
        draw_entry(ui, entry);
    }
}

fn draw_entry(ui: &mut egui::Ui, entry: &Entry) {
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        let title = egui::RichText::new(&entry.title).strong();
        match &entry.url {
            Some(url) => ui.hyperlink_to(title.color(ACCENT), url),
            None => ui.label(title),
        };
        if let Some(subtitle) = &entry.subtitle {
            ui.label(egui::RichText::new(format!("| {subtitle}")).color(MUTED));
        }
    });
    ui.indent(&entry.title, |ui| {
        for line in &entry.lines {
            ui.label(format!("• {line}"));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle_app(start_visible: bool) -> App {
        let mut app = App::new();
        app.add_event::<RevealClicked>()
            .insert_resource(PanelVisibility(start_visible))
            .add_systems(Update, toggle_panel_on_reveal);
        app
    }

    #[test]
    fn each_click_flips_visibility() {
        let mut app = toggle_app(false);

        app.world_mut().send_event(RevealClicked);
        app.update();
        assert_eq!(*app.world().resource::<PanelVisibility>(), PanelVisibility(true));

        app.world_mut().send_event(RevealClicked);
        app.update();
        assert_eq!(*app.world().resource::<PanelVisibility>(), PanelVisibility(false));
    }

    #[test]
    fn no_click_leaves_panel_alone() {
        let mut app = toggle_app(true);
        app.update();
        app.update();
        assert!(app.world().resource::<PanelVisibility>().0);
    }

    #[test]
    fn double_click_in_one_frame_cancels_out() {
        let mut app = toggle_app(true);
        app.world_mut().send_event(RevealClicked);
        app.world_mut().send_event(RevealClicked);
        app.update();
        assert!(app.world().resource::<PanelVisibility>().0);
    }
}
