//! ImGui panel for tweaking the sky colors at runtime.
//!
//! The host app adds `bevy_mod_imgui::ImguiPlugin` itself; this module only
//! contributes the panel. Visibility is a plain resource flag so game code
//! can show or hide the panel from anywhere.

use bevy::prelude::*;
use bevy_mod_imgui::prelude::{Condition, ImguiContext};

use crate::color_cycle::SkyColorCycle;

/// Visibility state of the sky color panel.
#[derive(Resource)]
pub struct SkyControlPanel {
    pub visible: bool,
}

impl Default for SkyControlPanel {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl SkyControlPanel {
    /// Show or hide the panel.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

fn edit_color(ui: &imgui::Ui, label: &str, color: &mut LinearRgba) {
    let mut rgb = [color.red, color.green, color.blue];
    if ui.color_edit3(label, &mut rgb) {
        *color = LinearRgba::rgb(rgb[0], rgb[1], rgb[2]);
    }
}

/// Render the sky color panel.
fn render_sky_panel(
    mut context: NonSendMut<ImguiContext>,
    panel: Res<SkyControlPanel>,
    mut cycle: ResMut<SkyColorCycle>,
) {
    if !panel.visible {
        return;
    }

    let ui = context.ui();

    ui.window("Sky Colors")
        .size([280.0, 340.0], Condition::FirstUseEver)
        .position([20.0, 20.0], Condition::FirstUseEver)
        .build(|| {
            ui.text(format!("Mode: {:?}", cycle.config.mode));
            ui.separator();

            ui.text("Pair A");
            edit_color(ui, "A bottom", &mut cycle.config.pair_a.bottom);
            edit_color(ui, "A top", &mut cycle.config.pair_a.top);

            ui.text("Pair B");
            edit_color(ui, "B bottom", &mut cycle.config.pair_b.bottom);
            edit_color(ui, "B top", &mut cycle.config.pair_b.top);

            ui.separator();

            let mut interval = cycle.config.switch_interval;
            if ui.slider("Interval (s)", 0.5f32, 30.0f32, &mut interval) {
                cycle.config.switch_interval = interval;
            }

            let mut sync = cycle.config.sync_light_color;
            if ui.checkbox("Tint light", &mut sync) {
                cycle.config.sync_light_color = sync;
            }

            ui.separator();

            ui.text(format!("Since last change: {:.1}s", cycle.elapsed()));
            if cycle.transition_running() {
                ui.text_colored(
                    [0.6, 0.8, 1.0, 1.0],
                    format!("Fading: {:.0}%", cycle.progress() * 100.0),
                );
            }
        });
}

/// Plugin that adds the sky color panel.
pub struct SkyControlPanelPlugin;

impl Plugin for SkyControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SkyControlPanel>()
            .add_systems(Update, render_sky_panel);
    }
}
