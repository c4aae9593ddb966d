use bevy::prelude::*;
use sky_core::{
    ColorChangeMode, ColorPair, GradientSkyPlugin, SkyColorConfig, SkyColorPlugin,
    SkyControlPanel, SkyControlPanelPlugin, SkyTintedLight,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(bevy_mod_imgui::ImguiPlugin::default())
        .add_plugins(GradientSkyPlugin)
        .add_plugins(SkyColorPlugin {
            config: SkyColorConfig {
                switch_interval: 6.0,
                mode: ColorChangeMode::PingPong,
                sync_light_color: true,
                pair_a: ColorPair::dawn(),
                pair_b: ColorPair::dusk(),
            },
        })
        .add_plugins(SkyControlPanelPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, toggle_panel)
        .run();
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.0, 14.0).looking_at(Vec3::new(0.0, 2.0, 0.0), Vec3::Y),
    ));

    // The light the sky cycle tints
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
        SkyTintedLight,
    ));

    let ground = materials.add(StandardMaterial {
        base_color: Color::srgb(0.25, 0.3, 0.25),
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(60.0, 60.0))),
        MeshMaterial3d(ground),
        Transform::IDENTITY,
    ));

    // A few pillars so the light tint reads against something
    let stone = materials.add(StandardMaterial {
        base_color: Color::srgb(0.6, 0.6, 0.65),
        ..default()
    });
    for (x, height) in [(-6.0, 2.0), (-1.5, 4.0), (3.0, 1.5), (7.0, 3.0)] {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(2.0, height, 2.0))),
            MeshMaterial3d(stone.clone()),
            Transform::from_xyz(x, height / 2.0, -4.0),
        ));
    }
}

/// Tab toggles the color panel.
fn toggle_panel(keys: Res<ButtonInput<KeyCode>>, mut panel: ResMut<SkyControlPanel>) {
    if keys.just_pressed(KeyCode::Tab) {
        let visible = !panel.visible;
        panel.set_visible(visible);
    }
}
