//! Gradient Sky Dome
//!
//! A large inward-facing sphere with a two-color vertical-gradient material.
//! The dome follows the camera position (not rotation), so the gradient stays
//! fixed in world space.
//!
//! Usage:
//! ```ignore
//! app.add_plugins(GradientSkyPlugin);
//! ```

use bevy::{
    mesh::MeshVertexBufferLayoutRef,
    pbr::{Material, MaterialPipeline, MaterialPipelineKey},
    prelude::*,
    render::render_resource::{
        AsBindGroup, CompareFunction, Face, RenderPipelineDescriptor, ShaderType,
        SpecializedMeshPipelineError,
    },
    shader::ShaderRef,
};

use crate::color::ColorPair;
use crate::color_cycle::SkyColorCycle;

/// Plugin that adds gradient sky rendering.
pub struct GradientSkyPlugin;

impl Plugin for GradientSkyPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<GradientSkyMaterial>::default())
            .init_resource::<GradientSkyConfig>()
            .add_systems(Startup, setup_sky_dome)
            .add_systems(PostUpdate, sky_follow_camera);
    }
}

/// Configuration for the sky dome.
#[derive(Resource)]
pub struct GradientSkyConfig {
    /// Radius of the sky dome
    pub radius: f32,
    /// Exponent shaping the vertical falloff (1.0 = linear blend)
    pub exponent: f32,
    /// Whether the sky dome is enabled
    pub enabled: bool,
}

impl Default for GradientSkyConfig {
    fn default() -> Self {
        Self {
            radius: 900.0,
            exponent: 1.0,
            enabled: true,
        }
    }
}

/// Marker component for the sky dome entity.
#[derive(Component)]
pub struct SkyDome;

/// Custom material for the sky dome.
#[derive(Asset, AsBindGroup, Clone, TypePath)]
pub struct GradientSkyMaterial {
    #[uniform(0)]
    pub uniforms: GradientSkyUniforms,
}

/// Uniforms passed to the gradient sky shader.
#[derive(Clone, Copy, Default, ShaderType)]
pub struct GradientSkyUniforms {
    /// Horizon color
    pub bottom_color: Vec4,
    /// Zenith color
    pub top_color: Vec4,
    /// Vertical falloff exponent
    pub exponent: f32,
    /// Padding for alignment
    pub _padding: Vec3,
}

impl Material for GradientSkyMaterial {
    fn fragment_shader() -> ShaderRef {
        "shaders/gradient_sky.wgsl".into()
    }

    fn vertex_shader() -> ShaderRef {
        "shaders/gradient_sky.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Opaque
    }

    fn specialize(
        _pipeline: &MaterialPipeline,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // Use standard mesh attributes: position, normal, uv
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_NORMAL.at_shader_location(1),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];

        // Render inside faces (we're inside the dome looking out)
        descriptor.primitive.cull_mode = Some(Face::Front);

        // Sky renders at max depth - only draws where nothing else has been drawn
        if let Some(ref mut depth_stencil) = descriptor.depth_stencil {
            depth_stencil.depth_write_enabled = false;
            depth_stencil.depth_compare = CompareFunction::GreaterEqual;
        }

        Ok(())
    }
}

/// System to spawn the sky dome at startup.
///
/// Initial colors come from the [`SkyColorCycle`] when one is installed, so
/// the first rendered frame already shows the configured pair.
fn setup_sky_dome(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<GradientSkyMaterial>>,
    config: Res<GradientSkyConfig>,
    cycle: Option<Res<SkyColorCycle>>,
) {
    if !config.enabled {
        return;
    }

    let initial = cycle.map(|c| c.current()).unwrap_or_else(ColorPair::dawn);

    let material = materials.add(GradientSkyMaterial {
        uniforms: GradientSkyUniforms {
            bottom_color: Vec4::new(
                initial.bottom.red,
                initial.bottom.green,
                initial.bottom.blue,
                1.0,
            ),
            top_color: Vec4::new(initial.top.red, initial.top.green, initial.top.blue, 1.0),
            exponent: config.exponent,
            _padding: Vec3::ZERO,
        },
    });

    let mesh = meshes.add(Sphere::new(config.radius).mesh().uv(64, 32));

    // Spawn at origin; follows the camera afterwards
    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(Vec3::ZERO),
        SkyDome,
    ));

    info!("Sky dome spawned with radius {}", config.radius);
}

/// System to make the sky dome follow the camera position (not rotation).
fn sky_follow_camera(
    camera_query: Query<&Transform, With<Camera3d>>,
    mut dome_query: Query<&mut Transform, (With<SkyDome>, Without<Camera3d>)>,
) {
    let Ok(camera_transform) = camera_query.single() else {
        return;
    };

    for mut dome_transform in &mut dome_query {
        // Only copy position, not rotation
        dome_transform.translation = camera_transform.translation;
    }
}
