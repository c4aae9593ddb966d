//! Gradient skybox tinting for Bevy scenes.
//!
//! This crate provides:
//! - A two-color gradient sky dome material
//! - Timed color changes: instant snaps, random fades, ping-pong fades
//! - Optional mirroring of the sky's top color onto a tagged scene light
//! - An ImGui control panel for live tweaking

pub mod color;
pub mod color_cycle;
pub mod control_panel;
pub mod gradient_sky;

pub use color::{lerp_color, random_sky_color, random_sky_pair, ColorPair};
pub use color_cycle::{
    apply_cycle_to_light, apply_cycle_to_sky, tick_sky_colors, ColorChangeMode, SkyColorConfig,
    SkyColorCycle, SkyColorPlugin, SkyTintedLight, SweepDirection,
};
pub use control_panel::{SkyControlPanel, SkyControlPanelPlugin};
pub use gradient_sky::{
    GradientSkyConfig, GradientSkyMaterial, GradientSkyPlugin, GradientSkyUniforms, SkyDome,
};
