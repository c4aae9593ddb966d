//! Timed Sky Color Changes
//!
//! Drives the gradient sky through color changes on a fixed interval:
//! - Instant snaps to fresh random colors
//! - Smooth fades from the current colors to fresh random ones
//! - Ping-pong fades that alternate between two configured pairs
//!
//! A fade is not a coroutine: it is an explicit state enum advanced one step
//! per frame by [`SkyColorCycle::tick`], which also owns the switch timer.
//!
//! # Example
//!
//! ```ignore
//! use sky_core::{ColorChangeMode, ColorPair, SkyColorConfig, SkyColorPlugin};
//!
//! app.add_plugins(SkyColorPlugin {
//!     config: SkyColorConfig {
//!         mode: ColorChangeMode::PingPong,
//!         ..default()
//!     },
//! });
//! ```

use bevy::prelude::*;
use rand::Rng;

use crate::color::{random_sky_pair, ColorPair};
use crate::gradient_sky::{GradientSkyMaterial, SkyDome};

/// Ping-pong fades run slightly faster than the switch interval so a sweep
/// always finishes before the timer re-arms.
const PING_PONG_RATE: f32 = 1.1;

/// How the sky colors change when the switch timer fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorChangeMode {
    /// Overwrite both colors with fresh random samples, instantly.
    Snap,
    /// Fade from the current colors to fresh random samples.
    FadeRandom,
    /// Fade between the two configured pairs, alternating direction on each
    /// trigger.
    PingPong,
    /// Keep the configured colors forever.
    #[default]
    Static,
}

impl ColorChangeMode {
    /// Resolve a mode from the three legacy on/off switches.
    ///
    /// Priority when several are set: `Snap` > `PingPong` > `FadeRandom` >
    /// `Static`.
    pub fn from_flags(random_colors: bool, fade_random_colors: bool, ping_pong_given: bool) -> Self {
        if random_colors && !fade_random_colors {
            Self::Snap
        } else if ping_pong_given {
            Self::PingPong
        } else if random_colors && fade_random_colors {
            Self::FadeRandom
        } else {
            Self::Static
        }
    }
}

/// Which ping-pong sweep fires on the next trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepDirection {
    /// pair_a -> pair_b
    Forward,
    /// pair_b -> pair_a
    Reverse,
}

impl SweepDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }
}

/// Configuration for the color cycle. Read-only once the cycle is running
/// (the control panel writes through it, the state machine never does).
#[derive(Clone, Debug)]
pub struct SkyColorConfig {
    /// Seconds between color changes. Must be positive.
    pub switch_interval: f32,

    /// How colors change when the timer fires.
    pub mode: ColorChangeMode,

    /// Mirror the top color onto every [`SkyTintedLight`]. Harmless when no
    /// light is tagged.
    pub sync_light_color: bool,

    /// First endpoint of the ping-pong cycle, and the colors applied at
    /// startup.
    pub pair_a: ColorPair,

    /// Second endpoint of the ping-pong cycle.
    pub pair_b: ColorPair,
}

impl Default for SkyColorConfig {
    fn default() -> Self {
        Self {
            switch_interval: 5.0,
            mode: ColorChangeMode::Static,
            sync_light_color: true,
            pair_a: ColorPair::dawn(),
            pair_b: ColorPair::dusk(),
        }
    }
}

impl SkyColorConfig {
    pub fn with_mode(mut self, mode: ColorChangeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_interval(mut self, seconds: f32) -> Self {
        self.switch_interval = seconds;
        self
    }
}

/// One in-flight fade, or nothing.
///
/// `progress` only ever grows within a fade and the state returns to `Idle`
/// exactly when it crosses 1. `flip` marks ping-pong sweeps that reverse the
/// next sweep direction on completion.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Transition {
    Idle,
    Fading {
        from: ColorPair,
        to: ColorPair,
        progress: f32,
        rate: f32,
        flip: bool,
    },
}

/// The sky color state machine.
///
/// Owns the configuration, the switch timer, the active fade and the colors
/// currently applied to the sky. Writer systems copy [`Self::current`] out to
/// the dome material and the tagged light each frame.
#[derive(Resource, Clone)]
pub struct SkyColorCycle {
    pub config: SkyColorConfig,
    elapsed: f32,
    transition: Transition,
    next_sweep: SweepDirection,
    current: ColorPair,
}

impl SkyColorCycle {
    /// Create a cycle with `pair_a` applied, timer at zero and no fade
    /// running.
    pub fn new(config: SkyColorConfig) -> Self {
        let current = config.pair_a;
        Self {
            config,
            elapsed: 0.0,
            transition: Transition::Idle,
            next_sweep: SweepDirection::Forward,
            current,
        }
    }

    /// The colors currently applied to the sky.
    pub fn current(&self) -> ColorPair {
        self.current
    }

    /// Seconds accumulated since the last color change fired.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Whether a fade is in flight.
    pub fn transition_running(&self) -> bool {
        !matches!(self.transition, Transition::Idle)
    }

    /// Progress of the in-flight fade, or 0 when idle.
    pub fn progress(&self) -> f32 {
        match self.transition {
            Transition::Idle => 0.0,
            Transition::Fading { progress, .. } => progress,
        }
    }

    /// Apply a pair immediately, without touching the timer or any running
    /// fade.
    pub fn set_colors(&mut self, pair: ColorPair) {
        self.current = pair;
    }

    /// Begin a fade unless one is already in flight.
    ///
    /// This is the single entry point for starting fades, so a caller that
    /// bypasses the timer cannot race a running transition: the guard here
    /// rejects the second start instead of sharing `progress` between two
    /// sweeps.
    pub fn try_begin_fade(&mut self, from: ColorPair, to: ColorPair, rate: f32, flip: bool) -> bool {
        if self.transition_running() {
            return false;
        }
        self.transition = Transition::Fading {
            from,
            to,
            progress: 0.0,
            rate,
            flip,
        };
        true
    }

    /// Advance the cycle by one frame.
    ///
    /// The timer accumulates every frame, including while a fade runs. A
    /// frame either steps the in-flight fade or, when idle and the timer has
    /// reached the interval, fires the configured action and resets the
    /// timer. Triggers that land while a fade runs are dropped without
    /// resetting the timer, so the next change fires on the first idle frame
    /// at or past the interval.
    pub fn tick<R: Rng>(&mut self, dt: f32, rng: &mut R) {
        self.elapsed += dt;

        if self.transition_running() {
            self.step_fade(dt);
            return;
        }

        if self.elapsed < self.config.switch_interval {
            return;
        }

        match self.config.mode {
            ColorChangeMode::Snap => {
                self.current = random_sky_pair(rng);
                self.elapsed = 0.0;
            }
            ColorChangeMode::FadeRandom => {
                let to = random_sky_pair(rng);
                if self.try_begin_fade(self.current, to, 1.0, false) {
                    self.elapsed = 0.0;
                    self.step_fade(dt);
                }
            }
            ColorChangeMode::PingPong => {
                let (from, to) = match self.next_sweep {
                    SweepDirection::Forward => (self.config.pair_a, self.config.pair_b),
                    SweepDirection::Reverse => (self.config.pair_b, self.config.pair_a),
                };
                if self.try_begin_fade(from, to, PING_PONG_RATE, true) {
                    self.elapsed = 0.0;
                    self.step_fade(dt);
                }
            }
            ColorChangeMode::Static => {}
        }
    }

    /// One frame of the in-flight fade: write the colors at the current
    /// progress, then advance progress by this frame's share of the interval.
    /// Crossing 1 ends the fade; the final colors land within one tick of the
    /// target.
    fn step_fade(&mut self, dt: f32) {
        let Transition::Fading {
            from,
            to,
            mut progress,
            rate,
            flip,
        } = self.transition
        else {
            return;
        };

        self.current = from.lerp(&to, progress);
        progress += dt * rate / self.config.switch_interval;

        if progress >= 1.0 {
            self.transition = Transition::Idle;
            if flip {
                self.next_sweep = self.next_sweep.flipped();
            }
        } else {
            self.transition = Transition::Fading {
                from,
                to,
                progress,
                rate,
                flip,
            };
        }
    }
}

/// Marker for lights whose color mirrors the sky's top color.
#[derive(Component)]
pub struct SkyTintedLight;

/// System advancing the cycle once per frame.
pub fn tick_sky_colors(time: Res<Time>, mut cycle: ResMut<SkyColorCycle>) {
    let mut rng = rand::thread_rng();
    cycle.tick(time.delta_secs(), &mut rng);
}

/// System copying the current colors into every sky dome material.
pub fn apply_cycle_to_sky(
    cycle: Res<SkyColorCycle>,
    mut materials: ResMut<Assets<GradientSkyMaterial>>,
    domes: Query<&MeshMaterial3d<GradientSkyMaterial>, With<SkyDome>>,
) {
    if !cycle.is_changed() {
        return;
    }

    let pair = cycle.current();
    for material_handle in &domes {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.uniforms.bottom_color =
                Vec4::new(pair.bottom.red, pair.bottom.green, pair.bottom.blue, 1.0);
            material.uniforms.top_color =
                Vec4::new(pair.top.red, pair.top.green, pair.top.blue, 1.0);
        }
    }
}

/// System mirroring the top color onto tagged lights.
///
/// Doing nothing when no light carries [`SkyTintedLight`] is the intended
/// behavior, not an error.
pub fn apply_cycle_to_light(
    cycle: Res<SkyColorCycle>,
    mut lights: Query<&mut DirectionalLight, With<SkyTintedLight>>,
) {
    if !cycle.config.sync_light_color {
        return;
    }

    for mut light in &mut lights {
        light.color = Color::from(cycle.current().top);
    }
}

/// Plugin that inserts the cycle and registers its systems.
pub struct SkyColorPlugin {
    pub config: SkyColorConfig,
}

impl Plugin for SkyColorPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SkyColorCycle::new(self.config.clone()))
            .add_systems(
                PreUpdate,
                (tick_sky_colors, apply_cycle_to_sky, apply_cycle_to_light).chain(),
            );
    }
}
