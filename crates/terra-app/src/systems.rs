//! Per-frame systems and the schedule that chains them.
//!
//! Order matters: the planet is oriented before anything reads the pose,
//! and the pilot runs before the overlay so an arrival is shown the same
//! frame it happens.

use bevy_ecs::prelude::*;
use terra_planet::DayNightUniform;
use terra_solar::subsolar_point;
use tracing::info;

use crate::resources::{
    ArrivalOverlay, CameraRig, Clouds, DebugSettings, FlyRequests, FrameClock, FrameInput,
    GlobeState, LoadingState, PilotState, Shading,
};

/// Copy the driver's frame input into the clock.
pub fn advance_frame_clock(input: Res<FrameInput>, mut clock: ResMut<FrameClock>) {
    clock.wall_now = input.wall_now;
    clock.delta = input.delta;
    clock.elapsed += input.delta;
    clock.frame += 1;
}

/// Rotate the planet so the real sun lands on the scene light.
pub fn sync_planet_orientation(
    clock: Res<FrameClock>,
    debug: Res<DebugSettings>,
    mut globe: ResMut<GlobeState>,
) {
    globe.pose = globe.synchronizer.sync(clock.wall_now);

    let every = u64::from(debug.log_sun_every_frames);
    if every > 0 && clock.frame.saturating_sub(1) % every == 0 {
        let (lat, lon) = subsolar_point(globe.pose.instant);
        info!(
            instant = %globe.pose.instant,
            lat,
            lon,
            "subsolar point"
        );
    }
}

pub fn advance_clouds(clock: Res<FrameClock>, mut clouds: ResMut<Clouds>) {
    clouds.spin.advance(clock.delta);
}

/// Ease the globe in once loading finishes and refresh the shader uniform.
pub fn update_startup_fade(
    clock: Res<FrameClock>,
    loading: Res<LoadingState>,
    mut shading: ResMut<Shading>,
) {
    let gain = shading.fade.update(clock.elapsed, loading.loading);
    shading.uniform = DayNightUniform::new(shading.world_sun_direction, shading.ambient, gain);
}

/// Start a flight for each pending request. The last one wins.
pub fn dispatch_fly_requests(
    clock: Res<FrameClock>,
    mut requests: ResMut<FlyRequests>,
    mut pilot: ResMut<PilotState>,
    mut rig: ResMut<CameraRig>,
    mut overlay: ResMut<ArrivalOverlay>,
) {
    let CameraRig { pose, controls } = &mut *rig;
    for request in requests.pending.drain(..) {
        pilot.pilot.fly_to(request.target, clock.elapsed, pose, controls);
        overlay.overlay.fade_out(clock.elapsed);
    }
}

/// Advance the active flight.
pub fn update_camera_pilot(
    clock: Res<FrameClock>,
    mut pilot: ResMut<PilotState>,
    mut rig: ResMut<CameraRig>,
) {
    let CameraRig { pose, controls } = &mut *rig;
    let state = &mut *pilot;
    state.last_update = state.pilot.update(clock.elapsed, pose, controls);
}

/// Drain arrival signals and advance the curtain.
pub fn update_fade_overlay(clock: Res<FrameClock>, mut overlay: ResMut<ArrivalOverlay>) {
    let state = &mut *overlay;
    while let Ok(arrival) = state.arrivals.try_recv() {
        state.last_arrival = Some(arrival);
        state.overlay.fade_in(clock.elapsed);
    }
    state.overlay.update(clock.elapsed);
}

/// The per-frame schedule, single-threaded and strictly ordered.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.set_executor_kind(bevy_ecs::schedule::ExecutorKind::SingleThreaded);
    schedule.add_systems(
        (
            advance_frame_clock,
            sync_planet_orientation,
            advance_clouds,
            update_startup_fade,
            dispatch_fly_requests,
            update_camera_pilot,
            update_fade_overlay,
        )
            .chain(),
    );
    schedule
}
