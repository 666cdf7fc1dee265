use std::path::PathBuf;
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clickables::interaction::InteractionContext;
use clickables::plugins::playback::{PlaybackPlugin, PointerScript};
use clickables::scene_file::SceneDescription;
use clickables::settings::Settings;
use clickables::{DebugOverlays, InteractiveTarget};

fn main() -> anyhow::Result<()> {
    // RUST_LOG wins; otherwise info, with overlay panels under debug.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init()
        .ok();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demos/scene.toml"));
    let scene = SceneDescription::load(&path)?;

    let mut app = App::new();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        scene.playback.frame_secs,
    )))
    .add_plugins(MinimalPlugins)
    .add_plugins((clickables::CorePlugin, PlaybackPlugin));

    let defaults = app.world().resource::<Settings>().defaults.clone();
    let spawned = scene.spawn_into(app.world_mut(), &defaults);

    for (name, &entity) in &spawned {
        let Some(mut target) = app.world_mut().get_mut::<InteractiveTarget>(entity) else {
            continue;
        };
        let label = name.clone();
        target
            .notifications
            .click
            .push(move |_| info!(object = %label, "clicked"));
        let label = name.clone();
        target
            .notifications
            .exit
            .push(move |_| info!(object = %label, "pointer left"));
    }

    let script = PointerScript::resolve(&scene, &spawned)?;
    info!("Playing {} pointer steps", script.len());
    app.insert_resource(script);

    while !app.world().resource::<PointerScript>().is_finished() {
        app.update();
    }
    // One more frame so the last step's effects settle.
    app.update();

    let world = app.world();
    let hover_owner = world.resource::<InteractionContext>().hover_owner();
    let mut names: Vec<_> = spawned.iter().collect();
    names.sort();
    for (name, &entity) in names {
        let Some(target) = world.get::<InteractiveTarget>(entity) else {
            continue;
        };
        info!(
            object = %name,
            clicks = target.total_click_count(),
            hovered = hover_owner == Some(entity),
            clickable = target.is_clickable(),
            "summary"
        );
        if let Some(panel) = world.resource::<DebugOverlays>().get(entity) {
            info!("\n{panel}");
        }
    }

    Ok(())
}
