//! lookswitch - broadcast layer switcher
//!
//! Binary entry point: loads settings and trigger bindings, builds the demo
//! scene, registers the eight triggers and hands the terminal key host the
//! event loop. The demo host stands in for a real compositor; everything
//! below the capability traits behaves exactly as it would against one.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing::info;

mod app;
mod config;
mod domain;
mod host;
mod input;

use app::Switcher;
use config::Settings;
use domain::layer::LogicalLayer;
use host::memory::MemoryScene;
use input::{TRIGGERS, TriggerBindings, TriggerManager};

/// Hotkey-style switcher for broadcast layer looks, driven from the terminal
#[derive(Parser, Debug)]
#[command(name = "lookswitch")]
#[command(version)]
#[command(about = "Switches visibility and geometry presets of broadcast layers")]
struct Args {
    /// Path to the TOML settings file (defaults used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the trigger bindings file
    #[arg(long, default_value = "lookswitch-bindings.toml")]
    bindings: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging();

    let settings = Settings::load(args.config.as_deref())?;

    let mut bindings = TriggerBindings::load(&args.bindings)?;
    bindings.fill_defaults();
    bindings.save(&args.bindings)?;

    let scene = demo_scene(&settings);
    let switcher = Arc::new(Mutex::new(Switcher::new(scene, settings)));

    let mut manager = TriggerManager::new();
    for spec in TRIGGERS {
        let switcher = Arc::clone(&switcher);
        manager.register(
            spec,
            Box::new(move |event| switcher.lock().unwrap().handle(spec.action, event)),
        )?;
    }
    info!(triggers = manager.registered_count(), "switcher ready");

    print_banner(&bindings);

    let key_map = bindings.key_map();
    let status_source = Arc::clone(&switcher);
    input::keys::run(&key_map, &mut manager, move || {
        let switcher = status_source.lock().unwrap();
        let visible = switcher.scene().visible_names().join(", ");
        // Raw mode needs explicit carriage returns
        print!("{}  |  visible: [{visible}]\r\n", switcher.status_line());
        let _ = io::stdout().flush();
    })?;

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Scene the demo host starts from: every configured layer present, with
/// the event board nested one group deep to exercise group resolution
fn demo_scene(settings: &Settings) -> MemoryScene {
    let mut scene = MemoryScene::new();
    let overlays = scene.add_group("Overlays");
    scene.add_child(overlays, settings.display_name(LogicalLayer::Event));
    for layer in LogicalLayer::ALL {
        if layer != LogicalLayer::Event {
            scene.add_item(settings.display_name(layer));
        }
    }
    scene
}

fn print_banner(bindings: &TriggerBindings) {
    println!("lookswitch - press a bound key to switch looks, Esc or q to quit");
    for spec in TRIGGERS {
        if let Some(key) = bindings.key_for(spec.id) {
            println!("  [{key}] {}", spec.description);
        }
    }
    println!();
}
