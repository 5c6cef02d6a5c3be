use std::path::PathBuf;

use clap::Parser;
use relm4::prelude::*;
use zodiac_wheel::gui::app::AppModel;
use zodiac_wheel::gui::scene::Scene;
use zodiac_wheel::sys::runtime;
use zodiac_wheel::{config, events::AppEvent};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Use this config file instead of the default location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.init_config {
        let path = config::write_default_config()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let loaded = config::load_or_default(args.config.as_ref());
    let scene = Scene::new(&loaded);

    let (tx, rx) = async_channel::bounded::<AppEvent>(32);
    runtime::start_background_services(tx);

    let app = RelmApp::new("org.zodiac.wheel");
    app.run::<AppModel>((scene, rx, args.config));

    Ok(())
}
