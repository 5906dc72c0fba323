// Allow unused code for designed-but-not-yet-used APIs
// Remove these as the codebase matures
#![allow(dead_code)]

mod config;
mod display;
mod input;
mod raster;
mod raycast;
mod scenes;
mod sprite;
mod surface;
mod util;
mod vec2;

use log::{error, info, warn};
use sdl2::keyboard::Keycode;

use config::DemoConfig;
use display::{Display, InputEvent, RenderTarget};
use input::InputState;
use scenes::{LineScene, RaycastScene, Scene, SpriteScene, TriangleScene};
use surface::Surface;
use util::FrameClock;

const CONFIG_PATH: &str = "rasterbox.json";

/// Parse command line arguments over the loaded config
fn parse_args(config: &mut DemoConfig) {
    let args: Vec<String> = std::env::args().collect();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => config.vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        config.width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        config.height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            config.width = w;
                            config.height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: rasterbox [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --width W, -w W       Set window width");
                println!("  --height H, -h H      Set window height");
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1920x1080)");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                println!();
                println!("Defaults come from {} when present.", CONFIG_PATH);
                std::process::exit(0);
            },
            other => warn!("ignoring unknown argument {:?}", other),
        }
        i += 1;
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    let mut config = match DemoConfig::load(CONFIG_PATH) {
        Ok(config) => {
            info!("loaded config from {}", CONFIG_PATH);
            config
        },
        Err(_) => DemoConfig::default(),
    };
    parse_args(&mut config);

    let (mut display, texture_creator) =
        Display::with_options("rasterbox", config.width, config.height, config.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, config.width, config.height)?;
    let mut surface = Surface::new(config.width, config.height);

    let mut scenes: Vec<Box<dyn Scene>> = vec![
        Box::new(TriangleScene::new()), // 1
        Box::new(SpriteScene::new()),   // 2
        Box::new(RaycastScene::new()),  // 3
        Box::new(LineScene::new()),     // 4
    ];
    let mut current = config.start_scene.min(scenes.len() - 1);

    let mut clock = FrameClock::new(60);
    let mut input = InputState::new();
    let mut show_fps = false;

    info!(
        "rasterbox {}x{}, vsync {}",
        config.width, config.height, config.vsync
    );
    info!("1-4 select scenes, [/] cycle, F toggles FPS, Escape quits");
    info!("scene controls: arrows adjust, Space/C/B toggle, WASD walks the ray caster");

    'main: loop {
        let (dt, avg_fps) = clock.tick();

        input.begin_frame();
        for event in display.poll_events() {
            match &event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(key) => match *key {
                    Keycode::Escape => break 'main,
                    Keycode::F => show_fps = !show_fps,
                    Keycode::Num1 => current = 0,
                    Keycode::Num2 => current = 1,
                    Keycode::Num3 => current = 2,
                    Keycode::Num4 => current = 3,
                    Keycode::LeftBracket => {
                        current = if current == 0 {
                            scenes.len() - 1
                        } else {
                            current - 1
                        };
                    },
                    Keycode::RightBracket => current = (current + 1) % scenes.len(),
                    _ => {},
                },
                InputEvent::KeyUp(_) => {},
            }
            input.handle_event(&event);
        }

        let scene = &mut scenes[current];
        scene.update(dt, &input);

        surface.clear();
        scene.render(&mut surface);

        display.present(&mut target, &surface)?;

        // Window title doubles as the status line
        if clock.total_frames() % 30 == 0 {
            let title = if show_fps {
                format!(
                    "rasterbox - {} - {:.0} fps ({:.1} ms)",
                    scene.name(),
                    avg_fps,
                    clock.avg_frame_time_ms()
                )
            } else {
                format!("rasterbox - {}", scene.name())
            };
            display.set_title(&title);
        }
    }

    let exit_config = DemoConfig {
        start_scene: current,
        ..config
    };
    if let Err(e) = exit_config.save(CONFIG_PATH) {
        error!("failed to save config: {}", e);
    }

    Ok(())
}
