use anyhow::{Context, Result};
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use engine::physics::CharacterBody;
use game::arena::Arena;
use game::characters::{Player, PlayerBuilder};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Rusted Brawler...");

    let mut player = PlayerBuilder::standard()
        .build()
        .context("Failed to set up the player")?;
    let mut arena = Arena::new();
    let body = arena.spawn_character(player.stats().width, player.stats().height);

    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();
    arena.world_mut().set_timestep(game_loop.fixed_timestep());
    let mut shown_label = String::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Brawler")
        .with_inner_size(winit::dpi::LogicalSize::new(960, 540))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");
    info!("Move with arrows/WASD, attack with J or Space, Escape to pause");
    info!(
        "Combo resets after {:.1}s without attacking",
        player.attack_cooldown().wait_time()
    );

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset();
            }
            Event::AboutToWait => {
                let menu_pressed = input.just_pressed(Action::Menu);
                if menu_pressed {
                    game_loop.toggle_pause();
                }

                let ticks = game_loop.begin_frame();
                let dt = game_loop.fixed_timestep();

                for _ in 0..ticks {
                    for event in input.player().events() {
                        let edge = if event.pressed { "down" } else { "up" };
                        debug!("Input {:?} {}", event.action, edge);
                    }

                    let mut character = CharacterBody::new(arena.world_mut(), body);
                    if let Some(hit) = player.tick(input.player(), &mut character, dt) {
                        debug!("Blocked by {:?}, {:?} left over", hit.collider, hit.remainder);
                    }
                    arena.step();
                    input.update();
                }

                // Presses made while paused are dropped
                if ticks == 0 && (menu_pressed || game_loop.is_paused()) {
                    input.update();
                }

                if player.label().text != shown_label {
                    shown_label.clone_from(&player.label().text);
                    let pos = arena.position(body).unwrap_or_default();
                    info!(
                        "[{}] {:?} facing {:?} at ({:.1}, {:.1}), tick {}",
                        shown_label,
                        player.current_attack(),
                        player.facing(),
                        pos.x,
                        pos.y,
                        game_loop.tick_count()
                    );
                    log_presentation(&player);
                }

                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// There is no renderer, so the presentation state goes to the debug log
fn log_presentation(player: &Player) {
    let (hit_min, hit_max) = player.hit_box().bounds();
    debug!(
        "  motion {:?} velocity {:?} flip_h {} hit area x {:.1}..{:.1}",
        player.motion(),
        player.velocity(),
        player.sprite().flip_h,
        hit_min.x,
        hit_max.x
    );

    let cooldown = player.attack_cooldown();
    debug!(
        "  animation '{}' frame {}, cooldown {}",
        player.animation().current_animation(),
        player.animation().current_frame(),
        if cooldown.is_running() {
            format!("{:.2}s left", cooldown.time_left())
        } else {
            "idle".to_string()
        }
    );
}
