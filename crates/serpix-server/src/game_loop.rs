//! Game loop thread: runs the engine at its configured tick rate and
//! publishes serialized tick output.
//!
//! The engine lives on this thread. Input arrives over an `mpsc` channel and
//! is queued into the engine before each tick; frames leave through a tokio
//! broadcast channel that every socket task subscribes to.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tokio::sync::broadcast;
use tracing::{error, info};

use serpix_core::events::GameEvent;
use serpix_sim::{GameEngine, SimConfig, TickOutput};

use crate::protocol::{InitData, RampageData, ServerMessage};
use crate::state::{GameLoopCommand, OutboundFrame};

/// Wall-clock duration of one tick at `tick_rate` Hz.
pub fn tick_duration(tick_rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(tick_rate.max(1)))
}

/// Build the engine and start the game loop thread.
///
/// Returns the command sender for the transport and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    frames: broadcast::Sender<OutboundFrame>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let engine = GameEngine::new(config).context("invalid simulation config")?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("serpix-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &frames))
        .context("failed to spawn game loop thread")?;

    Ok((cmd_tx, handle))
}

/// Runs until a Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: GameEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    frames: &broadcast::Sender<OutboundFrame>,
) {
    let tick_duration = tick_duration(engine.config().tick_rate);
    let mut next_tick_time = Instant::now();
    info!(tick_rate = engine.config().tick_rate, "game loop started");

    loop {
        if !drain_commands(&mut engine, &cmd_rx) {
            info!(tick = engine.time().tick, "game loop stopped");
            return;
        }

        let output = engine.tick();
        for frame in frames_for(&output) {
            // No subscribers is fine.
            let _ = frames.send(frame);
        }

        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset rather than burst.
            next_tick_time = now;
        }
    }
}

/// Queue every pending command. Returns false when the loop should stop.
fn drain_commands(engine: &mut GameEngine, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::Input(event)) => engine.queue_command(event),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// Serialize one tick's events and snapshot, in delivery order.
pub fn frames_for(output: &TickOutput) -> Vec<OutboundFrame> {
    let mut frames = Vec::with_capacity(output.events.len() + 1);

    for event in &output.events {
        let (target, message) = match event {
            GameEvent::PlayerJoined {
                connection_id,
                player_id,
                world_size,
            } => (
                Some(*connection_id),
                ServerMessage::Init(InitData {
                    player_id: *player_id,
                    world_size: *world_size,
                }),
            ),
            GameEvent::Rampage { snake_name } => (
                None,
                ServerMessage::Rampage(RampageData {
                    snake_name: snake_name.clone(),
                }),
            ),
        };
        if let Some(payload) = encode(&message) {
            frames.push(OutboundFrame {
                target,
                payload: payload.into(),
            });
        }
    }

    if let Some(payload) = encode(&ServerMessage::GameState(output.snapshot.clone())) {
        frames.push(OutboundFrame::broadcast(payload));
    }
    frames
}

fn encode(message: &ServerMessage) -> Option<String> {
    match serde_json::to_string(message) {
        Ok(text) => Some(text),
        Err(err) => {
            error!("failed to serialize server message: {err}");
            None
        }
    }
}
