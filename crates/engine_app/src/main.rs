//! # engine_app: host
//!
//! Opens a window and drives the update-and-render pass on one entity, a red
//! rectangle that moves right and wraps around at the window's width.
//!
//! ## Lifecycle
//!
//! 1. Parse command-line options and initialise logging.
//! 2. Open a resizable 640×480 window.
//! 3. Each frame: check for a quit request, tick, present, sleep.
//! 4. Exit 0 when the window is closed, 1 if the window could not be created
//!    or the entity failed to update.

mod backend;
mod error;
mod scene;
mod tick;

use std::cell::{Cell, RefCell};
use std::num::NonZeroU16;
use std::panic::{self, AssertUnwindSafe};
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use macroquad::prelude::{is_quit_requested, next_frame, prevent_quit};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use backend::QuadRenderer;
use engine_system::config::DEFAULT_WRAP_WIDTH;
use engine_system::{PassConfig, keys};
use error::AppError;
use tick::{TickConfig, TickLoop};

#[derive(Parser, Debug)]
#[command(name = "engine_app", about = "Pure component model demo: a bouncing rectangle")]
struct Args {
    /// Fixed delay after each frame, in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_delay_ms: u64,

    /// Stop after this many frames (0 = run until the window is closed)
    #[arg(long, default_value_t = 0)]
    max_frames: u64,

    /// Horizontal position wraps back to 0 at this many pixels
    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    wrap_width: NonZeroU16,
}

impl From<Args> for TickConfig {
    fn from(args: Args) -> Self {
        Self {
            frame_delay: Duration::from_millis(args.frame_delay_ms),
            max_ticks: args.max_frames,
            pass: PassConfig::default().with_wrap_width(args.wrap_width),
            ..TickConfig::default()
        }
    }
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("engine_app=info".parse()?))
        .init();

    let args = Args::parse();
    info!(?args, "engine host starting");

    launch(args.into())?;

    info!("engine host shut down");
    Ok(())
}

/// Open the window and run the tick loop inside it until it finishes.
///
/// The backend reports initialization failures by panicking before the first
/// frame. Those are mapped to [`AppError::ExternalInit`]; panics after the
/// loop has started are propagated unchanged.
fn launch(config: TickConfig) -> Result<(), AppError> {
    let started = Rc::new(Cell::new(false));
    let outcome: Rc<RefCell<Option<Result<(), AppError>>>> = Rc::new(RefCell::new(None));

    let future = {
        let started = Rc::clone(&started);
        let outcome = Rc::clone(&outcome);
        async move {
            started.set(true);
            let tick_loop = TickLoop::new(config, scene::bouncing_rectangle());
            let result = run_window(tick_loop).await;
            *outcome.borrow_mut() = Some(result);
        }
    };

    let opened = panic::catch_unwind(AssertUnwindSafe(|| {
        macroquad::Window::from_config(backend::window_conf(), future);
    }));

    if let Err(payload) = opened {
        if started.get() {
            panic::resume_unwind(payload);
        }
        return Err(AppError::ExternalInit(panic_message(payload.as_ref())));
    }

    // The window can be closed before the first frame ran.
    outcome.borrow_mut().take().unwrap_or(Ok(()))
}

async fn run_window(mut tick_loop: TickLoop) -> Result<(), AppError> {
    // Closing the window sets a flag instead of tearing the loop down.
    prevent_quit();

    let mut renderer = QuadRenderer::new();
    tick_loop.log_start();

    loop {
        if is_quit_requested() {
            info!("window closed");
            break;
        }

        tick_loop.tick(&mut renderer)?;
        next_frame().await;

        if tick_loop.finished() {
            info!("frame limit reached");
            break;
        }
        tick_loop.pace();
    }

    info!(
        tick_id = tick_loop.tick_id(),
        x = ?tick_loop.entity().get::<i32>(keys::X).ok(),
        "tick loop stopped"
    );

    Ok(())
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "windowing backend panicked".to_owned()
    }
}
