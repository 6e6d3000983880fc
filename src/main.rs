//! Desert Cycle entry point
//!
//! Creates the window and GPU surface, translates keyboard input into
//! per-frame tick commands, and drives the update/compose/render loop.
//!
//! Controls:
//! - P: pause/resume the day/night clock
//! - R: skip to a fresh morning
//! - 1 / 2: hide / show the oasis grass
//! - O: start (or restart) the narrative sequence
//! - A / D (held): sweep the centre pyramid's gradient
//! - Escape: quit

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use desert_cycle::Settings;
use desert_cycle::consts::MAX_FRAME_DT;
use desert_cycle::renderer::{FrameComposer, RenderState};
use desert_cycle::sim::{SceneState, TickInput, tick};

struct App {
    settings: Settings,
    window: Option<Arc<Window>>,
    renderer: Option<RenderState>,
    composer: FrameComposer,
    state: SceneState,
    /// One-shot commands accumulated from key presses since the last tick
    input: TickInput,
    blend_left_held: bool,
    blend_right_held: bool,
    last_frame: Option<Instant>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let composer = FrameComposer::new(&settings);
        let state = SceneState::new(&settings);
        Self {
            settings,
            window: None,
            renderer: None,
            composer,
            state,
            input: TickInput::default(),
            blend_left_held: false,
            blend_right_held: false,
            last_frame: None,
        }
    }

    fn handle_key(&mut self, event: &KeyEvent, event_loop: &ActiveEventLoop) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let pressed = event.state == ElementState::Pressed;

        // Held keys
        match code {
            KeyCode::KeyA => self.blend_left_held = pressed,
            KeyCode::KeyD => self.blend_right_held = pressed,
            _ => {}
        }

        // One-shots, ignoring OS key repeat
        if !pressed || event.repeat {
            return;
        }
        match code {
            KeyCode::Escape => {
                log::info!("Escape pressed, quitting");
                event_loop.exit();
            }
            KeyCode::KeyP => self.input.toggle_pause = true,
            KeyCode::KeyR => self.input.skip_day = true,
            KeyCode::Digit1 => self.input.grass_off = true,
            KeyCode::Digit2 => self.input.grass_on = true,
            KeyCode::KeyO => self.input.trigger_narrative = true,
            _ => {}
        }
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = match self.last_frame {
            Some(prev) => (now - prev).as_secs_f32().min(MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_frame = Some(now);

        self.input.blend_dir = match (self.blend_left_held, self.blend_right_held) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };

        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input, dt);

        if self.state.exit_requested {
            log::info!("Narrative sequence complete, closing");
            event_loop.exit();
            return;
        }

        let frame = self.composer.compose(&self.state);
        if let Some(renderer) = &mut self.renderer {
            match renderer.render(frame.sky, frame.vertices) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) => {
                    let (w, h) = renderer.size;
                    renderer.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory!");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let attrs = Window::default_attributes()
                .with_title(self.settings.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.settings.width,
                    self.settings.height,
                ));

            let window = Arc::new(
                event_loop
                    .create_window(attrs)
                    .expect("Failed to create window"),
            );
            log::info!(
                "Window created: {}x{}",
                self.settings.width,
                self.settings.height
            );

            let renderer = pollster::block_on(RenderState::new(Arc::clone(&window)));
            log::info!("Renderer initialized");

            window.request_redraw();
            self.window = Some(window);
            self.renderer = Some(renderer);
            self.last_frame = None;
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_key(&event, event_loop);
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    log::info!("Desert Cycle starting...");

    let settings = Settings::load();
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings);
    event_loop.run_app(&mut app).expect("Event loop error");
}
