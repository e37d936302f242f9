//! Window, context, and render-loop scaffolding shared by every lesson.
//!
//! The sequence here is the fixed one the windowing and graphics APIs
//! dictate: build a window, request an OpenGL 3.3 core context, make it
//! current, load the function pointers, then poll events until the window is
//! closed or ESC is pressed, clearing and swapping around a per-frame
//! callback. The loop runs via `run_return` so it actually returns to the
//! lesson, letting the lesson's GL objects drop while the context is still
//! alive; the `App` (and with it the context) is dropped last.

use std::time::Instant;

use glutin::dpi::LogicalSize;
use glutin::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::platform::run_return::EventLoopExtRunReturn;
use glutin::window::{Window, WindowBuilder};
use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};
use log::{debug, error, info};

use crate::config::WindowConfig;
use crate::error::Error;

/// An open window with a current OpenGL context and loaded function
/// pointers.
pub struct App {
    event_loop: EventLoop<()>,
    context: WindowedContext<PossiblyCurrent>,
    clear_color: [f32; 4],
}

impl App {
    /// Creates the window and context described by `config` and makes the
    /// context current.
    pub fn build(config: &WindowConfig) -> Result<Self, Error> {
        let event_loop = EventLoop::new();

        let window = WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));

        let context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
            .with_gl_profile(GlProfile::Core)
            .with_vsync(config.vsync)
            .build_windowed(window, &event_loop)?;

        let context = unsafe { context.make_current().map_err(|(_, err)| err)? };

        gl::load_with(|symbol| context.get_proc_address(symbol) as *const _);

        let size = context.window().inner_size();
        unsafe { gl::Viewport(0, 0, size.width as i32, size.height as i32) };

        info!(
            "window \"{}\" open at {}x{}",
            config.title, size.width, size.height
        );

        Ok(Self {
            event_loop,
            context,
            clear_color: config.clear_color,
        })
    }

    pub fn window(&self) -> &Window {
        self.context.window()
    }

    /// Runs the render loop until the window is closed or ESC is pressed.
    ///
    /// Each frame is cleared to the configured color before `frame` runs and
    /// swapped after it; the argument is the time in seconds since the loop
    /// started. Resizes are forwarded to the context and the viewport.
    pub fn run<F: FnMut(f32)>(&mut self, mut frame: F) {
        let Self {
            event_loop,
            context,
            clear_color,
        } = self;
        let started = Instant::now();

        event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Poll;

            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                    WindowEvent::KeyboardInput {
                        input:
                            KeyboardInput {
                                virtual_keycode: Some(VirtualKeyCode::Escape),
                                state: ElementState::Pressed,
                                ..
                            },
                        ..
                    } => *control_flow = ControlFlow::Exit,
                    WindowEvent::Resized(size) => {
                        context.resize(size);
                        unsafe { gl::Viewport(0, 0, size.width as i32, size.height as i32) };
                        debug!("resized to {}x{}", size.width, size.height);
                    }
                    _ => {}
                },
                Event::MainEventsCleared => context.window().request_redraw(),
                Event::RedrawRequested(_) => {
                    unsafe {
                        gl::ClearColor(
                            clear_color[0],
                            clear_color[1],
                            clear_color[2],
                            clear_color[3],
                        );
                        gl::Clear(gl::COLOR_BUFFER_BIT);
                    }

                    frame(started.elapsed().as_secs_f32());

                    if let Err(err) = context.swap_buffers() {
                        error!("failed to swap buffers: {}", err);
                        *control_flow = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });
    }
}
