use sdl2::event::{Event, WindowEvent};
use sdl2::video::GLProfile;

use crate::config::WindowConfig;
use crate::error::BackendError;
use crate::glutils;

/// The window, its OpenGL context and the SDL handles behind them.
///
/// Fields drop in declaration order: the GL context goes first, SDL itself
/// last.
pub struct System {
    gl_ctx: sdl2::video::GLContext,
    event_pump: sdl2::EventPump,
    window: sdl2::video::Window,
    video_subsystem: sdl2::VideoSubsystem,
    sdl_context: sdl2::Sdl,
    should_close: bool,
}

impl System {
    /// Brings up SDL, opens the window, makes a core profile context current
    /// and loads the GL entry points. On failure everything created so far
    /// is dropped, which shuts SDL down again.
    pub fn new(config: &WindowConfig) -> Result<System, BackendError> {
        let sdl_context = sdl2::init().map_err(BackendError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(BackendError::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(config.gl_version.0, config.gl_version.1);
        gl_attr.set_double_buffer(true);
        #[cfg(target_os = "macos")]
        gl_attr.set_context_flags().forward_compatible().set();

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .opengl()
            .build()?;

        let gl_ctx = window.gl_create_context().map_err(BackendError::Context)?;
        window
            .gl_make_current(&gl_ctx)
            .map_err(BackendError::Context)?;

        glutils::load_gl_with(|name| video_subsystem.gl_get_proc_address(name) as *const _)?;

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), config.gl_version);

        glutils::log_opengl_info();
        log::info!(
            "window '{}' {}x{} ready",
            config.title,
            config.width,
            config.height
        );

        let event_pump = sdl_context.event_pump().map_err(BackendError::Sdl)?;

        Ok(System {
            gl_ctx,
            event_pump,
            window,
            video_subsystem,
            sdl_context,
            should_close: false,
        })
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Dispatches pending OS events. Only a close request is acted upon.
    pub fn poll_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::Window {
                    win_event: WindowEvent::Close,
                    ..
                } => {
                    log::debug!("close requested");
                    self.should_close = true;
                }
                _ => {}
            }
        }
    }

    pub fn swap_buffers(&self) {
        self.window.gl_swap_window();
    }

    /// Releases the context and the window and shuts SDL down.
    pub fn terminate(self) {
        let System {
            gl_ctx,
            event_pump,
            window,
            video_subsystem,
            sdl_context,
            ..
        } = self;
        drop(gl_ctx);
        drop(event_pump);
        drop(window);
        drop(video_subsystem);
        drop(sdl_context);
        log::debug!("windowing subsystem terminated");
    }
}
