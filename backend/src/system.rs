use gl;
use sdl2;
use sdl2::event::Event;
use sdl2::pixels::Color;
use sdl2::render::WindowCanvas;
use sdl2::video::{GLContext, GLProfile, SwapInterval, Window, WindowBuildError};

use crate::glutils;
use crate::platform::{
    ClearColor, EventSource, FrameTarget, GlProfile, IoEvent, Platform, WindowSpec,
};

/// SDL2 windowing with an OpenGL context.
#[derive(Debug, Default)]
pub struct SdlPlatform;

pub struct SdlVideo {
    event_pump: sdl2::EventPump,
    video_subsystem: sdl2::VideoSubsystem,
    // dropped last; SDL_Quit runs once nothing refers to it
    _sdl_context: sdl2::Sdl,
}

pub struct SdlRenderer {
    canvas: WindowCanvas,
}

impl Platform for SdlPlatform {
    type Video = SdlVideo;
    type Window = Window;
    type Renderer = SdlRenderer;
    type Context = GLContext;

    fn init_video(&mut self) -> Result<SdlVideo, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let event_pump = sdl_context.event_pump()?;

        Ok(SdlVideo {
            event_pump,
            video_subsystem,
            _sdl_context: sdl_context,
        })
    }

    fn set_gl_attributes(&mut self, video: &SdlVideo, spec: &WindowSpec) {
        let gl_attr = video.video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl_profile(spec.gl_profile));
        gl_attr.set_context_version(spec.gl_version.0, spec.gl_version.1);
        gl_attr.set_double_buffer(spec.double_buffer);
    }

    fn create_window(&mut self, video: &SdlVideo, spec: &WindowSpec) -> Result<Window, String> {
        video
            .video_subsystem
            .window(&spec.title, spec.width, spec.height)
            .opengl()
            .build()
            .map_err(window_error)
    }

    fn create_renderer(&mut self, window: Window) -> Result<SdlRenderer, String> {
        let mut canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| e.to_string())?;
        canvas.set_draw_color(Color::RGBA(0, 0, 0, 255));
        Ok(SdlRenderer { canvas })
    }

    fn create_context(
        &mut self,
        video: &SdlVideo,
        renderer: &SdlRenderer,
    ) -> Result<GLContext, String> {
        let gl_ctx = renderer.canvas.window().gl_create_context()?;
        gl::load_with(|name| video.video_subsystem.gl_get_proc_address(name) as *const _);

        if let Err(e) = video.video_subsystem.gl_set_swap_interval(SwapInterval::VSync) {
            log::warn!("vsync unavailable: {e}");
        }

        let gl_attr = video.video_subsystem.gl_attr();
        if gl_attr.context_profile() != GLProfile::Core {
            log::warn!("OpenGL context is not a core profile");
        }
        let (major, minor) = gl_attr.context_version();
        log::debug!("OpenGL context version {major}.{minor}");
        if let Some(version) = glutils::gl_version_string() {
            log::debug!("OpenGL driver: {version}");
        }
        if let Err(e) = glutils::check_gl_err() {
            log::warn!("{e}");
        }

        Ok(gl_ctx)
    }
}

impl EventSource for SdlVideo {
    fn poll_events(&mut self) -> Vec<IoEvent> {
        self.event_pump.poll_iter().map(|e| io_event(&e)).collect()
    }
}

impl FrameTarget for SdlRenderer {
    type Window = Window;

    fn clear_screen(&mut self, color: ClearColor) {
        unsafe {
            gl::ClearColor(color.r, color.g, color.b, color.a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn draw_to_screen(&mut self) {
        self.canvas.window().gl_swap_window();
    }

    fn into_window(self) -> Window {
        self.canvas.into_window()
    }
}

fn sdl_profile(profile: GlProfile) -> GLProfile {
    match profile {
        GlProfile::Core => GLProfile::Core,
        GlProfile::Compatibility => GLProfile::Compatibility,
    }
}

// `InitError::Window` adds the stage prefix
fn window_error(e: WindowBuildError) -> String {
    e.to_string()
}

fn io_event(event: &Event) -> IoEvent {
    match event {
        Event::Quit { .. } => IoEvent::Quit,
        _ => IoEvent::Other,
    }
}
