use crate::error::InitError;
use crate::logging::Logger;
use crate::platform::{ClearColor, EventSource, FrameTarget, IoEvent, Platform, WindowSpec};

/// Every handle the application needs, acquired together.
///
/// Field order is drop order: the context goes first, then the renderer and
/// the window it owns, then the windowing subsystem. A partially built
/// bundle never exists; when a stage fails the handles already created are
/// dropped in reverse order before the error is returned.
pub struct Resources<P: Platform> {
    context: P::Context,
    renderer: P::Renderer,
    video: P::Video,
}

impl<P: Platform> Resources<P> {
    pub fn acquire(
        platform: &mut P,
        spec: &WindowSpec,
        log: &dyn Logger,
    ) -> Result<Resources<P>, InitError> {
        log.debug("Initialising SDL");
        let video = platform.init_video().map_err(InitError::Subsystem)?;

        log.debug("Setting OpenGL attributes");
        platform.set_gl_attributes(&video, spec);

        log.debug("Creating Window");
        let window = platform
            .create_window(&video, spec)
            .map_err(InitError::Window)?;

        log.debug("Creating Renderer");
        let renderer = platform
            .create_renderer(window)
            .map_err(InitError::Renderer)?;

        log.debug("Creating OpenGL Context");
        let context = platform
            .create_context(&video, &renderer)
            .map_err(InitError::Context)?;

        Ok(Resources {
            context,
            renderer,
            video,
        })
    }

    pub fn release(self, log: &dyn Logger) {
        let Resources {
            context,
            renderer,
            video,
        } = self;

        log.debug("Destroying OpenGL Context");
        drop(context);

        log.debug("Destroying Renderer");
        let window = renderer.into_window();

        log.debug("Destroying Window");
        drop(window);

        log.debug("Shutting down SDL");
        drop(video);
    }

    pub fn poll_events(&mut self) -> Vec<IoEvent> {
        self.video.poll_events()
    }

    pub fn clear_screen(&mut self, color: ClearColor) {
        self.renderer.clear_screen(color);
    }

    pub fn draw_to_screen(&mut self) {
        self.renderer.draw_to_screen();
    }
}
