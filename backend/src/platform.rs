pub const SCREEN_WIDTH: u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 900;

pub const ENGINE_NAME: &str = "Ember";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoEvent {
    Quit,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ClearColor {
    pub const BLACK: ClearColor = ClearColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlProfile {
    Core,
    Compatibility,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub gl_profile: GlProfile,
    /// (major, minor)
    pub gl_version: (u8, u8),
    pub double_buffer: bool,
    pub vsync: bool,
}

impl WindowSpec {
    pub fn titled(title: impl Into<String>) -> WindowSpec {
        WindowSpec {
            title: title.into(),
            ..WindowSpec::default()
        }
    }
}

impl Default for WindowSpec {
    fn default() -> Self {
        WindowSpec {
            title: format!("{} v{}", ENGINE_NAME, env!("CARGO_PKG_VERSION")),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            gl_profile: GlProfile::Core,
            gl_version: (3, 2),
            double_buffer: true,
            vsync: true,
        }
    }
}

pub trait EventSource {
    /// Drains every pending event.
    fn poll_events(&mut self) -> Vec<IoEvent>;
}

pub trait FrameTarget {
    type Window;

    fn clear_screen(&mut self, color: ClearColor);
    fn draw_to_screen(&mut self);

    /// Destroys the renderer and hands back the window it drew to.
    fn into_window(self) -> Self::Window;
}

/// Windowing library seen as a sequence of acquisition stages. Every handle releases
/// itself on drop; errors are the library's own message.
pub trait Platform {
    type Video: EventSource;
    type Window;
    /// Takes ownership of the window it renders to.
    type Renderer: FrameTarget<Window = Self::Window>;
    type Context;

    fn init_video(&mut self) -> Result<Self::Video, String>;

    /// Applies to windows and contexts created afterwards.
    fn set_gl_attributes(&mut self, video: &Self::Video, spec: &WindowSpec);

    fn create_window(
        &mut self,
        video: &Self::Video,
        spec: &WindowSpec,
    ) -> Result<Self::Window, String>;

    fn create_renderer(&mut self, window: Self::Window) -> Result<Self::Renderer, String>;

    fn create_context(
        &mut self,
        video: &Self::Video,
        renderer: &Self::Renderer,
    ) -> Result<Self::Context, String>;
}
