use backend::config::Settings;
use backend::logging::{self, LogFacade};
use backend::prompt::{NoPrompt, Prompt, StdinPrompt};
use backend::system::SdlPlatform;
use backend::Core;
use std::process::ExitCode;

fn main() -> ExitCode {
    let (settings, config_err) = match Settings::discover() {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    if let Err(e) = logging::init_console(&settings) {
        eprintln!("console logger unavailable: {e}");
    }
    if let Some(e) = config_err {
        log::warn!("{e}; using default settings");
    }

    let prompt: Box<dyn Prompt> = if settings.interactive_pause {
        Box::new(StdinPrompt)
    } else {
        Box::new(NoPrompt)
    };

    let mut core = Core::new(SdlPlatform, LogFacade, prompt, &settings);
    core.launch().into()
}
