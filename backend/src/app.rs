use std::process::ExitCode;

use crate::config::Settings;
use crate::error::LifecycleError;
use crate::logging::{Logger, Severity};
use crate::platform::{ClearColor, IoEvent, Platform, WindowSpec};
use crate::prompt::Prompt;
use crate::resources::Resources;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initialized,
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> ExitCode {
        ExitCode::from(status as u8)
    }
}

/// Owns the window, renderer and graphics context and drives them through
/// init, the event loop and shutdown, once.
pub struct Core<P: Platform, L: Logger> {
    platform: P,
    logger: L,
    prompt: Box<dyn Prompt>,
    spec: WindowSpec,
    interactive_pause: bool,
    resources: Option<Resources<P>>,
    phase: Phase,
    finished: bool,
    rendering_allowed: bool,
}

impl<P: Platform, L: Logger> Core<P, L> {
    pub fn new(platform: P, logger: L, prompt: Box<dyn Prompt>, settings: &Settings) -> Self {
        Core {
            platform,
            logger,
            prompt,
            spec: WindowSpec::default(),
            interactive_pause: settings.interactive_pause,
            resources: None,
            phase: Phase::Uninitialized,
            finished: false,
            rendering_allowed: false,
        }
    }

    pub fn with_window(mut self, spec: WindowSpec) -> Self {
        self.spec = spec;
        self
    }

    /// Runs init, the loop and shutdown. Any failure stops the sequence.
    pub fn launch(&mut self) -> ExitStatus {
        let result = self
            .init()
            .and_then(|_| self.update())
            .and_then(|_| self.exit());
        match result {
            Ok(()) => ExitStatus::Success,
            Err(_) => {
                self.pause("Press any key to continue...");
                ExitStatus::Error
            }
        }
    }

    pub fn init(&mut self) -> Result<(), LifecycleError> {
        self.expect_phase("init", Phase::Uninitialized)?;

        match Resources::acquire(&mut self.platform, &self.spec, &self.logger) {
            Ok(resources) => {
                self.resources = Some(resources);
                self.rendering_allowed = true;
                self.phase = Phase::Initialized;
                self.logger.debug("Finished Initialising");
                Ok(())
            }
            Err(e) => {
                self.logger.log(Severity::Severe, &e.to_string());
                self.phase = Phase::Terminated;
                Err(e.into())
            }
        }
    }

    pub fn update(&mut self) -> Result<(), LifecycleError> {
        self.expect_phase("update", Phase::Initialized)?;
        self.phase = Phase::Running;

        self.logger.debug("Entering Loop");
        if let Some(resources) = self.resources.as_mut() {
            while !self.finished {
                for event in resources.poll_events() {
                    if event == IoEvent::Quit {
                        self.finished = true;
                    }
                }

                resources.clear_screen(ClearColor::BLACK);
                resources.draw_to_screen();
            }
        }
        self.logger.debug("Exited Loop");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<(), LifecycleError> {
        self.expect_phase("exit", Phase::Running)?;

        self.rendering_allowed = false;
        if let Some(resources) = self.resources.take() {
            resources.release(&self.logger);
        }
        self.phase = Phase::Terminated;

        self.pause("Press any key to exit debug window...");
        Ok(())
    }

    pub fn log_message(&self, severity: Severity, message: &str) {
        self.logger.log(severity, message);
    }

    pub fn log_debug(&self, message: &str) {
        self.logger.debug(message);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn rendering_allowed(&self) -> bool {
        self.rendering_allowed
    }

    pub fn has_resources(&self) -> bool {
        self.resources.is_some()
    }

    fn expect_phase(&self, operation: &'static str, expected: Phase) -> Result<(), LifecycleError> {
        if self.phase == expected {
            return Ok(());
        }
        let err = LifecycleError::OutOfPhase {
            operation,
            phase: self.phase,
        };
        self.logger.log(Severity::Warn, &err.to_string());
        Err(err)
    }

    fn pause(&mut self, message: &str) {
        if self.interactive_pause {
            self.prompt.wait_for_key(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_status_codes() {
        assert_eq!(ExitStatus::Success as u8, 0);
        assert_eq!(ExitStatus::Error as u8, 1);
    }
}
