use std::io::{self, BufRead, Write};

/// Blocks until the user acknowledges `message`.
pub trait Prompt {
    fn wait_for_key(&mut self, message: &str);
}

/// Prints to stdout and waits for a line on stdin.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn wait_for_key(&mut self, message: &str) {
        let mut stdout = io::stdout();
        // a closed console must not turn into a failed run
        let _ = writeln!(stdout, "{message}");
        let _ = stdout.flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }
}

#[derive(Debug, Default)]
pub struct NoPrompt;

impl Prompt for NoPrompt {
    fn wait_for_key(&mut self, _message: &str) {}
}
