use std::io::{self, BufRead, Write};

use indicatif::{ProgressBar, ProgressStyle};
use ripper_core::Severity;
use ripper_logging::ripper_debug;

use super::constants::{PROGRESS_CHARS, PROGRESS_RANGE, PROGRESS_TEMPLATE};
use super::UiCommand;

/// Modal questions the foreground context may ask while handling effects.
pub trait Prompt {
    fn ask(&self, label: &str) -> io::Result<String>;
    fn confirm(&self, question: &str) -> io::Result<bool>;
    fn inform(&self, title: &str, text: &str);
}

/// The foreground surface: a progress bar with a status message, and the
/// output log printed above it.
pub struct Terminal {
    bar: ProgressBar,
}

impl Terminal {
    pub fn new() -> Self {
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars(PROGRESS_CHARS);
        Self {
            bar: ProgressBar::new(PROGRESS_RANGE).with_style(style),
        }
    }

    pub fn apply(&self, commands: Vec<UiCommand>) {
        for command in commands {
            match command {
                UiCommand::SetProgress { position } => self.bar.set_position(position),
                UiCommand::SetStatus(text) => self.bar.set_message(text),
                UiCommand::AppendOutput(line) => self.print(&line),
                UiCommand::ClearOutput => {}
                UiCommand::SetTriggerEnabled(enabled) => {
                    ripper_debug!("download trigger enabled={}", enabled);
                }
                UiCommand::ShowMessage {
                    severity,
                    title,
                    text,
                } => self.bar.suspend(|| match severity {
                    Severity::Info => println!("[{title}] {text}"),
                    Severity::Error => eprintln!("[{title}] {text}"),
                }),
            }
        }
    }

    pub fn finish(&self) {
        self.bar.abandon();
    }

    fn print(&self, line: &str) {
        // A hidden bar (no terminal attached) swallows println.
        if self.bar.is_hidden() {
            println!("{line}");
        } else {
            self.bar.println(line);
        }
    }
}

impl Prompt for Terminal {
    fn ask(&self, label: &str) -> io::Result<String> {
        self.bar.suspend(|| {
            print!("{label}: ");
            io::stdout().flush()?;
            let mut answer = String::new();
            io::stdin().lock().read_line(&mut answer)?;
            Ok(answer.trim().to_string())
        })
    }

    fn confirm(&self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{question} [y/N]"))?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn inform(&self, title: &str, text: &str) {
        self.bar.suspend(|| println!("[{title}] {text}"));
    }
}
