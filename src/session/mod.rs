//! Interactive watermarking session.
//!
//! The session is a loop over [`SessionState`]. Each step asks one or more
//! questions through a [`Prompter`], runs the image operation the answers
//! describe, and returns the next state. A processing failure never ends the
//! session: it is reported with a generic message and logged in detail.
//!
//! ```text
//! AwaitingStart -> AwaitingInput -> AwaitingEdit -> AwaitingWatermarkChoice -> AwaitingStart
//!       |
//!       +-> Done
//! ```

pub mod prompt;

pub use prompt::{PromptError, Prompter, TerminalPrompter};

use crate::adjust::{adjust_file, parse_value, AdjustmentKind};
use crate::config::Config;
use crate::constants::{GENERIC_FAILURE_MESSAGE, SUCCESS_MESSAGE};
use crate::error::ProcessingError;
use crate::naming::derive_output_name;
use crate::watermark::{Watermark, WatermarkKind, WatermarkProcessor};
use std::path::PathBuf;

const EDIT_QUESTION: &str = "Do you want to edit file before apply watermark?";
const INPUT_QUESTION: &str = "What file do you want to mark?";
const ADJUSTMENT_QUESTION: &str = "What change do you want to apply?";
const WATERMARK_KIND_QUESTION: &str = "What kind of watermark do you want to add?";
const WATERMARK_TEXT_QUESTION: &str = "Type your watermark text:";
const WATERMARK_IMAGE_QUESTION: &str = "Type your watermark name:";

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the user to confirm they are ready
    AwaitingStart,
    /// Waiting for the input file name
    AwaitingInput,
    /// Input exists; offer an optional adjustment
    AwaitingEdit { input: String },
    /// Waiting for the watermark kind and its payload
    AwaitingWatermarkChoice { input: String },
    /// The user declined to continue or the input stream closed
    Done,
}

/// Counters reported when the session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub watermarked: usize,
    pub adjusted: usize,
    pub failures: usize,
}

pub struct Session<P: Prompter> {
    config: Config,
    processor: WatermarkProcessor,
    prompter: P,
    summary: SessionSummary,
}

impl<P: Prompter> Session<P> {
    pub fn new(config: Config, prompter: P) -> Self {
        let processor = WatermarkProcessor::from_config(&config);
        Self {
            config,
            processor,
            prompter,
            summary: SessionSummary::default(),
        }
    }

    /// Drive the session until the user declines at the start prompt or the
    /// input stream closes.
    ///
    /// Only terminal I/O failures are returned as errors.
    pub fn run(&mut self) -> Result<SessionSummary, PromptError> {
        let mut state = SessionState::AwaitingStart;

        while state != SessionState::Done {
            state = match self.step(state) {
                Ok(next) => next,
                Err(PromptError::InputClosed) => {
                    tracing::debug!("Input closed, ending session");
                    SessionState::Done
                }
                Err(e) => return Err(e),
            };
        }

        tracing::info!(
            watermarked = self.summary.watermarked,
            adjusted = self.summary.adjusted,
            failures = self.summary.failures,
            "Session finished"
        );

        Ok(self.summary)
    }

    /// Run a single state and return the next one.
    pub fn step(&mut self, state: SessionState) -> Result<SessionState, PromptError> {
        tracing::debug!(state = ?state, "Session step");

        match state {
            SessionState::AwaitingStart => self.ask_start(),
            SessionState::AwaitingInput => self.ask_input(),
            SessionState::AwaitingEdit { input } => self.ask_edit(input),
            SessionState::AwaitingWatermarkChoice { input } => self.ask_watermark(input),
            SessionState::Done => Ok(SessionState::Done),
        }
    }

    pub fn into_prompter(self) -> P {
        self.prompter
    }

    fn ask_start(&mut self) -> Result<SessionState, PromptError> {
        let welcome = format!(
            "Hi! Welcome to \"Watermark manager\". Copy your image files to `{}` folder. \
             Then you'll be able to use them in the app. Are you ready?",
            self.config.image_dir.display()
        );

        if self.prompter.confirm(&welcome, true)? {
            Ok(SessionState::AwaitingInput)
        } else {
            Ok(SessionState::Done)
        }
    }

    fn ask_input(&mut self) -> Result<SessionState, PromptError> {
        let default = self.config.defaults.input_image.clone();
        let input = self.prompter.input(INPUT_QUESTION, Some(&default))?;
        let input = input.trim().to_string();

        if let Err(missing) = self.locate(&input) {
            self.report_missing(&[missing])?;
            return Ok(SessionState::AwaitingStart);
        }

        Ok(SessionState::AwaitingEdit { input })
    }

    fn ask_edit(&mut self, input: String) -> Result<SessionState, PromptError> {
        if !self.prompter.confirm(EDIT_QUESTION, false)? {
            return Ok(SessionState::AwaitingWatermarkChoice { input });
        }

        let labels: Vec<&str> = AdjustmentKind::ALL.iter().map(|k| k.label()).collect();
        let kind = AdjustmentKind::ALL[self.prompter.select(ADJUSTMENT_QUESTION, &labels)?];

        let value = match kind.value_prompt() {
            Some(question) => {
                let raw = self.prompter.input(question, None)?;
                match parse_value(&raw) {
                    Ok(value) => value,
                    Err(e) => {
                        self.report_failure(&e)?;
                        return Ok(SessionState::AwaitingWatermarkChoice { input });
                    }
                }
            }
            None => 0.0,
        };

        let adjustment = kind.with_value(value);
        let path = match self.locate(&input) {
            Ok(path) => path,
            Err(missing) => {
                self.report_missing(&[missing])?;
                return Ok(SessionState::AwaitingStart);
            }
        };

        match adjust_file(&path, &adjustment, self.config.output.jpeg_quality) {
            Ok(()) => {
                self.summary.adjusted += 1;
                self.prompter
                    .say(&format!("Changes: {} applied!", kind.label()))?;
            }
            Err(e) => self.report_failure(&e)?,
        }

        Ok(SessionState::AwaitingWatermarkChoice { input })
    }

    fn ask_watermark(&mut self, input: String) -> Result<SessionState, PromptError> {
        let labels: Vec<&str> = WatermarkKind::ALL.iter().map(|k| k.label()).collect();
        let kind = WatermarkKind::ALL[self.prompter.select(WATERMARK_KIND_QUESTION, &labels)?];

        let (input_path, watermark) = match kind {
            WatermarkKind::Text => {
                let text = self.prompter.input(WATERMARK_TEXT_QUESTION, None)?;
                match self.locate(&input) {
                    Ok(path) => (path, Watermark::Text(text)),
                    Err(missing) => {
                        self.report_missing(&[missing])?;
                        return Ok(SessionState::AwaitingStart);
                    }
                }
            }
            WatermarkKind::Image => {
                let default = self.config.defaults.watermark_image.clone();
                let name = self
                    .prompter
                    .input(WATERMARK_IMAGE_QUESTION, Some(&default))?;

                match (self.locate(&input), self.locate(name.trim())) {
                    (Ok(path), Ok(mark_path)) => (path, Watermark::Image(mark_path)),
                    (input_found, mark_found) => {
                        let missing: Vec<PathBuf> = [input_found, mark_found]
                            .into_iter()
                            .filter_map(Result::err)
                            .collect();
                        self.report_missing(&missing)?;
                        return Ok(SessionState::AwaitingStart);
                    }
                }
            }
        };

        let output_name = derive_output_name(&input, &self.config.output.suffix);
        let output_path = match self.config.resolve_image_path(&output_name) {
            Some(path) => path,
            None => {
                self.report_missing(&[PathBuf::from(output_name)])?;
                return Ok(SessionState::AwaitingStart);
            }
        };

        match self
            .processor
            .watermark_file(&input_path, &output_path, &watermark)
        {
            Ok(()) => {
                self.summary.watermarked += 1;
                self.prompter.say(SUCCESS_MESSAGE)?;
            }
            Err(e) => self.report_failure(&e)?,
        }

        Ok(SessionState::AwaitingStart)
    }

    /// Path of an existing image named `name` inside the image directory.
    ///
    /// On failure returns the path to show the user. Names that point outside
    /// the image directory are reported as typed.
    fn locate(&self, name: &str) -> Result<PathBuf, PathBuf> {
        match self.config.resolve_image_path(name) {
            Some(path) if path.is_file() => Ok(path),
            Some(path) => Err(path),
            None => Err(PathBuf::from(name)),
        }
    }

    fn report_missing(&mut self, paths: &[PathBuf]) -> Result<(), PromptError> {
        self.prompter.say("Sorry!")?;
        for path in paths {
            tracing::warn!(path = %path.display(), "File not found");
            self.prompter
                .say(&format!("Can't find: {}", path.display()))?;
        }
        Ok(())
    }

    fn report_failure(&mut self, error: &ProcessingError) -> Result<(), PromptError> {
        self.summary.failures += 1;
        tracing::error!(error = %error, kind = error.kind(), "Image operation failed");

        match error {
            ProcessingError::InvalidValue(value) => self.prompter.say(&format!(
                "Invalid value \"{}\", the change was skipped.",
                value
            )),
            _ => self.prompter.say(GENERIC_FAILURE_MESSAGE),
        }
    }
}
