//! Interactive command shell.
//!
//! # Responsibility
//! - Turn one line of input into exactly one action against the record
//!   service and print one localized feedback line per outcome.
//! - Own the session-scoped active language.
//!
//! # Invariants
//! - The loop terminates only on `exit` or end-of-input; every other
//!   outcome, including persistence failures, keeps the session running.
//! - Every line written to the output is localized; raw error text goes to
//!   the log file only.

mod command;

pub use command::{parse_command, Command, ParseError};

use crate::i18n::{translate, translate_with_args, Language, MessageKey};
use crate::model::record::Record;
use crate::repo::record_repo::{RecordRepository, RepoError};
use crate::service::record_service::RecordService;
use log::{debug, error, info};
use std::io::{BufRead, Write};

/// Blocking read-evaluate loop over a record service.
///
/// Generic over input/output so sessions can be scripted in tests.
pub struct Shell<R: RecordRepository> {
    service: RecordService<R>,
    language: Language,
}

impl<R: RecordRepository> Shell<R> {
    /// Creates a shell with the given service and initial language.
    pub fn new(service: RecordService<R>, language: Language) -> Self {
        Self { service, language }
    }

    /// Returns the session's currently active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Runs the session until `exit` or end-of-input.
    ///
    /// Prints a localized prompt before every read. End-of-input is normal
    /// termination, not an error.
    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> std::io::Result<()> {
        info!(
            "event=shell_start module=shell status=ok language={}",
            self.language
        );

        loop {
            writeln!(output, "{}", translate(MessageKey::PromptCommand, self.language))?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                info!("event=shell_exit module=shell status=ok reason=eof");
                return Ok(());
            }
            let line = line.trim_end_matches(['\r', '\n']);

            match parse_command(line) {
                Ok(Command::Exit) => {
                    info!("event=shell_exit module=shell status=ok reason=exit");
                    return Ok(());
                }
                Ok(command) => self.execute(command, &mut output)?,
                Err(err) => {
                    debug!("event=command module=shell status=rejected reason={err:?}");
                    writeln!(output, "{}", translate(err.message_key(), self.language))?;
                }
            }
        }
    }

    fn execute<O: Write>(&mut self, command: Command, output: &mut O) -> std::io::Result<()> {
        match command {
            Command::FindAll => match self.service.list_all() {
                Ok(records) => {
                    for record in records {
                        writeln!(output, "{}", self.format_record(&record))?;
                    }
                    Ok(())
                }
                Err(err) => self.report_persistence_failure("find-all", &err, output),
            },
            Command::Find { id } => match self.service.get_by_id(id) {
                Ok(Some(record)) => writeln!(output, "{}", self.format_record(&record)),
                Ok(None) => self.say(MessageKey::ErrorNotFound, output),
                Err(err) => self.report_persistence_failure("find", &err, output),
            },
            Command::Add { name } => match self.service.create(&name) {
                Ok(changed) if changed > 0 => self.say(MessageKey::SuccessAdd, output),
                Ok(_) => self.say(MessageKey::ErrorAdd, output),
                Err(err) => self.report_persistence_failure("add", &err, output),
            },
            Command::Edit { id, name } => match self.service.update(id, &name) {
                Ok(0) => self.say(MessageKey::ErrorNotFound, output),
                Ok(_) => self.say(MessageKey::SuccessUpdate, output),
                Err(err) => self.report_persistence_failure("edit", &err, output),
            },
            Command::Delete { id } => match self.service.delete(id) {
                Ok(0) => self.say(MessageKey::ErrorNotFound, output),
                Ok(_) => self.say(MessageKey::SuccessDelete, output),
                Err(err) => self.report_persistence_failure("delete", &err, output),
            },
            Command::Lang { code } => self.switch_language(&code, output),
            // `exit` is handled by the loop before execution.
            Command::Exit => Ok(()),
        }
    }

    fn switch_language<O: Write>(&mut self, code: &str, output: &mut O) -> std::io::Result<()> {
        match code.parse::<Language>() {
            Ok(language) => {
                self.language = language;
                info!("event=language_changed module=shell status=ok language={language}");
                let name = language.display_name(language);
                writeln!(
                    output,
                    "{}",
                    translate_with_args(MessageKey::InfoLanguageChanged, &[&name], language)
                )
            }
            // Unknown code: the active language stays as it was, and the
            // error renders in that previous language.
            Err(_) => self.say(MessageKey::ErrorUnknownLanguage, output),
        }
    }

    fn format_record(&self, record: &Record) -> String {
        translate_with_args(
            MessageKey::EntityFormat,
            &[&record.id.to_string(), &record.name],
            self.language,
        )
    }

    fn say<O: Write>(&self, key: MessageKey, output: &mut O) -> std::io::Result<()> {
        writeln!(output, "{}", translate(key, self.language))
    }

    fn report_persistence_failure<O: Write>(
        &self,
        verb: &str,
        err: &RepoError,
        output: &mut O,
    ) -> std::io::Result<()> {
        error!("event=command module=shell status=error verb={verb} error={err}");
        self.say(MessageKey::ErrorPersistence, output)
    }
}
