use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use ecues_core::{update, AppState, Effect, Msg};
use ecues_logging::{ecues_debug, ecues_info, ecues_warn, LogDestination};
use log::LevelFilter;

use super::commands::{self, Command, HELP_TEXT};
use super::config::{load_config, AppConfig, ConfigSource};
use super::effects::EffectRunner;
use super::render::{render, render_catalog};

const RESET_PROMPT: &str = "¿Reiniciar todo? (s/N)";
const RESET_CANCELLED: &str = "Reinicio cancelado.";

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Default)]
pub struct LaunchOptions {
    pub config_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub log: Option<LogDestination>,
    pub verbose: bool,
}

pub fn run_app(options: LaunchOptions) -> anyhow::Result<()> {
    let (mut config, loaded) = match load_config(options.config_path.as_deref()) {
        Ok((config, source)) => (config, Ok(source)),
        Err(err) => (AppConfig::default(), Err(err)),
    };
    if let Some(dir) = options.output_dir {
        config.output_dir = dir;
    }
    if let Some(log) = options.log {
        config.log = log;
    }

    let level = if options.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    ecues_logging::initialize(config.log, level, &config.log_file);
    match loaded {
        Ok(ConfigSource::File(path)) => ecues_info!("Loaded config from {:?}", path),
        Ok(ConfigSource::Defaults) => ecues_info!("No config file; using defaults"),
        Err(err) => ecues_warn!("{}; using defaults", err),
    }

    let runner = EffectRunner::new(config.output_dir.clone(), config.export_options());
    let mut shell = Shell::new(AppState::with_catalog(config.catalog()), runner);

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout.lock())?;
    ecues_info!("Shell closed");
    Ok(())
}

/// Read-dispatch-render loop over any line source.
struct Shell {
    state: AppState,
    runner: EffectRunner,
    started: Instant,
    awaiting_reset: bool,
}

impl Shell {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            started: Instant::now(),
            awaiting_reset: false,
        }
    }

    fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render(&self.state.view()))?;
        writeln!(out, "Escriba \"help\" para ver los comandos.")?;

        for line in input.lines() {
            let line = line?;
            self.dispatch(Msg::Tick(self.started.elapsed()), out)?;

            if self.awaiting_reset {
                self.awaiting_reset = false;
                if is_yes(&line) {
                    self.dispatch(Msg::ResetConfirmed, out)?;
                } else {
                    writeln!(out, "{RESET_CANCELLED}")?;
                }
                continue;
            }

            let view = self.state.view();
            match commands::parse(&line, &view, self.state.catalog()) {
                Ok(Command::Dispatch(msg)) => self.dispatch(msg, out)?,
                Ok(Command::Show) => write!(out, "{}", render(&view))?,
                Ok(Command::Help) => writeln!(out, "{HELP_TEXT}")?,
                Ok(Command::Catalog) => write!(out, "{}", render_catalog(self.state.catalog()))?,
                Ok(Command::Quit) => break,
                Err(err) => {
                    ecues_debug!("Rejected input {:?}: {}", line, err);
                    writeln!(out, "{err}")?;
                }
            }
        }
        out.flush()
    }

    fn dispatch(&mut self, msg: Msg, out: &mut impl Write) -> io::Result<()> {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;

            for effect in effects {
                match effect {
                    Effect::ConfirmReset => {
                        writeln!(out, "{RESET_PROMPT}")?;
                        self.awaiting_reset = true;
                    }
                    effect => inbox.extend(self.runner.run(effect, out)?),
                }
            }
        }

        if self.state.consume_dirty() {
            write!(out, "{}", render(&self.state.view()))?;
        }
        Ok(())
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecues_output::ExportOptions;

    fn run_script(script: &str) -> (Shell, String) {
        let temp = tempfile::TempDir::new().unwrap();
        let runner = EffectRunner::new(temp.path().to_path_buf(), ExportOptions::default());
        let mut shell = Shell::new(AppState::new(), runner);
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).unwrap();
        (shell, String::from_utf8(out).unwrap())
    }

    #[test]
    fn scripted_session_updates_tally() {
        let (shell, output) = run_script("+a\n+t\ndest 1 name 1\ndest 1 1\n+m\n");
        let counters = shell.state.tally().counters();

        assert_eq!(counters.total_patients(), 2);
        assert_eq!(counters.male, 1);
        assert_eq!(counters.sex_unknown, 1);
        assert_eq!(shell.state.tally().allocated_total(), 1);
        assert!(output.contains("Pacientes: 2"));
    }

    #[test]
    fn reset_requires_confirmation() {
        let (shell, output) = run_script("+a\nreset\nn\n");
        assert_eq!(shell.state.tally().total_patients(), 1);
        assert!(output.contains(RESET_PROMPT));
        assert!(output.contains(RESET_CANCELLED));

        let (shell, output) = run_script("+a\nreset\ns\n");
        assert_eq!(shell.state.tally().total_patients(), 0);
        assert!(output.contains("Aplicación reiniciada"));
    }

    #[test]
    fn copy_feeds_back_clipboard_notice() {
        let (_, output) = run_script("+a\ncopy\n");
        assert!(output.contains("*Hasta ahora 1 pacientes*"));
        assert!(output.contains("Copiado al portapapeles"));
    }

    #[test]
    fn rejected_allocation_is_reported() {
        let (shell, output) = run_script("+t\ndest 1 name 1\ndest 1 5\n");
        assert_eq!(shell.state.tally().allocated_total(), 0);
        assert!(output.contains("No puede asignar más que el total de traslados."));
    }

    #[test]
    fn quit_stops_reading() {
        let (shell, _) = run_script("+a\nquit\n+a\n");
        assert_eq!(shell.state.tally().total_patients(), 1);
    }
}
