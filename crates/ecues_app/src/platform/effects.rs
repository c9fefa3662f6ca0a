use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use ecues_core::{Effect, Msg};
use ecues_logging::{ecues_error, ecues_info, ecues_warn};
use ecues_output::{export_report, share_link, ExportOptions};

/// Carries out effects against the terminal and the filesystem.
///
/// `ConfirmReset` is handled by the shell itself since it needs the next
/// input line.
pub struct EffectRunner {
    output_dir: PathBuf,
    export_options: ExportOptions,
    now: Arc<dyn Fn() -> NaiveDateTime + Send + Sync>,
}

impl EffectRunner {
    pub fn new(output_dir: PathBuf, export_options: ExportOptions) -> Self {
        Self {
            output_dir,
            export_options,
            now: Arc::new(|| Local::now().naive_local()),
        }
    }

    #[cfg(test)]
    pub fn with_clock(mut self, now: impl Fn() -> NaiveDateTime + Send + Sync + 'static) -> Self {
        self.now = Arc::new(now);
        self
    }

    /// Runs one effect, returning the messages to feed back into `update`.
    pub fn run(&self, effect: Effect, out: &mut impl Write) -> io::Result<Vec<Msg>> {
        match effect {
            Effect::CopyToClipboard { text } => {
                writeln!(out, "----- portapapeles -----")?;
                writeln!(out, "{text}")?;
                writeln!(out, "------------------------")?;
                ecues_info!("CopyToClipboard len={}", text.len());
                Ok(vec![Msg::ClipboardWritten])
            }
            Effect::OpenShareLink { text } => {
                match share_link(&text) {
                    Ok(url) => {
                        ecues_info!("OpenShareLink url_len={}", url.as_str().len());
                        writeln!(out, "Compartir: {url}")?;
                    }
                    Err(err) => {
                        ecues_warn!("Could not build share link: {}", err);
                        writeln!(out, "No se pudo generar el enlace para compartir.")?;
                    }
                }
                Ok(Vec::new())
            }
            Effect::ExportReport { document, incident } => {
                let generated_at = (self.now)();
                match export_report(
                    &self.output_dir,
                    &document,
                    &incident,
                    generated_at,
                    &self.export_options,
                ) {
                    Ok(summary) => {
                        writeln!(
                            out,
                            "Informe exportado: {} ({} páginas)",
                            summary.report_path.display(),
                            summary.page_count
                        )?;
                        if let Some(json_path) = summary.json_path {
                            writeln!(out, "Datos: {}", json_path.display())?;
                        }
                    }
                    Err(err) => {
                        ecues_error!("Export failed dir={:?}: {}", self.output_dir, err);
                        writeln!(out, "No se pudo exportar el informe: {err}")?;
                    }
                }
                Ok(Vec::new())
            }
            Effect::ConfirmReset => {
                ecues_warn!("ConfirmReset reached the effect runner; ignoring");
                Ok(Vec::new())
            }
        }
    }
}
