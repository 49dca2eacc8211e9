use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// The spinner currently on screen, if any. Log lines are routed through it
/// so they do not tear the animation.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

pub struct SpinnerHandle {
    spinner: ProgressBar,
}

impl SpinnerHandle {
    pub fn set_message(&self, msg: String) {
        self.spinner.set_message(msg);
    }

    pub fn finish_and_clear(self) {
        self.spinner.finish_and_clear();
        if let Ok(mut active) = ACTIVE.lock() {
            *active = None;
        }
    }
}

pub fn start_scan_spinner(total: usize, workers: usize) -> SpinnerHandle {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]));
    }
    pb.enable_steady_tick(Duration::from_millis(100));

    let handle = SpinnerHandle { spinner: pb.clone() };
    handle.set_message(format!(
        "Probing {} hosts with {} workers...",
        total.to_string().green().bold(),
        workers.to_string().bold()
    ));

    if let Ok(mut active) = ACTIVE.lock() {
        *active = Some(pb);
    }
    handle
}

pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();

        let active = ACTIVE.lock().ok().and_then(|guard| guard.as_ref().cloned());
        match active {
            Some(pb) => pb.println(msg),
            None => eprintln!("{msg}"),
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
