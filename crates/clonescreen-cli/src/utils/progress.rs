use clonescreen::engine::progress::{Report, ReportCallback};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

const SPINNER_TICK_MS: u64 = 80;

/// Renders campaign [`Report`] events as an indicatif spinner/bar on stderr.
/// Per-clone records go to the debug log; selection and summary rendering is
/// the run command's concern.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new(0)
            .with_style(Self::spinner_style())
            .with_message("Initializing...");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.disable_steady_tick();
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ReportCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |report: Report| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match report {
                Report::PhaseStart { name, .. } => {
                    pb_guard.reset();
                    pb_guard.set_length(0);
                    pb_guard.set_style(Self::spinner_style());
                    pb_guard.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb_guard.set_message(name.to_string());
                }
                Report::PhaseFinish => {
                    pb_guard.disable_steady_tick();
                    pb_guard.finish_with_message("✓ Done");
                }
                Report::TaskStart { total_steps } => {
                    pb_guard.disable_steady_tick();
                    pb_guard.reset();
                    pb_guard.set_length(total_steps);
                    pb_guard.set_position(0);
                    pb_guard.set_style(Self::bar_style());
                }
                Report::TaskIncrement => {
                    pb_guard.inc(1);
                }
                Report::TaskFinish => {
                    if pb_guard.position() < pb_guard.length().unwrap_or(0) {
                        pb_guard.set_position(pb_guard.length().unwrap_or(0));
                    }
                    pb_guard.finish();
                }
                Report::Clone(entry) => {
                    debug!(
                        day = entry.day,
                        clone_id = %entry.clone_id,
                        action = %entry.action,
                        "Clone processed."
                    );
                }
                Report::Message(msg) => {
                    if !pb_guard.is_finished() {
                        pb_guard.println(format!("  {}", msg));
                    } else {
                        pb_guard.set_message(msg);
                    }
                }
                // Rendered by the run command once the workflow returns.
                Report::Selection(_) | Report::Summary(_) => {}
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .expect("Failed to create spinner style template")
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<28} [{bar:40.cyan/blue}] {pos}/{len} wells")
            .expect("Failed to create bar style template")
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new();
        let pb = handler.pb.lock().unwrap();
        assert_eq!(pb.length(), Some(0));
        assert!(pb.is_finished());
    }

    #[test]
    fn callback_tracks_timepoint_progress() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Report::PhaseStart {
            name: "Day 0: Seeding",
            day: Some(0),
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Day 0: Seeding");
            assert!(!pb.is_finished());
        }

        callback(Report::TaskStart { total_steps: 96 });
        callback(Report::TaskIncrement);
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.length(), Some(96));
            assert_eq!(pb.position(), 1);
        }

        callback(Report::TaskFinish);
        callback(Report::PhaseFinish);
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
            assert_eq!(pb.position(), 96);
            assert_eq!(pb.message(), "✓ Done");
        }
    }
}
