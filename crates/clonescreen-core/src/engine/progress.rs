use super::events::LogEntry;
use super::state::{CampaignSummary, SelectionReport};

/// Structured events the campaign emits while it runs. Display formatting
/// is entirely the receiving sink's concern.
#[derive(Debug, Clone)]
pub enum Report {
    PhaseStart { name: &'static str, day: Option<u8> },
    PhaseFinish,

    TaskStart { total_steps: u64 },
    TaskIncrement,
    TaskFinish,

    Clone(LogEntry),
    Selection(SelectionReport),
    Summary(CampaignSummary),

    Message(String),
}

pub type ReportCallback<'a> = Box<dyn Fn(Report) + Send + Sync + 'a>;

/// The campaign's reporting sink: forwards every [`Report`] to an optional
/// callback, in emission order.
#[derive(Default)]
pub struct Reporter<'a> {
    callback: Option<ReportCallback<'a>>,
}

impl<'a> Reporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ReportCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Report) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_is_a_no_op() {
        let reporter = Reporter::new();
        reporter.report(Report::PhaseFinish);
    }

    #[test]
    fn events_reach_the_callback_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = Reporter::with_callback(Box::new(|event| {
            if let Report::PhaseStart { name, .. } = event {
                seen.lock().unwrap().push(name);
            }
        }));

        reporter.report(Report::PhaseStart {
            name: "Day 0",
            day: Some(0),
        });
        reporter.report(Report::PhaseStart {
            name: "Day 3",
            day: Some(3),
        });

        assert_eq!(*seen.lock().unwrap(), vec!["Day 0", "Day 3"]);
    }
}
