//! Frame task
//!
//! Runs the control frame at a fixed rate and logs what happened.

use defmt::*;
use embassy_time::{Duration, Ticker};

use plush_core::config::{TICK_PERIOD_US, TICK_RATE_HZ};
use plush_core::sensing::{DebounceEvent, Recalibration};
use plush_core::{Frame, FrameReport};

use crate::board::PlushBoard;

/// Tick task - owns the frame and advances it once per period
#[embassy_executor::task]
pub async fn tick_task(mut frame: Frame<PlushBoard>) {
    info!("Tick task started at {} Hz", TICK_RATE_HZ);

    let mut ticker = Ticker::every(Duration::from_micros(TICK_PERIOD_US));

    loop {
        ticker.next().await;

        let was_reacting = frame.phase().is_reacting();
        let report = frame.tick();
        log_report(frame.ticks(), &report);

        match (was_reacting, frame.phase().is_reacting()) {
            (false, true) => info!("[{}] reaction started", frame.ticks()),
            (true, false) => info!("[{}] reaction finished", frame.ticks()),
            _ => {}
        }
    }
}

fn log_report(tick: u32, report: &FrameReport) {
    if report.motion == DebounceEvent::Triggered {
        debug!("[{}] shake", tick);
    }
    if report.touch == DebounceEvent::Triggered {
        debug!("[{}] touch", tick);
    }
    if report.thermal == DebounceEvent::Triggered {
        debug!("[{}] warm hand", tick);
    }

    match report.recalibration {
        Some(Recalibration::Applied { drift }) => {
            info!("[{}] motion baseline refreshed (drift {})", tick, drift)
        }
        Some(Recalibration::Rejected { drift }) => {
            debug!("[{}] motion baseline kept (drift {})", tick, drift)
        }
        None => {}
    }

    if let Some(phase) = report.transition {
        debug!("[{}] -> {}", tick, phase);
    }
}
