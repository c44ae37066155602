use crate::ui::{
    self,
    TuiPresenter,
    UserEvent,
};
use color_eyre::eyre::{
    Result,
    WrapErr,
    eyre,
};
use crossterm::event::EventStream;
use futures::StreamExt;
use one_armed_bandit::{
    IconSource,
    MachineConfig,
    SlotMachine,
    Statistics,
    driver::{
        self,
        FrameTimer,
    },
};
use tracing::{
    debug,
    warn,
};

/// Runs the interactive game until the player quits and returns the final
/// statistics.
pub async fn run_app<I: IconSource>(config: MachineConfig, icons: I) -> Result<Statistics> {
    let mut machine = SlotMachine::new(config, icons, TuiPresenter::default())
        .wrap_err("invalid machine configuration")?;

    tracing::info!("Starting UI");
    let mut terminal = ui::terminal_enter().wrap_err("failed to enter terminal UI")?;
    let res = run_loop(&mut machine, &mut terminal).await;
    finish(res, ui::terminal_exit()).map(|()| *machine.stats())
}

/// A failed loop wins over a failed terminal restore; the latter is only
/// logged in that case.
fn finish(res: Result<()>, exit: Result<()>) -> Result<()> {
    match (res, exit) {
        (Err(err), Err(exit_err)) => {
            warn!(error = %exit_err, "failed to restore terminal");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), exit) => exit.wrap_err("failed to restore terminal"),
    }
}

async fn run_loop<I: IconSource>(
    machine: &mut SlotMachine<I, TuiPresenter>,
    terminal: &mut ui::Tui,
) -> Result<()> {
    let mut timer = FrameTimer::new(machine.config().frame_delay());
    let mut input_events = EventStream::new();
    ui::draw(terminal, machine.presenter().screen()).wrap_err("initial draw failed")?;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => { break; }
            _ = timer.wait() => {
                driver::on_frame(machine, &mut timer);
            }
            maybe_event = input_events.next() => {
                let Some(event) = maybe_event else {
                    warn!("terminal input stream closed");
                    break;
                };
                let event = event.map_err(|e| eyre!("reading terminal input failed: {e}"))?;
                match ui::interpret_event(event) {
                    Some(UserEvent::Quit) => break,
                    Some(UserEvent::Spin) => {
                        if !driver::start_spin(machine, &mut timer) {
                            debug!("spin key pressed while reels are moving");
                            continue;
                        }
                    }
                    Some(UserEvent::Redraw) => {}
                    None => continue,
                }
            }
        }
        ui::draw(terminal, machine.presenter().screen()).wrap_err("redraw failed")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    #[test]
    fn finish__keeps_loop_error_when_terminal_restore_also_fails() {
        // when
        let res = finish(Err(eyre!("redraw failed")), Err(eyre!("raw mode stuck")));

        // then
        let err = res.unwrap_err();
        assert_eq!(err.to_string(), "redraw failed");
    }

    #[test]
    fn finish__reports_restore_failure_after_clean_loop() {
        // when
        let res = finish(Ok(()), Err(eyre!("raw mode stuck")));

        // then
        let err = res.unwrap_err();
        assert_eq!(err.to_string(), "failed to restore terminal");
        assert_eq!(err.root_cause().to_string(), "raw mode stuck");
    }

    #[test]
    fn finish__is_ok_when_both_succeed() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
