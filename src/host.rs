use crate::command::Command;
use crate::loader::FragmentLoader;
use crate::models::{is_known_tab, is_known_time_period};
use crate::region::RegionSnapshot;
use crate::transport::FragmentTransport;
use std::io::{self, BufRead, Write};
use std::thread;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostExit {
    Quit,
    EndOfInput,
    Interrupted,
    Abandoned,
}

/// Reads stdin on a plain thread so a pending read never holds up shutdown.
pub fn stdin_lines() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(16);
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    error!("failed to read stdin: {err}");
                    break;
                }
            }
        }
    });
    rx
}

/// Drives `loader` from `lines` and writes one JSON line per region change.
///
/// The first interrupt stops reading input and waits for in-flight cycles; a
/// second one returns without waiting.
pub async fn run<T, W>(
    loader: &mut FragmentLoader<T>,
    mut lines: mpsc::Receiver<String>,
    mut interrupts: mpsc::UnboundedReceiver<()>,
    out: &mut W,
) -> io::Result<HostExit>
where
    T: FragmentTransport,
    W: Write,
{
    let id = loader.region().id().to_string();
    let mut updates = loader.region().subscribe();
    write_snapshot(out, &loader.region().snapshot())?;

    let mut exit = HostExit::EndOfInput;
    loop {
        tokio::select! {
            biased;
            line = lines.recv() => {
                let Some(line) = line else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(Some(Command::Tab(tab))) => {
                        if !is_known_tab(&tab) {
                            warn!(%tab, "tab is not one the content server is known to serve");
                        }
                        loader.select_tab(tab);
                    }
                    Ok(Some(Command::Period(period))) => {
                        if !is_known_time_period(&period) {
                            warn!(%period, "unrecognised time period");
                        }
                        loader.select_time_period(period);
                    }
                    Ok(Some(Command::Show)) => write_snapshot(out, &loader.region().snapshot())?,
                    Ok(Some(Command::Quit)) => {
                        exit = HostExit::Quit;
                        break;
                    }
                    Ok(None) => {}
                    Err(err) => warn!("{err}"),
                }
            }
            Some(()) = interrupts.recv() => {
                info!("interrupted, waiting for in-flight requests");
                exit = HostExit::Interrupted;
                break;
            }
            Ok(()) = updates.changed() => {
                let state = updates.borrow_and_update().clone();
                write_snapshot(out, &state.snapshot(&id))?;
            }
        }
    }

    let settle = loader.settle();
    tokio::pin!(settle);
    loop {
        tokio::select! {
            biased;
            () = &mut settle => break,
            Some(()) = interrupts.recv() => {
                warn!("interrupted again, abandoning in-flight requests");
                return Ok(HostExit::Abandoned);
            }
            Ok(()) = updates.changed() => {
                let state = updates.borrow_and_update().clone();
                write_snapshot(out, &state.snapshot(&id))?;
            }
        }
    }

    if updates.has_changed().unwrap_or(false) {
        let state = updates.borrow_and_update().clone();
        write_snapshot(out, &state.snapshot(&id))?;
    }
    Ok(exit)
}

fn write_snapshot<W: Write>(out: &mut W, snapshot: &RegionSnapshot<'_>) -> io::Result<()> {
    serde_json::to_writer(&mut *out, snapshot)?;
    out.write_all(b"\n")?;
    out.flush()
}
