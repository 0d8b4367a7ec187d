use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use gallery_core::{update, AppState, AppViewModel, DownloadVariant, Msg};
use gallery_logging::gallery_info;

use super::config::Cli;
use super::effects::EffectRunner;
use super::ui::constants::PROMPT;
use super::ui::input::{parse_line, translate, Action, UiCommand};
use super::ui::render;

/// Everything the event loop reacts to.
pub enum LoopEvent {
    /// A line typed at the prompt.
    Input(UiCommand),
    /// A message for the core, usually an engine completion.
    Core(Msg),
    /// Stdin closed.
    InputClosed,
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let (loop_tx, loop_rx) = mpsc::channel::<LoopEvent>();
    let runner = EffectRunner::new(cli.engine_config(), loop_tx.clone())
        .context("failed to start the search engine")?;

    if cli.client_id.is_none() {
        println!("No access key configured; set UNSPLASH_ACCESS_KEY or pass --client-id.");
    }
    println!("Image Search Gallery. Type :help for commands.");

    spawn_stdin_reader(loop_tx);

    let mut app = EventLoop {
        state: AppState::with_query(&cli.query),
        runner,
        variant: cli.variant,
    };
    app.dispatch(Msg::AppStarted)?;

    while let Ok(event) = loop_rx.recv() {
        match event {
            LoopEvent::Core(msg) => app.dispatch(msg)?,
            LoopEvent::Input(command) => {
                let view = app.state.view();
                match translate(command, &view, app.variant) {
                    Action::Dispatch(msgs) => {
                        for msg in msgs {
                            app.dispatch(msg)?;
                        }
                    }
                    Action::Print(lines) => print_lines(&lines)?,
                    Action::Quit => break,
                }
            }
            LoopEvent::InputClosed => break,
        }
    }

    gallery_info!("Exiting");
    Ok(())
}

struct EventLoop {
    state: AppState,
    runner: EffectRunner,
    variant: DownloadVariant,
}

impl EventLoop {
    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let changed = state.consume_dirty();
        let view = state.view();
        self.state = state;

        self.runner.enqueue(effects);
        if changed {
            render_view(&view)?;
        }
        Ok(())
    }
}

fn render_view(view: &AppViewModel) -> io::Result<()> {
    let stamp = chrono::Local::now().format("%H:%M:%S").to_string();
    print_lines(&render::render(view, &stamp))
}

fn print_lines(lines: &[String]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    write!(out, "{PROMPT}")?;
    out.flush()
}

fn spawn_stdin_reader(loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if loop_tx.send(LoopEvent::Input(parse_line(&line))).is_err() {
                return;
            }
        }
        let _ = loop_tx.send(LoopEvent::InputClosed);
    });
}
