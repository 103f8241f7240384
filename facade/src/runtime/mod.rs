//! Async host loop: the lifecycle collaborator driving a component.
//!
//! Renders the component's subtree, streams terminal events into it,
//! paces frames while animations or timers are pending, and disposes
//! the component exactly once on exit.

use std::time::{Duration, Instant};

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info};

use casement::{convert_event, Event, Key, Terminal};

use crate::component::Component;
use crate::error::RuntimeError;

const FRAME: Duration = Duration::from_millis(16);

pub struct Runtime;

impl Runtime {
    /// Drive a component until the user quits (`q`, `Escape` or
    /// `Ctrl+C`).
    pub async fn run(mut component: Box<dyn Component>) -> Result<(), RuntimeError> {
        let mut terminal = Terminal::new()?;
        let mut events = EventStream::new();
        let mut needs_render = true;

        info!("runtime started");
        loop {
            if needs_render {
                let layout = terminal.render(component.root())?.clone();
                component.after_layout(&layout, Instant::now());
                needs_render = false;
            }

            if component.tick(Instant::now()) {
                // Animation or timer work pending: pace to frame rate.
                needs_render = true;
                tokio::time::sleep(FRAME).await;
                continue;
            }

            let deadline = component.next_deadline(Instant::now());
            let raw = tokio::select! {
                maybe = events.next() => match maybe {
                    Some(Ok(raw)) => Some(raw),
                    Some(Err(err)) => return Err(RuntimeError::Io(err)),
                    None => break,
                },
                _ = sleep_until_deadline(deadline) => None,
            };

            if let Some(raw) = raw {
                if let Some(event) = convert_event(raw) {
                    if is_quit(&event) {
                        break;
                    }
                    if matches!(event, Event::Resize { .. }) {
                        needs_render = true;
                    }
                    let result = component.handle(&event, terminal.layout(), Instant::now());
                    if result.is_handled() {
                        needs_render = true;
                    }
                }
            }
        }

        debug!("runtime loop ended, disposing component");
        component.dispose();
        Ok(())
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => {
            tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await
        }
        None => std::future::pending::<()>().await,
    }
}

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key {
            key: Key::Char('q'),
            ..
        }
        | Event::Key {
            key: Key::Escape, ..
        } => true,
        Event::Key {
            key: Key::Char('c'),
            modifiers,
        } => modifiers.ctrl,
        _ => false,
    }
}
