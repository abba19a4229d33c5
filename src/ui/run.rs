use crate::catalog::Source;
use crate::product::Product;
use crate::ui::model::{initial_model, Model};
use crate::ui::Msg;
use bubbletea_rs::{
    command::Cmd, event::KeyMsg, event::WindowSizeMsg, model::Model as TeaModel, tick, window_size,
};
use crossterm::event::{KeyCode, KeyModifiers};
use once_cell::sync::OnceCell;
use std::time::Duration;

/// Runtime configuration for the interactive program. `TeaModel::init` takes
/// no arguments, so the config travels through a cell set by `main` before
/// the program starts.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: Source,
    pub delay_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            source: Source::Seed,
            delay_ms: 1200,
        }
    }
}

static CONFIG: OnceCell<RunConfig> = OnceCell::new();

pub fn set_run_config(cfg: RunConfig) {
    // later calls keep the first value; the program is started once
    let _ = CONFIG.set(cfg);
}

fn config() -> RunConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

// Completion message for the simulated-delay refresh command.
struct RefreshLoadedMsg(Result<Vec<Product>, String>);

// The refresh command: wait out the simulated delay, then fetch a fresh
// product list from the configured source.
fn refresh_command() -> Cmd {
    let cfg = config();
    tick(Duration::from_millis(cfg.delay_ms), move |_| {
        Box::new(RefreshLoadedMsg(cfg.source.fetch())) as bubbletea_rs::event::Msg
    })
}

// Adapter type implementing the bubbletea-rs Model trait by delegating to our Model
pub struct TeaAdapter {
    pub inner: Model,
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let cfg = config();
        // initial catalog load; a failure starts the demo on an empty shelf
        // with the error shown in the header
        let mut adapter = match cfg.source.fetch() {
            Ok(products) => TeaAdapter {
                inner: initial_model(products),
            },
            Err(e) => {
                let mut m = initial_model(Vec::new());
                m.err = e;
                TeaAdapter { inner: m }
            }
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(Msg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        (adapter, Some(window_size()))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if let Some(loaded) = msg.downcast_ref::<RefreshLoadedMsg>() {
            self.inner.update(Msg::RefreshLoaded(loaded.0.clone()));
            return None;
        }
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            match &km.key {
                KeyCode::Esc => return Some(bubbletea_rs::quit()),
                KeyCode::Up => self.inner.update(Msg::KeyUp),
                KeyCode::Down => self.inner.update(Msg::KeyDown),
                KeyCode::Enter => self.inner.update(Msg::KeyEnter),
                KeyCode::Char(ch) => {
                    if km.modifiers.contains(KeyModifiers::CONTROL) {
                        match ch {
                            'c' | 'C' => return Some(bubbletea_rs::quit()),
                            'n' | 'N' => self.inner.update(Msg::KeyDown),
                            'p' | 'P' => self.inner.update(Msg::KeyUp),
                            _ => {}
                        }
                    } else {
                        match ch {
                            ' ' => self.inner.update(Msg::KeySpace),
                            'q' | 'Q' => return Some(bubbletea_rs::quit()),
                            'r' | 'R' => {
                                let was_refreshing = self.inner.refreshing;
                                self.inner.update(Msg::RefreshRequested);
                                if !was_refreshing && self.inner.refreshing {
                                    return Some(refresh_command());
                                }
                            }
                            'g' | 'G' => self.inner.update(Msg::ToggleLayout),
                            's' | 'S' => self.inner.update(Msg::CycleSelectionMode),
                            'e' | 'E' => self.inner.update(Msg::ToggleEmptyView),
                            'c' => self.inner.update(Msg::ClearList),
                            _ => {}
                        }
                    }
                }
                _ => { /* ignore other keys */ }
            }
            return None;
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(Msg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
            return None;
        }
        None
    }

    fn view(&self) -> String {
        self.inner.render_full()
    }
}

/// Non-interactive mode: fetch the catalog once and return a plain listing,
/// one line per product.
pub fn run_once(source: &Source) -> Result<String, String> {
    let products = source.fetch()?;
    let mut out = String::new();
    for (i, p) in products.iter().enumerate() {
        let stock = if p.stock == 0 {
            "out of stock".to_string()
        } else {
            format!("{} in stock", p.stock)
        };
        let mark = if p.discounted { "*" } else { " " };
        out.push_str(&format!(
            "{:>3}  {:<20} {:>8}{mark}  {stock}\n",
            i + 1,
            p.name,
            p.price_label()
        ));
    }
    Ok(out)
}
