use crossterm::event::{self, Event, KeyEventKind};
use log::LevelFilter;
use posts_core::{update, AppState, Effect, Msg, PaginationConfig};
use posts_engine::FetchSettings;
use posts_logging::posts_info;

use super::effects::EffectRunner;
use super::logging;
use super::terminal::TerminalGuard;
use super::ui::constants::TICK_INTERVAL;
use super::ui::keys::{self, KeyAction};
use super::ui::layout::Layout;
use super::ui::render;
use super::ui::viewport::{IntersectionTracker, ListViewport};

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LevelFilter::Info);
    posts_info!("posts_app starting");

    let runner = EffectRunner::new(FetchSettings::default())?;
    let (state, initial_effects) = AppState::init(PaginationConfig::default());

    let terminal = TerminalGuard::enter()?;
    let (width, height) = terminal.size()?;
    let mut app = App::new(state, runner, terminal, Layout::compute(width, height));
    app.run_effects(initial_effects);
    let result = app.event_loop();

    app.tracker.release();
    posts_info!("posts_app exiting");
    result
}

struct App {
    state: AppState,
    runner: EffectRunner,
    terminal: TerminalGuard,
    layout: Layout,
    viewport: ListViewport,
    tracker: IntersectionTracker,
    needs_render: bool,
}

impl App {
    fn new(state: AppState, runner: EffectRunner, terminal: TerminalGuard, layout: Layout) -> Self {
        Self {
            state,
            runner,
            terminal,
            layout,
            viewport: ListViewport::new(usize::from(layout.list_height)),
            tracker: IntersectionTracker::default(),
            needs_render: true,
        }
    }

    fn event_loop(&mut self) -> anyhow::Result<()> {
        loop {
            while self.needs_render {
                self.render()?;
            }

            if event::poll(TICK_INTERVAL)? {
                let action = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => keys::map_key(key),
                    Event::Mouse(mouse) => keys::map_mouse(mouse),
                    Event::Resize(width, height) => {
                        self.resize(width, height);
                        None
                    }
                    _ => None,
                };
                if let Some(KeyAction::Quit) = action {
                    return Ok(());
                }
                if let Some(action) = action {
                    self.handle_action(action);
                }
            } else {
                self.dispatch(Msg::Tick);
            }

            for msg in self.runner.poll() {
                self.dispatch(msg);
            }
        }
    }

    fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Edit(edit) => {
                let text = keys::apply_edit(self.state.filter_text(), edit);
                self.dispatch(Msg::FilterChanged(text));
            }
            KeyAction::LoadMore => self.dispatch(Msg::LoadMoreClicked),
            KeyAction::Retry => self.dispatch(Msg::RetryClicked),
            KeyAction::BackToTop => self.dispatch(Msg::BackToTopClicked),
            KeyAction::ScrollBy(delta) => self.scroll(|viewport| viewport.scroll_by(delta)),
            KeyAction::PageUp => self.scroll(ListViewport::page_up),
            KeyAction::PageDown => self.scroll(ListViewport::page_down),
            KeyAction::ToBottom => self.scroll(ListViewport::to_bottom),
            KeyAction::Quit => {}
        }
    }

    fn scroll(&mut self, apply: impl FnOnce(&mut ListViewport)) {
        let before = self.viewport.offset();
        apply(&mut self.viewport);
        if self.viewport.offset() != before {
            self.needs_render = true;
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.layout = Layout::compute(width, height);
        self.viewport.set_height(usize::from(self.layout.list_height));
        self.needs_render = true;
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_render = true;
        }
        self.state = state;
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScrollToTop => {
                    self.viewport.to_top();
                    self.needs_render = true;
                }
                Effect::FetchPage(request) => self.runner.fetch_page(request),
            }
        }
    }

    /// Draws the current view, then lets the tracker report on the
    /// watched post as positioned in this frame.
    fn render(&mut self) -> anyhow::Result<()> {
        self.needs_render = false;
        let view = self.state.view();
        let content = render::build_list(&view, usize::from(self.layout.width));
        self.viewport.set_content_len(content.lines.len());
        let screen = render::render(&view, &self.layout, &content, &self.viewport);
        self.terminal.draw(&screen)?;

        if let Some(msg) = self.tracker.observe(view.observed, &content, &self.viewport) {
            self.dispatch(msg);
        }
        Ok(())
    }
}
