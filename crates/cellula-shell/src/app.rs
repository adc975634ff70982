use cellula_engine::coords::Vec2;
use cellula_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use cellula_engine::device::Gpu;
use cellula_engine::input::{InputEvent, Key, KeyState, PointerMoveEvent};
use cellula_engine::logging::{LogSink, Logger};
use cellula_engine::render::shapes::RectRenderer;
use cellula_engine::scene::{DrawList, ZIndex};
use winit::event::WindowEvent;

use crate::config;
use crate::grid::{GridCursor, GridLayout};

/// The shell: a static grid with a movable cell cursor.
pub struct GridApp<'l, S: LogSink> {
    logger: &'l mut Logger<S>,

    layout: GridLayout,
    cursor: GridCursor,

    draw_list: DrawList,
    rect_renderer: RectRenderer,
}

impl<'l, S: LogSink> GridApp<'l, S> {
    pub fn new(logger: &'l mut Logger<S>) -> Self {
        let layout = GridLayout::fit(
            config::SCREEN_WIDTH as f32,
            config::SCREEN_HEIGHT as f32,
            config::CELL_SIZE,
        );
        Self {
            logger,
            layout,
            cursor: GridCursor::at_cell(&layout, 0, 0),
            draw_list: DrawList::new(),
            rect_renderer: RectRenderer::new(),
        }
    }

    /// Applies one frame of input events in arrival order.
    fn apply_input(&mut self, events: &[InputEvent]) -> AppControl {
        for ev in events {
            match *ev {
                InputEvent::Key { key: Key::Escape, state: KeyState::Pressed, .. } => {
                    self.logger.info("Quit requested");
                    return AppControl::Exit;
                }
                InputEvent::Key { key, state: KeyState::Pressed, .. } => {
                    if let Some((dx, dy)) = step_for(key) {
                        self.cursor.step(&self.layout, dx, dy);
                    }
                }
                InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                    self.cursor.snap_to(&self.layout, Vec2::new(x, y));
                }
                _ => {}
            }
        }
        AppControl::Continue
    }

    fn build_scene(&mut self) {
        self.draw_list.clear();
        self.layout.push_lines(
            &mut self.draw_list,
            ZIndex::BACKGROUND,
            config::GRID_LINE_WIDTH,
            config::grid_line_color(),
        );
        self.cursor.push_outline(
            &mut self.draw_list,
            ZIndex::OVERLAY,
            config::CURSOR_STROKE_WIDTH,
            config::cursor_color(),
        );
    }

    fn refit(&mut self, width: f32, height: f32) {
        self.layout = GridLayout::fit(width, height, config::CELL_SIZE);
        self.cursor.fit_to(&self.layout);
    }
}

/// Cursor step for a movement key: arrows or WASD.
fn step_for(key: Key) -> Option<(i32, i32)> {
    match key {
        Key::ArrowUp | Key::Letter('W') => Some((0, -1)),
        Key::ArrowDown | Key::Letter('S') => Some((0, 1)),
        Key::ArrowLeft | Key::Letter('A') => Some((-1, 0)),
        Key::ArrowRight | Key::Letter('D') => Some((1, 0)),
        _ => None,
    }
}

impl<S: LogSink> App for GridApp<'_, S> {
    fn on_init(&mut self, window: &WindowCtx<'_>, gpu: &Gpu<'_>) {
        let info = gpu.adapter_info();
        self.logger
            .info(format!("Current renderer: {} ({:?})", info.name, info.backend));

        let (w, h) = window.logical_size();
        self.refit(w, h);
    }

    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if let WindowEvent::CloseRequested = event {
            self.logger.info("Quit requested");
            return AppControl::Exit;
        }
        AppControl::Continue
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        self.refit(width, height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.apply_input(&ctx.input_frame.events) == AppControl::Exit {
            return AppControl::Exit;
        }

        self.build_scene();

        let dl = &mut self.draw_list;
        let rects = &mut self.rect_renderer;
        ctx.render(config::clear_color(), |rctx, target| {
            rects.render(rctx, target, dl);
        })
    }
}

#[cfg(test)]
mod tests {
    use cellula_engine::logging::{LogLevel, MemorySink};

    use super::*;

    fn press(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    fn repeat(key: Key) -> InputEvent {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: true }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    #[test]
    fn arrows_and_wasd_step_the_cursor() {
        let mut logger = Logger::new(MemorySink::new());
        let mut app = GridApp::new(&mut logger);

        let events = [
            press(Key::ArrowRight),
            press(Key::Letter('D')),
            press(Key::ArrowDown),
            press(Key::Letter('S')),
            press(Key::Letter('S')),
            press(Key::Letter('A')),
            press(Key::Letter('W')),
        ];
        assert_eq!(app.apply_input(&events), AppControl::Continue);

        let layout = app.layout;
        assert_eq!(app.cursor.cell(&layout), (1, 2));
    }

    #[test]
    fn key_repeat_keeps_moving() {
        let mut logger = Logger::new(MemorySink::new());
        let mut app = GridApp::new(&mut logger);

        app.apply_input(&[press(Key::ArrowRight), repeat(Key::ArrowRight), repeat(Key::ArrowRight)]);
        let layout = app.layout;
        assert_eq!(app.cursor.cell(&layout), (3, 0));
    }

    #[test]
    fn releases_and_other_keys_are_ignored() {
        let mut logger = Logger::new(MemorySink::new());
        let mut app = GridApp::new(&mut logger);

        let events = [
            InputEvent::Key { key: Key::ArrowRight, state: KeyState::Released, repeat: false },
            press(Key::Letter('Q')),
            press(Key::Space),
            InputEvent::Focused(true),
        ];
        app.apply_input(&events);
        let layout = app.layout;
        assert_eq!(app.cursor.cell(&layout), (0, 0));
    }

    #[test]
    fn pointer_snaps_and_later_keys_continue_from_there() {
        let mut logger = Logger::new(MemorySink::new());
        let mut app = GridApp::new(&mut logger);

        app.apply_input(&[moved(405.0, 101.0), press(Key::ArrowUp)]);
        let layout = app.layout;
        assert_eq!(app.cursor.cell(&layout), (20, 4));
    }

    #[test]
    fn escape_exits_and_logs() {
        let mut logger = Logger::new(MemorySink::new());
        {
            let mut app = GridApp::new(&mut logger);
            let control = app.apply_input(&[press(Key::Escape), press(Key::ArrowRight)]);
            assert_eq!(control, AppControl::Exit);
            let layout = app.layout;
            assert_eq!(app.cursor.cell(&layout), (0, 0));
        }

        let entries = logger.sink().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Info);
        assert_eq!(entries[0].message, "Quit requested");
    }

    #[test]
    fn close_request_exits_and_logs() {
        let mut logger = Logger::new(MemorySink::new());
        {
            let mut app = GridApp::new(&mut logger);
            assert_eq!(app.on_window_event(&WindowEvent::CloseRequested), AppControl::Exit);
            assert_eq!(app.on_window_event(&WindowEvent::Focused(true)), AppControl::Continue);
        }
        assert_eq!(logger.sink().len(), 1);
    }

    #[test]
    fn resize_refits_grid_and_clamps_cursor() {
        let mut logger = Logger::new(MemorySink::new());
        let mut app = GridApp::new(&mut logger);

        app.apply_input(&[moved(1270.0, 710.0)]);
        app.on_resize(100.0, 60.0);

        assert_eq!((app.layout.cols, app.layout.rows), (5, 3));
        let layout = app.layout;
        assert_eq!(app.cursor.cell(&layout), (4, 2));
    }

    #[test]
    fn scene_puts_cursor_above_grid() {
        let mut logger = Logger::new(MemorySink::new());
        let mut app = GridApp::new(&mut logger);
        app.on_resize(60.0, 40.0);
        app.build_scene();

        let z: Vec<ZIndex> = app.draw_list.iter_in_paint_order().map(|item| item.key.z).collect();
        assert_eq!(z.len(), 7 + 4);
        assert!(z[..7].iter().all(|&z| z == ZIndex::BACKGROUND));
        assert!(z[7..].iter().all(|&z| z == ZIndex::OVERLAY));
    }
}
