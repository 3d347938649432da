//! Tap Ball entry point
//!
//! On the web, wires the session to the canvas, DOM buttons and animation
//! frames. Natively there is no window, so a headless autoplay session runs.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent,
    };

    use tap_ball::audio::AudioManager;
    use tap_ball::effects::css_color;
    use tap_ball::persistence::LocalStorageStore;
    use tap_ball::platform::{pointer_event, viewport_arena};
    use tap_ball::sim::{GameEvent, NextFrame, Session, SessionState};
    use tap_ball::{ScoreLedger, Settings};

    /// Browser-side game: the session plus everything it draws into
    struct Game {
        session: Session,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        document: Document,
        audio: AudioManager,
        settings: Settings,
        /// An animation frame is already requested
        frame_pending: bool,
    }

    impl Game {
        /// Size the canvas to the window and tell the session
        fn fit_canvas(&mut self) {
            let window = web_sys::window().unwrap();
            let inner_w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(400.0);
            let inner_h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);

            let arena = viewport_arena(inner_w as f32, inner_h as f32);
            self.canvas.set_width(arena.width() as u32);
            self.canvas.set_height(arena.height() as u32);
            self.session.resize(arena.width(), arena.height());
        }

        /// Draw particles, then the ball with its glow
        fn draw(&self) {
            let ctx = &self.ctx;
            let arena = self.session.arena();
            ctx.clear_rect(0.0, 0.0, arena.width() as f64, arena.height() as f64);

            for p in self.session.particles().iter() {
                ctx.begin_path();
                let _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
                ctx.set_fill_style_str(&css_color(p.color));
                ctx.set_global_alpha(p.alpha() as f64);
                ctx.fill();
                ctx.close_path();
            }
            ctx.set_global_alpha(1.0);

            let ball = self.session.ball();
            let color = css_color(self.session.color());
            ctx.save();
            ctx.begin_path();
            let _ = ctx.arc(
                ball.pos.x as f64,
                ball.pos.y as f64,
                ball.visual_radius() as f64,
                0.0,
                TAU,
            );
            ctx.set_fill_style_str(&color);
            ctx.set_shadow_color(&color);
            ctx.set_shadow_blur(10.0);
            ctx.fill();
            ctx.close_path();
            ctx.restore();
        }

        /// Play queued effects and refresh the DOM
        fn present(&mut self) {
            let events: Vec<GameEvent> = self.session.drain_events().collect();
            for event in events {
                match event {
                    GameEvent::Hit { .. } => self.audio.play_tap(),
                    GameEvent::SessionEnded { final_score, .. } => {
                        set_text(&self.document, "finalScore", &final_score.to_string());
                    }
                }
            }
            self.update_hud();
            self.draw();
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let doc = &self.document;
            let snap = self.session.snapshot();

            set_text(doc, "scoreValue", &snap.score.to_string());
            set_text(doc, "highScoreValue", &snap.best_score.to_string());

            let in_session = matches!(snap.state, SessionState::Running | SessionState::Paused);
            set_display(doc, "startButton", if in_session { "none" } else { "block" });
            set_display(doc, "gameplay-buttons", if in_session { "flex" } else { "none" });
            set_display(
                doc,
                "gameOver",
                if snap.state == SessionState::Ended { "block" } else { "none" },
            );
            set_text(
                doc,
                "pauseButton",
                if snap.state == SessionState::Paused { "Resume" } else { "Pause" },
            );
            set_text(
                doc,
                "soundButton",
                if self.settings.sound { "Sound: on" } else { "Sound: off" },
            );
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_display(document: &Document, id: &str, display: &str) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = el.style().set_property("display", display);
        }
    }

    /// Request the next frame if the session wants one and none is pending
    fn schedule(game: &Rc<RefCell<Game>>, next: NextFrame) {
        if next != NextFrame::Request {
            return;
        }
        {
            let mut g = game.borrow_mut();
            if g.frame_pending {
                return;
            }
            g.frame_pending = true;
        }

        let window = web_sys::window().unwrap();
        let game = game.clone();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let next = {
            let mut g = game.borrow_mut();
            g.frame_pending = false;
            let next = g.session.tick();
            g.draw();
            next
        };
        schedule(&game, next);
    }

    /// Run `action` on the game, refresh the page, and keep the loop going
    fn dispatch(game: &Rc<RefCell<Game>>, action: impl FnOnce(&mut Game) -> NextFrame) {
        let next = {
            let mut g = game.borrow_mut();
            let next = action(&mut *g);
            g.present();
            next
        };
        schedule(game, next);
    }

    fn on_button(game: &Rc<RefCell<Game>>, id: &str, action: fn(&mut Game) -> NextFrame) {
        let document = game.borrow().document.clone();
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Missing #{id} button");
            return;
        };
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            dispatch(&game, action);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn start(g: &mut Game) -> NextFrame {
        g.fit_canvas();
        g.session.start()
    }

    fn toggle_sound(g: &mut Game) -> NextFrame {
        g.settings.toggle_sound();
        g.settings.save();
        g.audio.set_volume(g.settings.effective_volume());
        NextFrame::for_state(g.session.state())
    }

    fn setup_buttons(game: &Rc<RefCell<Game>>) {
        on_button(game, "startButton", start);
        on_button(game, "restartButton", start);
        on_button(game, "pauseButton", |g| g.session.toggle_pause());
        on_button(game, "stopButton", |g| g.session.stop());
        on_button(game, "soundButton", toggle_sound);
    }

    fn canvas_origin(canvas: &HtmlCanvasElement) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(rect.left() as f32, rect.top() as f32)
    }

    fn setup_input(game: &Rc<RefCell<Game>>) {
        let canvas = game.borrow().canvas.clone();

        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                dispatch(&game, |g| {
                    let origin = canvas_origin(&g.canvas);
                    let pointer = pointer_event(
                        event.client_x() as f32,
                        event.client_y() as f32,
                        origin,
                        js_sys::Date::now(),
                    );
                    g.session.pointer(&pointer);
                    NextFrame::for_state(g.session.state())
                });
            });
            let _ =
                canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let Some(touch) = event.touches().get(0) else {
                    return;
                };
                dispatch(&game, |g| {
                    let origin = canvas_origin(&g.canvas);
                    let pointer = pointer_event(
                        touch.client_x() as f32,
                        touch.client_y() as f32,
                        origin,
                        js_sys::Date::now(),
                    );
                    g.session.pointer(&pointer);
                    NextFrame::for_state(g.session.state())
                });
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(game: &Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut g = game.borrow_mut();
            g.fit_canvas();
            g.draw();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tap Ball starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let ledger = ScoreLedger::load(LocalStorageStore::default());
        let seed = js_sys::Date::now() as u64;
        let mut session = Session::new(viewport_arena(400.0, 600.0), ledger, seed);
        session.set_particles_enabled(settings.particles);

        let game = Rc::new(RefCell::new(Game {
            session,
            canvas,
            ctx,
            document,
            audio: AudioManager::new(settings.effective_volume()),
            settings,
            frame_pending: false,
        }));

        {
            let mut g = game.borrow_mut();
            g.fit_canvas();
            g.present();
        }

        setup_buttons(&game);
        setup_input(&game);
        setup_resize(&game);

        log::info!("Ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Tap Ball (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    headless::run();
}

/// Autoplay driver: taps the ball on a fixed cadence, then misses on purpose
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use tap_ball::ScoreLedger;
    use tap_ball::consts::FRAME_MS;
    use tap_ball::persistence::FileStore;
    use tap_ball::sim::{Arena, GameEvent, NextFrame, PointerEvent, Session};

    /// Frames between taps (about 133 ms, clear of the cooldown)
    const TAP_EVERY: u64 = 8;
    /// Hits before the deliberate miss
    const TARGET_HITS: u32 = 25;

    pub fn run() {
        let store = FileStore::in_temp_dir();
        log::info!("Best score file: {}", store.path().display());

        let mut session = Session::new(Arena::default(), ScoreLedger::load(store), 0x7a9_ba11);
        let mut next = session.start();
        let mut frame: u64 = 0;

        while next == NextFrame::Request {
            next = session.tick();
            frame += 1;
            if frame % TAP_EVERY != 0 {
                continue;
            }

            let pos = if session.score() < TARGET_HITS {
                session.ball().pos
            } else {
                Vec2::new(-1000.0, -1000.0)
            };
            let event = PointerEvent {
                pos,
                timestamp: frame as f64 * FRAME_MS,
            };
            if let Some(attempt) = session.pointer(&event) {
                log::debug!("Frame {frame}: {attempt:?}");
            }
            next = NextFrame::for_state(session.state());
        }

        for event in session.drain_events() {
            if let GameEvent::SessionEnded {
                final_score,
                new_record,
            } = event
            {
                println!(
                    "Final score: {final_score}{}",
                    if new_record { " (new best!)" } else { "" }
                );
            }
        }
        let ball = session.ball();
        println!(
            "Best score: {}, ball speed at the end: ({:.2}, {:.2}) after {} frames",
            session.best_score(),
            ball.vel.x.abs(),
            ball.vel.y.abs(),
            frame
        );
    }
}
