use eframe::egui;

use crate::command::CommandHistory;
use crate::config::StudioConfig;
use crate::event::{EventBus, LoggingEventHandler};
use crate::i18n::{LanguagePicker, Translator};
use crate::input::{HotkeyRegistry, InputEvent, InputHandler};
use crate::panels;
use crate::rescale::{CanvasRescaler, frame_time};
use crate::selectors::{ReadinessSelector, ToolOptionsSelector};
use crate::state::{ActiveTab, AppState, StagingImage, persistence};
use crate::tool::ToolSelector;

pub struct StudioApp {
    state: AppState,
    history: CommandHistory,
    event_bus: EventBus,
    hotkeys: HotkeyRegistry,
    input: InputHandler,
    rescaler: CanvasRescaler,
    translator: Translator,
    readiness: ReadinessSelector,
    tool_options: ToolOptionsSelector,
    last_screen_rect: Option<egui::Rect>,
    invocations: u32,
}

impl StudioApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: StudioConfig) -> Self {
        let mut translator = Translator::with_embedded_locales().unwrap_or_else(|err| {
            log::error!("Failed to load embedded translations: {}", err);
            Translator::empty()
        });

        let stored = cc.storage.and_then(persistence::load_language);
        let code = stored.map_or(config.default_language.as_str(), |language| language.code);
        if let Err(err) = translator.set_language(code) {
            log::warn!("{}; keeping {}", err, translator.language().code);
        }

        let event_bus = EventBus::new();
        event_bus.subscribe(Box::new(LoggingEventHandler));

        Self {
            state: AppState::from_config(&config),
            history: CommandHistory::new(),
            event_bus,
            hotkeys: HotkeyRegistry::new(),
            input: InputHandler::new(),
            rescaler: CanvasRescaler::new(config.rescale_debounce()),
            translator,
            readiness: ReadinessSelector::new(),
            tool_options: ToolOptionsSelector::new(),
            last_screen_rect: None,
            invocations: 0,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        for event in self.input.process_input(ctx) {
            match event {
                InputEvent::KeyPressed(chord) => {
                    let mut selector =
                        ToolSelector::new(&mut self.state.canvas, &mut self.history, &self.event_bus);
                    self.hotkeys.dispatch(chord, &mut selector);
                }
                InputEvent::PointerMove { position } => {
                    self.state.canvas.set_cursor_position(position);
                }
                InputEvent::PointerLeave => self.state.canvas.mouse_left_canvas(),
            }
        }
    }

    fn track_resize(&mut self, ctx: &egui::Context, now: f64) {
        let screen_rect = ctx.screen_rect();
        if self.last_screen_rect.is_some_and(|last| last != screen_rect) {
            self.rescaler.request(&self.state.ui, now);
        }
        self.last_screen_rect = Some(screen_rect);
    }

    fn invoke(&mut self) {
        self.invocations += 1;
        log::info!(
            "Generation requested on {} (seed {})",
            self.state.ui.active_tab.as_str(),
            self.state.generation.seed
        );
        if self.state.ui.active_tab == ActiveTab::UnifiedCanvas {
            self.state
                .canvas
                .staging_area
                .push(StagingImage::new(format!("result-{}", self.invocations)));
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame, now: f64) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in ActiveTab::ALL {
                    let selected = self.state.ui.active_tab == tab;
                    if ui.selectable_label(selected, self.translator.t(tab.label_key())).clicked() && !selected {
                        self.state.ui.active_tab = tab;
                        self.rescaler.request(&self.state.ui, now);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let stored = frame.storage().and_then(persistence::stored_language_code);
                    if let Some(code) = panels::language_menu(ui, &self.translator, stored.as_deref()) {
                        self.choose_language(code, frame);
                    }

                    let system = &self.state.system;
                    let status = if system.is_processing {
                        "system:processing"
                    } else if system.is_connected {
                        "system:connected"
                    } else {
                        "system:disconnected"
                    };
                    ui.label(self.translator.t(status));
                });
            });
        });
    }

    fn choose_language(&mut self, code: &str, frame: &mut eframe::Frame) {
        let result = match frame.storage_mut() {
            Some(storage) => LanguagePicker::choose(code, &mut self.translator, storage, &self.event_bus),
            None => self.translator.set_language(code),
        };
        if let Err(err) = result {
            log::warn!("Language change failed: {}", err);
        }
    }
}

impl eframe::App for StudioApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        persistence::store_language(storage, self.translator.language());
    }

    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let now = frame_time(ctx);

        self.hotkeys.sync(self.state.ui.active_tab, self.state.canvas.is_staging());
        self.handle_input(ctx);
        self.track_resize(ctx, now);

        self.rescaler.poll(&mut self.state.canvas, &self.event_bus, now);
        if let Some(remaining) = self.rescaler.remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        self.top_bar(ctx, frame, now);

        let readiness = self.readiness.select(&self.state);
        let mut invoked = false;
        egui::SidePanel::left("parameters").min_width(240.0).show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                invoked = panels::invoke_button(ui, &readiness, &self.translator);
                ui.separator();
                panels::parameters_panel(ui, &mut self.state.generation, &self.translator);
            });
        });
        if invoked {
            self.invoke();
        }

        if self.state.ui.active_tab == ActiveTab::UnifiedCanvas {
            let view = self.tool_options.select(&self.state);
            egui::SidePanel::right("tools").min_width(200.0).show(ctx, |ui| {
                let mut selector = ToolSelector::new(&mut self.state.canvas, &mut self.history, &self.event_bus);
                panels::tools_panel(ui, &view, &self.translator, &mut selector);
            });

            egui::CentralPanel::default().show(ctx, |ui| {
                panels::central_panel(ui, &mut self.state.canvas, &mut self.input, &self.translator);
            });
        } else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(self.translator.t(self.state.ui.active_tab.label_key()));
            });
        }
    }
}
