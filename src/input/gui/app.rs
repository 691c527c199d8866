//! Window loop for the colour transition preview.

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::error;
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::core::actions::generate_gradient::generate_gradient::GRADIENT_AXIS_LABELS;
use crate::core::swatch::swatch::{Swatch, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use crate::presenters::pixels::presenter::PixelsPresenter;

const SWATCH_SIZE: [f32; 2] = [280.0, 96.0];

struct App {
    presenter: PixelsPresenter,
    width: u32,
    height: u32,
    swatch: Swatch,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl App {
    fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let presenter = PixelsPresenter::new(window)?;

        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            presenter,
            width: size.width,
            height: size.height,
            swatch: Swatch::default(),
            egui_ctx,
            egui_state,
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;
        self.presenter.resize(width, height)
    }

    fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let swatch = &mut self.swatch;

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Colour Transition Preview")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Slider::new(swatch.time_mut(), SLIDER_MIN..=SLIDER_MAX)
                                .step_by(SLIDER_STEP)
                                .show_value(false),
                        );
                        ui.label(swatch.time_label());
                    });

                    let colour = swatch.colour();
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(SWATCH_SIZE[0], SWATCH_SIZE[1]),
                        egui::Sense::hover(),
                    );
                    ui.painter().rect_filled(
                        rect,
                        8.0,
                        egui::Color32::from_rgb(colour.r, colour.g, colour.b),
                    );

                    ui.label("Current RGB:");
                    ui.monospace(swatch.readout());

                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.label("Gradient axis:");
                        for label in GRADIENT_AXIS_LABELS {
                            ui.label(label);
                        }
                    });
                });
        })
    }

    /// Returns true if egui consumed the event.
    fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).consumed
    }
}

/// Opens the preview window and blocks until it is closed.
pub fn run_gui() -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;

    // pixels needs a 'static window
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Colour Transition Preview")
            .with_inner_size(LogicalSize::new(800.0, 600.0))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let mut app = App::new(window, &event_loop)?;
    let mut redraw_pending = true;

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            let egui_consumed = app.handle_window_event(window, event);

            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::RedrawRequested => {
                    redraw_pending = false;

                    let egui_output = app.update_ui(window);
                    app.egui_state
                        .handle_platform_output(window, egui_output.platform_output.clone());

                    if egui_output
                        .viewport_output
                        .values()
                        .any(|v| v.repaint_delay.is_zero())
                    {
                        redraw_pending = true;
                    }

                    if let Err(e) = app.presenter.render(egui_output, &app.egui_ctx) {
                        error!("render error: {e}");
                        elwt.exit();
                    }
                }
                WindowEvent::Resized(size) => {
                    if let Err(e) = app.resize(size.width, size.height) {
                        error!("resize error: {e}");
                        elwt.exit();
                    }
                    redraw_pending = true;
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                    let size = window.inner_size();
                    if let Err(e) = app.resize(size.width, size.height) {
                        error!("resize error: {e}");
                        elwt.exit();
                    }
                    redraw_pending = true;
                }
                _ => {
                    if egui_consumed {
                        redraw_pending = true;
                    }
                }
            }
        }
        Event::AboutToWait => {
            if redraw_pending {
                window.request_redraw();
            }
        }
        _ => {}
    })?;

    Ok(())
}
