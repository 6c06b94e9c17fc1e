//! Interactive window: a checkbox per layer and the projected scene

use crate::camera::OrbitCamera;
use crate::config::ViewerConfig;
use crate::projection::{project_scene, DrawItem, DrawList};
use eframe::egui;
use egui::{Color32, Pos2, Shape, Stroke};
use hullview_core::{BoundingCube, Error};
use hullview_overlay::{ToggleSender, View};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error};

/// Slot through which the app reports a fatal layer error to its caller
pub type FailureSlot = Rc<RefCell<Option<Error>>>;

/// eframe application driving a [`View`]
pub struct ViewerApp {
    view: View,
    sender: ToggleSender,
    camera: OrbitCamera,
    fitted_limits: Option<BoundingCube>,
    config: ViewerConfig,
    failure: FailureSlot,
}

fn color32([r, g, b, a]: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

impl ViewerApp {
    pub fn new(view: View, config: ViewerConfig, failure: FailureSlot) -> Self {
        let sender = view.sender();
        let camera = config.camera();
        Self {
            view,
            sender,
            camera,
            fitted_limits: None,
            config,
            failure,
        }
    }

    fn layer_panel(&self, ui: &mut egui::Ui) {
        ui.heading("Layers");
        if self.view.registry().is_empty() {
            ui.weak("no layers loaded");
        }
        for layer in self.view.layers() {
            let mut visible = layer.is_visible();
            let response = ui
                .checkbox(&mut visible, layer.label())
                .on_hover_text(format!(
                    "{} layer, {} primitives",
                    layer.renderable().kind(),
                    layer.renderable().primitive_count()
                ));
            if response.clicked() {
                self.sender.send(layer.label());
            }
        }

        ui.separator();
        let scene = self.view.scene();
        ui.label(format!("triangles: {}", scene.triangle_count()));
        ui.label(format!("scatters: {}", scene.scatter_count()));
        if let Some(limits) = scene.axis_limits() {
            ui.label(format!("axes: [{:.3}, {:.3}]", limits.min, limits.max));
        }
    }

    /// Refit the camera whenever a layer applies new axis limits
    fn sync_camera(&mut self) {
        let limits = self.view.scene().axis_limits();
        if limits != self.fitted_limits {
            if let Some(cube) = &limits {
                debug!(min = cube.min, max = cube.max, "fitting camera to axis limits");
                self.camera.fit(cube);
            }
            self.fitted_limits = limits;
        }
    }

    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        if response.dragged() {
            let delta = response.drag_delta();
            let k = self.config.orbit_sensitivity;
            self.camera.orbit(-delta.x * k, delta.y * k);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom((-scroll * self.config.zoom_sensitivity).exp());
            }
        }
    }

    fn paint(&self, painter: &egui::Painter, origin: Pos2, list: &DrawList) {
        let at = |[x, y]: [f32; 2]| Pos2::new(origin.x + x, origin.y + y);

        let frame_stroke = Stroke::new(1.0, rgb(self.config.frame_color));
        for [a, b] in &list.frame {
            painter.line_segment([at(*a), at(*b)], frame_stroke);
        }

        for item in &list.items {
            match item {
                DrawItem::Triangle { corners, fill, edge, .. } => {
                    let stroke = edge
                        .map(|(color, width)| Stroke::new(width, color32(color)))
                        .unwrap_or(Stroke::NONE);
                    painter.add(Shape::convex_polygon(
                        corners.iter().map(|c| at(*c)).collect(),
                        color32(*fill),
                        stroke,
                    ));
                }
                DrawItem::Point { center, color, radius, .. } => {
                    painter.circle_filled(at(*center), *radius, color32(*color));
                }
            }
        }
    }

    fn fail(&mut self, ctx: &egui::Context, err: Error) {
        error!(kind = err.kind(), %err, "layer error, closing viewer");
        *self.failure.borrow_mut() = Some(err);
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("layers")
            .resizable(false)
            .show(ctx, |ui| self.layer_panel(ui));

        if let Err(err) = self.view.process_events() {
            self.fail(ctx, err);
            return;
        }
        if self.view.scene_mut().take_redraw_request() {
            ctx.request_repaint();
        }
        self.sync_camera();

        let background = rgb(self.config.background_color);
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(background))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::drag());
                self.handle_input(ui, &response);

                let rect = response.rect;
                self.camera.set_viewport(rect.width(), rect.height());
                let list = project_scene(self.view.scene(), &self.camera, rect.width(), rect.height());
                self.paint(&painter, rect.min, &list);
            });
    }
}
