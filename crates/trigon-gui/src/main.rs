use eframe::egui;
use log::{info, warn};
use std::path::PathBuf;
use trigon_core::{layout_triangle, LayoutConfig, Point, Triangle, TriangleLayout};
use trigon_svg::{save_svg, SvgStyle};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "trigon",
        native_options,
        Box::new(|cc| Ok(Box::new(TrigonApp::new(cc)))),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Input,
    Display,
}

#[derive(Debug, Clone, Default)]
struct PointFields {
    x: String,
    y: String,
}

impl PointFields {
    fn parse(&self, index: usize) -> Result<Point, String> {
        format!("{},{}", self.x.trim(), self.y.trim())
            .parse::<Point>()
            .map_err(|e| format!("Point {}: {e}", index + 1))
    }
}

struct TrigonApp {
    screen: Screen,
    fields: [PointFields; 3],
    input_error: Option<String>,

    cfg: LayoutConfig,
    triangle: Triangle,
    layout: TriangleLayout,

    saved_svg: Option<PathBuf>,
    status: String,
}

impl TrigonApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let cfg = LayoutConfig::default();
        let triangle = Triangle::default();
        let fields = triangle.vertices.map(|p| PointFields {
            x: p.x.to_string(),
            y: p.y.to_string(),
        });
        Self {
            screen: Screen::Input,
            fields,
            input_error: None,
            layout: layout_triangle(&triangle, &cfg),
            cfg,
            triangle,
            saved_svg: None,
            status: "Enter three points.".to_string(),
        }
    }

    fn parse_fields(&self) -> Result<Triangle, String> {
        let a = self.fields[0].parse(0)?;
        let b = self.fields[1].parse(1)?;
        let c = self.fields[2].parse(2)?;
        Ok(Triangle::new(a, b, c))
    }

    fn show_triangle(&mut self) {
        match self.parse_fields() {
            Ok(triangle) => {
                info!("showing {triangle:?}");
                self.triangle = triangle;
                self.input_error = None;
                self.relayout();
                self.saved_svg = None;
                self.screen = Screen::Display;
            }
            Err(e) => {
                warn!("{e}");
                self.input_error = Some(e);
            }
        }
    }

    fn relayout(&mut self) {
        if let Err(e) = self.cfg.validate() {
            self.status = format!("Invalid settings: {e}");
            return;
        }
        self.layout = layout_triangle(&self.triangle, &self.cfg);
        self.status = match self.layout.warnings.first() {
            Some(w) => w.message.clone(),
            None => format!("Total: {:.1}°", self.layout.angles.sum()),
        };
    }

    fn pick_svg_output(&mut self) {
        let file = rfd::FileDialog::new()
            .add_filter("SVG image", &["svg"])
            .set_file_name("triangle.svg")
            .save_file();
        let Some(path) = file else {
            return;
        };
        match save_svg(&path, &self.layout, &SvgStyle::default()) {
            Ok(()) => {
                self.status = format!("Wrote {}", path.display());
                self.saved_svg = Some(path);
            }
            Err(e) => {
                self.status = format!("Failed to write {}: {e:#}", path.display());
            }
        }
    }

    fn input_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Triangle Input");
            ui.label("Enter the coordinates for three points to create a triangle.");
            ui.separator();

            for (i, f) in self.fields.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(format!("Point {}", i + 1));
                    ui.label("X:");
                    ui.add(egui::TextEdit::singleline(&mut f.x).desired_width(80.0));
                    ui.label("Y:");
                    ui.add(egui::TextEdit::singleline(&mut f.y).desired_width(80.0));
                });
            }

            if let Some(err) = &self.input_error {
                ui.colored_label(egui::Color32::from_rgb(0xC0, 0x39, 0x2B), err);
            }

            ui.add_space(8.0);
            if ui.button("Show Triangle").clicked() {
                self.show_triangle();
            }
        });
    }

    fn display_screen(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Back to Input").clicked() {
                    self.screen = Screen::Input;
                }
                ui.separator();
                let radius = ui.add(
                    egui::DragValue::new(&mut self.cfg.arc_radius)
                        .speed(0.5)
                        .range(0.0..=200.0)
                        .prefix("arc radius="),
                );
                let offset = ui.add(
                    egui::DragValue::new(&mut self.cfg.label_offset)
                        .speed(0.5)
                        .range(-100.0..=200.0)
                        .prefix("label offset="),
                );
                if radius.changed() || offset.changed() {
                    self.relayout();
                }
                ui.separator();
                if ui.button("Save SVG…").clicked() {
                    self.pick_svg_output();
                }
                if let Some(p) = self.saved_svg.clone() {
                    if ui.button("Open").clicked() {
                        if let Err(e) = open::that(&p) {
                            self.status = format!("Failed to open {}: {e}", p.display());
                        }
                    }
                }
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Triangle Display");
            for w in &self.layout.warnings {
                ui.colored_label(egui::Color32::from_rgb(0xE6, 0x7E, 0x22), &w.message);
            }
            ui.separator();
            draw_layout(ui, &self.layout);
        });
    }
}

impl eframe::App for TrigonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::Input => self.input_screen(ctx),
            Screen::Display => self.display_screen(ctx),
        }
    }
}

/// Maps viewport units onto the square screen area the layout is drawn in.
#[derive(Debug, Clone, Copy)]
struct ViewportToScreen {
    rect: egui::Rect,
    scale: f32,
}

impl ViewportToScreen {
    fn new(rect: egui::Rect, viewport_size: f64) -> Self {
        let scale = rect.width() / viewport_size.max(1e-6) as f32;
        Self { rect, scale }
    }

    // Both frames grow y downward, so no flip.
    fn point(&self, p: Point) -> egui::Pos2 {
        self.rect.min + egui::vec2(p.x as f32 * self.scale, p.y as f32 * self.scale)
    }
}

fn draw_layout(ui: &mut egui::Ui, layout: &TriangleLayout) {
    let available = ui.available_size();
    let side = available.x.min(available.y).max(50.0);
    let (rect, _response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let tx = ViewportToScreen::new(rect, layout.viewport.size);

    painter.rect_filled(rect, egui::CornerRadius::same(0), egui::Color32::WHITE);
    painter.rect_stroke(
        rect,
        egui::CornerRadius::same(0),
        egui::Stroke::new(2.0, egui::Color32::from_gray(0xCC)),
        egui::StrokeKind::Inside,
    );

    let edge = egui::Stroke::new(3.0, egui::Color32::from_gray(0x33));
    let arc_stroke = egui::Stroke::new(2.0, egui::Color32::from_rgb(0xE7, 0x4C, 0x3C));
    let text_color = egui::Color32::from_rgb(0x2C, 0x3E, 0x50);
    let font = egui::FontId::proportional((16.0 * tx.scale).max(9.0));

    let corners = layout.vertices.iter().map(|p| tx.point(*p)).collect::<Vec<_>>();
    painter.add(egui::Shape::closed_line(corners, edge));

    for arc in &layout.arcs {
        let pts = arc
            .sample(32)
            .into_iter()
            .map(|p| tx.point(p))
            .collect::<Vec<_>>();
        painter.add(egui::Shape::line(pts, arc_stroke));
    }

    for label in layout.labels.iter().chain(std::iter::once(&layout.total)) {
        painter.text(
            tx.point(label.position),
            egui::Align2::CENTER_CENTER,
            &label.text,
            font.clone(),
            text_color,
        );
    }
}
