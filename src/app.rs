use crate::element::MaterialType;
use crate::error::SketchResult;
use crate::persistence::SavedSketch;
use crate::sketch::SketchTool;
use crate::state::DrawMode;
use crate::surface::EguiSurface;

const SKETCH_KEY: &str = "floorplan_sketch";

/// Demo host: a toolbar plus one sketch canvas.
pub struct SketchApp {
    tool: SketchTool<EguiSurface>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> SketchResult<Self> {
        let surface = EguiSurface::new(cc.egui_ctx.clone(), egui::Rect::NOTHING);
        let mut tool = SketchTool::new(surface)?;

        if let Some(saved) = cc
            .storage
            .and_then(|storage| eframe::get_value::<SavedSketch>(storage, SKETCH_KEY))
        {
            tool.load_elements(saved.into_elements());
        }

        Ok(Self { tool })
    }

    fn tools_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("tools_panel")
            .resizable(false)
            .default_width(160.0)
            .show(ctx, |ui| {
                ui.heading("Draw");
                for mode in DrawMode::ALL {
                    if ui
                        .selectable_label(self.tool.mode() == mode, mode.name())
                        .clicked()
                    {
                        self.tool.set_mode(mode);
                    }
                }

                ui.separator();
                ui.heading("Wall material");
                for material in MaterialType::ALL {
                    if ui
                        .selectable_label(self.tool.material() == material, material.name())
                        .clicked()
                    {
                        self.tool.set_material(material);
                    }
                }

                ui.separator();
                if ui
                    .add_enabled(self.tool.can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    self.tool.undo();
                }
                ui.label(format!("Undo stack size: {}", self.tool.history_len()));

                let elements = self.tool.elements();
                ui.label(format!(
                    "{} walls, {} doors, {} windows",
                    elements.walls.len(),
                    elements.doors.len(),
                    elements.windows.len()
                ));
            });
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SKETCH_KEY, &SavedSketch::new(self.tool.elements().clone()));
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input_mut(|i| i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z)) {
            self.tool.undo();
        }

        self.tools_panel(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            painter.rect_filled(response.rect, 0.0, egui::Color32::WHITE);

            self.tool.surface_mut().set_rect(response.rect);
            self.tool.update(ctx);
            self.tool.paint(&painter);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.tool.destroy();
    }
}
