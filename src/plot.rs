//! eframe/egui_plot 기반 산점도 뷰어.
//!
//! 유도 시계열마다 한 페이지씩, 기준값/평균값 수평선을 겹친 산점도를 보여준다.
//! 창이 닫힐 때까지 호출 스레드를 블로킹한다.

use eframe::{egui, App, Frame};
use egui_plot::{HLine, Legend, LineStyle, Plot, Points};
use image::GenericImageView;
use std::{fs, path::Path};

use crate::app::section_key;
use crate::flowloop::pipeline::{AnalysisReport, Section};
use crate::i18n::{keys, Translator};

/// 한 페이지(= 유도 시계열 한 개)의 플롯 데이터.
struct PlotPage {
    title: String,
    points: Vec<[f64; 2]>,
    point_color: egui::Color32,
    reference: f64,
    average: f64,
}

struct ViewerLabels {
    ideal: String,
    average: String,
    sample_index: String,
    prev: String,
    next: String,
    close: String,
}

/// 분석 결과를 순차 페이지로 보여주는 뷰어.
pub struct PlotViewer {
    pages: Vec<PlotPage>,
    current: usize,
    labels: ViewerLabels,
}

impl PlotViewer {
    pub fn new(report: &AnalysisReport, tr: &Translator) -> Self {
        let pages = report
            .series
            .iter()
            .map(|series| PlotPage {
                title: tr.t(section_key(series.section)).to_string(),
                points: series
                    .indices
                    .iter()
                    .zip(&series.values)
                    .map(|(&i, &v)| [f64::from(i), v])
                    .collect(),
                point_color: section_color(series.section),
                reference: series.reference,
                average: series.summary.average,
            })
            .collect();
        Self {
            pages,
            current: 0,
            labels: ViewerLabels {
                ideal: tr.t(keys::PLOT_IDEAL_VALUE).to_string(),
                average: tr.t(keys::PLOT_AVERAGE_VALUE).to_string(),
                sample_index: tr.t(keys::PLOT_SAMPLE_INDEX).to_string(),
                prev: tr.t(keys::PLOT_PREV).to_string(),
                next: tr.t(keys::PLOT_NEXT).to_string(),
                close: tr.t(keys::PLOT_CLOSE).to_string(),
            },
        }
    }
}

fn section_color(section: Section) -> egui::Color32 {
    match section {
        Section::FrictionFactor => egui::Color32::from_rgb(31, 119, 240),
        Section::GlobeValve => egui::Color32::from_rgb(44, 160, 44),
        Section::BallValve => egui::Color32::from_rgb(214, 39, 40),
    }
}

impl App for PlotViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let total = self.pages.len();
        let mut go_prev = false;
        let mut go_next = false;
        let mut close = false;

        egui::TopBottomPanel::bottom("plot_nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.current > 0, egui::Button::new(&self.labels.prev))
                    .clicked()
                {
                    go_prev = true;
                }
                ui.label(format!("{} / {total}", self.current + 1));
                if self.current + 1 < total {
                    if ui.button(&self.labels.next).clicked() {
                        go_next = true;
                    }
                } else if ui.button(&self.labels.close).clicked() {
                    close = true;
                }
            });
        });

        let page = &self.pages[self.current];
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&page.title);
            Plot::new(("flowloop_scatter", self.current))
                .legend(Legend::default())
                .x_axis_label(&self.labels.sample_index)
                .y_axis_label(&page.title)
                .show(ui, |plot_ui| {
                    plot_ui.points(
                        Points::new(page.points.clone())
                            .radius(3.0)
                            .color(page.point_color)
                            .name(&page.title),
                    );
                    plot_ui.hline(
                        HLine::new(page.reference)
                            .color(egui::Color32::GRAY)
                            .style(LineStyle::Dashed { length: 8.0 })
                            .name(&self.labels.ideal),
                    );
                    plot_ui.hline(
                        HLine::new(page.average)
                            .color(egui::Color32::from_rgb(227, 27, 227))
                            .style(LineStyle::Dashed { length: 8.0 })
                            .name(&self.labels.average),
                    );
                });
        });

        if go_prev {
            self.current -= 1;
        }
        if go_next {
            self.current += 1;
        }
        if close {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

/// 플롯 창을 연다. 마지막 페이지에서 닫기를 누르거나 창을 닫으면 반환된다.
pub fn show(report: &AnalysisReport, tr: &Translator) -> Result<(), eframe::Error> {
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([900.0, 620.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let viewer = PlotViewer::new(report, tr);
    eframe::run_native(
        "Flow Loop Analysis",
        options,
        Box::new(move |_cc| Box::new(viewer)),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}
