#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use calculator_toolbox::{
    config, conversion,
    growth::{self, BabyGrowthInput, BabyGrowthResult, Gender},
    i18n, logging,
    quantity::Dimension,
};
use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path};
use tracing::{error, info, warn};

/// GUI 실행 인자. 언어만 받는다.
#[derive(Debug, Parser)]
#[command(name = "calculator_toolbox", version)]
struct GuiArgs {
    /// 언어 코드 (auto, ru, en)
    #[arg(long, short = 'L')]
    lang: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let loaded = config::load_or_default();
    let (mut app_cfg, config_error) = match loaded {
        Ok(cfg) => (cfg, None),
        Err(e) => (config::Config::default(), Some(e.to_string())),
    };
    logging::init(&app_cfg.log_filter);
    match &config_error {
        None => info!(
            path = config::CONFIG_PATH,
            unit_system = ?app_cfg.unit_system,
            "config ready"
        ),
        Some(e) => error!(path = config::CONFIG_PATH, error = %e, "config not loaded"),
    }
    if let Some(lang_cli) = args.lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size([720.0, 560.0]);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Calculator Toolbox",
        options,
        Box::new(move |_cc| {
            Box::new(GuiApp::new(app_cfg.clone()).with_config_error(config_error.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(e) => {
            warn!(path, error = %e, "icon decode failed");
            return None;
        }
    };
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tab {
    UnitConv,
    Growth,
}

/// 단위 변환 탭에 그릴 내용. 매 프레임 입력에서 다시 계산한다.
#[derive(Debug, Clone, PartialEq, Default)]
struct ConversionView {
    result: Option<String>,
    formula: Option<String>,
    common: Vec<(String, String)>,
    issues: Vec<String>,
    error: Option<String>,
}

fn conversion_view(
    tr: &i18n::Translator,
    dimension: Dimension,
    value: f64,
    from: &str,
    to: &str,
) -> ConversionView {
    let mut view = ConversionView::default();
    match conversion::validate_named(dimension, value, from) {
        Ok(issues) => view.issues = issues.iter().map(|i| i.message(tr, from)).collect(),
        Err(e) => {
            view.error = Some(e.to_string());
            return view;
        }
    }
    let lang = tr.language();
    match conversion::convert_named(dimension, value, from, to) {
        Ok(r) => {
            let shown = conversion::format_named(dimension, r.value, r.unit, lang)
                .unwrap_or(r.formatted);
            view.result = Some(format!("{shown} {}", tr.unit_symbol(dimension, r.unit)))
        }
        Err(e) => view.error = Some(e.to_string()),
    }
    view.formula = conversion::formula_named(dimension, from, to).ok();
    if let Ok(rows) = conversion::common_conversions_named(dimension, value, from) {
        view.common = rows
            .into_iter()
            .map(|row| {
                let shown = conversion::format_named(dimension, row.value, row.unit, lang)
                    .unwrap_or(row.formatted);
                (tr.unit_symbol(dimension, row.unit), shown)
            })
            .collect();
    }
    view
}

fn category_color(color: &str) -> egui::Color32 {
    match color {
        "red" => egui::Color32::from_rgb(0xd9, 0x3b, 0x3b),
        "orange" => egui::Color32::from_rgb(0xe6, 0x8a, 0x1e),
        "green" => egui::Color32::from_rgb(0x2e, 0x9e, 0x4f),
        "yellow" => egui::Color32::from_rgb(0xc9, 0xa8, 0x12),
        "blue" => egui::Color32::from_rgb(0x2f, 0x6f, 0xd1),
        _ => egui::Color32::GRAY,
    }
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    lang_input: String,
    save_status: Option<String>,
    /// 설정 파일을 읽지 못했으면 그 사유. 이때는 저장하지 않는다.
    config_error: Option<String>,
    tab: Tab,
    // 단위 변환
    conv_dimension: Dimension,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    // 성장 계산
    growth_gender: Gender,
    growth_age: f64,
    growth_height: f64,
    growth_weight: f64,
    growth_result: Option<Result<BabyGrowthResult, Vec<String>>>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        info!(lang = %lang_code, "GUI language resolved");
        let mut s = Self {
            lang_input: config.language.clone(),
            config,
            tr,
            save_status: None,
            config_error: None,
            tab: Tab::UnitConv,
            conv_dimension: Dimension::Temperature,
            conv_value: 100.0,
            conv_from: String::new(),
            conv_to: String::new(),
            growth_gender: Gender::Male,
            growth_age: 12.0,
            growth_height: 75.7,
            growth_weight: 9.6,
            growth_result: None,
        };
        s.apply_dimension_defaults();
        s
    }

    /// 차원이 바뀌면 첫 단위 → 설정 기본 단위로 초기화한다.
    fn apply_dimension_defaults(&mut self) {
        let codes = self.conv_dimension.unit_codes();
        let from = codes.first().copied().unwrap_or_default();
        let mut to = self.config.default_target(self.conv_dimension);
        if to == from {
            to = codes.get(1).copied().unwrap_or(from);
        }
        self.conv_from = from.to_string();
        self.conv_to = to.to_string();
    }

    fn with_config_error(mut self, config_error: Option<String>) -> Self {
        self.save_status = config_error
            .as_ref()
            .map(|e| format!("{}: {e}", self.tr.t("gui.config_not_saved")));
        self.config_error = config_error;
        self
    }

    fn apply_language(&mut self, lang: String) {
        self.config.language = lang;
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr = i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.save_status = match &self.config_error {
            // 읽지 못한 사용자 파일을 기본값으로 덮어쓰지 않는다.
            Some(e) => Some(format!("{}: {e}", self.tr.t("gui.config_not_saved"))),
            None => match self.config.save() {
                Ok(()) => None,
                Err(e) => Some(format!("{}: {e}", self.tr.t("gui.save_error"))),
            },
        };
        // 언어가 바뀌면 결과 문구도 다시 만든다.
        if matches!(self.growth_result, Some(Ok(_))) {
            self.run_growth();
        }
    }

    fn growth_input(&self) -> BabyGrowthInput {
        BabyGrowthInput {
            gender: self.growth_gender,
            age_months: self.growth_age,
            height_cm: self.growth_height,
            weight_kg: self.growth_weight,
        }
    }

    fn run_growth(&mut self) {
        let input = self.growth_input();
        let issues = growth::validate_localized(&input, &self.tr);
        self.growth_result = Some(if issues.is_empty() {
            Ok(growth::calculate_baby_growth(&input, &self.tr))
        } else {
            Err(issues)
        });
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.heading(tr.t("gui.tab.unit_conv"));
        let before = self.conv_dimension;
        egui::Grid::new("conv_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr.t("gui.unit.quantity"));
                egui::ComboBox::from_id_source("conv_kind")
                    .selected_text(tr.dimension_name(self.conv_dimension))
                    .show_ui(ui, |ui| {
                        for d in Dimension::ALL {
                            ui.selectable_value(&mut self.conv_dimension, d, tr.dimension_name(d));
                        }
                    });
                ui.end_row();

                ui.label(tr.t("gui.unit.value"));
                ui.add(egui::DragValue::new(&mut self.conv_value).speed(1.0));
                ui.end_row();

                let codes = self.conv_dimension.unit_codes();
                ui.label(tr.t("gui.unit.from"));
                egui::ComboBox::from_id_source("conv_from")
                    .selected_text(tr.unit_symbol(self.conv_dimension, &self.conv_from))
                    .show_ui(ui, |ui| {
                        for code in &codes {
                            let label = tr.unit_symbol(self.conv_dimension, code);
                            ui.selectable_value(&mut self.conv_from, code.to_string(), label);
                        }
                    });
                ui.end_row();

                ui.label(tr.t("gui.unit.to"));
                egui::ComboBox::from_id_source("conv_to")
                    .selected_text(tr.unit_symbol(self.conv_dimension, &self.conv_to))
                    .show_ui(ui, |ui| {
                        for code in &codes {
                            let label = tr.unit_symbol(self.conv_dimension, code);
                            ui.selectable_value(&mut self.conv_to, code.to_string(), label);
                        }
                    });
                ui.end_row();
            });
        if before != self.conv_dimension {
            self.apply_dimension_defaults();
        }

        let tr = &self.tr;
        let view = conversion_view(
            tr,
            self.conv_dimension,
            self.conv_value,
            &self.conv_from,
            &self.conv_to,
        );
        ui.separator();
        for issue in &view.issues {
            ui.colored_label(egui::Color32::from_rgb(0xe6, 0x8a, 0x1e), issue.as_str());
        }
        if let Some(err) = &view.error {
            ui.colored_label(egui::Color32::RED, err.as_str());
        }
        if let Some(result) = &view.result {
            ui.label(egui::RichText::new(result).size(22.0).strong());
        }
        if let Some(formula) = &view.formula {
            ui.label(format!("{}: {formula}", tr.t("gui.unit.formula")));
        }
        if !view.common.is_empty() {
            ui.separator();
            ui.label(egui::RichText::new(tr.t("gui.unit.common")).strong());
            egui::Grid::new("conv_common").striped(true).show(ui, |ui| {
                for (unit, value) in &view.common {
                    ui.label(value.as_str());
                    ui.label(unit.as_str());
                    ui.end_row();
                }
            });
        }
    }

    fn ui_growth(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.heading(tr.t("gui.tab.growth"));
        egui::Grid::new("growth_grid")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label(tr.t("gui.growth.gender"));
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut self.growth_gender, Gender::Male, tr.t("growth.gender.male"));
                    ui.selectable_value(
                        &mut self.growth_gender,
                        Gender::Female,
                        tr.t("growth.gender.female"),
                    );
                });
                ui.end_row();

                ui.label(tr.t("gui.growth.age"));
                ui.add(
                    egui::DragValue::new(&mut self.growth_age)
                        .speed(0.5)
                        .clamp_range(growth::MIN_AGE_MONTHS..=growth::MAX_AGE_MONTHS),
                );
                ui.end_row();

                ui.label(tr.t("gui.growth.height"));
                ui.add(egui::DragValue::new(&mut self.growth_height).speed(0.1));
                ui.end_row();

                ui.label(tr.t("gui.growth.weight"));
                ui.add(egui::DragValue::new(&mut self.growth_weight).speed(0.1));
                ui.end_row();
            });
        if ui.button(self.tr.t("gui.growth.run")).clicked() {
            self.run_growth();
        }

        let tr = &self.tr;
        match &self.growth_result {
            None => {}
            Some(Err(issues)) => {
                for msg in issues {
                    ui.colored_label(egui::Color32::RED, msg.as_str());
                }
            }
            Some(Ok(r)) => {
                ui.separator();
                let percentile =
                    |p: u32| tr.format(i18n::keys::GROWTH_PERCENTILE, &[("value", p.to_string())]);
                for (label, p, category, color, comment) in [
                    (
                        tr.t(i18n::keys::GROWTH_HEIGHT),
                        r.height_percentile,
                        &r.height_category,
                        r.height_color,
                        &r.height_comment,
                    ),
                    (
                        tr.t(i18n::keys::GROWTH_WEIGHT),
                        r.weight_percentile,
                        &r.weight_category,
                        r.weight_color,
                        &r.weight_comment,
                    ),
                ] {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(label).strong());
                        ui.label(percentile(p));
                        ui.colored_label(category_color(color), category.as_str());
                    });
                    ui.label(comment.as_str());
                }
                ui.separator();
                ui.label(format!(
                    "{} {}",
                    tr.t(i18n::keys::GROWTH_OVERALL),
                    r.overall_assessment
                ));
                ui.label(tr.t(i18n::keys::GROWTH_RECOMMENDATIONS));
                for rec in &r.recommendations {
                    ui.label(format!("• {rec}"));
                }
            }
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut new_lang = None;
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t("gui.app_title"));
                ui.separator();
                ui.selectable_value(&mut self.tab, Tab::UnitConv, self.tr.t("gui.tab.unit_conv"));
                ui.selectable_value(&mut self.tab, Tab::Growth, self.tr.t("gui.tab.growth"));
                ui.separator();
                ui.label(self.tr.t("gui.lang"));
                let before = self.lang_input.clone();
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.lang_input, "auto".into(), "auto");
                        ui.selectable_value(&mut self.lang_input, "ru".into(), "Русский");
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                    });
                if before != self.lang_input {
                    new_lang = Some(self.lang_input.clone());
                }
                if let Some(msg) = &self.save_status {
                    ui.colored_label(egui::Color32::RED, msg.as_str());
                }
            });
        });
        if let Some(lang) = new_lang {
            self.apply_language(lang);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::UnitConv => self.ui_unit_conv(ui),
                    Tab::Growth => self.ui_growth(ui),
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_defaults_avoid_identity_pair() {
        let mut app = GuiApp::new(config::Config::default());
        app.conv_dimension = Dimension::Temperature;
        app.apply_dimension_defaults();
        assert_eq!(app.conv_from, "C");
        assert_eq!(app.conv_to, "F");
    }

    #[test]
    fn unreadable_config_is_never_saved() {
        let mut app = GuiApp::new(config::Config::default())
            .with_config_error(Some("config parse error".into()));
        assert!(app.save_status.is_some());
        app.apply_language("ru".into());
        assert_eq!(app.tr.language_code(), "ru");
        let status = app.save_status.as_deref().expect("status");
        assert!(status.contains("config parse error"), "{status}");
        assert!(status.starts_with(&app.tr.t("gui.config_not_saved")));
    }

    #[test]
    fn conversion_view_uses_locale_separator() {
        let tr = i18n::Translator::new("ru");
        let view = conversion_view(&tr, Dimension::Length, 1.0, "in", "cm");
        assert_eq!(view.result.as_deref(), Some("2,5 см"));
        assert!(view.error.is_none());
        assert_eq!(view.common.len(), 7);
    }

    #[test]
    fn conversion_view_reports_unsupported_unit() {
        let tr = i18n::Translator::new("en");
        let view = conversion_view(&tr, Dimension::Mass, 1.0, "stone", "kg");
        assert!(view.result.is_none());
        assert!(view.error.is_some());
    }

    #[test]
    fn growth_button_flags_out_of_range_age() {
        let mut app = GuiApp::new(config::Config::default());
        app.growth_age = 72.0;
        app.run_growth();
        assert!(matches!(app.growth_result, Some(Err(ref issues)) if issues.len() == 1));
    }

    #[test]
    fn growth_at_median_is_normal() {
        let mut app = GuiApp::new(config::Config::default());
        app.run_growth();
        match app.growth_result {
            Some(Ok(r)) => {
                assert_eq!(r.height_percentile, 63);
                assert_eq!(r.height_color, "green");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
