use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use calculator_toolbox::app::{self, AppError};
use calculator_toolbox::config::{self, Config};
use calculator_toolbox::conversion;
use calculator_toolbox::growth::{self, BabyGrowthInput, Gender, GrowthError};
use calculator_toolbox::i18n::{self, keys, Translator};
use calculator_toolbox::logging;
use calculator_toolbox::quantity::Dimension;
use calculator_toolbox::ui_cli;

/// 단위 변환기와 영유아 성장 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "calculator_toolbox_cli", version, about)]
struct Cli {
    /// 언어 코드 (auto, ru, en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 값 하나를 변환한다. 대상 단위를 생략하면 설정의 기본 단위를 쓴다.
    Convert {
        #[arg(value_parser = parse_dimension)]
        dimension: Dimension,
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
        to: Option<String>,
    },
    /// 입력 단위를 제외한 모든 단위로 환산한 표를 출력한다.
    Common {
        #[arg(value_parser = parse_dimension)]
        dimension: Dimension,
        #[arg(allow_hyphen_values = true)]
        value: f64,
        from: String,
    },
    /// 차원이 지원하는 단위 코드를 나열한다.
    Units {
        #[arg(value_parser = parse_dimension)]
        dimension: Dimension,
    },
    /// WHO 기준 신장/체중 백분위를 계산한다.
    Growth {
        #[arg(long, value_parser = parse_gender)]
        gender: Gender,
        #[arg(long)]
        age_months: f64,
        /// cm
        #[arg(long)]
        height: f64,
        /// kg
        #[arg(long)]
        weight: f64,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// 대화형 메뉴 (기본값)
    Menu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
}

fn parse_dimension(s: &str) -> Result<Dimension, String> {
    Dimension::parse(s).ok_or_else(|| {
        let names: Vec<&str> = Dimension::ALL.iter().map(|d| d.name()).collect();
        format!("unknown dimension '{s}' (expected one of: {})", names.join(", "))
    })
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    Gender::parse(s).ok_or_else(|| format!("unknown gender '{s}' (male/female)"))
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 서브커맨드 또는 대화형 메뉴를 실행한다.
fn main() {
    let cli = Cli::parse();
    // 해석할 수 없는 설정 파일은 기본값으로 덮어쓰지 않고 종료한다.
    let mut cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {}: {err}", config::CONFIG_PATH);
            std::process::exit(1);
        }
    };
    logging::init(&cfg.log_filter);
    info!(
        path = config::CONFIG_PATH,
        unit_system = ?cfg.unit_system,
        language = %cfg.language,
        "config ready"
    );

    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    debug!(lang = %lang, "translator ready");

    if let Err(err) = try_run(cli.command, &mut cfg, &tr) {
        for line in error_lines(&err, &tr) {
            eprintln!("{line}");
        }
        std::process::exit(1);
    }
}

/// 오류 출력 문구. 성장 입력 오류는 항목별 현지화 문구만 낸다.
fn error_lines(err: &AppError, tr: &Translator) -> Vec<String> {
    match err {
        AppError::Growth(GrowthError::Invalid(issues)) => issues
            .iter()
            .map(|issue| format!("! {}", issue.message(tr)))
            .collect(),
        other => vec![format!("{}: {other}", tr.t(keys::ERROR_PREFIX))],
    }
}

/// `common` 표의 행. 값은 단위별 표시 정밀도로 형식화한다.
fn common_lines(
    tr: &Translator,
    dimension: Dimension,
    value: f64,
    from: &str,
) -> Result<Vec<String>, AppError> {
    let lang = tr.language();
    conversion::common_conversions_named(dimension, value, from)?
        .into_iter()
        .map(|row| -> Result<String, AppError> {
            let shown = conversion::format_named(dimension, row.value, row.unit, lang)?;
            Ok(format!("  {shown:>14} {}", tr.unit_symbol(dimension, row.unit)))
        })
        .collect()
}

fn try_run(command: Option<Command>, cfg: &mut Config, tr: &Translator) -> Result<(), AppError> {
    match command.unwrap_or(Command::Menu) {
        Command::Convert {
            dimension,
            value,
            from,
            to,
        } => {
            let to = to.unwrap_or_else(|| cfg.default_target(dimension).to_string());
            for issue in conversion::validate_named(dimension, value, &from)? {
                eprintln!("! {}", issue.message(tr, &from));
            }
            ui_cli::print_conversion(tr, dimension, value, &from, &to)
        }
        Command::Common {
            dimension,
            value,
            from,
        } => {
            let lines = common_lines(tr, dimension, value, &from)?;
            let symbol = tr.unit_symbol(dimension, &from);
            println!(
                "{}",
                tr.format(
                    "cli.common_heading",
                    &[
                        ("value", conversion::format_number(value, 6, tr.language())),
                        ("unit", symbol),
                    ],
                )
            );
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Command::Units { dimension } => {
            println!(
                "{}",
                tr.format(
                    "cli.units_heading",
                    &[("dimension", tr.dimension_name(dimension))]
                )
            );
            for code in dimension.unit_codes() {
                println!("  {code:<6} {}", tr.unit_symbol(dimension, code));
            }
            Ok(())
        }
        Command::Growth {
            gender,
            age_months,
            height,
            weight,
            format,
        } => {
            let input = BabyGrowthInput {
                gender,
                age_months,
                height_cm: height,
                weight_kg: weight,
            };
            let result = growth::report::render(&growth::calculate_checked(&input)?, tr);
            match format {
                OutputFormat::Text => ui_cli::print_growth(tr, &result),
                OutputFormat::Toml => print!("{}", toml::to_string_pretty(&result)?),
            }
            Ok(())
        }
        Command::Menu => app::run(cfg, tr.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn convert_subcommand_accepts_negative_values() {
        let cli = Cli::try_parse_from(["cli", "convert", "temperature", "-40", "C", "F"])
            .expect("parse");
        match cli.command {
            Some(Command::Convert { dimension, value, .. }) => {
                assert_eq!(dimension, Dimension::Temperature);
                assert_eq!(value, -40.0);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn growth_subcommand_parses_gender() {
        let cli = Cli::try_parse_from([
            "cli", "--lang", "ru", "growth", "--gender", "f", "--age-months", "12", "--height",
            "74", "--weight", "8.9",
        ])
        .expect("parse");
        assert_eq!(cli.lang, "ru");
        assert!(matches!(
            cli.command,
            Some(Command::Growth {
                gender: Gender::Female,
                ..
            })
        ));
    }

    #[test]
    fn common_rows_use_unit_precision() {
        let tr = Translator::new("en");
        let lines = common_lines(&tr, Dimension::Energy, 1.0, "kJ").expect("rows");
        assert_eq!(lines.len(), Dimension::Energy.unit_codes().len() - 1);
        let btu = conversion::convert_named(Dimension::Energy, 1.0, "kJ", "Btu").expect("convert");
        let shown = conversion::format_named(Dimension::Energy, btu.value, "Btu", tr.language())
            .expect("format");
        assert_ne!(shown, conversion::format_number(btu.value, 6, tr.language()));
        let row = format!("  {shown:>14} {}", tr.unit_symbol(Dimension::Energy, "Btu"));
        assert!(lines.contains(&row), "missing {row:?} in {lines:?}");
    }

    #[test]
    fn common_rows_reject_unknown_unit() {
        let tr = Translator::new("en");
        assert!(matches!(
            common_lines(&tr, Dimension::Mass, 1.0, "stone"),
            Err(AppError::Conversion(_))
        ));
    }

    #[test]
    fn invalid_growth_input_prints_only_localized_issues() {
        let tr = Translator::new("ru");
        let input = BabyGrowthInput {
            gender: Gender::Male,
            age_months: 72.0,
            height_cm: 20.0,
            weight_kg: 10.0,
        };
        let err = AppError::from(growth::calculate_checked(&input).expect_err("invalid"));
        let lines = error_lines(&err, &tr);
        let expected: Vec<String> = growth::validate_localized(&input, &tr)
            .into_iter()
            .map(|m| format!("! {m}"))
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines, expected);
        assert!(lines.iter().all(|l| !l.contains("invalid growth input")));
    }

    #[test]
    fn unknown_dimension_is_rejected() {
        assert!(Cli::try_parse_from(["cli", "units", "luminance"]).is_err());
    }
}
