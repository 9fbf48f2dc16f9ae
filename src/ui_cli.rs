use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::growth::{self, BabyGrowthInput, BabyGrowthResult, Gender};
use crate::i18n::{keys, Translator};
use crate::quantity::Dimension;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    BabyGrowth,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_BABY_GROWTH));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    read_menu_choice(&mut io::stdin().lock(), tr)
}

fn read_menu_choice<R: BufRead>(input: &mut R, tr: &Translator) -> Result<MenuChoice, AppError> {
    loop {
        let sel = read_line_from(input, &tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::UnitConversion),
        "2" => Some(MenuChoice::BabyGrowth),
        "3" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    let items: Vec<String> = Dimension::ALL
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{}) {}", i + 1, tr.dimension_name(*d)))
        .collect();
    println!("{}", items.join("  "));
    let dimension = loop {
        let sel = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Some(d) = map_dimension(&sel) {
            break d;
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };

    let codes = dimension.unit_codes();
    println!("{} {}", tr.t(keys::UNIT_CONVERSION_AVAILABLE), codes.join(", "));
    let value = read_f64(tr, &tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from = read_line(&tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let default_to = cfg.default_target(dimension);
    let to = read_line(&tr.format(
        keys::UNIT_CONVERSION_PROMPT_TO_UNIT,
        &[("unit", default_to.to_string())],
    ))?;
    let to = if to.trim().is_empty() { default_to } else { to.trim() };

    // 범위 경고는 보여주되 변환은 계속한다.
    match conversion::validate_named(dimension, value, from.trim()) {
        Ok(issues) => {
            for issue in issues {
                println!("! {}", issue.message(tr, from.trim()));
            }
        }
        Err(err) => {
            print_error(tr, &err);
            return Ok(());
        }
    }

    match print_conversion(tr, dimension, value, from.trim(), to) {
        Ok(()) => Ok(()),
        Err(AppError::Conversion(err)) => {
            print_error(tr, &err);
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// 변환 결과, 공식, 공통 환산 목록을 출력한다.
pub fn print_conversion(
    tr: &Translator,
    dimension: Dimension,
    value: f64,
    from: &str,
    to: &str,
) -> Result<(), AppError> {
    let result = conversion::convert_named(dimension, value, from, to)?;
    let lang = tr.language();
    println!(
        "{} {} {} = {} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        conversion::format_number(value, 6, lang),
        tr.unit_symbol(dimension, result.from),
        conversion::format_named(dimension, result.value, result.unit, lang)?,
        tr.unit_symbol(dimension, result.unit)
    );
    println!(
        "{} {}",
        tr.t(keys::UNIT_CONVERSION_FORMULA),
        conversion::formula_named(dimension, from, to)?
    );
    println!("{}", tr.t(keys::UNIT_CONVERSION_COMMON));
    for row in conversion::common_conversions_named(dimension, value, from)? {
        println!(
            "  {} {}",
            conversion::format_named(dimension, row.value, row.unit, lang)?,
            tr.unit_symbol(dimension, row.unit)
        );
    }
    Ok(())
}

fn print_error(tr: &Translator, err: &conversion::ConversionError) {
    eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
}

/// 번호(1부터) 또는 차원 이름으로 차원을 고른다.
fn map_dimension(sel: &str) -> Option<Dimension> {
    let sel = sel.trim();
    match sel.parse::<usize>() {
        Ok(n) if (1..=Dimension::ALL.len()).contains(&n) => Some(Dimension::ALL[n - 1]),
        Ok(_) => None,
        Err(_) => Dimension::parse(sel),
    }
}

/// 영유아 성장 메뉴를 처리한다.
pub fn handle_baby_growth(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::GROWTH_HEADING));
    let gender = loop {
        let sel = read_line(&tr.t(keys::GROWTH_PROMPT_GENDER))?;
        if let Some(g) = Gender::parse(&sel) {
            break g;
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    };
    let input = BabyGrowthInput {
        gender,
        age_months: read_f64(tr, &tr.t(keys::GROWTH_PROMPT_AGE))?,
        height_cm: read_f64(tr, &tr.t(keys::GROWTH_PROMPT_HEIGHT))?,
        weight_kg: read_f64(tr, &tr.t(keys::GROWTH_PROMPT_WEIGHT))?,
    };

    let issues = growth::validate_localized(&input, tr);
    if !issues.is_empty() {
        for msg in issues {
            println!("! {msg}");
        }
        return Ok(());
    }
    print_growth(tr, &growth::calculate_baby_growth(&input, tr));
    Ok(())
}

/// 성장 결과 카드를 텍스트로 출력한다.
pub fn print_growth(tr: &Translator, result: &BabyGrowthResult) {
    let percentile = |p: u32| tr.format(keys::GROWTH_PERCENTILE, &[("value", p.to_string())]);
    println!(
        "{}: {} ({})",
        tr.t(keys::GROWTH_HEIGHT),
        percentile(result.height_percentile),
        result.height_category
    );
    println!("  {}", result.height_comment);
    println!(
        "{}: {} ({})",
        tr.t(keys::GROWTH_WEIGHT),
        percentile(result.weight_percentile),
        result.weight_category
    );
    println!("  {}", result.weight_comment);
    println!("{} {}", tr.t(keys::GROWTH_OVERALL), result.overall_assessment);
    println!("{}", tr.t(keys::GROWTH_RECOMMENDATIONS));
    for r in &result.recommendations {
        println!("  - {r}");
    }
}

/// 설정 메뉴를 처리한다. 변경이 있으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(&tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(false);
    }
    if !apply_setting(cfg, &sel) {
        println!("{}", tr.t(keys::SETTINGS_INVALID));
        return Ok(false);
    }
    println!(
        "{} {:?}, {}",
        tr.t(keys::SETTINGS_SAVED),
        cfg.unit_system,
        cfg.language
    );
    Ok(true)
}

fn apply_setting(cfg: &mut Config, sel: &str) -> bool {
    match sel.trim() {
        "1" => cfg.apply_unit_system(UnitSystem::Metric),
        "2" => cfg.apply_unit_system(UnitSystem::Imperial),
        "3" => cfg.language = "ru".into(),
        "4" => cfg.language = "en".into(),
        _ => return false,
    }
    true
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 한 줄을 읽는다. 입력이 닫혀 0바이트를 읽으면 `UnexpectedEof` 오류.
fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

/// 숫자 입력. 러시아어 사용자를 위해 `,` 소수점도 받는다.
fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    read_f64_from(&mut io::stdin().lock(), tr, prompt)
}

fn read_f64_from<R: BufRead>(input: &mut R, tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line_from(input, prompt)?;
        match parse_number(&s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_numbers_map_to_choices() {
        assert_eq!(parse_menu_choice(" 2\n"), Some(MenuChoice::BabyGrowth));
        assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice("9"), None);
    }

    #[test]
    fn dimension_by_number_or_name() {
        assert_eq!(map_dimension("1"), Some(Dimension::ALL[0]));
        assert_eq!(map_dimension("temperature"), Some(Dimension::Temperature));
        assert_eq!(map_dimension("11"), None);
        assert_eq!(map_dimension("0"), None);
    }

    #[test]
    fn comma_decimal_is_accepted() {
        assert_eq!(parse_number("3,5\n"), Some(3.5));
        assert_eq!(parse_number("abc"), None);
    }

    #[test]
    fn closed_input_is_an_eof_error() {
        let err = read_line_from(&mut io::empty(), "> ").expect_err("eof");
        assert!(err.is_eof(), "unexpected: {err:?}");
        let line = read_line_from(&mut "2\n".as_bytes(), "> ").expect("line");
        assert_eq!(line, "2\n");
    }

    #[test]
    fn menu_retry_stops_when_input_closes() {
        let tr = Translator::new("en");
        let err = read_menu_choice(&mut "9\nx\n".as_bytes(), &tr).expect_err("eof");
        assert!(err.is_eof());
        let choice = read_menu_choice(&mut "9\n3\n".as_bytes(), &tr).expect("choice");
        assert_eq!(choice, MenuChoice::Settings);
    }

    #[test]
    fn number_retry_stops_when_input_closes() {
        let tr = Translator::new("ru");
        let err = read_f64_from(&mut "abc\n".as_bytes(), &tr, "> ").expect_err("eof");
        assert!(err.is_eof());
        let v = read_f64_from(&mut "abc\n4,5\n".as_bytes(), &tr, "> ").expect("number");
        assert_eq!(v, 4.5);
    }

    #[test]
    fn settings_switch_unit_system_and_language() {
        let mut cfg = Config::default();
        assert!(apply_setting(&mut cfg, "2"));
        assert_eq!(cfg.unit_system, UnitSystem::Imperial);
        assert!(apply_setting(&mut cfg, "3"));
        assert_eq!(cfg.language, "ru");
        assert!(!apply_setting(&mut cfg, "x"));
    }
}
