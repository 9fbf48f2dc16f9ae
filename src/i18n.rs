use std::collections::HashMap;
use std::fs;
use std::path::Path;

use sys_locale::get_locale;
use tracing::{debug, warn};

use crate::quantity::Dimension;

/// CLI에서 직접 쓰는 문자열 키 모음. 나머지 키는 규칙적으로 조립한다.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_BABY_GROWTH: &str = "main_menu.baby_growth";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_AVAILABLE: &str = "unit_conversion.available";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_FORMULA: &str = "unit_conversion.formula";
    pub const UNIT_CONVERSION_COMMON: &str = "unit_conversion.common";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const GROWTH_HEADING: &str = "growth.heading";
    pub const GROWTH_PROMPT_GENDER: &str = "growth.prompt_gender";
    pub const GROWTH_PROMPT_AGE: &str = "growth.prompt_age";
    pub const GROWTH_PROMPT_HEIGHT: &str = "growth.prompt_height";
    pub const GROWTH_PROMPT_WEIGHT: &str = "growth.prompt_weight";
    pub const GROWTH_HEIGHT: &str = "growth.height";
    pub const GROWTH_WEIGHT: &str = "growth.weight";
    pub const GROWTH_PERCENTILE: &str = "growth.percentile";
    pub const GROWTH_OVERALL: &str = "growth.overall_label";
    pub const GROWTH_RECOMMENDATIONS: &str = "growth.recommendations_label";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

/// 지원 언어. `ru`가 아닌 코드는 모두 영어로 처리한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ru,
    En,
}

impl Language {
    pub fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("ru") {
            Language::Ru
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }

    /// 숫자 표시용 소수점 문자.
    pub fn decimal_separator(&self) -> char {
        match self {
            Language::Ru => ',',
            Language::En => '.',
        }
    }
}

/// 런타임 언어 번들을 제공한다.
///
/// 내장 TOML 언어팩을 먼저 읽고, 언어팩 디렉터리에 같은 이름의 파일이 있으면
/// 그 값으로 덮어쓴다. 키가 없으면 영어 팩, 그래도 없으면 키 자체를 돌려준다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    strings: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드(ru/en)에 따라 번역기를 생성한다.
    pub fn new(lang_code: &str) -> Self {
        Self::new_with_pack(lang_code, None)
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let lang = Language::from_code(lang_code);
        let mut strings = built_in_pack(lang);
        if let Some(overrides) = pack_dir.and_then(|dir| load_overrides(dir, lang)) {
            debug!(count = overrides.len(), "applying language pack overrides");
            strings.extend(overrides);
        }
        Self {
            lang,
            strings,
            fallback: built_in_pack(Language::En),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩과 영어 팩 모두에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.strings
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
    }

    /// 번역을 가져온다. 없으면 키를 그대로 돌려준다.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| {
            warn!(key, "missing translation");
            key.to_string()
        })
    }

    /// `{name}` 자리표시자를 채운 번역 문자열.
    pub fn format(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }

    /// 단위 코드의 현지화된 기호. 번역이 없으면 코드 그대로.
    pub fn unit_symbol(&self, dimension: Dimension, code: &str) -> String {
        self.lookup(&format!("unit.{}.{}", dimension.name(), code))
            .unwrap_or_else(|| code.to_string())
    }

    /// 차원 이름 번역.
    pub fn dimension_name(&self, dimension: Dimension) -> String {
        self.t(&format!("dimension.{}", dimension.name()))
    }
}

/// `{key}` 형태 자리표시자를 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ru") => Some("ru".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ru" => Some("ru".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn load_overrides(dir: &str, lang: Language) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{}.toml", lang.as_code()));
    let content = fs::read_to_string(&path).ok()?;
    let map = parse_toml_to_map(&content);
    if map.is_none() {
        warn!(path = %path.display(), "language pack could not be parsed");
    }
    map
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: Language) -> HashMap<String, String> {
    let src = match lang {
        Language::Ru => include_str!("../locales/ru.toml"),
        Language::En => include_str!("../locales/en.toml"),
    };
    parse_toml_to_map(src).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_russian_codes_fall_back_to_english() {
        assert_eq!(Language::from_code("ru-RU"), Language::Ru);
        assert_eq!(Language::from_code("de"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn built_in_packs_share_keys() {
        let ru = built_in_pack(Language::Ru);
        let en = built_in_pack(Language::En);
        assert!(!en.is_empty());
        let missing: Vec<_> = en.keys().filter(|k| !ru.contains_key(*k)).collect();
        assert!(missing.is_empty(), "ru pack is missing {missing:?}");
    }

    #[test]
    fn template_placeholders_are_filled() {
        let out = fill_template("{a} + {b}", &[("a", "1".into()), ("b", "2".into())]);
        assert_eq!(out, "1 + 2");
    }

    #[test]
    fn cli_language_wins_over_config() {
        assert_eq!(resolve_language("ru", Some("en")), "ru");
        assert_eq!(resolve_language("auto", Some("en")), "en");
    }

    #[test]
    fn unknown_key_returns_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }
}
