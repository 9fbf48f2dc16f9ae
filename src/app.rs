use std::io;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::growth::GrowthError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    /// 성장 입력 오류
    #[error(transparent)]
    Growth(#[from] GrowthError),
    /// 출력 직렬화 오류
    #[error("output serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl AppError {
    /// 입력 스트림이 닫혔는지 여부
    pub fn is_eof(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 설정 메뉴에서 언어를 바꾸면 번역기를 새로 만들어 이후 화면에 반영한다.
/// 메뉴 선택 중 입력이 닫히면 종료를 고른 것으로 본다.
pub fn run(config: &mut Config, tr: Translator) -> Result<(), AppError> {
    let mut tr = tr;
    info!(lang = tr.language_code(), "interactive menu started");
    loop {
        let choice = match ui_cli::main_menu(&tr) {
            Ok(choice) => choice,
            Err(err) if err.is_eof() => {
                info!("input closed");
                MenuChoice::Exit
            }
            Err(err) => return Err(err),
        };
        match choice {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(&tr, config)?,
            MenuChoice::BabyGrowth => ui_cli::handle_baby_growth(&tr)?,
            MenuChoice::Settings => {
                if ui_cli::handle_settings(&tr, config)? {
                    config.save()?;
                    let lang = i18n::resolve_language(&config.language, None);
                    tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                }
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unexpected_eof_counts_as_closed_input() {
        let eof = AppError::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(eof.is_eof());
        let denied = AppError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!denied.is_eof());
    }
}
