use crate::config::Config;
use crate::conversion;
use crate::history::HistoryLog;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 단위 변환 오류
    Conversion(conversion::ConversionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Conversion(e) => write!(f, "단위 변환 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<conversion::ConversionError> for AppError {
    fn from(value: conversion::ConversionError) -> Self {
        AppError::Conversion(value)
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
///
/// 변환 기록은 세션 단위로만 유지된다. 여기서 만들어 각 핸들러에
/// 넘기고 루프가 끝나면 함께 버려진다.
pub fn run(config: &mut Config) -> Result<(), AppError> {
    let mut history = HistoryLog::new();
    loop {
        match ui_cli::main_menu()? {
            MenuChoice::Convert => {
                // 변환 실패는 세션을 끝내지 않고 안내 후 메뉴로 돌아간다.
                if let Err(err) = ui_cli::handle_convert(config, &mut history) {
                    println!("{err}");
                }
            }
            MenuChoice::ViewHistory => ui_cli::handle_view_history(&history),
            MenuChoice::SaveHistory => ui_cli::handle_save_history(&history, config)?,
            MenuChoice::ClearHistory => ui_cli::handle_clear_history(&mut history)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("프로그램을 종료합니다.");
                break;
            }
        }
    }
    Ok(())
}
