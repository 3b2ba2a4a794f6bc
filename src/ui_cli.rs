use std::fs;
use std::io::{self, Write};

use crate::app::AppError;
use crate::category::Category;
use crate::config::Config;
use crate::conversion;
use crate::history::{ConversionRecord, HistoryLog};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    ViewHistory,
    SaveHistory,
    ClearHistory,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Unit Converter ===");
    println!("1) 단위 변환");
    println!("2) 기록 보기");
    println!("3) 기록 저장");
    println!("4) 기록 비우기");
    println!("5) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::ViewHistory),
            "3" => return Ok(MenuChoice::SaveHistory),
            "4" => return Ok(MenuChoice::ClearHistory),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 성공한 변환만 기록에 추가된다.
pub fn handle_convert(cfg: &Config, history: &mut HistoryLog) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    let category = read_category(cfg.default_category)?;
    let units = conversion::list_units(category);
    print_units(&units);
    let from_unit = read_unit("입력 단위", &units, 0)?;
    let to_default = units
        .iter()
        .position(|u| *u == cfg.default_units.label_for(category))
        .unwrap_or(1);
    let to_unit = read_unit("변환 단위", &units, to_default)?;
    let value = read_value("값 입력: ")?;
    let result = conversion::convert(category, value, &from_unit, &to_unit)?;
    let record = ConversionRecord::new(category, value, &from_unit, &to_unit, result);
    println!("변환 결과: {}", record.display_text);
    history.append(record);
    Ok(())
}

/// 기록 보기 메뉴를 처리한다.
pub fn handle_view_history(history: &HistoryLog) {
    println!("\n-- 변환 기록 --");
    if history.is_empty() {
        println!("기록이 없습니다.");
        return;
    }
    for (i, record) in history.entries().enumerate() {
        println!("{:>3}. {}", i + 1, record.display_text);
    }
}

/// 기록 저장 메뉴를 처리한다. 빈 기록은 오류가 아니라 안내로 끝난다.
pub fn handle_save_history(history: &HistoryLog, cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 기록 저장 --");
    if history.is_empty() {
        println!("저장할 기록이 없습니다.");
        return Ok(());
    }
    let input = read_line(&format!("저장 경로 [기본 {}]: ", cfg.history_file))?;
    let path = if input.trim().is_empty() {
        cfg.history_file.clone()
    } else {
        input.trim().to_string()
    };
    fs::write(&path, history.export_text())?;
    println!("{}건을 {path} 에 저장했습니다.", history.len());
    Ok(())
}

/// 기록 비우기 메뉴를 처리한다. 확인 후에만 지운다.
pub fn handle_clear_history(history: &mut HistoryLog) -> Result<(), AppError> {
    if history.is_empty() {
        println!("비울 기록이 없습니다.");
        return Ok(());
    }
    let sel = read_line(&format!("기록 {}건을 비우시겠습니까? (y/N): ", history.len()))?;
    if sel.trim().eq_ignore_ascii_case("y") {
        history.clear();
        println!("기록을 비웠습니다.");
    } else {
        println!("취소했습니다.");
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 기본 분류: {}", cfg.default_category.label());
    println!("현재 저장 경로: {}", cfg.history_file);
    println!("1) 기본 분류 변경  2) 분류별 기본 단위 변경  3) 저장 경로 변경");
    let sel = read_line("변경할 번호(취소하려면 엔터): ")?;
    match sel.trim() {
        "" => {}
        "1" => {
            cfg.default_category = read_category(cfg.default_category)?;
            println!("기본 분류가 {} 로 설정되었습니다.", cfg.default_category.label());
        }
        "2" => {
            let category = read_category(cfg.default_category)?;
            let units = conversion::list_units(category);
            print_units(&units);
            let current = units
                .iter()
                .position(|u| *u == cfg.default_units.label_for(category))
                .unwrap_or(1);
            let unit = read_unit("기본 대상 단위", &units, current)?;
            cfg.default_units.set_for(category, &unit)?;
            println!("{} 기본 단위가 {unit} 로 설정되었습니다.", category.label());
        }
        "3" => {
            let path = read_line("새 저장 경로: ")?;
            if !path.trim().is_empty() {
                cfg.history_file = path.trim().to_string();
            }
        }
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

fn print_units(units: &[&'static str]) {
    for (i, name) in units.iter().enumerate() {
        print!("{}) {}  ", i + 1, name);
    }
    println!();
}

fn read_category(default: Category) -> Result<Category, AppError> {
    for (i, cat) in Category::ALL.iter().enumerate() {
        print!("{}) {}  ", i + 1, cat.label());
    }
    println!();
    loop {
        let sel = read_line(&format!("분류 선택 [기본 {}]: ", default.label()))?;
        let t = sel.trim();
        if t.is_empty() {
            return Ok(default);
        }
        if let Ok(n) = t.parse::<usize>() {
            if n >= 1 && n <= Category::ALL.len() {
                return Ok(Category::ALL[n - 1]);
            }
        }
        if let Ok(cat) = conversion::parse_category(t) {
            return Ok(cat);
        }
        println!("지원하지 않는 분류입니다. 다시 선택하세요.");
    }
}

fn read_unit(
    prompt: &str,
    units: &[&'static str],
    default_idx: usize,
) -> Result<String, AppError> {
    loop {
        let sel = read_line(&format!("{prompt} [기본 {}]: ", units[default_idx]))?;
        let t = sel.trim();
        if t.is_empty() {
            return Ok(units[default_idx].to_string());
        }
        if let Ok(n) = t.parse::<usize>() {
            if n >= 1 && n <= units.len() {
                return Ok(units[n - 1].to_string());
            }
        }
        if let Some(name) = units.iter().find(|u| u.eq_ignore_ascii_case(t)) {
            return Ok(name.to_string());
        }
        println!("지원하지 않는 단위입니다. 다시 입력하세요.");
    }
}

fn read_value(prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match conversion::parse_value(&s) {
            Ok(v) => return Ok(v),
            Err(err) => println!("{err}. 다시 입력하세요."),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
