use clap::{Parser, Subcommand};

use unit_converter::history::ConversionRecord;
use unit_converter::{app, config, conversion};

/// 분류별 단위 변환기. 인자 없이 실행하면 대화형 메뉴로 진입한다.
#[derive(Parser)]
#[command(name = "unit_converter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// 한 건을 변환하고 결과 한 줄을 출력한다.
    Convert {
        /// 분류 이름 (Length, Weight, Temperature, Area, Volume, Speed, Time)
        category: String,
        /// 변환할 값
        value: String,
        /// 입력 단위
        from: String,
        /// 변환 단위
        to: String,
    },
    /// 분류가 지원하는 단위 이름을 순서대로 출력한다.
    Units {
        /// 분류 이름
        category: String,
    },
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Convert {
            category,
            value,
            from,
            to,
        }) => {
            let category = conversion::parse_category(&category)?;
            let value = conversion::parse_value(&value)?;
            let from = conversion::canonical_unit_label(category, &from)?;
            let to = conversion::canonical_unit_label(category, &to)?;
            let result = conversion::convert(category, value, from, to)?;
            let record = ConversionRecord::new(category, value, from, to, result);
            println!("{}", record.display_text);
        }
        Some(Command::Units { category }) => {
            let category = conversion::parse_category(&category)?;
            for name in conversion::list_units(category) {
                println!("{name}");
            }
        }
        None => {
            let mut cfg = config::load_or_default()?;
            app::run(&mut cfg)?;
        }
    }
    Ok(())
}
