// ==========================================
// フロア配置システム - CLI 主入口
// ==========================================
// 流程: 花名册导入 → (可选) 日次排班表筛选出勤者 → 自动配置 → 报告
// 退出码: 仅导入/配置错误时非 0（配置不足只是警告）
// ==========================================
//
// Usage:
//   floor-staffing <roster.csv|xlsx> [--shift <file> --date YYYY-MM-DD --slot 06-14|14-23]
//                  [--plan <plan.json>] [--json] [--locale ja|en]

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use floor_staffing::config::{load_floor_plan, validate_locale, AppConfig};
use floor_staffing::i18n::t_in;
use floor_staffing::importer::parse_shift_slot;
use floor_staffing::{logging, AssignmentReport, FloorAssignmentEngine, ShiftSlot, StaffImporter};
use std::path::PathBuf;

/// 日次排班表筛选条件
#[derive(Debug, Clone, PartialEq, Eq)]
struct ShiftFilter {
    path: PathBuf,
    date: NaiveDate,
    slot: ShiftSlot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliArgs {
    roster: PathBuf,
    shift: Option<ShiftFilter>,
    plan: Option<PathBuf>,
    json: bool,
    locale: Option<String>,
}

/// 解析命令行参数（不含程序名）
///
/// `locale` 仅用于错误文案
fn parse_args<I>(args: I, locale: &str) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut roster = None;
    let mut shift_path = None;
    let mut date = None;
    let mut slot = None;
    let mut plan = None;
    let mut json = false;
    let mut cli_locale = None;

    while let Some(arg) = args.next() {
        let mut value = |option: &str| -> Result<String> {
            match args.next() {
                Some(v) => Ok(v),
                None => bail!(t_in(locale, "cli.missing_value", &[("option", option)])),
            }
        };

        match arg.as_str() {
            "--shift" => shift_path = Some(PathBuf::from(value("--shift")?)),
            "--date" => {
                let raw = value("--date")?;
                let parsed = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").with_context(|| {
                    t_in(locale, "cli.invalid_date", &[("value", raw.as_str())])
                })?;
                date = Some(parsed);
            }
            "--slot" => slot = Some(parse_shift_slot(&value("--slot")?)?),
            "--plan" => plan = Some(PathBuf::from(value("--plan")?)),
            "--locale" => cli_locale = Some(validate_locale(&value("--locale")?)?),
            "--json" => json = true,
            other if other.starts_with("--") => {
                bail!(t_in(locale, "cli.unknown_option", &[("option", other)]))
            }
            _ if roster.is_none() => roster = Some(PathBuf::from(arg.as_str())),
            other => bail!(t_in(locale, "cli.unknown_option", &[("option", other)])),
        }
    }

    let Some(roster) = roster else {
        bail!(t_in(locale, "cli.usage", &[]));
    };

    let shift = match (shift_path, date, slot) {
        (None, None, None) => None,
        (Some(path), Some(date), Some(slot)) => Some(ShiftFilter { path, date, slot }),
        _ => bail!(t_in(locale, "cli.shift_options_incomplete", &[])),
    };

    Ok(CliArgs {
        roster,
        shift,
        plan,
        json,
        locale: cli_locale,
    })
}

fn main() -> Result<()> {
    logging::init();

    let config = AppConfig::from_env()?;
    let args = parse_args(std::env::args().skip(1), &config.locale)?;
    let locale = args.locale.clone().unwrap_or_else(|| config.locale.clone());

    tracing::info!(version = floor_staffing::VERSION, "{}", floor_staffing::APP_NAME);

    // 定员表: --plan > 环境变量 > 标准表
    let plan = match &args.plan {
        Some(path) => load_floor_plan(path)?,
        None => config.floor_plan()?,
    };

    let importer = StaffImporter::default();
    let roster = importer.import_roster(&args.roster)?;
    let skipped = roster.skipped_rows.len().to_string();
    let count = roster.staff.len().to_string();
    eprintln!(
        "{}",
        t_in(
            &locale,
            "cli.roster_imported",
            &[("count", count.as_str()), ("skipped", skipped.as_str())]
        )
    );

    let staff = match &args.shift {
        Some(filter) => {
            let shift = importer.import_daily_shift(&filter.path, filter.date, filter.slot)?;
            let attending = shift.attending_staff(&roster.staff);
            let count = attending.len().to_string();
            let date = filter.date.to_string();
            eprintln!(
                "{}",
                t_in(
                    &locale,
                    "cli.attending",
                    &[
                        ("count", count.as_str()),
                        ("date", date.as_str()),
                        ("slot", filter.slot.code()),
                    ]
                )
            );
            attending
        }
        None => roster.staff,
    };

    let engine = FloorAssignmentEngine::with_plan(plan);
    let result = engine.assign(&staff);
    let report = AssignmentReport::new(engine.plan(), &result, &staff);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render_text(&locale));
    }

    Ok(())
}
