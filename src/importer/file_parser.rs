// ==========================================
// フロア配置システム - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 输出: 单元格网格（去首尾空白），表头识别交给上层
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::staff_importer_trait::FileParser;
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_grid(&self, file_path: &Path) -> ImportResult<Vec<Vec<String>>> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        // 表头同样作为网格的一行读取
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut grid = Vec::new();
        for result in reader.records() {
            let record = result?;
            grid.push(
                record
                    .iter()
                    .map(|v| v.trim().trim_start_matches('\u{FEFF}').to_string())
                    .collect(),
            );
        }

        Ok(grid)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
// sheet_index 指定的工作表不存在时退回第一张
pub struct ExcelParser {
    pub sheet_index: usize,
}

/// 选择要读取的工作表名：sheet_index 越界时取第一张，没有工作表返回 None
fn select_sheet(names: &[String], index: usize) -> Option<String> {
    names.get(index).or_else(|| names.first()).cloned()
}

impl FileParser for ExcelParser {
    fn parse_to_grid(&self, file_path: &Path) -> ImportResult<Vec<Vec<String>>> {
        let path = file_path;

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开 Excel 文件（xlsx/xls 自动识别）
        let mut workbook = open_workbook_auto(path)?;

        let sheet_name = select_sheet(&workbook.sheet_names(), self.sheet_index)
            .ok_or_else(|| ImportError::ExcelParseError("ワークシートがありません".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let grid = range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.to_string().trim().to_string())
                    .collect()
            })
            .collect();

        Ok(grid)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser {
    excel_sheet_index: usize,
}

impl UniversalFileParser {
    pub fn new() -> Self {
        Self {
            excel_sheet_index: 0,
        }
    }

    /// Excel 文件优先读取指定工作表
    pub fn with_excel_sheet(excel_sheet_index: usize) -> Self {
        Self { excel_sheet_index }
    }
}

impl Default for UniversalFileParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FileParser for UniversalFileParser {
    fn parse_to_grid(&self, file_path: &Path) -> ImportResult<Vec<Vec<String>>> {
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_to_grid(file_path),
            "xlsx" | "xls" => ExcelParser {
                sheet_index: self.excel_sheet_index,
            }
            .parse_to_grid(file_path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(temp_file, "{}", line).unwrap();
        }
        temp_file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let temp_file = csv_file(&["社員ID,氏名,ライセンス", "E001, 山田 ,チーフ", "E002,佐藤,ウェルカム"]);

        let records = CsvParser.parse_to_raw_records(temp_file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("氏名"), Some(&"山田".to_string()));
        assert_eq!(records[1].get("ライセンス"), Some(&"ウェルカム".to_string()));
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_grid(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let temp_file = csv_file(&["氏名,ライセンス", "山田,チーフ", ",", "佐藤,ベーシック"]);

        let records = CsvParser.parse_to_raw_records(temp_file.path()).unwrap();

        // 应跳过空行
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_csv_grid_keeps_ragged_rows() {
        let temp_file = csv_file(&["タイトル", "", "シフト時間帯,社員番号,氏名", "06:00 15:00,E001,山田"]);

        let grid = CsvParser.parse_to_grid(temp_file.path()).unwrap();

        assert_eq!(grid[0], vec!["タイトル"]);
        assert_eq!(grid.last().unwrap().len(), 3);
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_select_sheet_prefers_index() {
        // 日次排班表: 有第二张时读第二张
        let sheets = names(&["表紙", "シフト"]);
        assert_eq!(select_sheet(&sheets, 1), Some("シフト".to_string()));
        assert_eq!(select_sheet(&sheets, 0), Some("表紙".to_string()));
    }

    #[test]
    fn test_select_sheet_falls_back_to_first() {
        let sheets = names(&["シフト"]);
        assert_eq!(select_sheet(&sheets, 1), Some("シフト".to_string()));
    }

    #[test]
    fn test_select_sheet_empty_workbook() {
        assert_eq!(select_sheet(&[], 1), None);
    }

    #[test]
    fn test_excel_parser_rejects_csv_extension() {
        let temp_file = csv_file(&["氏名", "山田"]);
        let result = ExcelParser { sheet_index: 1 }.parse_to_grid(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "csv"));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let result = UniversalFileParser::new().parse_to_grid(Path::new("roster.txt"));
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "txt"));
    }
}
