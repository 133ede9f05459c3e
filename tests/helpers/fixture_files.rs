// ==========================================
// 测试文件生成
// ==========================================

use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// 写入临时文件（按行），保持返回值存活期间文件有效
pub fn write_temp(suffix: &str, lines: &[&str]) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write temp file");
    }
    file
}

pub fn write_csv(lines: &[&str]) -> NamedTempFile {
    write_temp(".csv", lines)
}
