// ==========================================
// 集成测试共享辅助
// ==========================================

#![allow(dead_code)]

pub mod fixture_files;
pub mod staff_builder;
