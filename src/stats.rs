//! 통계 및 유틸리티 모듈
//!
//! 생성 작업 통계 수집 및 포맷팅을 담당합니다.

use colored::Colorize;
use std::time::{Duration, Instant};

use crate::generator::Barrel;

/// 생성 통계 구조체
#[derive(Debug)]
pub struct Statistics {
    /// 완료된 작업 수
    pub jobs: usize,
    /// 생성된 항목 수
    pub entries: usize,
    /// 쓴 총 바이트
    pub bytes_written: u64,
    /// 드라이런으로 쓰지 않은 작업 수
    pub skipped_writes: usize,
    /// 처리 시작 시간
    start_time: Instant,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    /// 새 통계 인스턴스 생성
    pub fn new() -> Self {
        Self {
            jobs: 0,
            entries: 0,
            bytes_written: 0,
            skipped_writes: 0,
            start_time: Instant::now(),
        }
    }

    /// 생성 결과 반영
    pub fn record(&mut self, barrel: &Barrel) {
        self.jobs += 1;
        self.entries += barrel.entries.len();
        if barrel.written {
            self.bytes_written += barrel.byte_len();
        } else {
            self.skipped_writes += 1;
        }
    }

    /// 경과 시간 반환
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 생성 통계".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!("  {} 작업 수:      {}", "📁".bright_cyan(), self.jobs);
        println!(
            "  {} 항목 수:      {}",
            "✅".bright_green(),
            self.entries.to_string().green()
        );
        println!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );

        if self.skipped_writes > 0 {
            println!(
                "  {} 드라이런:     {} 개 작업 (파일 쓰지 않음)",
                "⚠️".bright_yellow(),
                self.skipped_writes.to_string().yellow()
            );
        }

        println!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed())
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use barrelgen::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    if secs > 0 {
        format!("{}.{:03}초", secs, millis)
    } else {
        format!("{}ms", millis)
    }
}
