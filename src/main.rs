//! barrelgen - BARREL FILE GENERATOR
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::debug;

use barrelgen::{
    cli::Args,
    config::Job,
    generator::{generate, Barrel, Mode},
    stats::Statistics,
};

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.verbose);
    debug!("CLI 인자: {:?}", args);

    let jobs = args.jobs().context("설정 확인 실패")?;

    if !args.json {
        print_header(&args, &jobs);
    }

    let mut stats = Statistics::new();
    let mut barrels = Vec::with_capacity(jobs.len());

    for (mode, job) in &jobs {
        let barrel = run_job(&args, *mode, job)
            .with_context(|| format!("{:?} 생성 실패", job.config.output))?;
        stats.record(&barrel);

        if !args.json {
            print_result(&barrel, args.dry_run);
        }
        barrels.push(barrel);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&barrels)?);
        return Ok(());
    }

    stats.print_summary();
    println!("\n{} 완료\n", "✅".bright_green());

    Ok(())
}

/// 로거 초기화 (RUST_LOG가 없으면 verbose 여부로 기본 레벨 결정)
fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// 작업 하나 실행
fn run_job(args: &Args, mode: Mode, job: &Job) -> barrelgen::Result<Barrel> {
    let options = args.options_for(job);
    debug!("{:?} 작업 옵션: {:?}", job.config.output, options);
    generate(&job.config, mode, &options)
}

/// 헤더 출력
fn print_header(args: &Args, jobs: &[(Mode, Job)]) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!("{}", " 🚀 BARREL FILE GENERATOR".bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());

    if let Some(ref config) = args.config {
        println!("  {} 설정 파일: {:?}", "🗂️".bright_cyan(), config);
    }

    for (mode, job) in jobs {
        println!(
            "  {} {:?} ({}) <- {}",
            "📄".bright_green(),
            job.config.output,
            mode.to_string().bright_yellow(),
            job.config.folders.join(", ")
        );
    }

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (파일 쓰지 않음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
}

/// 작업 결과 출력
fn print_result(barrel: &Barrel, dry_run: bool) {
    println!(
        "  {} {:?}: {} 개 항목",
        "✓".green(),
        barrel.output,
        barrel.entries.len().to_string().bright_green()
    );

    if barrel.entries.is_empty() {
        println!("    {}", "⚠️ 일치하는 파일이 없습니다.".yellow());
    }

    if dry_run {
        println!("{}", "─".repeat(50).dimmed());
        println!("{}", barrel.content.replace("\r\n", "\n"));
        println!("{}", "─".repeat(50).dimmed());
    }
}
