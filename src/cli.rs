//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, Config, Job};
use crate::error::{BarrelError, Result};
use crate::generator::{GenerateOptions, Mode, DEFAULT_NAMESPACE, DEFAULT_REGISTRAR};

/// barrelgen CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "barrelgen",
    author = "YourName <your@email.com>",
    version,
    about = "BARREL FILE GENERATOR - 폴더 내 scss/vue/js 파일들을 하나의 import 파일로 묶어주는 CLI 도구",
    long_about = r#"
BARREL FILE GENERATOR
=====================

지정된 폴더 패턴 아래의 모든 스타일시트/컴포넌트/모듈 파일을 찾아
하나의 "배럴" 파일에 import 문으로 모아 줍니다.

모드:
  • style     @import '...';
  • component import X from '...'; Vue.component('x', X);
  • module    import X from '...'; global.X = X;

예제:
  barrelgen -m style -f "src/styles" -o dist/app.scss
  barrelgen -m component -f "src/components/*" -o src/components.js
  barrelgen -m module -f src/modules --file src/polyfill.js -o src/modules.js
  barrelgen -c barrel.json
  barrelgen -c barrel.json --dry-run
"#
)]
pub struct Args {
    /// 생성 모드
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// 탐색할 폴더 글로브 패턴 (여러 번 지정 가능)
    #[arg(short = 'f', long = "folder")]
    pub folders: Vec<String>,

    /// 탐색 결과 앞에 그대로 넣을 파일 경로 (여러 번 지정 가능)
    #[arg(long = "file")]
    pub files: Vec<String>,

    /// 생성될 파일 경로
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON 설정 파일 경로 (작업 객체 또는 작업 배열)
    #[arg(short, long, conflicts_with_all = ["folders", "files", "output"])]
    pub config: Option<PathBuf>,

    /// 찾을 파일 확장자 (기본값: 모드별 scss/vue/js)
    #[arg(short, long)]
    pub extension: Option<String>,

    /// 컴포넌트 등록 함수
    #[arg(long, default_value = DEFAULT_REGISTRAR)]
    pub registrar: String,

    /// 모듈을 노출할 전역 네임스페이스
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// 파일을 쓰지 않고 생성될 내용만 출력
    #[arg(long)]
    pub dry_run: bool,

    /// 결과를 JSON으로 출력 (식별자 -> 경로 매핑 포함)
    #[arg(long)]
    pub json: bool,

    /// 상세 출력 모드 (debug 로그)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 실행할 작업 목록 생성
    ///
    /// `--config` 가 있으면 설정 파일의 작업을, 없으면 명령줄 인자로 만든
    /// 작업 하나를 반환합니다. 각 작업의 모드는 설정 파일 값이 우선합니다.
    pub fn jobs(&self) -> Result<Vec<(Mode, Job)>> {
        let jobs = match &self.config {
            Some(path) => config::load(path)?,
            None => vec![self.command_line_job()?],
        };

        jobs.into_iter()
            .map(|job| {
                let mode = job
                    .mode
                    .or(self.mode)
                    .ok_or(BarrelError::MissingField { field: "mode" })?;
                Ok((mode, job))
            })
            .collect()
    }

    /// 작업에 적용할 생성 옵션
    pub fn options_for(&self, job: &Job) -> GenerateOptions {
        let extension = job
            .extension
            .clone()
            .or_else(|| self.get_extension());

        GenerateOptions::new()
            .with_extension(extension)
            .with_registrar(self.registrar.as_str())
            .with_namespace(self.namespace.as_str())
            .with_dry_run(self.dry_run)
    }

    /// 점을 제거한 확장자 반환
    pub fn get_extension(&self) -> Option<String> {
        self.extension
            .as_ref()
            .map(|e| e.trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
    }

    fn command_line_job(&self) -> Result<Job> {
        if self.folders.is_empty() {
            return Err(BarrelError::MissingField { field: "folders" });
        }
        let output = self
            .output
            .clone()
            .ok_or(BarrelError::MissingField { field: "output" })?;

        let files = (!self.files.is_empty()).then(|| self.files.clone());
        let config = Config::new(self.folders.clone(), output).with_files(files);
        config.check()?;

        Ok(Job {
            config,
            mode: self.mode,
            extension: None,
        })
    }
}
