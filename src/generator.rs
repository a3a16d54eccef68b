//! 배럴 파일 생성 모듈
//!
//! 설정 검증, 파일 탐색, 모드별 코드 라인 생성, 출력 파일 쓰기를 담당합니다.

use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::Config;
use crate::error::{BarrelError, Result};
use crate::naming::to_identifier;
use crate::resolver::resolve;

/// 생성 라인 구분자
pub const LINE_SEPARATOR: &str = "\r\n";

/// 기본 컴포넌트 등록 함수
pub const DEFAULT_REGISTRAR: &str = "Vue.component";

/// 기본 전역 네임스페이스
pub const DEFAULT_NAMESPACE: &str = "global";

/// 생성 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// 스타일시트 import (`@import '...';`)
    #[value(alias = "scss")]
    Style,
    /// 컴포넌트 import + 등록
    #[value(alias = "vue")]
    Component,
    /// 모듈 import + 전역 등록
    #[value(alias = "js")]
    Module,
}

impl Mode {
    /// 모드별 기본 확장자
    pub fn default_extension(&self) -> &'static str {
        match self {
            Mode::Style => "scss",
            Mode::Component => "vue",
            Mode::Module => "js",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Style => write!(f, "Style"),
            Mode::Component => write!(f, "Component"),
            Mode::Module => write!(f, "Module"),
        }
    }
}

impl FromStr for Mode {
    type Err = BarrelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "style" | "scss" => Ok(Mode::Style),
            "component" | "vue" => Ok(Mode::Component),
            "module" | "js" => Ok(Mode::Module),
            _ => Err(BarrelError::UnknownMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// 생성 옵션
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// 찾을 확장자 (None이면 모드 기본값)
    pub extension: Option<String>,
    /// 컴포넌트 등록 함수 이름
    pub registrar: String,
    /// 모듈을 노출할 전역 네임스페이스
    pub namespace: String,
    /// 파일을 쓰지 않고 내용만 생성
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            extension: None,
            registrar: DEFAULT_REGISTRAR.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            dry_run: false,
        }
    }
}

impl GenerateOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 확장자 설정
    pub fn with_extension(mut self, extension: Option<String>) -> Self {
        self.extension = extension;
        self
    }

    /// 컴포넌트 등록 함수 설정
    pub fn with_registrar(mut self, registrar: impl Into<String>) -> Self {
        self.registrar = registrar.into();
        self
    }

    /// 전역 네임스페이스 설정
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// 드라이런 설정
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// 배럴 파일의 한 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// import 경로
    pub path: String,
    /// 확장자를 뺀 파일 이름 (컴포넌트 등록 키)
    pub key: String,
    /// import 식별자
    pub identifier: String,
}

impl Entry {
    /// 경로에서 항목 생성
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let key = Path::new(&path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let identifier = to_identifier(&key);

        Self {
            path,
            key,
            identifier,
        }
    }
}

/// 생성 결과
#[derive(Debug, Clone, Serialize)]
pub struct Barrel {
    /// 생성 모드
    pub mode: Mode,
    /// 출력 파일 경로
    pub output: PathBuf,
    /// 출력 순서대로 나열된 항목
    pub entries: Vec<Entry>,
    /// 생성된 파일 내용
    #[serde(skip)]
    pub content: String,
    /// 실제로 파일을 썼는지 여부 (드라이런이면 false)
    pub written: bool,
}

impl Barrel {
    /// 식별자 -> import 경로 매핑 (출력 순서)
    pub fn exports(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.identifier.as_str(), e.path.as_str()))
    }

    /// 생성된 내용의 바이트 수
    pub fn byte_len(&self) -> u64 {
        self.content.len() as u64
    }
}

/// 항목 하나를 모드에 맞는 코드로 변환
pub fn format_line(mode: Mode, entry: &Entry, options: &GenerateOptions) -> String {
    match mode {
        Mode::Style => format!("@import '{}';", entry.path),
        Mode::Component => format!(
            "import {id} from '{path}';\n{registrar}('{key}', {id});\n",
            id = entry.identifier,
            path = entry.path,
            registrar = options.registrar,
            key = entry.key,
        ),
        Mode::Module => format!(
            "import {id} from '{path}';\n{ns}.{id} = {id};\n",
            id = entry.identifier,
            path = entry.path,
            ns = options.namespace,
        ),
    }
}

/// 항목 목록을 파일 내용으로 변환
pub fn render(mode: Mode, entries: &[Entry], options: &GenerateOptions) -> String {
    entries
        .iter()
        .map(|entry| format_line(mode, entry, options))
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

/// 설정의 `files` 와 `folders` 탐색 결과를 순서대로 모은 목록
pub fn collect_matches(config: &Config, extension: &str) -> Result<Vec<String>> {
    let mut matches: Vec<String> = config.files.clone().unwrap_or_default();
    matches.extend(resolve(&config.folders, extension, &config.output)?);
    Ok(matches)
}

/// 배럴 파일 생성
///
/// # Arguments
/// * `config` - 탐색/출력 설정
/// * `mode` - 생성 모드
/// * `options` - 생성 옵션
///
/// # Returns
/// 생성된 항목과 내용을 담은 `Barrel`
pub fn generate(config: &Config, mode: Mode, options: &GenerateOptions) -> Result<Barrel> {
    if options.dry_run {
        config.check()?;
    } else {
        config.validate()?;
    }

    let extension = options
        .extension
        .as_deref()
        .unwrap_or_else(|| mode.default_extension());
    debug!("{} 모드, 확장자 .{}", mode, extension);

    let entries: Vec<Entry> = collect_matches(config, extension)?
        .into_iter()
        .map(Entry::new)
        .collect();
    let content = render(mode, &entries, options);

    if !options.dry_run {
        fs::write(&config.output, &content).map_err(|e| BarrelError::Write {
            path: config.output.clone(),
            source: e,
        })?;
        info!(
            "{:?} 생성 완료 ({} 개 항목, {} bytes)",
            config.output,
            entries.len(),
            content.len()
        );
    }

    Ok(Barrel {
        mode,
        output: config.output.clone(),
        entries,
        content,
        written: !options.dry_run,
    })
}

/// 스타일시트 배럴 생성
pub fn style(config: &Config) -> Result<Barrel> {
    generate(config, Mode::Style, &GenerateOptions::new())
}

/// 컴포넌트 배럴 생성
pub fn component(config: &Config) -> Result<Barrel> {
    generate(config, Mode::Component, &GenerateOptions::new())
}

/// 모듈 배럴 생성
pub fn module(config: &Config) -> Result<Barrel> {
    generate(config, Mode::Module, &GenerateOptions::new())
}
