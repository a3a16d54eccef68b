//! 설정 모듈
//!
//! 생성 설정의 검증과 JSON 설정 파일 로딩을 담당합니다.

use log::debug;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BarrelError, Result};
use crate::generator::Mode;

/// 배럴 생성 설정
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// 그대로 앞에 붙일 경로 목록 (확장자 필터 없음)
    pub files: Option<Vec<String>>,
    /// 탐색할 폴더 글로브 패턴 목록
    pub folders: Vec<String>,
    /// 생성될 파일 경로
    pub output: PathBuf,
}

impl Config {
    /// 새 설정 생성
    pub fn new(folders: Vec<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            files: None,
            folders,
            output: output.into(),
        }
    }

    /// 명시 파일 목록 설정
    pub fn with_files(mut self, files: Option<Vec<String>>) -> Self {
        self.files = files;
        self
    }

    /// JSON 값에서 설정 생성
    ///
    /// 누락된 필드나 타입이 맞지 않는 필드가 있으면 에러를 반환합니다.
    ///
    /// # Examples
    /// ```
    /// use barrelgen::config::Config;
    /// use serde_json::json;
    ///
    /// let config = Config::from_value(&json!({
    ///     "folders": ["src/components"],
    ///     "output": "dist/bundle.scss"
    /// }))
    /// .unwrap();
    /// assert_eq!(config.folders, vec!["src/components"]);
    ///
    /// assert!(Config::from_value(&json!({ "folders": [] })).is_err());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or(BarrelError::InvalidFieldType {
            field: "config",
            expected: "object",
        })?;

        let folders = object
            .get("folders")
            .ok_or(BarrelError::MissingField { field: "folders" })?;
        let output = object
            .get("output")
            .ok_or(BarrelError::MissingField { field: "output" })?;

        let files = match object.get("files") {
            Some(files) => Some(string_array(files, "files")?),
            None => None,
        };
        let folders = string_array(folders, "folders")?;
        let output = output.as_str().ok_or(BarrelError::InvalidFieldType {
            field: "output",
            expected: "string",
        })?;

        let config = Self {
            files,
            folders,
            output: PathBuf::from(output),
        };
        config.check()?;

        Ok(config)
    }

    /// 파일 시스템을 건드리지 않는 검사
    pub fn check(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            return Err(BarrelError::EmptyOutput);
        }
        Ok(())
    }

    /// 설정 검사 후 출력 파일의 상위 폴더가 없으면 생성
    pub fn validate(&self) -> Result<()> {
        self.check()?;
        ensure_parent_dir(&self.output)
    }
}

/// 설정 파일의 작업 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// 탐색/출력 설정
    pub config: Config,
    /// 생성 모드 (None이면 명령줄 값 사용)
    pub mode: Option<Mode>,
    /// 확장자 재정의
    pub extension: Option<String>,
}

impl Job {
    /// JSON 객체에서 작업 생성
    pub fn from_value(value: &Value) -> Result<Self> {
        let config = Config::from_value(value)?;

        let mode = match value.get("mode") {
            Some(Value::String(mode)) => Some(mode.parse::<Mode>()?),
            Some(_) => {
                return Err(BarrelError::InvalidFieldType {
                    field: "mode",
                    expected: "string",
                })
            }
            None => None,
        };

        let extension = match value.get("extension") {
            Some(Value::String(ext)) => Some(ext.trim_start_matches('.').to_string()),
            Some(_) => {
                return Err(BarrelError::InvalidFieldType {
                    field: "extension",
                    expected: "string",
                })
            }
            None => None,
        };

        Ok(Self {
            config,
            mode,
            extension,
        })
    }
}

/// 설정 파일 로딩
///
/// 파일 내용은 작업 객체 하나 또는 작업 객체 배열이어야 합니다.
pub fn load(path: &Path) -> Result<Vec<Job>> {
    let content = fs::read_to_string(path).map_err(|e| BarrelError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| BarrelError::ConfigParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let jobs = match &value {
        Value::Array(items) => items.iter().map(Job::from_value).collect::<Result<Vec<_>>>()?,
        _ => vec![Job::from_value(&value)?],
    };

    debug!("{:?} 에서 {} 개 작업 로딩", path, jobs.len());
    Ok(jobs)
}

/// 문자열 배열 필드 변환
fn string_array(value: &Value, field: &'static str) -> Result<Vec<String>> {
    let invalid = || BarrelError::InvalidFieldType {
        field,
        expected: "array of strings",
    };

    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}

/// 출력 파일의 상위 폴더 생성
fn ensure_parent_dir(output: &Path) -> Result<()> {
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };

    if !parent.exists() {
        debug!("출력 폴더 생성: {:?}", parent);
        fs::create_dir_all(parent).map_err(|e| BarrelError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    Ok(())
}
