//! 에러 타입 정의 모듈
//!
//! barrelgen에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// barrelgen에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum BarrelError {
    /// 필수 설정 항목 누락
    #[error("{field} 속성이 없습니다")]
    MissingField { field: &'static str },

    /// 설정 항목 타입 불일치
    #[error("{field} 속성은 {expected} 이어야 합니다")]
    InvalidFieldType {
        field: &'static str,
        expected: &'static str,
    },

    /// 출력 경로가 빈 문자열
    #[error("output 경로가 비어 있습니다")]
    EmptyOutput,

    /// 알 수 없는 생성 모드
    #[error("알 수 없는 모드: {mode} (style, component, module 중 하나)")]
    UnknownMode { mode: String },

    /// 설정 파일 읽기 실패
    #[error("설정 파일을 읽을 수 없습니다 ({path}): {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 설정 파일 JSON 파싱 실패
    #[error("설정 파일 파싱 실패 ({path}): {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// 유효하지 않은 글로브 패턴
    #[error("유효하지 않은 패턴: {pattern}")]
    InvalidPattern { pattern: String },

    /// 절대 경로 변환 실패
    #[error("경로를 절대 경로로 변환할 수 없습니다 ({path}): {source}")]
    PathResolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 출력 폴더 생성 실패
    #[error("폴더를 생성할 수 없습니다 ({path}): {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 출력 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({path}): {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BarrelError {
    /// 설정 오류 여부 (입력을 고쳐야 하는 에러)
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BarrelError::MissingField { .. }
                | BarrelError::InvalidFieldType { .. }
                | BarrelError::EmptyOutput
                | BarrelError::UnknownMode { .. }
                | BarrelError::ConfigParse { .. }
        )
    }
}

/// barrelgen 결과 타입 별칭
pub type Result<T> = std::result::Result<T, BarrelError>;
