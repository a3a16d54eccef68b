//! 경로 탐색 모듈
//!
//! 폴더 글로브 패턴을 실제 파일 목록으로 펼치고, 각 파일의 경로를
//! 출력 파일 기준 상대 경로로 변환합니다.

use glob::{glob, Pattern};
use log::{debug, trace, warn};
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::error::{BarrelError, Result};

/// 폴더 패턴 목록에서 확장자가 일치하는 파일들을 찾아 상대 경로로 반환
///
/// # Arguments
/// * `folders` - 폴더 글로브 패턴 목록 (예: `"src/components"`, `"modules/*"`)
/// * `extension` - 찾을 파일 확장자 (점 제외, 예: `"scss"`)
/// * `output` - 생성될 파일 경로. 결과 경로는 이 파일이 있는 폴더 기준입니다.
///
/// # Returns
/// 패턴 순서대로, 각 패턴 안에서는 glob 순서대로 나열된 `/` 구분 상대 경로
pub fn resolve(folders: &[String], extension: &str, output: &Path) -> Result<Vec<String>> {
    let output = to_absolute(output)?;
    let base = output
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| output.clone());
    debug!("상대 경로 기준 폴더: {:?}", base);

    let mut matches = Vec::new();
    for folder in folders {
        matches.extend(resolve_folder(folder, extension, &output, &base)?);
    }

    Ok(matches)
}

/// 단일 폴더 패턴 처리
///
/// 출력 파일 자신은 결과에서 제외합니다.
fn resolve_folder(
    folder: &str,
    extension: &str,
    output: &Path,
    base: &Path,
) -> Result<Vec<String>> {
    let directories = glob(folder).map_err(|_| BarrelError::InvalidPattern {
        pattern: folder.to_string(),
    })?;

    let mut list = Vec::new();

    for entry in directories {
        let directory = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("패턴 {} 탐색 중 읽을 수 없는 항목: {}", folder, e);
                continue;
            }
        };

        if !directory.is_dir() {
            trace!("폴더가 아니므로 건너뜀: {:?}", directory);
            continue;
        }

        let file_pattern = format!(
            "{}/**/*.{}",
            Pattern::escape(&directory.to_string_lossy()),
            Pattern::escape(extension)
        );
        debug!("파일 패턴: {}", file_pattern);

        let files = glob(&file_pattern).map_err(|_| BarrelError::InvalidPattern {
            pattern: file_pattern.clone(),
        })?;

        for file in files {
            let file = match file {
                Ok(path) => path,
                Err(e) => {
                    warn!("{:?} 탐색 중 읽을 수 없는 항목: {}", directory, e);
                    continue;
                }
            };

            if !file.is_file() {
                continue;
            }

            let absolute = to_absolute(&file)?;
            if absolute.as_path() == output {
                trace!("출력 파일 자신이므로 건너뜀: {:?}", file);
                continue;
            }

            let relative = forward_slash(&relative_to(&absolute, base).to_string_lossy());
            trace!("발견: {:?} -> {}", file, relative);
            list.push(relative);
        }
    }

    debug!("패턴 {} 에서 {} 개 파일 발견", folder, list.len());
    Ok(list)
}

/// `..`, `.` 이 정리된 절대 경로
fn to_absolute(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| BarrelError::PathResolve {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(clean(absolute))
}

/// `base` 폴더에서 `path` 로 가는 상대 경로 계산
///
/// 상대 경로를 만들 수 없으면 `path` 를 그대로 반환합니다.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

/// 역슬래시를 슬래시로 변환
///
/// # Examples
/// ```
/// use barrelgen::resolver::forward_slash;
///
/// assert_eq!(forward_slash(r"..\styles\main.scss"), "../styles/main.scss");
/// ```
pub fn forward_slash(path: &str) -> String {
    path.replace('\\', "/")
}
