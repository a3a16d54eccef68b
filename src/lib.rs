//! barrelgen - BARREL FILE GENERATOR
//!
//! 폴더 패턴 아래의 스타일시트, 컴포넌트, 모듈 파일을 찾아 하나의 "배럴" 파일에
//! import 문으로 모아 주는 빌드 타임 코드 생성 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔍 **글로브 탐색**: 폴더 패턴을 펼쳐 하위 모든 깊이의 파일 탐색
//! - 🎨 **세 가지 모드**: `@import` (style), 컴포넌트 등록 (component), 전역 모듈 등록 (module)
//! - 📐 **상대 경로**: 모든 경로는 출력 파일 폴더 기준, `/` 구분자로 정규화
//! - 🗂️ **설정 파일**: JSON 설정 파일로 여러 배럴을 한 번에 생성
//! - 🧪 **드라이런 모드**: 파일을 쓰지 않고 생성될 내용 미리 확인
//!
//! # 예제
//!
//! ```bash
//! barrelgen -m style -f "src/styles" -o dist/app.scss
//! barrelgen -c barrel.json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod naming;
pub mod resolver;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use config::{Config, Job};
pub use error::{BarrelError, Result};
pub use generator::{component, generate, module, style, Barrel, Entry, GenerateOptions, Mode};
pub use naming::{to_identifier, to_pascal_case};
pub use resolver::resolve;
pub use stats::{format_bytes, Statistics};
