//! 통합 테스트 모듈
//!
//! barrelgen의 전체 기능을 테스트합니다.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 테스트용 빈 소스 파일 생성 헬퍼
fn create_file(root: &Path, relative: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "").unwrap();
    path
}

/// 글로브 패턴 문자열로 변환
fn pattern(root: &Path, relative: &str) -> String {
    root.join(relative).to_string_lossy().into_owned()
}

/// 스타일/컴포넌트/모듈 파일이 섞인 프로젝트 구조 생성
fn setup_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    create_file(root, "components/a.scss");
    create_file(root, "components/sub/b.scss");
    create_file(root, "components/nav-bar.vue");
    create_file(root, "components/my-thing.js");
    create_file(root, "components/sub/foo_bar_baz.js");

    temp_dir
}

mod generator_tests {
    use super::*;
    use barrelgen::{component, generate, module, style, Config, GenerateOptions, Mode};

    #[test]
    fn test_style_scenario() {
        let temp_dir = setup_project();
        let root = temp_dir.path();
        let output = root.join("dist/bundle.scss");
        let config = Config::new(vec![pattern(root, "components")], &output);

        let barrel = style(&config).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "@import '../components/a.scss';\r\n@import '../components/sub/b.scss';"
        );
        assert_eq!(barrel.entries.len(), 2);
        assert!(barrel.written);
    }

    #[test]
    fn test_module_scenario() {
        let temp_dir = setup_project();
        let root = temp_dir.path();
        let output = root.join("app.js");
        let config = Config::new(vec![pattern(root, "components")], &output);

        let barrel = module(&config).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "import MyThing from 'components/my-thing.js';\nglobal.MyThing = MyThing;\n\
             \r\n\
             import FooBarBaz from 'components/sub/foo_bar_baz.js';\nglobal.FooBarBaz = FooBarBaz;\n"
        );

        let exports: Vec<_> = barrel.exports().collect();
        assert_eq!(
            exports,
            vec![
                ("MyThing", "components/my-thing.js"),
                ("FooBarBaz", "components/sub/foo_bar_baz.js"),
            ]
        );
    }

    #[test]
    fn test_component_scenario() {
        let temp_dir = setup_project();
        let root = temp_dir.path();
        let output = root.join("src/components.js");
        let config = Config::new(vec![pattern(root, "components")], &output);

        component(&config).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(
            content,
            "import NavBar from '../components/nav-bar.vue';\nVue.component('nav-bar', NavBar);\n"
        );
    }

    #[test]
    fn test_files_come_first_and_unfiltered() {
        let temp_dir = setup_project();
        let root = temp_dir.path();
        let output = root.join("dist/bundle.scss");
        let config = Config::new(vec![pattern(root, "components")], &output).with_files(Some(
            vec!["~vendor/reset.css".to_string(), "theme".to_string()],
        ));

        style(&config).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = content.split("\r\n").collect();
        assert_eq!(
            lines,
            vec![
                "@import '~vendor/reset.css';",
                "@import 'theme';",
                "@import '../components/a.scss';",
                "@import '../components/sub/b.scss';",
            ]
        );
    }

    #[test]
    fn test_empty_folder_contributes_nothing() {
        let temp_dir = setup_project();
        let root = temp_dir.path();
        let output = root.join("out.scss");
        let config = Config::new(
            vec![pattern(root, "missing"), pattern(root, "components/sub")],
            &output,
        );

        let barrel = style(&config).unwrap();

        assert_eq!(barrel.entries.len(), 1);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "@import 'components/sub/b.scss';"
        );
    }

    #[test]
    fn test_no_matches_writes_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.js");
        let config = Config::new(vec![pattern(temp_dir.path(), "nothing/*")], &output);

        module(&config).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_idempotent() {
        let temp_dir = setup_project();
        let root = temp_dir.path();
        let output = root.join("dist/app.js");
        let config = Config::new(vec![pattern(root, "components")], &output);

        module(&config).unwrap();
        let first = fs::read(&output).unwrap();
        module(&config).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_overwrites_previous_output() {
        let temp_dir = setup_project();
        let root = temp_dir.path();
        let output = create_file(root, "dist/bundle.scss");
        fs::write(&output, "stale content that is much longer than the new one").unwrap();

        let config = Config::new(vec![pattern(root, "components/sub")], &output);
        style(&config).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "@import '../components/sub/b.scss';"
        );
    }

    #[test]
    fn test_output_inside_scanned_folder_is_stable() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_file(root, "styles/a.scss");
        let output = root.join("styles/all.scss");
        let config = Config::new(vec![pattern(root, "styles")], &output);

        style(&config).unwrap();
        let first = fs::read_to_string(&output).unwrap();
        style(&config).unwrap();
        let second = fs::read_to_string(&output).unwrap();

        assert_eq!(first, "@import 'a.scss';");
        assert_eq!(first, second);
        assert!(!second.contains("all.scss"));
    }

    #[test]
    fn test_component_identifier_guard_keeps_raw_key() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_file(root, "pages/404-page.vue");
        let output = root.join("pages.js");
        let config = Config::new(vec![pattern(root, "pages")], &output);

        component(&config).unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "import _404Page from 'pages/404-page.vue';\nVue.component('404-page', _404Page);\n"
        );
    }

    #[test]
    fn test_extension_override() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_file(root, "styles/base.sass");
        create_file(root, "styles/other.scss");
        let output = root.join("out.sass");
        let config = Config::new(vec![pattern(root, "styles")], &output);

        let options = GenerateOptions::new().with_extension(Some("sass".to_string()));
        let barrel = generate(&config, Mode::Style, &options).unwrap();

        assert_eq!(barrel.content, "@import 'styles/base.sass';");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = setup_project();
        let root = temp_dir.path();
        let output = root.join("dist/bundle.scss");
        let config = Config::new(vec![pattern(root, "components")], &output);

        let options = GenerateOptions::new().with_dry_run(true);
        let barrel = generate(&config, Mode::Style, &options).unwrap();

        assert!(!barrel.written);
        assert_eq!(barrel.entries.len(), 2);
        assert!(!root.join("dist").exists());
    }
}

mod validation_tests {
    use super::*;
    use barrelgen::{style, BarrelError, Config};
    use serde_json::json;

    #[test]
    fn test_missing_fields_write_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("dist/out.scss");
        let output_str = output.to_string_lossy().into_owned();

        let missing_folders = Config::from_value(&json!({ "output": output_str }));
        let missing_output = Config::from_value(&json!({ "folders": ["x"] }));

        assert!(matches!(
            missing_folders,
            Err(BarrelError::MissingField { field: "folders" })
        ));
        assert!(matches!(
            missing_output,
            Err(BarrelError::MissingField { field: "output" })
        ));
        assert!(!temp_dir.path().join("dist").exists());
    }

    #[test]
    fn test_files_not_sequence() {
        let result = Config::from_value(&json!({
            "files": { "a": "b" },
            "folders": [],
            "output": "out.scss"
        }));

        let err = result.unwrap_err();
        assert!(err.is_config_error());
        assert!(matches!(err, BarrelError::InvalidFieldType { field: "files", .. }));
    }

    #[test]
    fn test_empty_output_fails_before_write() {
        let config = Config::new(vec!["components".to_string()], "");
        assert!(matches!(style(&config), Err(BarrelError::EmptyOutput)));
    }

    #[test]
    fn test_generate_creates_nested_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("a/b/c/out.scss");
        let config = Config::new(vec![pattern(temp_dir.path(), "none")], &output);

        style(&config).unwrap();

        assert!(output.is_file());
    }

    #[test]
    fn test_invalid_folder_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::new(
            vec!["[unclosed".to_string()],
            temp_dir.path().join("out.scss"),
        );

        let err = style(&config).unwrap_err();
        assert!(matches!(err, BarrelError::InvalidPattern { .. }));
        assert!(!err.is_config_error());
    }
}

mod config_file_tests {
    use super::*;
    use barrelgen::{config, generate, GenerateOptions, Mode};

    #[test]
    fn test_run_jobs_from_config_file() {
        let temp_dir = setup_project();
        let root = temp_dir.path();
        let config_path = root.join("barrel.json");
        let jobs_json = serde_json::json!([
            {
                "mode": "scss",
                "folders": [pattern(root, "components")],
                "output": pattern(root, "dist/app.scss")
            },
            {
                "mode": "module",
                "files": ["./polyfill.js"],
                "folders": [pattern(root, "components/sub")],
                "output": pattern(root, "dist/app.js")
            }
        ]);
        fs::write(&config_path, jobs_json.to_string()).unwrap();

        let jobs = config::load(&config_path).unwrap();
        for job in &jobs {
            let options = GenerateOptions::new().with_extension(job.extension.clone());
            generate(&job.config, job.mode.unwrap(), &options).unwrap();
        }

        assert_eq!(
            fs::read_to_string(root.join("dist/app.scss")).unwrap(),
            "@import '../components/a.scss';\r\n@import '../components/sub/b.scss';"
        );
        assert_eq!(
            fs::read_to_string(root.join("dist/app.js")).unwrap(),
            "import Polyfill from './polyfill.js';\nglobal.Polyfill = Polyfill;\n\
             \r\n\
             import FooBarBaz from '../components/sub/foo_bar_baz.js';\nglobal.FooBarBaz = FooBarBaz;\n"
        );
        assert_eq!(jobs[0].mode, Some(Mode::Style));
    }
}

mod naming_tests {
    use barrelgen::{to_identifier, to_pascal_case};

    #[test]
    fn test_pascal_case_examples() {
        assert_eq!(to_pascal_case("my-component"), "MyComponent");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("widget"), "Widget");
    }

    #[test]
    fn test_identifier_guard() {
        assert_eq!(to_identifier("2col-layout"), "_2colLayout");
    }
}

mod error_tests {
    use barrelgen::BarrelError;
    use std::path::PathBuf;

    #[test]
    fn test_missing_field_display() {
        let error = BarrelError::MissingField { field: "folders" };
        assert_eq!(error.to_string(), "folders 속성이 없습니다");
    }

    #[test]
    fn test_write_error_display() {
        let error = BarrelError::Write {
            path: PathBuf::from("dist/out.scss"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = error.to_string();
        assert!(msg.contains("파일 쓰기 실패"));
        assert!(msg.contains("dist/out.scss"));
    }
}

mod cli_tests {
    use barrelgen::cli::Args;
    use barrelgen::{BarrelError, Mode};
    use clap::Parser;

    #[test]
    fn test_parse_command_line_job() {
        let args = Args::parse_from([
            "barrelgen",
            "-m",
            "vue",
            "-f",
            "src/components",
            "-f",
            "src/widgets/*",
            "--file",
            "src/base.vue",
            "-o",
            "src/all.js",
            "-e",
            ".tsx",
        ]);

        let jobs = args.jobs().unwrap();
        assert_eq!(jobs.len(), 1);
        let (mode, job) = &jobs[0];
        assert_eq!(*mode, Mode::Component);
        assert_eq!(job.config.folders, vec!["src/components", "src/widgets/*"]);
        assert_eq!(job.config.files, Some(vec!["src/base.vue".to_string()]));
        assert_eq!(args.get_extension().as_deref(), Some("tsx"));

        let options = args.options_for(job);
        assert_eq!(options.extension.as_deref(), Some("tsx"));
        assert_eq!(options.registrar, "Vue.component");
    }

    #[test]
    fn test_missing_mode() {
        let args = Args::parse_from(["barrelgen", "-f", "src", "-o", "out.scss"]);
        let err = args.jobs().unwrap_err();
        assert!(matches!(err, BarrelError::MissingField { field: "mode" }));
    }

    #[test]
    fn test_missing_folders() {
        let args = Args::parse_from(["barrelgen", "-m", "style", "-o", "out.scss"]);
        let err = args.jobs().unwrap_err();
        assert!(matches!(err, BarrelError::MissingField { field: "folders" }));
    }

    #[test]
    fn test_config_conflicts_with_folders() {
        let result =
            Args::try_parse_from(["barrelgen", "-c", "barrel.json", "-f", "src"]);
        assert!(result.is_err());
    }
}
