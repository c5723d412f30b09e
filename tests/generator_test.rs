use codefs::config::Config;
use codefs::error::Error;
use codefs::generator::{generate, generate_with};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = "// +build !makebuild\n\n// ###GENDATE### ###GENCMD###\npackage webcontent\n\nvar files = map[string]string{\n//###DATA###\n}\n";

fn setup(site: &[(&str, &[u8])]) -> (TempDir, Config) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("web");
    fs::create_dir(&root).unwrap();
    for (relative, content) in site {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    let template_path = temp_dir.path().join("template.go");
    fs::write(&template_path, TEMPLATE).unwrap();

    let mut config = Config::new(&root);
    config.template_path = template_path;
    config.generation_command = "codefs web".to_string();
    (temp_dir, config)
}

fn pinned(config: &Config) -> String {
    generate_with(config, |context| context.with_generated_at("Thu Oct 15 09:03:07 2026")).unwrap()
}

#[test]
fn test_single_index_file() {
    let (_temp_dir, config) = setup(&[("index.html", b"ok")]);

    let output = generate(&config).unwrap();

    assert!(output.starts_with("// +build makebuild\n"));
    assert!(output.contains("\"/index.html\": `6f6b`"));
    assert!(output.contains("\"/\": `6f6b`"));
    assert!(output.contains("codefs web"));
}

#[test]
fn test_full_output() {
    let (_temp_dir, config) = setup(&[("js/app.js", b"go()")]);

    let output = pinned(&config);

    assert_eq!(
        output,
        "// +build makebuild\n\n// Thu Oct 15 09:03:07 2026 codefs web\npackage webcontent\n\nvar files = map[string]string{\n\"/js/app.js\": `676f2829`\n}\n"
    );
}

#[test]
fn test_custom_index_path() {
    let (_temp_dir, mut config) =
        setup(&[("index.html", b"a"), ("docs/home.html", b"b")]);
    config.index_path = "/docs/home.html".to_string();

    let output = pinned(&config);

    assert!(output.contains("\"/docs/home.html\": `62`,\n\"/\": `62`"));
    assert!(!output.contains("\"/\": `61`"));
}

#[test]
fn test_empty_root() {
    let (_temp_dir, config) = setup(&[]);

    let output = pinned(&config);

    assert!(output.contains("map[string]string{\n\n}"));
}

#[test]
fn test_excludes_are_applied() {
    let (_temp_dir, mut config) = setup(&[("index.html", b"ok"), ("app.js.map", b"{}")]);
    config.exclude = vec!["*.map".to_string()];

    let output = pinned(&config);

    assert!(!output.contains("app.js.map"));
    assert!(output.contains("\"/index.html\""));
}

#[test]
fn test_invalid_exclude_pattern() {
    let (_temp_dir, mut config) = setup(&[("index.html", b"ok")]);
    config.exclude = vec!["[".to_string()];

    assert!(matches!(generate(&config), Err(Error::IgnorePatternError(_))));
}

#[test]
fn test_missing_template() {
    let (temp_dir, mut config) = setup(&[("index.html", b"ok")]);
    config.template_path = temp_dir.path().join("missing.go");

    match generate(&config) {
        Err(Error::FileSystemError { path, .. }) => assert!(path.ends_with("missing.go")),
        other => panic!("Expected FileSystemError, got {other:?}"),
    }
}

#[test]
fn test_missing_root() {
    let (temp_dir, mut config) = setup(&[]);
    config.root = temp_dir.path().join("nowhere");
    config.base_dir = config.root.clone();

    assert!(matches!(generate(&config), Err(Error::FileSystemError { .. })));
}

#[test]
fn test_malformed_template_strict_and_lenient() {
    let (temp_dir, mut config) = setup(&[("index.html", b"ok")]);
    let template_path = temp_dir.path().join("bare.go");
    fs::write(&template_path, "var files = map[string]string{\n//###DATA###\n}\n").unwrap();
    config.template_path = template_path;

    assert!(matches!(generate(&config), Err(Error::MalformedTemplateError(_))));

    config.strict_markers = false;
    let output = generate(&config).unwrap();
    assert_eq!(
        output,
        "var files = map[string]string{\n\"/index.html\": `6f6b`,\n\"/\": `6f6b`\n}\n"
    );
}

#[test]
fn test_template_is_not_modified() {
    let (_temp_dir, config) = setup(&[("index.html", b"ok")]);

    generate(&config).unwrap();

    assert_eq!(fs::read_to_string(Path::new(&config.template_path)).unwrap(), TEMPLATE);
}

#[test]
fn test_non_utf8_template() {
    let (temp_dir, mut config) = setup(&[("index.html", b"ok")]);
    let template_path = temp_dir.path().join("latin1.go");
    let mut template = TEMPLATE.as_bytes().to_vec();
    template.extend_from_slice(b"// caf\xe9\n");
    fs::write(&template_path, template).unwrap();
    config.template_path = template_path;

    match generate(&config) {
        Err(Error::MalformedTemplateError(msg)) => {
            assert!(msg.contains("latin1.go"));
            assert!(msg.contains("not valid UTF-8"));
        }
        other => panic!("Expected MalformedTemplateError, got {other:?}"),
    }
}
