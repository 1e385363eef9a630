//! End-to-end tests for the conversion pipeline.

use std::fs;

use tempfile::TempDir;

use nameshift::{ConversionPipeline, NamingPreferences, NamingStyle};

fn run(prefs: NamingPreferences, root: &std::path::Path) -> nameshift::ConversionReport {
    ConversionPipeline::new(prefs)
        .unwrap()
        .convert_directory(root)
        .unwrap()
}

#[test]
fn converts_a_class_file_end_to_end() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("processor.py");
    fs::write(
        &file,
        r#"class data_processor:
    MAX_SIZE = 10

    def __init__(self, name):
        self.itemCount = 0

    def addItem(self, newItem):
        self.itemCount = self.itemCount + 1
        return newItem
"#,
    )
    .unwrap();

    let report = run(NamingPreferences::preset("python_standard").unwrap(), temp.path());

    assert_eq!(report.files_processed, 1);
    assert_eq!(report.total_conversions, 4);

    let content = fs::read_to_string(&file).unwrap();
    assert_eq!(
        content,
        r#"class DataProcessor:
    MAX_SIZE = 10

    def __init__(self, name):
        self.item_count = 0

    def add_item(self, new_item):
        self.item_count = self.item_count + 1
        return new_item
"#
    );
}

#[test]
fn method_rename_leaves_conforming_argument_alone() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("foo.py");
    fs::write(
        &file,
        "class Foo:\n    def doWork(self, some_arg):\n        return some_arg\n",
    )
    .unwrap();

    let report = run(NamingPreferences::preset("python_standard").unwrap(), temp.path());

    assert_eq!(report.total_conversions, 1);
    assert_eq!(report.conversions.get("doWork").map(String::as_str), Some("do_work"));

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("def do_work(self, some_arg):"));
}

#[test]
fn syntax_breaking_conversion_reverts_byte_for_byte() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("keywords.py");
    // Renaming FOR to snake_case produces the keyword `for`
    let source = "FOR = 1\nusable_value = FOR\n";
    fs::write(&file, source).unwrap();

    let mut prefs = NamingPreferences::default();
    prefs.preserve_constants = false;
    prefs.constants = NamingStyle::Snake;

    let report = run(prefs, temp.path());

    assert_eq!(report.total_conversions, 0);
    assert_eq!(report.files_processed, 0);
    assert_eq!(report.files_skipped_syntax, 1);
    assert_eq!(fs::read_to_string(&file).unwrap(), source);
}

#[test]
fn already_unparseable_files_are_left_untouched() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("broken.py");
    let source = "def broken(:\n    badName = 1\n";
    fs::write(&file, source).unwrap();

    let report = run(NamingPreferences::preset("python_standard").unwrap(), temp.path());

    assert_eq!(report.total_conversions, 0);
    assert_eq!(fs::read_to_string(&file).unwrap(), source);
}

#[test]
fn artifact_directories_are_never_rewritten() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("visible.py"), "topVar = 1\n").unwrap();

    for dir in ["__pycache__", ".git", "build"] {
        fs::create_dir_all(temp.path().join(dir)).unwrap();
        fs::write(temp.path().join(dir).join("hidden.py"), "convertMe = 1\n").unwrap();
    }

    let report = run(NamingPreferences::preset("python_standard").unwrap(), temp.path());

    assert_eq!(report.files_processed, 1);
    assert_eq!(
        fs::read_to_string(temp.path().join("visible.py")).unwrap(),
        "top_var = 1\n"
    );
    for dir in ["__pycache__", ".git", "build"] {
        assert_eq!(
            fs::read_to_string(temp.path().join(dir).join("hidden.py")).unwrap(),
            "convertMe = 1\n",
            "{dir} content must be untouched"
        );
    }
}

#[test]
fn single_file_root_is_supported() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("single.py");
    fs::write(&file, "def doWork():\n    pass\n").unwrap();

    let report = run(NamingPreferences::preset("python_standard").unwrap(), &file);

    assert_eq!(report.files_processed, 1);
    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "def do_work():\n    pass\n"
    );
}

#[test]
fn preferences_file_drives_the_run() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("prefs.json");
    fs::write(
        &config_path,
        r#"{ "naming_preferences": { "variables": "camelCase" } }"#,
    )
    .unwrap();

    let src = temp.path().join("code");
    fs::create_dir(&src).unwrap();
    let file = src.join("vars.py");
    fs::write(&file, "first_value = 1\n").unwrap();

    let prefs = NamingPreferences::from_json_file(&config_path).unwrap();
    let report = run(prefs, &src);

    assert_eq!(report.total_conversions, 1);
    assert_eq!(fs::read_to_string(&file).unwrap(), "firstValue = 1\n");
}

#[test]
fn invalid_preferences_fail_before_any_file_is_touched() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("bad.json");
    fs::write(&config_path, r#"{ "variables": "kebab-case" }"#).unwrap();

    let err = NamingPreferences::from_json_file(&config_path).unwrap_err();
    assert!(!err.is_recoverable());
}

#[test]
fn strings_and_comments_survive_a_directory_run() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("mixed.py");
    fs::write(
        &file,
        "oldStyle = 1\nlabel = \"oldStyle\"  # oldStyle unchanged here\n",
    )
    .unwrap();

    run(NamingPreferences::preset("python_standard").unwrap(), temp.path());

    let content = fs::read_to_string(&file).unwrap();
    assert!(content.contains("old_style = 1"));
    assert!(content.contains("\"oldStyle\""));
    assert!(content.contains("# oldStyle unchanged here"));
}
