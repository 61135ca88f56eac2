/// Integration test: runs the built `vars-codegen` binary against schema
/// files written to a temp directory and checks stdout, stderr and exit
/// status.
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_vars-codegen");

const SCHEMA: &str = r#"{
  "fields": {
    "genome_size": {
      "name": "genome_size",
      "display_name": "Genome size",
      "type": "long",
      "summary": ["median", "max", "min"]
    },
    "c_value_method": {
      "name": "c_value_method",
      "display_name": "C value method",
      "type": "keyword",
      "constraint": {"enum": ["flow cytometry", "unknown"]}
    },
    "sample_location": {
      "name": "sample_location",
      "display_name": "location"
    },
    "gc_percent": {
      "name": "gc_percent",
      "type": "2dp"
    }
  }
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("run vars-codegen")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).unwrap()
}

fn stderr(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).unwrap()
}

#[test]
fn test_lenient_output() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "vars.json", SCHEMA);

    let out = run(tmp.path(), &[]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(
        stdout(&out),
        concat!(
            r#""genome_size" => Variable { display_name: "Genome size", type_of: TypeOf::Long, functions: Function::Some(vec!["min", "max"]) },"#,
            "\n",
            r#""c_value_method" => Variable { display_name: "C value method", type_of: TypeOf::Keyword(vec!["flow cytometry", "unknown"]), functions: Function::None },"#,
            "\n",
            r#""sample_location" => Variable { display_name: "location", type_of: TypeOf::None, functions: Function::None },"#,
            "\n",
            r#""gc_percent" => Variable { display_name: "gc_percent", type_of: TypeOf::TwoDP, functions: Function::None },"#,
            "\n",
        )
    );
    assert_eq!(stderr(&out), "None not found!\n");
}

#[test]
fn test_strict_drops_fields() {
    let tmp = tempfile::tempdir().unwrap();
    let schema = write(tmp.path(), "schema.json", SCHEMA);

    let out = run(tmp.path(), &["--strict", schema.to_str().unwrap()]);
    assert!(out.status.success(), "{}", stderr(&out));
    let text = stdout(&out);
    let names: Vec<_> = text
        .lines()
        .map(|l| l.split('"').nth(1).unwrap())
        .collect();
    assert_eq!(names, vec!["genome_size", "c_value_method"]);
    assert_eq!(stderr(&out), "");
}

#[test]
fn test_strict_audit() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "vars.json", SCHEMA);

    let out = run(tmp.path(), &["--strict", "--audit"]);
    assert!(out.status.success());
    assert_eq!(
        stderr(&out),
        "skipped sample_location: missing 'type'\nskipped gc_percent: missing 'display_name'\n"
    );
}

#[test]
fn test_custom_functions() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "vars.json", SCHEMA);

    let out = run(tmp.path(), &["--functions", "min,median"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains(r#"functions: Function::Some(vec!["min", "median"])"#));
}

#[test]
fn test_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "vars.json", SCHEMA);
    write(tmp.path(), "settings.json", r#"{"mode": "strict", "functions": ["max"]}"#);

    let out = run(tmp.path(), &["--config", "settings.json"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let text = stdout(&out);
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains(r#"functions: Function::Some(vec!["max"])"#));
}

#[test]
fn test_rerun_is_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "vars.json", SCHEMA);

    let a = run(tmp.path(), &[]);
    let b = run(tmp.path(), &[]);
    assert_eq!(a.stdout, b.stdout);
    assert_eq!(a.stderr, b.stderr);
}

#[test]
fn test_unknown_type_fails() {
    let tmp = tempfile::tempdir().unwrap();
    write(
        tmp.path(),
        "vars.json",
        r#"{"fields": {"x": {"name": "x", "display_name": "X", "type": "float"}}}"#,
    );

    let out = run(tmp.path(), &[]);
    assert!(!out.status.success());
    assert_eq!(stdout(&out), "");
    assert!(stderr(&out).contains("field 'x' has unknown type 'float'"));
}

#[test]
fn test_missing_fields_key_fails() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "vars.json", r#"{"variables": {}}"#);

    let out = run(tmp.path(), &[]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("schema has no 'fields' key"));
}

#[test]
fn test_missing_schema_file_fails() {
    let tmp = tempfile::tempdir().unwrap();
    let out = run(tmp.path(), &["nope.json"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("cannot read nope.json"));
}

const TEMPLATE: &str = "\
lazy_static! {
    pub static ref GOAT_TAXON_VARIABLE_DATA: BTreeMap<&'static str, Variable<'static>> = collection!(
        // automated input start taxon
        \"stale\" => Variable { display_name: \"Stale\", type_of: TypeOf::Long, functions: Function::None },
        // automated input end taxon
    );
}
";

#[test]
fn test_splice_prints_template() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "vars.json", SCHEMA);
    let template = write(tmp.path(), "variable_data.rs", TEMPLATE);

    let out = run(tmp.path(), &["--strict", "--splice", "variable_data.rs", "--index", "taxon"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let text = stdout(&out);
    assert!(!text.contains("stale"));
    assert!(text.contains("        \"genome_size\" => Variable {"));
    assert!(text.contains("        \"c_value_method\" => Variable {"));
    assert!(text.starts_with("lazy_static! {\n"));
    assert!(text.ends_with("    );\n}\n"));
    assert_eq!(std::fs::read_to_string(template).unwrap(), TEMPLATE);
}

#[test]
fn test_splice_in_place() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "vars.json", SCHEMA);
    let template = write(tmp.path(), "variable_data.rs", TEMPLATE);

    let out = run(
        tmp.path(),
        &["--splice", "variable_data.rs", "--index", "taxon", "--in-place"],
    );
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "");
    let updated = std::fs::read_to_string(template).unwrap();
    assert_eq!(updated.matches(" => Variable {").count(), 4);
}

#[test]
fn test_splice_wrong_index_fails() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "vars.json", SCHEMA);
    write(tmp.path(), "variable_data.rs", TEMPLATE);

    let out = run(tmp.path(), &["--splice", "variable_data.rs", "--index", "assembly"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("// automated input start assembly"));
}

#[test]
fn test_splice_in_place_keeps_crlf_template() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "vars.json", SCHEMA);
    let crlf = TEMPLATE.replace('\n', "\r\n");
    let template = write(tmp.path(), "variable_data.rs", &crlf);

    let out = run(
        tmp.path(),
        &["--strict", "--splice", "variable_data.rs", "--index", "taxon", "--in-place"],
    );
    assert!(out.status.success(), "{}", stderr(&out));
    let updated = std::fs::read_to_string(template).unwrap();
    assert_eq!(updated.matches('\n').count(), updated.matches("\r\n").count());
    assert!(updated.starts_with("lazy_static! {\r\n"));
    assert!(updated.contains("        \"genome_size\" => Variable {"));
    assert!(!updated.contains("stale"));
}
