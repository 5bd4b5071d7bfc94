use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn fixture_backend() -> PathBuf {
    project_root().join("tests/fixtures/backend")
}

/// Run enum-export from inside `cwd` so no stray enum-export.toml is picked up
fn run_export(cwd: &Path, args: &[&str]) -> std::process::ExitStatus {
    Command::new(env!("CARGO_BIN_EXE_enum-export"))
        .current_dir(cwd)
        .args(args)
        .status()
        .expect("Failed to run enum-export")
}

fn export_fixtures(temp: &TempDir) -> PathBuf {
    let output = temp.path().join("enums-export");
    let status = run_export(
        temp.path(),
        &[
            "--backend",
            fixture_backend().to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
    );
    assert!(status.success(), "enum-export failed");
    output
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("{}: {}", name, e))
}

#[test]
fn test_end_to_end_generation() {
    let temp = TempDir::new().unwrap();
    let output = export_fixtures(&temp);

    assert_eq!(
        read(&output, "AttendanceStatus.ts"),
        "export enum AttendanceStatus {\n\
         \x20 PRESENT = 'PRESENT',\n\
         \x20 ABSENT = 'ABSENT',\n\
         \x20 LEAVE = 'LEAVE',\n\
         \x20 HOLIDAY = 'HOLIDAY',\n\
         \x20 PARTIAL = 'PARTIAL',\n\
         \x20 REGULARIZED_PRESENT = 'REGULARIZED_PRESENT',\n\
         \x20 OPEN = 'OPEN',\n\
         \x20 INCOMPLETE = 'INCOMPLETE',\n\
         \x20 FLAGGED = 'FLAGGED',\n\
         \x20 REQUIRES_REVIEW = 'REQUIRES_REVIEW',\n\
         }\n"
    );

    assert_eq!(
        read(&output, "PunchRequestState.ts"),
        "export enum PunchRequestState {\n\
         \x20 PENDING = 'PENDING',\n\
         \x20 FULFILLED = 'FULFILLED',\n\
         \x20 EXPIRED = 'EXPIRED',\n\
         \x20 CANCELLED = 'CANCELLED',\n\
         }\n"
    );

    assert_eq!(
        read(&output, "EntityTypes.ts"),
        "export const EntityTypes = {\n\
         \x20 USER: 1,\n\
         \x20 ORG: 2,\n\
         \x20 PROJECT: 4,\n\
         \x20 TEAM: 5,\n\
         } as const;\n\
         \n\
         export type EntityTypesType = typeof EntityTypes;\n"
    );

    assert_eq!(
        read(&output, "FormattedResponse.ts"),
        "export const FormattedResponse = {\n\
         \x20 SUCCESS: \"SUCCESS\",\n\
         \x20 ERROR: \"ERROR\",\n\
         \x20 FAILED: \"FAILED\",\n\
         } as const;\n\
         \n\
         export type FormattedResponseType = typeof FormattedResponse;\n"
    );

    // Only the first constant on a line is taken
    assert!(read(&output, "GeoFenceLocationKind.ts").contains("OFFICE = 'OFFICE'"));
    assert!(read(&output, "AttendancePolicyOutsideFencePolicy.ts").contains("BLOCK = 'BLOCK'"));
    assert!(read(&output, "AttendancePolicyIntegrityPosture.ts").contains("WARN = 'WARN'"));

    // Non-enum files in the enum directory produce nothing
    assert!(!output.join("ShiftHelper.ts").exists());
}

#[test]
fn test_index_lists_every_file_sorted() {
    let temp = TempDir::new().unwrap();
    let output = export_fixtures(&temp);

    let index = read(&output, "index.ts");
    let expected = [
        "// Auto-generated index file for all exported enums and constants",
        "",
        "export * from './AttendancePolicyIntegrityPosture';",
        "export * from './AttendancePolicyOutsideFencePolicy';",
        "export * from './AttendanceStatus';",
        "export * from './EntityTypes';",
        "export * from './FormattedResponse';",
        "export * from './GeoFenceLocationKind';",
        "export * from './PunchRequestState';",
    ];
    assert_eq!(index, format!("{}\n", expected.join("\n")));

    let generated = fs::read_dir(&output).unwrap().count();
    assert_eq!(generated, expected.len() - 2 + 1, "declarations plus index.ts");
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let temp = TempDir::new().unwrap();
    let output = export_fixtures(&temp);

    let snapshot = |dir: &Path| -> Vec<(String, String)> {
        let mut files: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .map(|p| {
                (
                    p.file_name().unwrap().to_string_lossy().to_string(),
                    fs::read_to_string(&p).unwrap(),
                )
            })
            .collect();
        files.sort();
        files
    };

    let first = snapshot(&output);
    export_fixtures(&temp);
    let second = snapshot(&output);

    assert_eq!(first, second);
}

#[test]
fn test_missing_backend_still_succeeds() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out");
    let status = run_export(
        temp.path(),
        &[
            "--backend",
            temp.path().join("no-such-backend").to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
    );
    assert!(status.success());

    let index = read(&output, "index.ts");
    assert!(!index.contains("export *"));
}

#[test]
fn test_config_file_strategy_table() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("generated");
    let config = format!(
        r#"
[project]
backend_root = "{}"

[output]
path = "{}"

[sources]
enum_dirs = []
nested_enum_files = ["src/main/java/com/tse/core_application/entity/fence/GeoFence.java"]

[[sources.constants]]
path = "src/main/java/com/tse/core_application/constants/EntityTypes.java"
label = "EntityKinds"
strategy = "int_fields"
"#,
        fixture_backend().display().to_string().replace('\\', "/"),
        output.display().to_string().replace('\\', "/"),
    );
    let config_path = temp.path().join("enum-export.toml");
    fs::write(&config_path, config).unwrap();

    // Picked up from the working directory without --config
    let status = run_export(temp.path(), &[]);
    assert!(status.success());

    assert!(output.join("GeoFenceLocationKind.ts").exists());
    assert!(read(&output, "EntityKinds.ts").starts_with("export const EntityKinds = {\n"));
    assert!(!output.join("AttendanceStatus.ts").exists());
    assert!(!output.join("FormattedResponse.ts").exists());
}

#[test]
fn test_invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("broken.toml");
    fs::write(&config_path, "[output\npath = ").unwrap();

    let status = run_export(temp.path(), &["-c", config_path.to_str().unwrap()]);
    assert!(!status.success());
}
