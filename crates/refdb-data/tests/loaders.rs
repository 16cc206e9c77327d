use std::fs;
use std::path::{Path, PathBuf};

use refdb_data::{DataError, DataSource, load_catalog, load_embedded_catalog, load_from_source};
use refdb_model::Quantity;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "refdb-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn embedded_catalog_is_sorted_by_description() {
    let catalog = load_embedded_catalog().expect("load embedded catalog");
    assert!(!catalog.is_empty());
    let descriptions: Vec<&str> = catalog.iter().map(|r| r.description.as_str()).collect();
    let mut sorted = descriptions.clone();
    sorted.sort_unstable();
    assert_eq!(descriptions, sorted);
    assert_eq!(descriptions.first().copied(), Some("Accessory Polish"));
}

#[test]
fn embedded_catalog_resolves_event_rows_to_extra_quantity() {
    let catalog = load_embedded_catalog().expect("load embedded catalog");
    let polish = catalog
        .iter()
        .find(|r| r.description == "Accessory Polish")
        .expect("accessory record");
    assert_eq!(
        polish.rows[3].quantity,
        Quantity::extra(Some("Event".to_string()), Some(6.0))
    );
}

#[test]
fn loads_json_file() {
    let dir = unique_temp_dir("json");
    let path = dir.join("items.json");
    write(
        &path,
        r#"[{"desc":"Sword","key":"Ore","info":[{"level":1,"quantity":10},{"level":2,"quantity":15}]},
            {"desc":"Shield","key":"Wood","info":[{"level":1,"quantity":5}]}]"#,
    );
    let catalog = load_catalog(&path).expect("load json");
    let descriptions: Vec<&str> = catalog.iter().map(|r| r.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Shield", "Sword"]);
}

#[test]
fn loads_csv_file_through_data_source() {
    let dir = unique_temp_dir("csv");
    let path = dir.join("items.csv");
    write(
        &path,
        "Description,Key,Slot,Level,Quantity,Extra Quantity,Info\n\
         Sword,Ore,1,1,10,,\n\
         Sword,Ore,1,2,15,,\n",
    );
    let catalog = load_from_source(&DataSource::File(path)).expect("load csv");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.records()[0].rows.len(), 2);
}

#[test]
fn empty_json_array_is_a_valid_catalog() {
    let dir = unique_temp_dir("empty");
    let path = dir.join("empty.json");
    write(&path, "[]");
    let catalog = load_catalog(&path).expect("load empty");
    assert!(catalog.is_empty());
}

#[test]
fn rejects_unknown_extension() {
    let dir = unique_temp_dir("ext");
    let path = dir.join("items.yaml");
    write(&path, "");
    let error = load_catalog(&path).unwrap_err();
    assert!(matches!(error, DataError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_reports_io_error_with_path() {
    let dir = unique_temp_dir("missing");
    let path = dir.join("absent.json");
    let error = load_catalog(&path).unwrap_err();
    assert!(matches!(error, DataError::Io { .. }));
    assert!(error.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_reports_parse_error() {
    let dir = unique_temp_dir("malformed");
    let path = dir.join("bad.json");
    write(&path, r#"[{"desc":"Sword"}]"#);
    let error = load_catalog(&path).unwrap_err();
    assert!(matches!(error, DataError::Json { .. }));
}
