use anyhow::Result;
use gradebook::domain::ports::StudentStorage;
use gradebook::{load_students_from_file, save_students_to_file, FlatFileStorage, Student};
use tempfile::TempDir;

fn roster() -> Result<Vec<Student>> {
    Ok(vec![
        Student::new("S001", "Alice", 20)?,
        Student::new("S002", "Bob", 22)?,
        Student::new("S003", "Carol Ann", 19)?,
    ])
}

/// 存檔後重新讀取應得到相同順序與欄位
#[test]
fn test_save_then_load_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("students.csv");
    let students = roster()?;

    save_students_to_file(&students, &path);
    let loaded = load_students_from_file(&path);

    assert_eq!(loaded.len(), students.len());
    for (original, reloaded) in students.iter().zip(&loaded) {
        assert_eq!(original.id(), reloaded.id());
        assert_eq!(original.name(), reloaded.name());
        assert_eq!(original.age(), reloaded.age());
    }
    Ok(())
}

#[test]
fn test_file_format_is_plain_lines() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("students.csv");

    save_students_to_file(&roster()?, &path);

    let content = std::fs::read_to_string(&path)?;
    assert_eq!(content, "S001,Alice,20\nS002,Bob,22\nS003,Carol Ann,19\n");
    Ok(())
}

#[test]
fn test_load_skips_malformed_lines() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("students.csv");
    std::fs::write(&path, "S001,Alice\nS002,Bob,abc\nS003,Carol,19\n")?;

    let loaded = load_students_from_file(&path);

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id(), "S003");
    assert_eq!(loaded[0].name(), "Carol");
    assert_eq!(loaded[0].age(), 19);
    Ok(())
}

#[test]
fn test_load_keeps_record_with_invalid_utf8_name() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("students.csv");
    std::fs::write(&path, b"S001,Al\xffce,20\nS002,Bob,22\n")?;

    let loaded = load_students_from_file(&path);

    let ids: Vec<&str> = loaded.iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec!["S001", "S002"]);
    assert_eq!(loaded[0].name(), "Al\u{FFFD}ce");
    assert_eq!(loaded[0].age(), 20);
    Ok(())
}

#[test]
fn test_comma_in_name_is_lost_on_reload() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("students.csv");
    let students = vec![
        Student::new("S001", "Smith, John", 30)?,
        Student::new("S002", "Bob", 22)?,
    ];

    save_students_to_file(&students, &path);
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "S001,Smith, John,30\nS002,Bob,22\n"
    );

    let loaded = load_students_from_file(&path);
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id(), "S002");
    Ok(())
}

#[test]
fn test_load_handles_crlf_and_blank_lines() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("students.csv");
    std::fs::write(&path, "S001,Alice,20\r\n\r\nS002,Bob,22\r\n")?;

    let loaded = load_students_from_file(&path);
    let ids: Vec<&str> = loaded.iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec!["S001", "S002"]);
    assert_eq!(loaded[1].age(), 22);
    Ok(())
}

#[test]
fn test_load_missing_file_returns_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("does-not-exist.csv");

    assert!(load_students_from_file(&path).is_empty());
    Ok(())
}

#[test]
fn test_save_to_unwritable_path_does_not_fail() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("no-such-dir").join("students.csv");

    save_students_to_file(&roster()?, &path);

    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_storage_port_surfaces_io_errors() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = FlatFileStorage::new(temp_dir.path().join("no-such-dir").join("students.csv"));

    assert!(storage.save(&roster()?).is_err());
    assert!(storage.load().is_err());
    Ok(())
}

#[test]
fn test_storage_port_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage = FlatFileStorage::new(temp_dir.path().join("students.csv"));

    storage.save(&roster()?)?;
    let loaded = storage.load()?;

    assert_eq!(loaded, roster()?);
    assert_eq!(loaded[2].name(), "Carol Ann");
    Ok(())
}

#[test]
fn test_save_overwrites_existing_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("students.csv");
    std::fs::write(&path, "OLD,Old Student,99\nOLD2,Another,98\n")?;

    save_students_to_file(&[Student::new("S001", "Alice", 20)?], &path);

    assert_eq!(std::fs::read_to_string(&path)?, "S001,Alice,20\n");
    Ok(())
}
