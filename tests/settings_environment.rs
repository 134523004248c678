// Kept in its own test binary: it changes the process environment.
use panterm::settings::{Settings, DEFAULT_INDEX_CAPACITY};
use panterm::keeper::TermKeeper;

#[test]
fn environment_overrides_defaults_and_file() {
    let path = std::env::temp_dir().join(format!("panterm_env_{}.toml", std::process::id()));
    std::fs::write(&path, "string_capacity = 16\nindex_capacity = 8\n").unwrap();

    // only test in this binary, so nothing reads the environment concurrently
    unsafe { std::env::set_var("PANTERM_STRING_CAPACITY", "7") };
    let from_defaults = Settings::load(None).unwrap();
    let from_file = Settings::load(path.to_str()).unwrap();
    unsafe { std::env::remove_var("PANTERM_STRING_CAPACITY") };
    let _ = std::fs::remove_file(&path);

    assert_eq!(from_defaults, Settings { string_capacity: 7, index_capacity: DEFAULT_INDEX_CAPACITY });
    assert_eq!(from_file, Settings { string_capacity: 7, index_capacity: 8 });
    let keeper = TermKeeper::with_settings(&from_file);
    assert_eq!(keeper.create("sized").unwrap().key(), Ok("sized"));
}
