use std::fs;

use sssp::Config;
use sssp::SsspError;
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> Config {
    Config::new(dir.path().join("input.txt"), dir.path().join("output.txt"))
}

#[test]
fn writes_distance_table() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(
        &config.input,
        "5\t6\t0\n0\t1\t4\n0\t2\t1\n2\t1\t2\n1\t3\t1\n2\t3\t5\n3\t4\t3\n",
    )
    .unwrap();

    let paths = sssp::run(&config).unwrap();
    assert_eq!(paths.distances(), &[0, 3, 1, 4, 7]);

    let written = fs::read_to_string(&config.output).unwrap();
    assert_eq!(written, "0\t0\tNIL\n1\t3\t2\n2\t1\t0\n3\t4\t1\n4\t7\t3\n");
}

#[test]
fn unreachable_vertices_are_marked() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(&config.input, "4\t2\t1\n1\t2\t6\n3\t1\t1\n").unwrap();

    sssp::run(&config).unwrap();

    let written = fs::read_to_string(&config.output).unwrap();
    assert_eq!(
        written,
        "0\tINFINITY\tNIL\n1\t0\tNIL\n2\t6\t1\n3\tINFINITY\tNIL\n"
    );
}

#[test]
fn missing_input_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let err = sssp::run(&config).unwrap_err();
    assert!(matches!(err, SsspError::Io(_)), "{err}");
    assert!(!config.output.exists());
}

#[test]
fn unwritable_output_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir).with_output(dir.path().join("missing").join("output.txt"));
    fs::write(&config.input, "1\t0\t0\n").unwrap();

    let err = sssp::run(&config).unwrap_err();
    assert!(matches!(err, SsspError::Io(_)), "{err}");
}

#[test]
fn bad_input_leaves_no_output() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    for text in ["3\t2\t0\n0\t1\t1\n", "2\t0\t5\n", "2\t1\t0\n0\t9\t1\n"] {
        fs::write(&config.input, text).unwrap();
        assert!(sssp::run(&config).is_err(), "input={text:?}");
        assert!(!config.output.exists(), "input={text:?}");
    }
}

#[test]
fn failed_run_removes_previous_output() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(&config.input, "1\t0\t0\n").unwrap();
    sssp::run(&config).unwrap();
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "0\t0\tNIL\n");

    fs::write(&config.input, "3\t2\t0\n0\t1\t1\n").unwrap();
    assert!(sssp::run(&config).is_err());
    assert!(!config.output.exists());

    fs::write(&config.input, "1\t0\t0\n").unwrap();
    sssp::run(&config).unwrap();
    fs::remove_file(&config.input).unwrap();
    assert!(matches!(sssp::run(&config), Err(SsspError::Io(_))));
    assert!(!config.output.exists());
}
