use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.ini");
    fs::write(
        &config,
        "BookEntryFile=books.txt\nFreeIdsFile=free_ids.txt\nPageSize=2\n",
    )
    .unwrap();
    (dir, config)
}

fn shelf(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env_remove("SHELF_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn test_add_and_show() {
    let (dir, config) = setup();

    shelf(&config)
        .args(["add", "Dune", "Frank Herbert"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added successfully (id 1)."));

    assert_eq!(
        fs::read_to_string(dir.path().join("books.txt")).unwrap(),
        "1,Dune,Frank Herbert\n"
    );

    shelf(&config)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frank Herbert"));
}

#[test]
fn test_delete_missing_fails() {
    let (_dir, config) = setup();

    shelf(&config)
        .args(["delete", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Book with ID 4 not found"));
}

#[test]
fn test_comma_in_title_is_rejected() {
    let (dir, config) = setup();

    shelf(&config)
        .args(["add", "Eats, Shoots", "Truss"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title cannot contain a comma"));

    assert_eq!(
        fs::read_to_string(dir.path().join("books.txt")).unwrap(),
        ""
    );
}

#[test]
fn test_missing_config_is_fatal() {
    let dir = TempDir::new().unwrap();

    shelf(&dir.path().join("absent.ini"))
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to open config file"));
}

#[test]
fn test_missing_config_key_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.ini");
    fs::write(&config, "BookEntryFile=books.txt\n").unwrap();

    shelf(&config)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("FreeIdsFile"));
}

#[test]
fn test_list_pages_until_user_stops() {
    let (dir, config) = setup();
    fs::write(
        dir.path().join("books.txt"),
        "1,A,a\n2,B,b\n3,C,c\n4,D,d\n5,E,e\n",
    )
    .unwrap();

    shelf(&config)
        .arg("list")
        .write_stdin("yes\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Displaying books (Page 2):"))
        .stdout(predicate::str::contains("Displaying books (Page 3):").not())
        .stdout(predicate::str::contains(
            "You chose to stop. Exiting the display process.",
        ));
}

#[test]
fn test_list_short_last_page_ends_without_prompt() {
    let (dir, config) = setup();
    fs::write(dir.path().join("books.txt"), "1,A,a\n2,B,b\n3,C,c\n").unwrap();

    shelf(&config)
        .arg("list")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Displaying books (Page 2):"))
        .stdout(predicate::str::contains("This is the end of the books."));
}

#[test]
fn test_list_empty_catalog() {
    let (_dir, config) = setup();

    shelf(&config)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No books available in the library."));
}

#[test]
fn test_list_json() {
    let (dir, config) = setup();
    fs::write(dir.path().join("books.txt"), "1,Emma,Jane Austen\n").unwrap();

    let output = shelf(&config).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let books: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(books[0]["id"], 1);
    assert_eq!(books[0]["author"], "Jane Austen");
}

#[test]
fn test_menu_session() {
    let (dir, config) = setup();

    // add two books, delete the first, delete it again, update a ghost,
    // add a third (reuses id 1), then exit
    let session = "1\nDune\nFrank Herbert\n\
                   1\nEmma\nJane Austen\n\
                   4\n1\n\
                   4\n1\n\
                   3\n9\nX\nY\n\
                   1\nBeloved\nToni Morrison\n\
                   5\n";

    shelf(&config)
        .write_stdin(session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Library Management System:"))
        .stdout(predicate::str::contains("Book deleted successfully."))
        .stdout(predicate::str::contains("Error: Book with ID 1 not found"))
        .stdout(predicate::str::contains("Error: Book with ID 9 not found"))
        .stdout(predicate::str::contains("Book added successfully (id 1)."));

    assert_eq!(
        fs::read_to_string(dir.path().join("books.txt")).unwrap(),
        "1,Beloved,Toni Morrison\n2,Emma,Jane Austen\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("free_ids.txt")).unwrap(),
        ""
    );
}

#[test]
fn test_menu_survives_bad_input_and_eof() {
    let (_dir, config) = setup();

    shelf(&config)
        .write_stdin("seven\n8\n4\nabc\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a number."))
        .stdout(predicate::str::contains("Invalid choice. Please try again."));
}

#[test]
fn test_status_lists_free_ids() {
    let (dir, config) = setup();
    fs::write(dir.path().join("books.txt"), "1,A,a\n2,B,b\n").unwrap();

    shelf(&config).args(["rm", "2"]).assert().success();

    shelf(&config)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 book in the catalog"))
        .stdout(predicate::str::contains("Ids waiting for reuse: 2"));
}
