//! Unit tests for the zip archive writer.

use super::*;
use rstest::{fixture, rstest};
use std::fs;
use std::io::Read;
use tempfile::TempDir;

struct Scratch {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Scratch {
    fn file(&self, relative: &str, content: &str) -> Utf8PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdir parent");
        }
        fs::write(&path, content).expect("write file");
        path
    }
}

#[fixture]
fn scratch() -> Scratch {
    let dir = TempDir::new().expect("temp dir");
    let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("UTF-8 temp dir");
    Scratch { _dir: dir, root }
}

fn entry_names(path: &Utf8Path) -> Vec<String> {
    let archive = zip::ZipArchive::new(File::open(path).expect("open archive")).expect("zip");
    archive.file_names().map(str::to_owned).collect()
}

fn entry_text(path: &Utf8Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).expect("open archive")).expect("zip");
    let mut entry = archive.by_name(name).expect("entry present");
    let mut text = String::new();
    entry.read_to_string(&mut text).expect("read entry");
    text
}

#[rstest]
fn tree_keeps_relative_paths_and_skips_hidden_names(scratch: Scratch) {
    scratch.file("component/licenses/libfoo.txt", "foo");
    scratch.file("component/readme.txt", "hello");
    scratch.file("component/.gitkeep", "");
    scratch.file("component/licenses/.DS_Store", "junk");
    let destination = scratch.root.join("out.zip");

    let mut writer = ArchiveWriter::create(&destination, Some(MAX_COMPRESSION)).expect("create");
    writer.add_tree(&scratch.root.join("component")).expect("add tree");
    assert_eq!(
        writer.entries(),
        ["licenses/", "licenses/libfoo.txt", "readme.txt"]
    );
    let written = writer.finish().expect("finish");

    assert_eq!(written, destination);
    assert_eq!(
        entry_names(&destination),
        ["licenses/", "licenses/libfoo.txt", "readme.txt"]
    );
    assert_eq!(entry_text(&destination, "licenses/libfoo.txt"), "foo");
}

#[rstest]
fn visible_files_inside_hidden_directories_are_kept(scratch: Scratch) {
    scratch.file("component/themes/dark.json", "{}");
    scratch.file("component/themes/.hidden/skip.txt", "kept");
    scratch.file("component/themes/.hidden/.secret", "dropped");
    let destination = scratch.root.join("out.zip");

    let mut writer = ArchiveWriter::create(&destination, None).expect("create");
    writer.add_tree(&scratch.root.join("component")).expect("add tree");
    writer.finish().expect("finish");

    assert_eq!(
        entry_names(&destination),
        ["themes/", "themes/.hidden/skip.txt", "themes/dark.json"]
    );
    assert_eq!(entry_text(&destination, "themes/.hidden/skip.txt"), "kept");
}

#[rstest]
fn empty_directories_are_written_as_entries(scratch: Scratch) {
    fs::create_dir_all(scratch.root.join("component/empty")).expect("mkdir empty");
    fs::create_dir_all(scratch.root.join("component/.cache")).expect("mkdir hidden");
    let destination = scratch.root.join("out.zip");

    let mut writer = ArchiveWriter::create(&destination, None).expect("create");
    writer.add_tree(&scratch.root.join("component")).expect("add tree");
    writer.finish().expect("finish");

    assert_eq!(entry_names(&destination), ["empty/"]);
}

#[rstest]
fn root_files_use_their_file_name(scratch: Scratch) {
    let license = scratch.file("LICENSE", "MIT");
    let destination = scratch.root.join("out.zip");

    let mut writer = ArchiveWriter::create(&destination, None).expect("create");
    writer.add_file_at_root(&license).expect("add license");
    writer.finish().expect("finish");

    assert_eq!(entry_names(&destination), ["LICENSE"]);
    assert_eq!(entry_text(&destination, "LICENSE"), "MIT");
}

#[rstest]
fn existing_archive_is_replaced(scratch: Scratch) {
    let destination = scratch.file("out.zip", "not a zip at all");
    let changelog = scratch.file("CHANGELOG.md", "# Changelog");

    let mut writer = ArchiveWriter::create(&destination, None).expect("create");
    writer.add_file_at_root(&changelog).expect("add changelog");
    writer.finish().expect("finish");

    assert_eq!(entry_names(&destination), ["CHANGELOG.md"]);
}

#[rstest]
fn abandoned_archive_leaves_nothing_behind(scratch: Scratch) {
    let destination = scratch.root.join("out.zip");

    let mut writer = ArchiveWriter::create(&destination, None).expect("create");
    let err = writer
        .add_file_at_root(&scratch.root.join("missing.dll"))
        .expect_err("missing source");
    assert!(matches!(err, ReleaseError::MissingFile { .. }));
    drop(writer);

    assert!(!destination.exists());
    let leftovers: Vec<_> = fs::read_dir(&scratch.root).expect("list").collect();
    assert!(leftovers.is_empty(), "temporary file must be cleaned up");
}

#[rstest]
fn tree_requires_directory(scratch: Scratch) {
    let mut writer = ArchiveWriter::create(&scratch.root.join("out.zip"), None).expect("create");
    let err = writer
        .add_tree(&scratch.root.join("component"))
        .expect_err("missing tree");
    assert!(matches!(err, ReleaseError::MissingDirectory { .. }));
}

#[rstest]
#[case::flat("a.txt", "a.txt")]
#[case::nested("sub/dir/a.txt", "sub/dir/a.txt")]
#[case::dot_segment("./sub/a.txt", "sub/a.txt")]
fn archive_names_are_slash_separated(#[case] relative: &str, #[case] expected: &str) {
    assert_eq!(archive_name(Utf8Path::new(relative)), expected);
}
