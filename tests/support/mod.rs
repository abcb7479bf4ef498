use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    pub fn write_source(&self, contents: &str) -> PathBuf {
        self.write_file("data.csv", contents)
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write_file(".taskgrid.toml", contents)
    }
}

pub fn sample_csv() -> &'static str {
    "task,year,month,progress,status,comment\n\
     Website,2026,1,25,Planned,Kickoff\n\
     Website,2026,2,60,In progress,\n\
     Backend,2026,1,10,,\n\
     ,2026,3,50,Orphan,\n"
}

pub fn taskgrid_cmd(dir: &TestDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("taskgrid").expect("binary");
    cmd.current_dir(dir.path());
    cmd
}
