//! Shared fixtures: a throwaway project and shell stand-ins for the external tools.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use build_release::release::{Arch, HostEnvironment, Platform, ReleaseRequest, TargetOs};
use tempfile::TempDir;

pub const FIXTURE_MANIFEST: &str = include_str!("../fixtures/project/Cargo.toml");

const GIT: &str = r#"#!/bin/sh
case "$1" in
  clone)
    mkdir -p "$4" && cp -R "$3"/. "$4"/
    ;;
  -C)
    if [ "$6" = "missing" ]; then
      echo "error: pathspec 'missing' did not match any file(s) known to git" >&2
      exit 1
    fi
    echo "$6" > "$2/.checked-out"
    ;;
esac
"#;

const CARGO: &str = r#"#!/bin/sh
out="$CARGO_TARGET_DIR/${CARGO_BUILD_TARGET:+$CARGO_BUILD_TARGET/}release"
mkdir -p "$out"
for bin in demo demo-helper; do
  printf '%s %s\n' "$RELEASE_VERSION" "$RELEASE_COMMIT" > "$out/$bin"
done
"#;

// tar -czf <archive> -C <dir> .
const TAR: &str = r#"#!/bin/sh
(cd "$4" && find . -type f | sort) > "$2"
"#;

// dpkg-deb --root-owner-group --build <tree> <deb>
const DPKG_DEB: &str = r#"#!/bin/sh
cat "$3/DEBIAN/control" > "$4"
"#;

const RPMBUILD: &str = r#"#!/bin/sh
dir=
name=
spec=
while [ $# -gt 0 ]; do
  case "$1" in
    --define)
      case "$2" in
        "_rpmdir "*) dir="${2#_rpmdir }" ;;
        "_build_name_fmt "*) name="${2#_build_name_fmt }" ;;
      esac
      shift 2
      ;;
    --target) shift 2 ;;
    *) spec="$1"; shift ;;
  esac
done
mkdir -p "$dir" && cat "$spec" > "$dir/$name"
"#;

/// Which fake tools exist and which of them fail.
#[derive(Default)]
pub struct FakeTools {
    pub missing: Vec<&'static str>,
    pub failing: Vec<&'static str>,
}

impl FakeTools {
    pub fn missing(tool: &'static str) -> Self {
        Self {
            missing: vec![tool],
            ..Default::default()
        }
    }

    pub fn failing(tool: &'static str) -> Self {
        Self {
            failing: vec![tool],
            ..Default::default()
        }
    }
}

/// A scratch area with a project, fake tools and separate work, output and temp directories.
pub struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    pub fn new(tools: FakeTools) -> Self {
        let root = tempfile::tempdir().unwrap();
        for dir in ["bin", "project", "work", "out", "tmp"] {
            fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        fs::write(root.path().join("project/Cargo.toml"), FIXTURE_MANIFEST).unwrap();

        let sandbox = Self { root };
        for (name, script) in [
            ("git", GIT),
            ("cargo", CARGO),
            ("tar", TAR),
            ("dpkg-deb", DPKG_DEB),
            ("rpmbuild", RPMBUILD),
        ] {
            if tools.missing.contains(&name) {
                continue;
            }
            if tools.failing.contains(&name) {
                let failure = format!("#!/bin/sh\necho \"{name} exploded\" >&2\nexit 1\n");
                sandbox.install_tool(name, &failure);
            } else {
                sandbox.install_tool(name, script);
            }
        }
        sandbox
    }

    fn install_tool(&self, name: &str, script: &str) {
        let path = self.bin_dir().join(name);
        fs::write(&path, script).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    pub fn project(&self) -> PathBuf {
        self.root.path().join("project")
    }

    pub fn work_dir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    pub fn out_dir(&self) -> PathBuf {
        self.root.path().join("out")
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.root.path().join("tmp")
    }

    pub fn host(&self, os: TargetOs) -> HostEnvironment {
        HostEnvironment {
            platform: Platform::new(os, Arch::X86_64),
            search_path: Some(self.bin_dir().into_os_string()),
            working_dir: Some(self.work_dir()),
            temp_dir: Some(self.temp_dir()),
        }
    }

    /// Request for version 1.2.3 at abc123, writing to the sandbox output directory.
    pub fn request(&self) -> ReleaseRequest {
        let mut request = ReleaseRequest::new("1.2.3", "abc123");
        request.source = self.project().display().to_string();
        request.output_dir = Some(self.out_dir());
        request
    }
}

/// Sorted file names directly inside `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
