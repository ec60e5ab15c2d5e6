#![allow(dead_code)]

use flate2::read::GzDecoder;
use std::io::Read;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub const SAMPLE_PAGE: &str = ".TH MODEM-MANAGER-GUI 1 \"2024\"\n\
.SH NAME\n\
modem-manager-gui \\- grafische Oberfläche für ModemManager\n\
.SH BESCHREIBUNG\n\
Dieses Programm steuert Modems über ModemManager.\n";

/// 假的 po4a-translate：把 -p 的內容複製到 -l，參數記錄在 args.log
pub fn fake_translator(dir: &Path, exit_code: i32) -> PathBuf {
    let script = format!(
        r#"#!/bin/sh
echo "$@" > "{log}"
while [ $# -gt 0 ]; do
    case "$1" in
        -p) src="$2"; shift 2 ;;
        -l) out="$2"; shift 2 ;;
        *) shift ;;
    esac
done
cat "$src" > "$out"
exit {exit_code}
"#,
        log = dir.join("args.log").display(),
        exit_code = exit_code
    );

    let path = dir.join("po4a-translate");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

pub fn recorded_args(dir: &Path) -> Vec<String> {
    std::fs::read_to_string(dir.join("args.log"))
        .unwrap()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn gunzip(path: &Path) -> String {
    let mut out = String::new();
    GzDecoder::new(std::fs::File::open(path).unwrap())
        .read_to_string(&mut out)
        .unwrap();
    out
}

pub fn entries(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect()
}
