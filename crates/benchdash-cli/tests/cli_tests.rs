// Dweve Benchdash - HPC Benchmark Dashboard Generator
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for the benchdash CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const SAMPLE: &str = r#"
{
    // Example dashboard configuration
    "metadata": { "title": "HPC Benchmarks" },
    "component_map": {
        "component_order": ["machines", "applications", "use_cases"],
        "mapping": {
            "m1": {
                "app1": { "case1": {}, "case2": {} },
                "app2": { "case1": {} }
            },
            "m2": { "app1": { "case2": {} } }
        }
    },
    "repositories": {
        "machines": { "display_name": "Machines", "description": "HPC systems" },
        "applications": { "display_name": "Applications" },
        "use_cases": { "display_name": "Use cases" }
    },
    "components": {
        "machines": {
            "m1": { "display_name": "Machine One" },
            "m2": { "display_name": "Machine Two" }
        },
        "applications": {
            "app1": { "display_name": "App One" },
            "app2": { "display_name": "App Two" }
        },
        "use_cases": {
            "case1": { "display_name": "Case One" },
            "case2": { "display_name": "Case Two" }
        }
    },
    "views": {
        "machines": { "applications": "use_cases" },
        "applications": { "machines": "use_cases" }
    }
}
"#;

fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("dashboard.json");
    fs::write(&path, SAMPLE).unwrap();
    path
}

fn benchdash() -> Command {
    Command::cargo_bin("benchdash").unwrap()
}

#[test]
fn test_check_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    benchdash()
        .args(["check", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: HPC Benchmarks"))
        .stdout(predicate::str::contains(
            "Levels: machines > applications > use_cases",
        ))
        .stdout(predicate::str::contains("machines: 2 entities"));
}

#[test]
fn test_check_rejects_unknown_mapping_entity() {
    let dir = tempfile::tempdir().unwrap();
    // Drop the m2 definition; the mapping still references it.
    let broken = SAMPLE.replace(
        r#""m2": { "display_name": "Machine Two" }"#,
        r#""m9": { "display_name": "Machine Nine" }"#,
    );
    let config = dir.path().join("dashboard.json");
    fs::write(&config, broken).unwrap();

    benchdash()
        .args(["check", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("m2"));
}

#[test]
fn test_check_missing_file() {
    benchdash()
        .args(["check", "--config", "/no/such/dashboard.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_render_writes_page_tree() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let out = dir.path().join("docs");

    benchdash()
        .args(["render", "--config"])
        .arg(&config)
        .args(["--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pages:"));

    assert!(out.join("index.adoc").is_file());
    assert!(out.join("machines/index.adoc").is_file());
    assert!(out.join("machines/m1/index.adoc").is_file());
    assert!(out.join("machines/m1/app1/case1/index.adoc").is_file());
    assert!(out.join("applications/app1/m2/case2/index.adoc").is_file());

    let home = fs::read_to_string(out.join("index.adoc")).unwrap();
    assert!(home.starts_with("= HPC Benchmarks"));

    let page = fs::read_to_string(out.join("machines/m1/app1/index.adoc")).unwrap();
    assert!(page.contains(":parent-catalogs: machines-m1"));
    assert!(page.contains(":page-self-id: machines-m1-app1"));
}

#[test]
fn test_render_with_template_override() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let templates = dir.path().join("templates");
    fs::create_dir(&templates).unwrap();
    fs::write(templates.join("index.adoc.hbs"), "OVERRIDE {{self_id}}\n").unwrap();
    let out = dir.path().join("docs");

    benchdash()
        .args(["render", "--config"])
        .arg(&config)
        .args(["--output"])
        .arg(&out)
        .args(["--templates"])
        .arg(&templates)
        .assert()
        .success();

    let page = fs::read_to_string(out.join("machines/m1/index.adoc")).unwrap();
    assert_eq!(page, "OVERRIDE machines-m1\n");
}

#[test]
fn test_render_fails_on_unresolved_entity() {
    let dir = tempfile::tempdir().unwrap();
    // Views reference a level missing from the canonical order.
    let broken = SAMPLE.replace(
        r#""machines": { "applications": "use_cases" }"#,
        r#""machines": { "applications": "queues" }"#,
    );
    let config = dir.path().join("dashboard.json");
    fs::write(&config, broken).unwrap();
    let out = dir.path().join("docs");

    benchdash()
        .args(["render", "--config"])
        .arg(&config)
        .args(["--output"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("queues"));
}

#[test]
fn test_tree_prints_hierarchy() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    benchdash()
        .args(["tree", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Machines (machines)"))
        .stdout(predicate::str::contains("Machine One (m1)"))
        .stdout(predicate::str::contains("[applications-use_cases]"));
}

#[test]
fn test_completion_bash() {
    benchdash()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("benchdash"));
}

#[test]
fn test_completion_unsupported_shell() {
    benchdash()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported shell"));
}
