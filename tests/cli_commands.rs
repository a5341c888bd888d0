// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::str::contains;
use std::process::Stdio;
use tempfile::TempDir;

/// A `packagist` command isolated from any user config file.
fn packagist_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("packagist").unwrap();
    cmd.env("PACKAGIST_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("PACKAGIST_API__BASE_URL")
        .env_remove("PACKAGIST_API__TIMEOUT_SECS");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let config_dir = TempDir::new().unwrap();
    packagist_cmd(&config_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("list"))
        .stdout(contains("search"))
        .stdout(contains("show"))
        .stdout(contains("stats"));
}

#[test]
fn test_list_by_vendor() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/packages/list.json")
        .match_query(Matcher::UrlEncoded("vendor".into(), "acme".into()))
        .with_status(200)
        .with_body(r#"{"packageNames": ["acme/foo"]}"#)
        .create();

    let url = server.url();
    let config_dir = TempDir::new().unwrap();
    packagist_cmd(&config_dir)
        .args(["--base-url", url.as_str(), "--compact", "list", "--vendor", "acme"])
        .assert()
        .success()
        .stdout(r#"{"packageNames":["acme/foo"]}"#.to_string() + "\n");

    m.assert();
}

#[test]
fn test_base_url_from_environment() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/statistics.json")
        .with_status(200)
        .with_body(r#"{"totals": {"downloads": 1000}}"#)
        .create();

    let config_dir = TempDir::new().unwrap();
    packagist_cmd(&config_dir)
        .env("PACKAGIST_API__BASE_URL", server.url())
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("\"downloads\": 1000"));

    m.assert();
}

#[test]
fn test_base_url_from_config_file() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/packages/acme/foo.json")
        .with_status(200)
        .with_body(r#"{"package": {"name": "acme/foo"}}"#)
        .create();

    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        format!("[api]\nbase_url = \"{}\"\n", server.url()),
    )
    .unwrap();

    packagist_cmd(&config_dir)
        .args(["show", "acme/foo"])
        .assert()
        .success()
        .stdout(contains("acme/foo"));

    m.assert();
}

#[test]
fn test_show_without_vendor_separator_fails_before_request() {
    let mut server = Server::new();
    let m = server.mock("GET", Matcher::Any).expect(0).create();

    let url = server.url();
    let config_dir = TempDir::new().unwrap();
    packagist_cmd(&config_dir)
        .args(["--base-url", url.as_str(), "show", "acme"])
        .assert()
        .code(2)
        .stderr(contains("The package name is not specified"));

    m.assert();
}

#[test]
fn test_not_found_exit_code() {
    let mut server = Server::new();
    let _m = server
        .mock("GET", "/p/acme/missing.json")
        .with_status(404)
        .create();

    let url = server.url();
    let config_dir = TempDir::new().unwrap();
    packagist_cmd(&config_dir)
        .args(["--base-url", url.as_str(), "show", "--metadata", "acme/missing"])
        .assert()
        .code(4)
        .stderr(contains("HTTP 404"));
}

#[test]
fn test_search_by_type() {
    let mut server = Server::new();
    let m = server
        .mock("GET", "/search.json")
        .match_query(Matcher::Exact("type=symfony-bundle&page=2".to_string()))
        .with_status(200)
        .with_body(r#"{"results": [], "total": 0}"#)
        .create();

    let url = server.url();
    let config_dir = TempDir::new().unwrap();
    packagist_cmd(&config_dir)
        .args([
            "--base-url",
            url.as_str(),
            "search",
            "--type",
            "symfony-bundle",
            "--page",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("\"total\": 0"));

    m.assert();
}

#[test]
fn test_list_into_closed_pipe_exits_quietly() {
    let names: Vec<String> = (0..200_000).map(|i| format!("vendor{i}/package{i}")).collect();
    let body = serde_json::json!({ "packageNames": names }).to_string();

    let mut server = Server::new();
    let _m = server
        .mock("GET", "/packages/list.json")
        .with_status(200)
        .with_body(body)
        .create();

    let config_dir = TempDir::new().unwrap();
    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("packagist"))
        .env("PACKAGIST_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("PACKAGIST_API__TIMEOUT_SECS")
        .env("PACKAGIST_API__BASE_URL", server.url())
        .arg("list")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Reader goes away before the output is written, like `packagist list | head -1`
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!stderr.contains("panicked"), "stderr: {stderr}");
    assert!(output.status.success(), "status: {:?}", output.status);
}
