use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{TempDir, tempdir};

struct Sandbox {
    _dir: TempDir,
    config_path: PathBuf,
    session_dir: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempdir().expect("failed to create temp dir");
        let config_path = dir.path().join("config").join("config.yaml");
        let session_dir = dir.path().join("session");
        Self {
            _dir: dir,
            config_path,
            session_dir,
        }
    }

    fn config_dir(&self) -> &Path {
        self.config_path.parent().expect("config has a parent")
    }

    fn durable_file(&self) -> PathBuf {
        self.config_dir().join("credentials.yaml")
    }

    fn session_file(&self) -> PathBuf {
        self.session_dir.join("session.yaml")
    }

    fn write_session(&self, token: &str) {
        fs::create_dir_all(&self.session_dir).expect("failed to create session dir");
        fs::write(self.session_file(), format!("jwt_token: {token}\n"))
            .expect("failed to write session");
    }

    fn medtrack(&self, api_url: &str) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("medtrack"));
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--api-url")
            .arg(api_url)
            .env("MEDTRACK_SESSION_DIR", &self.session_dir)
            .env("NO_COLOR", "1")
            .env_remove("MEDTRACK_CONFIG")
            .env_remove("MEDTRACK_API_URL")
            .env_remove("MEDTRACK_FORMAT")
            .env_remove("MEDTRACK_PASSWORD");
        cmd
    }
}

/// Nothing listens here; commands that must not touch the network use it
const UNREACHABLE: &str = "http://127.0.0.1:9";

#[test]
fn status_reports_not_signed_in() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();

    let assert = sandbox.medtrack(UNREACHABLE).arg("status").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Not signed in"));
    assert!(stdout.contains(&sandbox.config_path.to_string_lossy().to_string()));
    assert!(stdout.contains(UNREACHABLE));

    Ok(())
}

#[test]
fn login_then_expired_session_redirects_to_login() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    let mut server = mockito::Server::new();

    let login = server
        .mock("POST", "/api/auth/login")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "email": "ann@example.com",
            "password": "secret1"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"jwt-e2e","email":"ann@example.com"}"#)
        .create();

    sandbox
        .medtrack(&server.url())
        .args(["login", "ann@example.com", "--password", "secret1", "--no-remember"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as ann@example.com"));

    login.assert();
    let stored = fs::read_to_string(sandbox.session_file())?;
    assert!(stored.contains("jwt-e2e"));
    assert!(!sandbox.durable_file().exists());

    let profiles = server
        .mock("GET", "/api/profiles")
        .match_header("authorization", "Bearer jwt-e2e")
        .with_status(403)
        .with_body(r#"{"message":"Token expired"}"#)
        .create();

    sandbox
        .medtrack(&server.url())
        .args(["profile", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "/login?msg=session_expired&from=%2Fapp%2Fprofiles",
        ));

    profiles.assert();
    assert!(!sandbox.session_file().exists());

    sandbox
        .medtrack(&server.url())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));

    Ok(())
}

#[test]
fn failed_login_prints_server_message() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    let mut server = mockito::Server::new();

    let _login = server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body(r#"{"message":"Invalid email or password"}"#)
        .create();

    sandbox
        .medtrack(&server.url())
        .args(["login", "ann@example.com", "--password", "wrong-pass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email or password"))
        .stderr(predicate::str::contains("session_expired").not());

    assert!(!sandbox.session_file().exists());
    assert!(!sandbox.durable_file().exists());

    Ok(())
}

#[test]
fn protected_command_requires_sign_in() {
    let sandbox = Sandbox::new();

    sandbox
        .medtrack(UNREACHABLE)
        .args(["medicine", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please sign in to continue"));
}

#[test]
fn invalid_medicine_is_rejected_before_any_request() {
    let sandbox = Sandbox::new();
    sandbox.write_session("jwt-local");

    sandbox
        .medtrack(UNREACHABLE)
        .args([
            "medicine",
            "create",
            "--profile",
            "p1",
            "--name",
            "Ibuprofen",
            "--quantity",
            "0",
            "--expiry",
            "2030-01-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quantity"));
}

#[test]
fn theme_toggle_persists_to_config() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();

    sandbox
        .medtrack(UNREACHABLE)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));

    let saved = fs::read_to_string(&sandbox.config_path)?;
    assert!(saved.contains("theme: dark"));

    sandbox
        .medtrack(UNREACHABLE)
        .args(["theme", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));

    Ok(())
}

#[test]
fn logout_clears_stored_session() {
    let sandbox = Sandbox::new();
    sandbox.write_session("jwt-local");

    sandbox
        .medtrack(UNREACHABLE)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));

    assert!(!sandbox.session_file().exists());

    sandbox
        .medtrack(UNREACHABLE)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn profile_list_json_uses_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox.write_session("jwt-local");
    let mut server = mockito::Server::new();

    let _profiles = server
        .mock("GET", "/api/profiles")
        .match_header("authorization", "Bearer jwt-local")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"p1","userId":"u1","name":"Ann"},{"id":"p2","userId":"u1","name":"Ben"}]"#)
        .create();

    let assert = sandbox
        .medtrack(&server.url())
        .args(["--format", "json", "profile", "list"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(json["data"].as_array().map(Vec::len), Some(2));
    assert!(json["meta"]["timestamp"].is_string());

    Ok(())
}

#[test]
fn server_errors_are_reported_once() -> Result<(), Box<dyn std::error::Error>> {
    let sandbox = Sandbox::new();
    sandbox.write_session("jwt-local");
    let mut server = mockito::Server::new();

    let _catalog = server
        .mock("GET", "/api/global-medicines")
        .with_status(500)
        .with_body(r#"{"error":"Catalog unavailable"}"#)
        .create();

    let assert = sandbox
        .medtrack(&server.url())
        .args(["catalog", "list"])
        .assert()
        .failure();

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr);
    assert_eq!(stderr.matches("Catalog unavailable").count(), 1);
    // Non-auth failures leave the credential alone
    assert!(sandbox.session_file().exists());

    Ok(())
}
