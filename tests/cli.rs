use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const STATEMENT: &str = "\
Banco Ejemplo S.A.
Cuenta: ES00 0000 0000 0000 0000 0000
Titular: TEST
Periodo: 01/03/2024 - 31/03/2024
Oper.;F. Valor;F. Operacion;Concepto;Movimiento;Importe;Divisa;Saldo
01;15/03/2024;15/03/2024;SUPERMART MADRID;COMPRA TARJETA;-45,30;;1234,56
02;16/03/2024;16/03/2024;NOMINA ACME SL;TRANSFERENCIA;2000,00;;3234,56
03;16/03/2024;;XYZZY LTD;;-5,00;;3229,56
04;17/03/2024;;BROKEN ROW;;cinco;;1
";

struct Env {
    home: tempfile::TempDir,
    input: PathBuf,
    store: PathBuf,
}

fn setup() -> Env {
    let home = tempfile::tempdir().unwrap();
    let input = home.path().join("statements");
    std::fs::create_dir_all(&input).unwrap();
    let store = home.path().join("transactions.json");
    Env { home, input, store }
}

fn extracto(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("extracto").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn import(env: &Env) -> assert_cmd::assert::Assert {
    extracto(env.home.path())
        .args(["import", "--input-dir"])
        .arg(&env.input)
        .arg("--store")
        .arg(&env.store)
        .assert()
}

fn stored(env: &Env) -> Vec<serde_json::Value> {
    serde_json::from_str(&std::fs::read_to_string(&env.store).unwrap()).unwrap()
}

#[test]
fn import_builds_categorized_store() {
    let env = setup();
    std::fs::write(env.input.join("2024-03.csv"), STATEMENT).unwrap();

    import(&env)
        .success()
        .stdout(predicate::str::contains("3 added"))
        .stdout(predicate::str::contains("2 categorized, 1 pending"))
        .stdout(predicate::str::contains("line 9"));

    let txns = stored(&env);
    assert_eq!(txns.len(), 3);
    let shop = txns
        .iter()
        .find(|t| t["description"] == "SUPERMART MADRID")
        .unwrap();
    assert_eq!(shop["date"], "2024-03-15");
    assert_eq!(shop["amount"], 45.3);
    assert_eq!(shop["type"], "expense");
    assert_eq!(shop["category"], "groceries");
    assert!(shop.get("categoryOverride").is_none());
    assert!(shop["id"].as_str().unwrap().starts_with("tx_"));
}

#[test]
fn reimport_is_a_noop() {
    let env = setup();
    std::fs::write(env.input.join("2024-03.csv"), STATEMENT).unwrap();
    import(&env).success();
    let first = std::fs::read_to_string(&env.store).unwrap();

    import(&env)
        .success()
        .stdout(predicate::str::contains("0 added, 3 already in store"));
    assert_eq!(std::fs::read_to_string(&env.store).unwrap(), first);
}

#[test]
fn empty_input_dir_fails_without_writing() {
    let env = setup();
    import(&env)
        .failure()
        .stderr(predicate::str::contains("Missing input"));
    assert!(!env.store.exists());
}

#[test]
fn edit_override_survives_import() {
    let env = setup();
    std::fs::write(env.input.join("2024-03.csv"), STATEMENT).unwrap();
    import(&env).success();
    let id = stored(&env)
        .iter()
        .find(|t| t["description"] == "SUPERMART MADRID")
        .and_then(|t| t["id"].as_str().map(str::to_string))
        .unwrap();

    extracto(env.home.path())
        .args(["edit", &id, "--category", "leisure", "--description", "Picnic", "--store"])
        .arg(&env.store)
        .assert()
        .success()
        .stdout(predicate::str::contains("Picnic"));

    import(&env).success();
    let txns = stored(&env);
    let shop = txns.iter().find(|t| t["id"] == id.as_str()).unwrap();
    assert_eq!(shop["category"], "leisure");
    assert_eq!(shop["categoryOverride"], "leisure");
    assert_eq!(shop["descriptionOverride"], "Picnic");
}

#[test]
fn edit_rejects_unknown_category() {
    let env = setup();
    std::fs::write(env.input.join("2024-03.csv"), STATEMENT).unwrap();
    import(&env).success();
    let id = stored(&env)[0]["id"].as_str().unwrap().to_string();

    extracto(env.home.path())
        .args(["edit", &id, "--category", "gadgets", "--store"])
        .arg(&env.store)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: gadgets"));
}

#[test]
fn reports_read_the_store() {
    let env = setup();
    std::fs::write(env.input.join("2024-03.csv"), STATEMENT).unwrap();
    import(&env).success();

    extracto(env.home.path())
        .args(["report", "pending", "--store"])
        .arg(&env.store)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 3 transactions pending"))
        .stdout(predicate::str::contains("XYZZY LTD"));

    extracto(env.home.path())
        .args(["report", "invalid", "--store"])
        .arg(&env.store)
        .assert()
        .success()
        .stdout(predicate::str::contains("All categories are valid."));
}

#[test]
fn categorize_without_store_fails() {
    let env = setup();
    extracto(env.home.path())
        .args(["categorize", "--store"])
        .arg(&env.store)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no store"));
}
