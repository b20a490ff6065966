use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn variables_lists_every_placeholder() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dtask"));
    cmd.arg("variables");
    let mut assert = cmd.assert().success();
    for name in ["date", "dateWithIcon", "weekday", "yearProgress", "monthProgress", "time"] {
        assert = assert.stdout(predicate::str::contains(format!("{{{{{name}}}}}")));
    }
}
