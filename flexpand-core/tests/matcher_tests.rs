// flexpand-core/tests/matcher_tests.rs
//! Integration tests for output derivation, classification and the
//! confirmation gate.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};
use test_log::test;

use flexpand_core::{
    AlwaysDecline, Classification, FlexpandError, Matcher, NamingRule, OutputSpec,
};

/// Two inputs in `root/src`, an empty `root/out`.
fn fixture() -> Result<(TempDir, Vec<PathBuf>)> {
    let dir = tempdir()?;
    let src = dir.path().join("src");
    fs::create_dir(&src)?;
    fs::create_dir(dir.path().join("out"))?;
    let inputs = vec![src.join("one.csv"), src.join("two.csv")];
    for input in &inputs {
        fs::write(input, "data")?;
    }
    Ok((dir, inputs))
}

#[test]
fn classifies_new_overwrite_and_recurrent() -> Result<()> {
    let (dir, inputs) = fixture()?;
    let other = dir.path().join("out").join("other.csv");
    fs::write(&other, "data")?;

    let outputs = vec![
        dir.path().join("out").join("fresh.csv"),
        other.clone(),
    ];
    let pairs = Matcher::default().classify(&inputs, &outputs);
    assert_eq!(pairs[0].classification, Classification::New);
    assert_eq!(pairs[1].classification, Classification::Overwrite);

    // Same file spelled differently is still the source itself.
    let roundabout = dir.path().join("out").join("..").join("src").join("one.csv");
    let pairs = Matcher::default().classify(&inputs[..1], &[roundabout]);
    assert_eq!(pairs[0].classification, Classification::Recurrent);
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlinked_output_is_recurrent() -> Result<()> {
    let (dir, inputs) = fixture()?;
    let link = dir.path().join("out").join("alias.csv");
    std::os::unix::fs::symlink(&inputs[0], &link)?;

    let pairs = Matcher::default().classify(&inputs[..1], &[link]);
    assert_eq!(pairs[0].classification, Classification::Recurrent);
    Ok(())
}

#[test]
fn directory_output_with_depth_naming() -> Result<()> {
    let (dir, inputs) = fixture()?;
    let out = dir.path().join("out");
    let naming = NamingRule {
        depth: -2,
        prefix: Some("p".to_string()),
        ..NamingRule::default()
    };

    let outputs = Matcher::default().derive_outputs(
        &inputs[..1],
        &OutputSpec::DirectoryPath(out.clone()),
        &naming,
    )?;
    assert_eq!(outputs, vec![out.join("p_src.csv")]);
    Ok(())
}

#[test]
fn new_pairs_are_always_accepted() -> Result<()> {
    let (dir, inputs) = fixture()?;
    let plan = Matcher::default().plan(
        &inputs,
        &OutputSpec::DirectoryPath(dir.path().join("out")),
        &NamingRule::default(),
        false,
        &mut AlwaysDecline,
    )?;
    assert_eq!(plan.pairs.len(), 2);
    assert_eq!(plan.counts.new, 2);
    assert!(plan.pairs.iter().all(|p| p.classification == Classification::New));
    Ok(())
}

#[test]
fn overwrite_requires_force() -> Result<()> {
    let (dir, inputs) = fixture()?;
    let out = dir.path().join("out");
    fs::write(out.join("one.csv"), "existing")?;
    let spec = OutputSpec::DirectoryPath(out.clone());

    let plan = Matcher::default().plan(&inputs, &spec, &NamingRule::default(), false, &mut AlwaysDecline)?;
    assert_eq!(plan.pairs.len(), 1);
    assert_eq!(plan.pairs[0].output, out.join("two.csv"));
    assert_eq!(plan.counts.overwrite, 1);

    let plan = Matcher::default().plan(&inputs, &spec, &NamingRule::default(), true, &mut AlwaysDecline)?;
    assert_eq!(plan.pairs.len(), 2);
    assert_eq!(plan.pairs[0].output, out.join("one.csv"));
    assert_eq!(plan.pairs[0].classification, Classification::Overwrite);
    Ok(())
}

#[test]
fn recurrent_pairs_need_force_and_confirmation() -> Result<()> {
    let (_dir, inputs) = fixture()?;
    let mut prompts = Vec::new();

    // Without force the gate is never consulted.
    let plan = Matcher::default().plan(
        &inputs,
        &OutputSpec::SameDirectory,
        &NamingRule::default(),
        false,
        &mut |p: &str| {
            prompts.push(p.to_string());
            true
        },
    )?;
    assert!(plan.pairs.is_empty());
    assert_eq!(plan.counts.recurrent, 2);
    assert!(prompts.is_empty());

    // Forced but declined.
    let plan = Matcher::default().plan(
        &inputs,
        &OutputSpec::SameDirectory,
        &NamingRule::default(),
        true,
        &mut AlwaysDecline,
    )?;
    assert!(plan.pairs.is_empty());
    assert!(!plan.recurrent_confirmed);

    // Forced and confirmed, asked exactly once.
    let plan = Matcher::default().plan(
        &inputs,
        &OutputSpec::SameDirectory,
        &NamingRule::default(),
        true,
        &mut |p: &str| {
            prompts.push(p.to_string());
            true
        },
    )?;
    assert_eq!(plan.pairs.len(), 2);
    assert!(plan.recurrent_confirmed);
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("overwrite 2 source file(s)"));
    Ok(())
}

#[test]
fn gate_is_not_consulted_without_recurrent_pairs() -> Result<()> {
    let (dir, inputs) = fixture()?;
    let mut asked = false;
    Matcher::default().plan(
        &inputs,
        &OutputSpec::DirectoryPath(dir.path().join("out")),
        &NamingRule::default(),
        true,
        &mut |_: &str| {
            asked = true;
            true
        },
    )?;
    assert!(!asked);
    Ok(())
}

#[test]
fn explicit_list_length_mismatch_is_fatal() -> Result<()> {
    let (dir, inputs) = fixture()?;
    let spec = OutputSpec::ExplicitList(vec![dir.path().join("only-one.csv")]);
    let mut asked = false;

    let err = Matcher::default()
        .plan(&inputs, &spec, &NamingRule::default(), true, &mut |_: &str| {
            asked = true;
            true
        })
        .unwrap_err();
    assert!(matches!(err, FlexpandError::LengthMismatch { inputs: 2, outputs: 1 }));
    assert!(!asked);
    Ok(())
}

#[test]
fn output_list_file_is_positional() -> Result<()> {
    let (dir, inputs) = fixture()?;
    let first = dir.path().join("out").join("first.json");
    let second = dir.path().join("out").join("second.json");
    let list = dir.path().join("outputs.txt");
    fs::write(
        &list,
        format!("# targets\n{}  # one\n{}\n", first.display(), second.display()),
    )?;

    let plan = Matcher::default().plan(
        &inputs,
        &OutputSpec::ListFilePath(list),
        &NamingRule::default(),
        false,
        &mut AlwaysDecline,
    )?;
    let outputs: Vec<_> = plan.pairs.iter().map(|p| p.output.clone()).collect();
    assert_eq!(outputs, vec![first, second]);
    Ok(())
}

#[test]
fn output_list_file_length_mismatch_is_fatal() -> Result<()> {
    let (dir, inputs) = fixture()?;
    let list = dir.path().join("outputs.txt");
    fs::write(&list, "only-one.json\n")?;

    let err = Matcher::default()
        .derive_outputs(&inputs, &OutputSpec::ListFilePath(list), &NamingRule::default())
        .unwrap_err();
    assert!(matches!(err, FlexpandError::LengthMismatch { .. }));
    Ok(())
}

#[test]
fn missing_output_list_file_is_fatal() -> Result<()> {
    let (dir, inputs) = fixture()?;
    let err = Matcher::default()
        .derive_outputs(
            &inputs,
            &OutputSpec::ListFilePath(dir.path().join("absent.txt")),
            &NamingRule::default(),
        )
        .unwrap_err();
    assert!(matches!(err, FlexpandError::ListFileRead { .. }));
    Ok(())
}
