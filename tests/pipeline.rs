//! End-to-end pipeline tests over real temporary trees.

mod common;

use std::fs;

use common::{list_files, write_file, TreeFixture};
use moddelta::{Config, DeltaEngine, DeltaError};

#[test]
fn unchanged_files_are_absent_from_the_output() {
    let trees = TreeFixture::new();
    write_file(&trees.baseline, "sprites/sWalk_f0.png", b"AAAA");
    write_file(&trees.modified, "sprites/sWalk_f0.png", b"AAAA");

    let summary = trees.run();

    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.copied(), 0);
    assert!(!trees.output.join("sprites/sWalk_f0.png").exists());
}

#[test]
fn new_files_are_copied_at_their_relative_path() {
    let trees = TreeFixture::new();
    write_file(&trees.modified, "audio/sndNew.wav", b"riff");

    let summary = trees.run();

    assert_eq!(summary.new, 1);
    assert_eq!(
        fs::read(trees.output.join("audio/sndNew.wav")).unwrap(),
        b"riff"
    );
}

#[test]
fn changed_files_overwrite_a_stale_output_entry() {
    let trees = TreeFixture::new();
    write_file(&trees.baseline, "textures/sHero_f0.png", b"before");
    write_file(&trees.modified, "textures/sHero_f0.png", b"after");
    write_file(&trees.output, "textures/sHero_f0.png", b"stale");

    let summary = trees.run();

    assert_eq!(summary.changed, 1);
    assert_eq!(
        fs::read(trees.output.join("textures/sHero_f0.png")).unwrap(),
        b"after"
    );
}

#[test]
fn manifest_is_always_copied_even_when_identical() {
    let trees = TreeFixture::new();
    write_file(&trees.baseline, "data.json", b"{}");
    write_file(&trees.modified, "data.json", b"{}");

    let summary = trees.run();

    assert_eq!(summary.always_copy, 1);
    assert_eq!(summary.unchanged, 0);
    assert!(trees.output.join("data.json").exists());
}

#[test]
fn manifest_name_matches_case_insensitively() {
    let trees = TreeFixture::new();
    write_file(&trees.modified, "DATA.JSON", b"{}");

    let summary = trees.run();

    assert_eq!(summary.always_copy, 1);
    assert!(trees.output.join("DATA.JSON").exists());
}

#[test]
fn frame_variants_resolve_to_one_canonical_key() {
    let trees = TreeFixture::new();
    write_file(&trees.baseline, "textures/sHero_f0.png", b"frame");
    write_file(&trees.baseline, "textures/sHero_f1.png", b"frame");
    write_file(&trees.modified, "textures/sHero_f0.png", b"edited");
    write_file(&trees.modified, "textures/sHero_f1.png", b"frame");
    write_file(&trees.modified, "textures/sHero_f2.png", b"brand new");

    let summary = trees.run();

    // every frame is compared against the single retained baseline path
    assert_eq!(summary.changed, 2);
    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.new, 0);
    assert!(trees.output.join("textures/sHero_f0.png").exists());
    assert!(!trees.output.join("textures/sHero_f1.png").exists());
    assert!(trees.output.join("textures/sHero_f2.png").exists());
}

#[test]
fn comparison_uses_the_lexicographically_smallest_baseline_frame() {
    let trees = TreeFixture::new();
    write_file(&trees.baseline, "x_f0.png", b"first frame");
    write_file(&trees.baseline, "x_f1.png", b"second frame");
    // identical to baseline x_f1, but hashed against retained x_f0
    write_file(&trees.modified, "x_f1.png", b"second frame");

    let summary = trees.run();

    assert_eq!(summary.changed, 1);
    assert_eq!(summary.unchanged, 0);
}

#[test]
fn backgrounds_files_keep_their_literal_names() {
    let trees = TreeFixture::new();
    write_file(&trees.baseline, "textures/backgrounds/bSky_f2.png", b"sky");
    write_file(&trees.baseline, "textures/backgrounds/bCave.png", b"cave");
    write_file(&trees.modified, "textures/backgrounds/bSky_f2.png", b"sky");
    write_file(&trees.modified, "textures/backgrounds/bCave_f0.png", b"cave");

    let summary = trees.run();

    // bSky_f2.png matches itself; bCave_f0.png is a new literal key
    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.new, 1);
    assert!(trees
        .output
        .join("textures/backgrounds/bCave_f0.png")
        .exists());
}

#[test]
fn empty_baseline_and_modified_files_compare_equal() {
    let trees = TreeFixture::new();
    write_file(&trees.baseline, "a.png", b"");
    write_file(&trees.modified, "a.png", b"");

    let summary = trees.run();

    assert_eq!(summary.unchanged, 1);
    assert!(!trees.output.join("a.png").exists());
}

#[test]
fn empty_modified_file_against_nonempty_baseline_is_changed() {
    let trees = TreeFixture::new();
    write_file(&trees.baseline, "b.png", b"data");
    write_file(&trees.modified, "b.png", b"");

    let summary = trees.run();

    assert_eq!(summary.changed, 1);
    assert!(trees.output.join("b.png").exists());
}

#[test]
fn missing_baseline_tree_aborts_the_run() {
    let trees = TreeFixture::new();
    fs::remove_dir_all(&trees.baseline).unwrap();
    write_file(&trees.modified, "a.png", b"x");

    let err = DeltaEngine::new(Config::default(), trees.layout())
        .run()
        .unwrap_err();

    assert!(matches!(err, DeltaError::MissingTree { .. }));
    assert!(!trees.output.exists());
}

#[test]
fn identical_trees_produce_only_the_manifest_twice_over() {
    let trees = TreeFixture::new();
    for root in [&trees.baseline, &trees.modified] {
        write_file(root, "sprites/sIdle_f0.png", b"idle");
        write_file(root, "rooms/rTown.txt", b"town");
        write_file(root, "data.json", b"{}");
    }

    let first = trees.run();
    let second = trees.run();

    assert_eq!(first, second);
    assert_eq!(first.unchanged, 2);
    assert_eq!(first.always_copy, 1);
    assert_eq!(list_files(&trees.output), vec!["data.json".to_string()]);
}

#[test]
fn cleanup_flags_delete_the_input_trees() {
    let trees = TreeFixture::new();
    write_file(&trees.baseline, "a.png", b"a");
    write_file(&trees.modified, "a.png", b"b");

    let mut config = Config::default();
    config.cleanup.delete_baseline = true;
    config.cleanup.delete_modified = true;
    trees.run_with(config);

    assert!(!trees.baseline.exists());
    assert!(!trees.modified.exists());
    assert!(trees.output.join("a.png").exists());
}

#[test]
fn directories_left_empty_by_a_previous_run_are_pruned() {
    let trees = TreeFixture::new();
    write_file(&trees.modified, "audio/sndNew.wav", b"riff");
    fs::create_dir_all(trees.output.join("leftover/nested")).unwrap();

    trees.run();

    assert!(trees.output.join("audio/sndNew.wav").exists());
    assert!(!trees.output.join("leftover").exists());
}

#[test]
fn summary_serializes_for_machine_output() {
    let trees = TreeFixture::new();
    write_file(&trees.modified, "audio/sndNew.wav", b"riff");

    let summary = trees.run();
    let value = serde_json::to_value(summary).unwrap();

    assert_eq!(value["new"], 1);
    assert_eq!(value["failed"], 0);
}
