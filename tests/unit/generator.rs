use super::*;

fn config(seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        generate_videos: false,
        seed: Some(seed),
        font_family: None,
        ..GeneratorConfig::default()
    }
}

fn generator(seed: u64) -> TaskGenerator {
    TaskGenerator::with_fonts(config(seed), FontBook::empty()).unwrap()
}

#[test]
fn pair_carries_both_scenes_and_a_prompt() {
    let g = generator(3);
    let pair = g.generate_task_pair("shape_rotation_0000").unwrap();

    assert_eq!(pair.task_id, "shape_rotation_0000");
    assert_eq!(pair.domain, "shape_rotation");
    assert_eq!((pair.first_image.width, pair.first_image.height), (400, 400));
    assert_ne!(pair.first_image, pair.final_image);
    assert!(crate::prompts::all_prompts("rotation").contains(&pair.prompt.as_str()));
    assert_eq!(pair.ground_truth_video, None);
    assert_eq!(pair.task.shape_b(), pair.task.shape_a());
    assert_eq!(pair.task.shape_d(), pair.task.shape_c());
}

#[test]
fn dataset_ids_are_sequential_and_keys_unique() {
    let g = generator(11);
    let pairs = g.generate_dataset(5, false).unwrap();
    let ids: Vec<&str> = pairs.iter().map(|p| p.task_id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "shape_rotation_0000",
            "shape_rotation_0001",
            "shape_rotation_0002",
            "shape_rotation_0003",
            "shape_rotation_0004"
        ]
    );
    let keys: std::collections::HashSet<_> = pairs.iter().map(|p| p.task.key()).collect();
    assert_eq!(keys.len(), 5);
    assert_eq!(g.sampler().emitted(), 5);
}

#[test]
fn parallel_matches_sequential_for_a_seed() {
    let seq = generator(42).generate_dataset(4, false).unwrap();
    let par = generator(42).generate_dataset(4, true).unwrap();
    for (a, b) in seq.iter().zip(&par) {
        assert_eq!(a.task_id, b.task_id);
        assert_eq!(a.task, b.task);
        assert_eq!(a.prompt, b.prompt);
        assert_eq!(a.final_image, b.final_image);
    }
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = config(1);
    cfg.rotation_frames = 0;
    assert!(TaskGenerator::with_fonts(cfg, FontBook::empty()).is_err());
}

#[test]
fn write_to_lays_out_the_entry() {
    let g = generator(5);
    let mut pair = g.generate_task_pair("shape_rotation_0007").unwrap();
    let dir = std::env::temp_dir()
        .join(format!("analogon_write_{}", std::process::id()))
        .join(&pair.task_id);
    pair.write_to(&dir).unwrap();

    for f in ["first_frame.png", "final_frame.png", "prompt.txt", "task.json"] {
        assert!(dir.join(f).is_file(), "{f} missing");
    }
    assert!(!dir.join("ground_truth.mp4").exists());

    let meta: serde_json::Value =
        serde_json::from_slice(&std::fs::read(dir.join("task.json")).unwrap()).unwrap();
    assert_eq!(meta["task_id"], "shape_rotation_0007");
    assert_eq!(meta["has_video"], false);
    assert_eq!(meta["task"]["transformation_type"], "rotation");

    let png = image::open(dir.join("first_frame.png")).unwrap();
    assert_eq!((png.width(), png.height()), (400, 400));
    let _ = std::fs::remove_dir_all(dir.parent().unwrap());
}

#[test]
fn write_to_moves_the_staged_video() {
    let root = std::env::temp_dir().join(format!("analogon_move_{}", std::process::id()));
    let staged = root.join("staging").join("shape_rotation_0003_ground_truth.mp4");
    std::fs::create_dir_all(staged.parent().unwrap()).unwrap();
    std::fs::write(&staged, b"mp4 bytes").unwrap();

    let mut pair = generator(8).generate_task_pair("shape_rotation_0003").unwrap();
    pair.ground_truth_video = Some(staged.clone());
    let dir = root.join("out").join(&pair.task_id);
    pair.write_to(&dir).unwrap();

    let target = dir.join("ground_truth.mp4");
    assert_eq!(std::fs::read(&target).unwrap(), b"mp4 bytes");
    assert!(!staged.exists());
    assert_eq!(pair.ground_truth_video.as_deref(), Some(target.as_path()));

    // Writing again keeps the video in place.
    pair.write_to(&dir).unwrap();
    assert!(target.is_file());
    let _ = std::fs::remove_dir_all(&root);
}
