use scaffold_source::GoSource;
use scaffold_test_utils::{count, init_tracing, TestProject, EMPTY_CONTAINER};
use scaffold_wiring::{Augmenter, ProjectLayout, WiringConfig, WiringError};
use std::fs::File;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

const MODULES: [&str; 8] = [
    "orders", "users", "billing", "catalog", "inventory", "payments", "reviews", "shipping",
];

#[test]
fn test_parallel_augmentations_are_not_lost() {
    init_tracing();
    let project = TestProject::with_container(EMPTY_CONTAINER);
    let config = WiringConfig::new().with_lock_timeout(Duration::from_secs(30));
    let layout = Arc::new(ProjectLayout::detect(project.root(), &config).unwrap());
    let augmenter = Arc::new(Augmenter::new(config));

    let handles: Vec<_> = MODULES
        .into_iter()
        .map(|module| {
            let layout = Arc::clone(&layout);
            let augmenter = Arc::clone(&augmenter);
            thread::spawn(move || augmenter.augment(&layout, module))
        })
        .collect();

    for handle in handles {
        let report = handle.join().unwrap().unwrap();
        assert!(report.written);
    }

    let text = project.read_container();
    for module in MODULES {
        let field = format!("{}{}Module", module[..1].to_uppercase(), &module[1..]);
        assert_eq!(count(&text, &format!("c.{field}.RegisterRoutes(api)")), 1);
        assert_eq!(count(&text, &format!("\"app/internal/modules/{module}\"")), 1);
    }
    GoSource::parse(text).unwrap();
}

#[test]
fn test_held_lock_times_out() {
    let project = TestProject::with_container(EMPTY_CONTAINER);
    let lock = project.container_path().with_extension("go.lock");
    let holder = File::create(&lock).unwrap();
    holder.try_lock().unwrap();

    let config = WiringConfig::new().with_lock_timeout(Duration::from_millis(50));
    let layout = ProjectLayout::detect(project.root(), &config).unwrap();
    let err = Augmenter::new(config).augment(&layout, "orders").unwrap_err();

    assert!(matches!(err, WiringError::LockTimeout { .. }));
    assert_eq!(project.read_container(), EMPTY_CONTAINER);
}

#[test]
fn test_lock_left_by_dead_process_is_reclaimed() {
    init_tracing();
    let project = TestProject::with_container(EMPTY_CONTAINER);
    std::fs::write(project.container_path().with_extension("go.lock"), "999999\n").unwrap();

    let config = WiringConfig::new().with_lock_timeout(Duration::from_millis(200));
    let layout = ProjectLayout::detect(project.root(), &config).unwrap();
    let report = Augmenter::new(config).augment(&layout, "orders").unwrap();

    assert!(report.written);
    assert_eq!(count(&project.read_container(), "c.OrdersModule.RegisterRoutes(api)"), 1);
}
