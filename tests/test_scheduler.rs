use vruntime_trees::scheduler::{parse_records, Config, Process, Scheduler};
use vruntime_trees::TreeKind;

const RECORDS: &str = "Process Name\tBurst Time\tVirtual Runtime
Process A\t3\t2
Process B\t1\t0
Process C\t2\t2
not a record
Process D\t0\t9
";

fn run(tree: TreeKind) -> Vec<(String, u32, u64)> {
    let mut scheduler = Scheduler::new(Config {
        tree,
        ..Config::default()
    })
    .unwrap();
    scheduler.extend(parse_records(RECORDS));
    assert_eq!(scheduler.len(), 4);

    let slices = scheduler
        .run()
        .into_iter()
        .map(|slice| (slice.name, slice.burst_time, slice.virtual_runtime))
        .collect();
    assert!(scheduler.is_empty());
    slices
}

fn expected() -> Vec<(String, u32, u64)> {
    vec![
        ("Process B", 1, 0),
        ("Process B", 0, 1),
        ("Process A", 3, 2),
        ("Process C", 2, 2),
        ("Process A", 2, 3),
        ("Process C", 1, 3),
        ("Process A", 1, 4),
        ("Process C", 0, 4),
        ("Process A", 0, 5),
        ("Process D", 0, 9),
    ]
    .into_iter()
    .map(|(name, burst_time, virtual_runtime)| (name.to_string(), burst_time, virtual_runtime))
    .collect()
}

#[test]
fn int_test_parse_records() {
    assert_eq!(
        parse_records(RECORDS),
        vec![
            Process::new("Process A", 3, 2),
            Process::new("Process B", 1, 0),
            Process::new("Process C", 2, 2),
            Process::new("Process D", 0, 9),
        ],
    );
}

#[test]
fn int_test_avl_scheduler() {
    assert_eq!(run(TreeKind::Avl), expected());
}

#[test]
fn int_test_red_black_scheduler() {
    assert_eq!(run(TreeKind::RedBlack), expected());
}

#[test]
fn int_test_tree_kind_from_config_string() {
    let tree = "rb".parse::<TreeKind>().unwrap();
    assert_eq!(run(tree), expected());
}
